use audioscribe::domain::{LanguageCode, SUPPORTED_LANGUAGE_CODES, UnsupportedLanguage};

#[test]
fn given_allow_listed_code_when_parsing_then_succeeds() {
    let code: LanguageCode = "es-ES".parse().unwrap();

    assert_eq!(code.as_str(), "es-ES");
}

#[test]
fn given_code_outside_allow_list_when_parsing_then_fails() {
    let result = "en-US".parse::<LanguageCode>();

    assert_eq!(result, Err(UnsupportedLanguage("en-US".to_string())));
}

#[test]
fn given_allow_list_when_listing_supported_then_order_is_preserved() {
    let supported: Vec<String> = LanguageCode::supported()
        .iter()
        .map(|l| l.to_string())
        .collect();

    assert_eq!(supported, SUPPORTED_LANGUAGE_CODES);
}
