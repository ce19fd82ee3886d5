use audioscribe::domain::{Transcript, TranscriptParseError};

#[test]
fn given_result_document_when_parsing_then_returns_first_transcript() {
    let body = br#"{"jobName":"TS-1","results":{"transcripts":[{"transcript":"hola mundo"},{"transcript":"otra"}],"items":[]}}"#;

    let transcript = Transcript::from_result_json(body).unwrap();

    assert_eq!(transcript.as_str(), "hola mundo");
}

#[test]
fn given_document_without_transcripts_when_parsing_then_reports_empty() {
    let body = br#"{"results":{"transcripts":[]}}"#;

    let result = Transcript::from_result_json(body);

    assert_eq!(result, Err(TranscriptParseError::Empty));
}

#[test]
fn given_document_with_wrong_shape_when_parsing_then_reports_malformed() {
    let result = Transcript::from_result_json(br#"{"results":{}}"#);

    assert!(matches!(result, Err(TranscriptParseError::Malformed(_))));
}

#[test]
fn given_non_json_body_when_parsing_then_reports_malformed() {
    let result = Transcript::from_result_json(b"<Error>AccessDenied</Error>");

    assert!(matches!(result, Err(TranscriptParseError::Malformed(_))));
}
