use audioscribe::domain::{AudioFileRef, StoragePath};

#[test]
fn given_audio_file_when_creating_path_then_key_is_file_name_with_extension() {
    let file = AudioFileRef::from_path("audios/lecture.mp4").unwrap();

    let path = StoragePath::for_audio(&file);

    assert_eq!(path.as_str(), "lecture.mp4");
}

#[test]
fn given_two_files_with_same_stem_when_creating_paths_then_paths_differ() {
    let mp4 = AudioFileRef::from_path("audios/lecture.mp4").unwrap();
    let mp3 = AudioFileRef::from_path("audios/lecture.mp3").unwrap();

    assert_ne!(StoragePath::for_audio(&mp4), StoragePath::for_audio(&mp3));
}

#[test]
fn given_storage_path_when_displayed_then_matches_as_str() {
    let path = StoragePath::from_raw("test.mp4");

    assert_eq!(format!("{}", path), path.as_str());
}

#[test]
fn given_path_without_extension_when_parsing_then_extension_is_empty() {
    let file = AudioFileRef::from_path("audios/README").unwrap();

    assert_eq!(file.name, "README");
    assert_eq!(file.base, "README");
    assert_eq!(file.extension, "");
    assert!(!file.has_extension_in(&[".mp4".to_string()]));
}
