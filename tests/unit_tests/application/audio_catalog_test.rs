use std::fs;

use audioscribe::application::services::{
    CatalogError, find_by_name, list_candidates, selection_labels,
};

fn allowed(exts: &[&str]) -> Vec<String> {
    exts.iter().map(|e| e.to_string()).collect()
}

fn populated_dir() -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    for name in ["lecture.mp4", "interview.MP4", "notes.txt", "song.mp3", "README"] {
        fs::write(dir.path().join(name), b"data").unwrap();
    }
    fs::create_dir(dir.path().join("archive.mp4")).unwrap();
    dir
}

#[test]
fn given_mixed_directory_when_listing_then_only_allowed_extensions_are_returned() {
    let dir = populated_dir();

    let candidates = list_candidates(dir.path(), &allowed(&[".mp4"])).unwrap();

    let bases: Vec<&str> = candidates.iter().map(|f| f.base.as_str()).collect();
    assert_eq!(bases, vec!["interview.MP4", "lecture.mp4"]);
    assert!(
        candidates
            .iter()
            .all(|f| f.extension.eq_ignore_ascii_case("mp4"))
    );
}

#[test]
fn given_several_allowed_extensions_when_listing_then_all_of_them_match() {
    let dir = populated_dir();

    let candidates = list_candidates(dir.path(), &allowed(&["mp4", ".mp3"])).unwrap();

    let names: Vec<&str> = candidates.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["interview", "lecture", "song"]);
}

#[test]
fn given_candidate_when_listing_then_components_are_split() {
    let dir = populated_dir();

    let candidates = list_candidates(dir.path(), &allowed(&[".mp3"])).unwrap();

    assert_eq!(candidates.len(), 1);
    let song = &candidates[0];
    assert_eq!(song.name, "song");
    assert_eq!(song.base, "song.mp3");
    assert_eq!(song.extension, "mp3");
    assert_eq!(song.path, dir.path().join("song.mp3"));
}

#[test]
fn given_missing_directory_when_listing_then_returns_directory_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("audios");

    let result = list_candidates(&missing, &allowed(&[".mp4"]));

    match result {
        Err(CatalogError::DirectoryRead { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected directory read error, got {:?}", other),
    }
}

#[test]
fn given_candidates_when_finding_by_stem_then_exact_match_is_returned() {
    let dir = populated_dir();
    let candidates = list_candidates(dir.path(), &allowed(&[".mp4"])).unwrap();

    let found = find_by_name(&candidates, "lecture").unwrap();
    assert_eq!(found.base, "lecture.mp4");

    assert!(find_by_name(&candidates, "lecture.mp4").is_none());
    assert!(find_by_name(&candidates, "Lecture").is_none());
}

#[test]
fn given_two_files_sharing_a_stem_when_picking_the_second_then_it_resolves_to_its_own_file() {
    let dir = tempfile::TempDir::new().unwrap();
    for name in ["lecture.mp4", "lecture.MP4", "interview.mp4"] {
        fs::write(dir.path().join(name), b"data").unwrap();
    }

    let candidates = list_candidates(dir.path(), &allowed(&[".mp4"])).unwrap();
    let labels = selection_labels(&candidates);

    assert_eq!(labels, vec!["interview", "lecture.MP4", "lecture.mp4"]);
    let picked = candidates.get(2).unwrap();
    assert_eq!(picked.base, "lecture.mp4");
    assert_eq!(candidates.get(1).unwrap().base, "lecture.MP4");
}

#[test]
fn given_same_stem_with_different_extensions_when_labelling_then_full_names_are_shown() {
    let dir = tempfile::TempDir::new().unwrap();
    for name in ["lecture.mp4", "lecture.mp3", "song.mp3"] {
        fs::write(dir.path().join(name), b"data").unwrap();
    }

    let candidates = list_candidates(dir.path(), &allowed(&["mp3", "mp4"])).unwrap();

    assert_eq!(
        selection_labels(&candidates),
        vec!["lecture.mp3", "lecture.mp4", "song"]
    );
}
