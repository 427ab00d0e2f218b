use super::*;
use std::path::Path;

fn exts() -> Vec<String> {
    vec!["disc".to_string()]
}

#[test]
fn is_stub_file_matches_configured_extensions_case_insensitive() {
    assert!(is_stub_file(Path::new("/tmp/a.disc"), &exts()));
    assert!(is_stub_file(Path::new("/tmp/a.DISC"), &exts()));
    assert!(!is_stub_file(Path::new("/tmp/a.mkv"), &exts()));
    assert!(!is_stub_file(Path::new("/tmp/a"), &exts()));
}

#[test]
fn is_stub_file_normalizes_leading_dots_and_blank_entries() {
    let exts = vec![" .disc ".to_string(), "".to_string()];
    assert!(is_stub_file(Path::new("/tmp/a.disc"), &exts));
    // A blank entry never matches an extension-less path.
    assert!(!is_stub_file(Path::new("/tmp/a"), &exts));
}

#[test]
fn from_path_derives_label_from_file_stem() {
    let item = DiscItem::from_path(Path::new("/media/The Movie.disc"), &exts());
    assert_eq!(item.label, "The Movie");
    assert!(item.is_disc_stub());
    assert_eq!(item.path, Path::new("/media/The Movie.disc"));
}

#[test]
fn from_path_classifies_non_stub_items() {
    let item = DiscItem::from_path(Path::new("/media/clip.mkv"), &exts());
    assert!(!item.is_disc_stub());
}
