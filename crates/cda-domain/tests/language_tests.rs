//! Unit tests for language detection

use cda_domain::value_objects::Language;

#[test]
fn test_detect_from_filename() {
    assert_eq!(Language::from_filename("sample.py"), Some(Language::Python));
    assert_eq!(Language::from_filename("app.tsx"), Some(Language::TypeScript));
    assert_eq!(Language::from_filename("main.rs"), Some(Language::Rust));
    assert_eq!(Language::from_filename("Server.java"), Some(Language::Java));
}

#[test]
fn test_detect_is_case_insensitive() {
    assert_eq!(Language::from_filename("Main.PY"), Some(Language::Python));
    assert_eq!(Language::from_filename("lib.Rs"), Some(Language::Rust));
}

#[test]
fn test_unsupported_extension_is_none() {
    assert_eq!(Language::from_filename("notes.txt"), None);
    assert_eq!(Language::from_filename("archive.zip"), None);
}

#[test]
fn test_no_extension_is_none() {
    assert_eq!(Language::from_filename("Makefile"), None);
}

#[test]
fn test_doc_style_per_language() {
    assert_eq!(Language::Python.doc_style(), "Google Style");
    assert_eq!(Language::Java.doc_style(), "Javadoc");
    assert_eq!(Language::Ruby.doc_style(), "Standard");
}

#[test]
fn test_supported_languages_deduplicated() {
    let languages = Language::supported_languages();
    let mut sorted = languages.clone();
    sorted.dedup();
    assert_eq!(languages, sorted);
    assert!(languages.contains(&"Python"));
    assert!(languages.contains(&"JavaScript"));
}
