//! Tests for reading inputs from disk.

use birthdays_test::service::{
    FileSystemSource, ListOptions, ServiceError, build_list,
};

use super::helpers::*;

/// ## Summary
/// Test that hidden entries are skipped unless requested.
#[test_log::test]
fn hidden_entries() {
    let ws = Workspace::new();
    ws.write("visible.vcf", &card("Seen;Sara;;;", Some("--0505")));
    ws.write(".hidden.vcf", &card("Hidden;Hal;;;", Some("--0404")));
    ws.write(".sync/nested.vcf", &card("Nested;Nia;;;", Some("--0303")));

    let default = ws.list(FileSystemSource::new());
    assert_eq!(names(&default), vec!["Seen Sara"]);

    let all = ws.list(FileSystemSource::new().include_hidden(true));
    assert_eq!(names(&all), vec!["Nested Nia", "Hidden Hal", "Seen Sara"]);
}

/// ## Summary
/// Test that a missing input is collected while other inputs are still read.
#[test_log::test]
fn missing_input_is_collected() {
    let ws = Workspace::new();
    let good = ws.write("good.vcf", &card("Doe;John;;;", Some("19900101")));
    let missing = ws.root().join("missing.vcf");

    let list = build_list(
        &FileSystemSource::new(),
        &[missing.as_path(), good.as_path()],
        ListOptions::default(),
    )
    .unwrap();

    assert_eq!(names(&list), vec!["Doe John"]);
    assert_eq!(list.failures.len(), 1);
    assert!(matches!(
        list.failures[0],
        ServiceError::SourceUnreadable { .. }
    ));
}

/// ## Summary
/// Test that strict mode fails on a malformed document.
#[test_log::test]
fn strict_mode_fails_on_malformed_file() {
    let ws = Workspace::new();
    ws.write("a.vcf", &card("Doe;John;;;", Some("19900101")));
    ws.write("b.vcf", "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Unclosed\r\n");

    let err = build_list(
        &FileSystemSource::new(),
        &[ws.root()],
        ListOptions { strict: true },
    )
    .unwrap_err();

    assert!(matches!(err, ServiceError::MalformedSource { .. }));
}

/// ## Summary
/// Test that a malformed document is skipped in lenient mode.
#[test_log::test]
fn lenient_mode_skips_malformed_file() {
    let ws = Workspace::new();
    ws.write("a.vcf", &card("Doe;John;;;", Some("19900101")));
    ws.write("b.vcf", "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Unclosed\r\n");

    let list = ws.list(FileSystemSource::new());

    assert_eq!(names(&list), vec!["Doe John"]);
    assert_eq!(list.failures.len(), 1);
}

/// ## Summary
/// Test that a file without cards contributes nothing and is not a failure.
#[test_log::test]
fn file_without_cards() {
    let ws = Workspace::new();
    ws.write("notes.txt", "just some notes\n");
    ws.write("a.vcf", &card("Doe;John;;;", Some("--0704")));

    let list = ws.list(FileSystemSource::new());

    assert_eq!(names(&list), vec!["Doe John"]);
    assert!(list.is_complete());
}

/// ## Summary
/// Test that folded lines and vCard 2.1 documents are read.
#[test_log::test]
fn folded_and_legacy_cards() {
    let ws = Workspace::new();
    ws.write(
        "legacy.vcf",
        "BEGIN:VCARD\r\nVERSION:2.1\r\nN;CHARSET=UTF-8:Legacy;Lou\r\nBDAY:1970\r\n 0315\r\nEND:VCARD\r\n",
    );

    let list = ws.list(FileSystemSource::new());

    assert_eq!(render_text(&list), "Legacy Lou: 15.03.1970\n");
}
