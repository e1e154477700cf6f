//! Tests for both report formats on real files.

use birthdays_test::service::{CsvReporter, FileSystemSource, Reporter};

use super::helpers::*;

fn sample() -> Workspace {
    let ws = Workspace::new();
    ws.write(
        "contacts.vcf",
        &[
            card("Doe;John;;;", Some("1985-07-04")),
            card("Doe;Jane;;;", Some("--0101")),
            card("Bad;Bert;;;", Some("1985/07/04")),
            card("Partial;Pia;;;", Some("--1341")),
            card("None;Ned;;;", None),
        ]
        .concat(),
    );
    ws
}

/// ## Summary
/// Test the CSV report with every kind of birthday.
#[test_log::test]
fn csv_report() {
    let list = sample().list(FileSystemSource::new());

    assert_eq!(
        render_csv(&list),
        "name;month;day;year;error\n\
         Doe Jane;01;01;;\n\
         Doe John;07;04;1985;\n\
         Bad Bert;;;;birthday has unknown format: 1985/07/04\n\
         Partial Pia;;;;could not parse birthday date with suffix -- correctly: --1341\n\
         None Ned;;;;no birthday\n"
    );
}

/// ## Summary
/// Test the text report with every kind of birthday.
#[test_log::test]
fn text_report() {
    let list = sample().list(FileSystemSource::new());

    assert_eq!(
        render_text(&list),
        "Doe Jane: 01.01.\n\
         Doe John: 04.07.1985\n\
         Bad Bert: birthday has unknown format: 1985/07/04\n\
         Partial Pia: could not parse birthday date with suffix -- correctly: --1341\n\
         None Ned: no birthday\n"
    );
}

/// ## Summary
/// Test that a card without properties is reported as not evaluable.
#[test_log::test]
fn empty_card_report() {
    let ws = Workspace::new();
    ws.write("empty.vcf", "BEGIN:VCARD\r\nEND:VCARD\r\n");

    let list = ws.list(FileSystemSource::new());

    assert_eq!(render_text(&list), "could not evaluate birthday\n");
}

/// ## Summary
/// Test a custom delimiter without header, with a name that needs quoting.
#[test_log::test]
fn csv_custom_delimiter() {
    let ws = Workspace::new();
    ws.write("a.vcf", &card(r"Doe\, Sr.;John;;;", Some("19850704")));

    let list = ws.list(FileSystemSource::new());
    let mut out = Vec::new();
    CsvReporter::new(b',', false)
        .render(&list.records, &mut out)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "\"Doe, Sr. John\",07,04,1985,\n");
}

/// ## Summary
/// Test that cards without N fall back to the formatted name.
#[test_log::test]
fn formatted_name_fallback() {
    let ws = Workspace::new();
    ws.write(
        "a.vcf",
        "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Prince\r\nBDAY:19580607\r\nEND:VCARD\r\n",
    );

    let list = ws.list(FileSystemSource::new());

    assert_eq!(render_text(&list), "Prince: 07.06.1958\n");
}
