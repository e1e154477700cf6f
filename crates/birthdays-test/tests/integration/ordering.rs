//! Tests for the order of the generated list.

use birthdays_test::service::{FileSystemSource, NormalizedBirthday};

use super::helpers::*;

/// ## Summary
/// Test that dated contacts sort by month and day and undated ones come last.
#[test_log::test]
fn dated_before_undated() {
    let ws = Workspace::new();
    ws.write(
        "contacts.vcf",
        &[
            card("Doe;John;;;", Some("19900101")),
            card("Doe;Jane;;;", Some("--1225")),
            card("Roe;Rick;;;", None),
        ]
        .concat(),
    );

    let list = ws.list(FileSystemSource::new());

    assert_eq!(names(&list), vec!["Doe John", "Doe Jane", "Roe Rick"]);
    assert_eq!(
        list.records[0].birthday,
        NormalizedBirthday::Full {
            month: 1,
            day: 1,
            year: 1990
        }
    );
    assert_eq!(
        list.records[1].birthday,
        NormalizedBirthday::PartialMonthDay { month: 12, day: 25 }
    );
    assert_eq!(list.records[2].birthday, NormalizedBirthday::Absent);
}

/// ## Summary
/// Test that the year is ignored when ordering.
#[test_log::test]
fn year_does_not_affect_order() {
    let ws = Workspace::new();
    ws.write(
        "contacts.vcf",
        &[
            card("Old;Otto;;;", Some("1920-03-02")),
            card("Young;Yara;;;", Some("2010-03-01")),
            card("Unknown;Uma;;;", Some("--0301")),
        ]
        .concat(),
    );

    let list = ws.list(FileSystemSource::new());

    assert_eq!(names(&list), vec!["Young Yara", "Unknown Uma", "Old Otto"]);
}

/// ## Summary
/// Test that contacts from several files are sorted together.
#[test_log::test]
fn sorts_across_files() {
    let ws = Workspace::new();
    ws.write("a.vcf", &card("Winter;Wanda;;;", Some("19801224")));
    ws.write("b/c.vcf", &card("Spring;Sam;;;", Some("19850401")));
    ws.write("b/d.vcf", &card("Summer;Sue;;;", Some("--0721")));

    let list = ws.list(FileSystemSource::new());

    assert_eq!(names(&list), vec!["Spring Sam", "Summer Sue", "Winter Wanda"]);
}

/// ## Summary
/// Test that unrecognized birthdays trail in the order they were read.
#[test_log::test]
fn unparseable_and_absent_keep_input_order() {
    let ws = Workspace::new();
    ws.write(
        "contacts.vcf",
        &[
            card("First;Fay;;;", Some("31.12.1999")),
            card("Second;Sid;;;", None),
            card("Third;Tom;;;", Some("--0229")),
            card("Dated;Dan;;;", Some("--1231")),
        ]
        .concat(),
    );

    let list = ws.list(FileSystemSource::new());

    assert_eq!(
        names(&list),
        vec!["Dated Dan", "First Fay", "Second Sid", "Third Tom"]
    );
}

/// ## Summary
/// Test that a leap day with a year sorts between February 28 and March 1.
#[test_log::test]
fn leap_day_sorts_in_february() {
    let ws = Workspace::new();
    ws.write(
        "contacts.vcf",
        &[
            card("March;Max;;;", Some("--0301")),
            card("Leap;Lea;;;", Some("19960229")),
            card("Feb;Fred;;;", Some("--0228")),
        ]
        .concat(),
    );

    let list = ws.list(FileSystemSource::new());

    assert_eq!(names(&list), vec!["Feb Fred", "Leap Lea", "March Max"]);
}
