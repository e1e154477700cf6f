#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Writing vCard documents into a temporary directory tree
//! - Building and rendering lists from those files

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use birthdays_test::service::{
    BirthdayList, CsvReporter, FileSystemSource, ListOptions, Reporter, TextReporter, build_list,
};

/// A single contact card.
#[must_use]
pub fn card(name: &str, bday: Option<&str>) -> String {
    let bday = bday.map(|b| format!("BDAY:{b}\r\n")).unwrap_or_default();
    format!("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:{name}\r\nN:{name}\r\n{bday}END:VCARD\r\n")
}

/// A temporary directory that files can be written into.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Builds the list for the whole workspace.
    #[must_use]
    pub fn list(&self, source: FileSystemSource) -> BirthdayList {
        build_list(&source, &[self.root()], ListOptions::default()).expect("Failed to build list")
    }
}

/// Renders `list` with the default CSV settings.
#[must_use]
pub fn render_csv(list: &BirthdayList) -> String {
    render(&CsvReporter::default(), list)
}

/// Renders `list` as text.
#[must_use]
pub fn render_text(list: &BirthdayList) -> String {
    render(&TextReporter, list)
}

fn render(reporter: &dyn Reporter, list: &BirthdayList) -> String {
    let mut out = Vec::new();
    reporter
        .render(&list.records, &mut out)
        .expect("Failed to render");
    String::from_utf8(out).expect("Report is not UTF-8")
}

#[must_use]
pub fn names(list: &BirthdayList) -> Vec<&str> {
    list.records.iter().map(|r| r.name.as_str()).collect()
}
