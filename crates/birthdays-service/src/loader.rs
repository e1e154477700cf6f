//! Reading contacts from the filesystem.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use birthdays_core::config::InputConfig;
use birthdays_rfc::rfc::vcard;

use crate::contact::RawContact;
use crate::error::{ServiceError, ServiceResult};

/// Supplies raw contacts for input paths.
pub trait ContactSource {
    /// Lists the files an input path stands for, in a stable order.
    ///
    /// Problems with individual entries are returned in place so the caller
    /// can keep going with the rest.
    fn discover(&self, input: &Path) -> Vec<ServiceResult<PathBuf>>;

    /// Reads every contact of one file, in file order.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read or is not a vCard document.
    fn load(&self, file: &Path) -> ServiceResult<Vec<RawContact>>;
}

/// Reads `.vcf` documents from files and directory trees.
///
/// Directories are walked recursively in lexical order. Every regular file
/// found is treated as a vCard document.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemSource {
    include_hidden: bool,
}

impl FileSystemSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also descend into entries whose name starts with a dot.
    #[must_use]
    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Symlinked directories are followed, but each real directory is walked once.
    fn walk(
        &self,
        dir: &Path,
        visited: &mut HashSet<PathBuf>,
        found: &mut Vec<ServiceResult<PathBuf>>,
    ) {
        match fs::canonicalize(dir) {
            Ok(real) if !visited.insert(real.clone()) => {
                tracing::debug!(path = %dir.display(), "Skipping directory already walked");
                return;
            }
            Ok(_) => {}
            Err(e) => {
                found.push(Err(ServiceError::unreadable(dir, e)));
                return;
            }
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                found.push(Err(ServiceError::unreadable(dir, e)));
                return;
            }
        };

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => paths.push(entry.path()),
                Err(e) => found.push(Err(ServiceError::unreadable(dir, e))),
            }
        }
        paths.sort();

        for path in paths {
            if !self.include_hidden && is_hidden(&path) {
                tracing::trace!(path = %path.display(), "Skipping hidden entry");
                continue;
            }
            // Follows symlinks
            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => self.walk(&path, visited, found),
                Ok(meta) if meta.is_file() => found.push(Ok(path)),
                Ok(_) => tracing::debug!(path = %path.display(), "Skipping special file"),
                Err(e) => found.push(Err(ServiceError::unreadable(path, e))),
            }
        }
    }
}

impl From<&InputConfig> for FileSystemSource {
    fn from(config: &InputConfig) -> Self {
        Self::new().include_hidden(config.hidden)
    }
}

impl ContactSource for FileSystemSource {
    #[tracing::instrument(skip_all, fields(input = %input.display()))]
    fn discover(&self, input: &Path) -> Vec<ServiceResult<PathBuf>> {
        let meta = match fs::metadata(input) {
            Ok(meta) => meta,
            Err(e) => return vec![Err(ServiceError::unreadable(input, e))],
        };

        if !meta.is_dir() {
            return vec![Ok(input.to_path_buf())];
        }

        let mut found = Vec::new();
        self.walk(input, &mut HashSet::new(), &mut found);
        tracing::debug!(count = found.len(), "Discovered input files");
        found
    }

    #[tracing::instrument(skip_all, fields(file = %file.display()))]
    fn load(&self, file: &Path) -> ServiceResult<Vec<RawContact>> {
        let content =
            fs::read_to_string(file).map_err(|e| ServiceError::unreadable(file, e))?;

        let cards = vcard::parse(&content).map_err(|source| ServiceError::MalformedSource {
            path: file.to_path_buf(),
            source,
        })?;

        if cards.is_empty() {
            tracing::warn!(file = %file.display(), "No vCard found in file");
        }

        Ok(cards.iter().map(RawContact::from_vcard).collect())
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
