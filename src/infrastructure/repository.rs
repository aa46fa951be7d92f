//! File system source of journal entry dates

use crate::domain::parse_date;
use crate::error::{Result, TimelineError};
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Anything that can enumerate the dates journal entries exist for
pub trait EntrySource {
    /// List entry dates. Order is unspecified and duplicates are allowed.
    fn entry_dates(&self) -> Result<Vec<NaiveDate>>;
}

/// Journal directory holding one `<YYYY-MM-DD>.<extension>` file per entry
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    pub extension: String,
    pub recursive: bool,
}

impl FileSystemRepository {
    /// Create a repository over `root`, matching files with the given extension
    pub fn new(root: PathBuf, extension: impl Into<String>) -> Self {
        FileSystemRepository {
            root,
            extension: extension.into(),
            recursive: false,
        }
    }

    /// Also look for entries in nested, non-hidden directories
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Date an entry file name stands for, or None if it is not an entry
    pub fn date_from_filename(&self, filename: &str) -> Option<NaiveDate> {
        let stem = filename
            .strip_suffix(self.extension.as_str())?
            .strip_suffix('.')?;
        parse_date(stem)
    }

    fn enumeration_error(&self, source: std::io::Error) -> TimelineError {
        TimelineError::SourceEnumeration {
            path: self.root.clone(),
            source,
        }
    }

    fn push_entry(&self, path: &Path, dates: &mut Vec<NaiveDate>) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return;
        };
        match self.date_from_filename(name) {
            Some(date) => dates.push(date),
            None => tracing::debug!(path = %path.display(), "skipping non-entry file"),
        }
    }

    fn collect_root_entries(&self) -> Result<Vec<NaiveDate>> {
        let entries = fs::read_dir(&self.root).map_err(|e| self.enumeration_error(e))?;
        self.collect_root_paths(entries.map(|entry| entry.map(|e| e.path())))
    }

    /// Dates for the regular files among `paths`; any listing error aborts
    fn collect_root_paths<I>(&self, paths: I) -> Result<Vec<NaiveDate>>
    where
        I: IntoIterator<Item = io::Result<PathBuf>>,
    {
        let mut dates = Vec::new();

        for path in paths {
            let path = path.map_err(|e| self.enumeration_error(e))?;
            if !path.is_file() {
                continue;
            }
            self.push_entry(&path, &mut dates);
        }

        Ok(dates)
    }

    fn collect_recursive_entries(&self) -> Result<Vec<NaiveDate>> {
        // Surface a missing or unreadable root the same way the flat listing does
        fs::read_dir(&self.root).map_err(|e| self.enumeration_error(e))?;

        let mut dates = Vec::new();
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Listing the root itself is all-or-nothing, as in the flat case
                Err(e) if e.depth() == 0 || e.path() == Some(self.root.as_path()) => {
                    return Err(self.enumeration_error(e.into()));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable nested path");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            self.push_entry(entry.path(), &mut dates);
        }

        Ok(dates)
    }
}

impl EntrySource for FileSystemRepository {
    fn entry_dates(&self) -> Result<Vec<NaiveDate>> {
        let dates = if self.recursive {
            self.collect_recursive_entries()?
        } else {
            self.collect_root_entries()?
        };
        tracing::debug!(
            root = %self.root.display(),
            count = dates.len(),
            "enumerated journal entries"
        );
        Ok(dates)
    }
}

impl EntrySource for Vec<NaiveDate> {
    fn entry_dates(&self) -> Result<Vec<NaiveDate>> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sorted(mut dates: Vec<NaiveDate>) -> Vec<NaiveDate> {
        dates.sort();
        dates
    }

    #[test]
    fn test_date_from_filename() {
        let repo = FileSystemRepository::new(PathBuf::from("/tmp"), "md");
        assert_eq!(repo.date_from_filename("2025-01-17.md"), Some(ymd(2025, 1, 17)));
        assert_eq!(repo.date_from_filename("2025-01-17.txt"), None);
        assert_eq!(repo.date_from_filename("2025-01-17md"), None);
        assert_eq!(repo.date_from_filename("2025-01-17.md.bak"), None);
        assert_eq!(repo.date_from_filename("notes.md"), None);
        assert_eq!(repo.date_from_filename("2025-02-30.md"), None);
        assert_eq!(repo.date_from_filename(".md"), None);
    }

    #[test]
    fn test_date_from_filename_custom_extension() {
        let repo = FileSystemRepository::new(PathBuf::from("/tmp"), "org");
        assert_eq!(repo.date_from_filename("2025-01-17.org"), Some(ymd(2025, 1, 17)));
        assert_eq!(repo.date_from_filename("2025-01-17.md"), None);
    }

    #[test]
    fn test_entry_dates_empty_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf(), "md");
        assert!(repo.entry_dates().unwrap().is_empty());
    }

    #[test]
    fn test_entry_dates_filters_files() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf(), "md");

        fs::write(temp.path().join("2025-01-17.md"), "note").unwrap();
        fs::write(temp.path().join("2025-01-15.md"), "note").unwrap();
        fs::write(temp.path().join("2025-01-16.txt"), "text").unwrap();
        fs::write(temp.path().join("readme.md"), "readme").unwrap();
        fs::write(temp.path().join("2025-13-01.md"), "bad").unwrap();
        fs::create_dir(temp.path().join("2025-01-18.md")).unwrap();

        let dates = sorted(repo.entry_dates().unwrap());
        assert_eq!(dates, vec![ymd(2025, 1, 15), ymd(2025, 1, 17)]);
    }

    #[test]
    fn test_entry_dates_non_recursive_skips_nested() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf(), "md");

        fs::write(temp.path().join("2025-01-17.md"), "root").unwrap();
        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("2025-01-18.md"), "nested").unwrap();

        assert_eq!(repo.entry_dates().unwrap(), vec![ymd(2025, 1, 17)]);
    }

    #[test]
    fn test_entry_dates_recursive_skips_dot_dirs() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf(), "md").recursive(true);

        fs::write(temp.path().join("2025-01-15.md"), "root").unwrap();
        fs::create_dir_all(temp.path().join("2025").join("01")).unwrap();
        fs::write(
            temp.path().join("2025").join("01").join("2025-01-16.md"),
            "nested",
        )
        .unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        fs::write(temp.path().join(".git").join("2025-01-17.md"), "hidden").unwrap();

        let dates = sorted(repo.entry_dates().unwrap());
        assert_eq!(dates, vec![ymd(2025, 1, 15), ymd(2025, 1, 16)]);
    }

    #[test]
    fn test_missing_root_is_enumeration_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        for recursive in [false, true] {
            let repo = FileSystemRepository::new(missing.clone(), "md").recursive(recursive);
            match repo.entry_dates() {
                Err(TimelineError::SourceEnumeration { path, .. }) => assert_eq!(path, missing),
                other => panic!("Expected SourceEnumeration error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_file_root_is_enumeration_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("2025-01-17.md");
        fs::write(&file, "note").unwrap();

        let repo = FileSystemRepository::new(file, "md");
        assert!(matches!(
            repo.entry_dates(),
            Err(TimelineError::SourceEnumeration { .. })
        ));
    }

    #[test]
    fn test_listing_error_mid_way_is_enumeration_error() {
        let temp = TempDir::new().unwrap();
        let entry = temp.path().join("2025-01-17.md");
        fs::write(&entry, "note").unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf(), "md");

        let listing = vec![
            Ok(entry),
            Err(io::Error::new(io::ErrorKind::Other, "input/output error")),
            Ok(temp.path().join("2025-01-18.md")),
        ];

        match repo.collect_root_paths(listing) {
            Err(TimelineError::SourceEnumeration { path, source }) => {
                assert_eq!(path, temp.path());
                assert_eq!(source.kind(), io::ErrorKind::Other);
            }
            other => panic!("Expected SourceEnumeration error, got {:?}", other),
        }
    }

    #[test]
    fn test_vec_source() {
        let source = vec![ymd(2024, 1, 1)];
        assert_eq!(source.entry_dates().unwrap(), vec![ymd(2024, 1, 1)]);
    }
}
