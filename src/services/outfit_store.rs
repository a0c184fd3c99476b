//! JSON file persistence for saved outfits.
//!
//! Every save re-reads the whole file, appends one record, and writes the
//! whole document back. Two processes saving at the same time can lose one
//! of the writes; the application is single-user and accepts that.

use crate::error::{AppError, Result};
use crate::file_utils::PathExt;
use crate::outfit::{OutfitRecord, SavedOutfits};
use log::info;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Outcome of a successful append.
#[derive(Debug, PartialEq, Eq)]
pub struct Appended {
    /// Trimmed group name the record was stored under.
    pub group: String,
    /// Number of records in the group after the append.
    pub group_len: usize,
}

/// Saved outfits file at a fixed path.
#[derive(Debug, Clone)]
pub struct OutfitStore {
    path: PathBuf,
}

impl OutfitStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole document.
    ///
    /// A missing file is an empty map. A file that is not valid JSON of the
    /// expected shape is an [`AppError::StoreParse`].
    pub fn load_all(&self) -> Result<SavedOutfits> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SavedOutfits::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&raw).map_err(|e| AppError::StoreParse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Appends `record` to the list saved under `group`.
    ///
    /// The group name is trimmed; a blank name is rejected before the file is
    /// touched. The group is created at the end of the map when absent.
    pub fn append(&self, group: &str, record: OutfitRecord) -> Result<Appended> {
        let group = group.trim();
        if group.is_empty() {
            return Err(AppError::EmptyGroupName);
        }

        let mut saved = self.load_all()?;
        let records = saved.entry(group.to_string()).or_default();
        records.push(record);
        let group_len = records.len();

        self.write_all(&saved)?;
        info!(
            "Saved outfit to '{}' ({} total) in {}",
            group,
            group_len,
            self.path.format_for_log()
        );

        Ok(Appended {
            group: group.to_string(),
            group_len,
        })
    }

    /// Overwrites the file with `saved`, two-space indented.
    fn write_all(&self, saved: &SavedOutfits) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let data = serde_json::to_string_pretty(saved).map_err(|e| AppError::StoreIo {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        fs::write(&self.path, data).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, err: std::io::Error) -> AppError {
        AppError::StoreIo {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }
}
