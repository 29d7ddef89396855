// ABOUTME: JSON-array file store for expense records with full-file atomic rewrites.
// ABOUTME: Each operation reads the whole file; append validates, pushes, and replaces it via temp + rename.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;
use tallybook_core::{Record, RecordInput, Summary, ValidationError};
use thiserror::Error;

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The ordered sequence of records persisted at a single path.
/// Writes within this process are serialized; other processes sharing the
/// file may still lose updates.
pub struct RecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RecordStore {
    /// Open the store at `path`, creating parent directories and an empty
    /// `[]` file if none exists. An existing file is left untouched.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !path.exists() {
            fs::write(&path, "[]")?;
            tracing::info!("created empty record store at {}", path.display());
        } else {
            tracing::info!("opened record store at {}", path.display());
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Returns the path to the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored element in insertion order, exactly as found in the file.
    /// Elements are not checked against the Record shape, so hand-edited
    /// entries with missing or extra keys come back unchanged.
    pub fn list(&self) -> Result<Vec<Value>, StoreError> {
        let content = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&content)?)
    }

    /// Validate `input`, append the resulting record, and rewrite the file.
    /// Nothing is written when validation fails.
    pub fn append(&self, input: &RecordInput) -> Result<Record, StoreError> {
        let record = input.validate()?;

        let _guard = self.write_lock.lock().unwrap_or_else(|p| p.into_inner());
        let mut entries = self.list()?;
        entries.push(serde_json::to_value(&record)?);
        self.save(&entries)?;

        tracing::debug!(
            "appended record #{} ({}, {})",
            entries.len(),
            record.title,
            record.date
        );
        Ok(record)
    }

    pub fn summarize(&self) -> Result<Summary, StoreError> {
        Ok(Summary::from_entries(&self.list()?))
    }

    /// The file content exactly as persisted.
    pub fn export(&self) -> Result<Vec<u8>, StoreError> {
        Ok(fs::read(&self.path)?)
    }

    /// Replace the file with `entries`: write a temp sibling, fsync, then rename over.
    fn save(&self, entries: &[Value]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)?;

        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        // Best-effort: the rename already happened, so a failed directory
        // fsync leaves consistent data behind.
        if let Some(parent) = self.path.parent()
            && let Ok(dir) = File::open(parent)
        {
            let _ = dir.sync_all();
        }

        Ok(())
    }
}
