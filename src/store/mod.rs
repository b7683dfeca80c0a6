//! Document storage as a single JSON file
//!
//! The document is loaded once per process start, mutated in place by the
//! command handlers, and written back after every mutation. Writes go to a
//! sibling temp file first and are renamed into place, so an interrupt can
//! never leave a torn file behind.

mod document;

pub use document::{CheckIn, Document, Entry, Profile, ScoreState};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CommandError;

pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted document, or the default one when the file is
    /// missing or unreadable. A corrupt file is logged and falls back rather
    /// than crashing; the next save overwrites it.
    pub fn load(&self) -> Document {
        if !self.path.exists() {
            log::debug!("no document at {}, starting fresh", self.path.display());
            return Document::default();
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!(
                    "could not read {}: {err}; starting from defaults",
                    self.path.display()
                );
                return Document::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(err) => {
                log::warn!(
                    "corrupt document at {}: {err}; starting from defaults",
                    self.path.display()
                );
                Document::default()
            }
        }
    }

    /// Persists the document. Serialize, write a sibling temp file, rename
    /// into place. On failure the in-memory document stays authoritative and
    /// the error is reported to the caller, never swallowed.
    pub fn save(&self, doc: &Document) -> Result<(), CommandError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let encoded = serde_json::to_string_pretty(doc)?;
        let tmp = self.temp_path();
        fs::write(&tmp, encoded.as_bytes())?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("saved document to {}", self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document");
        self.path.with_file_name(format!("{name}.tmp"))
    }
}
