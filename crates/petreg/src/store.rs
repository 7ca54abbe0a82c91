//! Storage layer for petreg.
//!
//! This module provides the durable record store: a single JSON array of
//! [`PetRecord`]s kept in one file, re-read and re-written wholesale on
//! every mutation. There is no partial-update API; last write wins,
//! synchronously, which is the whole storage contract at this scale.

use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{PetRecord, PetRecordInput};

/// Format applied to the registration timestamp of new records.
const REGISTERED_AT_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Durable list of pet records.
///
/// Records are appended with a generated chronological id, listed in
/// append order, deleted individually by id, or cleared as a whole.
/// A missing or corrupt collection file always reads as empty.
#[derive(Debug)]
pub struct RecordStore {
    /// Path to the collection file.
    path: PathBuf,
}

impl RecordStore {
    /// Open a record store at the given path.
    ///
    /// Creates the parent directories if they don't exist; the collection
    /// file itself is created lazily on the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directories cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opened record store at {}", path.display());
        Ok(Self { path })
    }

    /// Get the path to the collection file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record to the store.
    ///
    /// Reads the current collection, assigns a fresh chronological id and
    /// a formatted registration timestamp, appends, and writes the whole
    /// collection back. Returns the new id.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back; the
    /// read side never fails (absent or corrupt data reads as empty).
    pub fn append(&self, input: &PetRecordInput) -> Result<String> {
        let mut records = self.list_all();

        let id = next_id(&records);
        let registered_at = Local::now().format(REGISTERED_AT_FORMAT).to_string();
        let record = PetRecord::from_input(input.clone(), id.clone(), registered_at);

        records.push(record);
        self.write_all(&records)?;

        debug!("Appended record with id {}", id);
        Ok(id)
    }

    /// Return the full collection, in append order.
    ///
    /// A missing file or invalid JSON degrades to an empty collection;
    /// read failures are never surfaced.
    #[must_use]
    pub fn list_all(&self) -> Vec<PetRecord> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!("Record collection not readable ({err}); treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                debug!("Record collection corrupt ({err}); treating as empty");
                Vec::new()
            }
        }
    }

    /// Delete the record with the given id.
    ///
    /// Removes at most one record and rewrites the collection. Returns
    /// `true` if a record was deleted, `false` if no id matched (the
    /// collection is left unchanged and not rewritten).
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn delete_by_id(&self, id: &str) -> Result<bool> {
        let mut records = self.list_all();
        let before = records.len();
        records.retain(|record| record.id != id);

        if records.len() == before {
            return Ok(false);
        }

        self.write_all(&records)?;
        info!("Deleted record {}", id);
        Ok(true)
    }

    /// Remove the persisted collection entirely.
    ///
    /// An already-absent file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared record store at {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(Error::StoreClear {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Serialize and write the whole collection back.
    fn write_all(&self, records: &[PetRecord]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        std::fs::write(&self.path, json).map_err(|source| Error::StoreWrite {
            path: self.path.clone(),
            source,
        })
    }
}

/// Generate the next record id.
///
/// Ids are the current Unix time in milliseconds, stringified, so they
/// sort chronologically. When the clock has not advanced past the last
/// stored id (appends within one millisecond), the id is bumped one past
/// it to keep ids distinct.
fn next_id(records: &[PetRecord]) -> String {
    let now = Utc::now().timestamp_millis();
    let last = records
        .last()
        .and_then(|record| record.id.parse::<i64>().ok())
        .unwrap_or(0);
    now.max(last + 1).to_string()
}
