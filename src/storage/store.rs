//! A file-backed store of emergency records
//!
//! The [`Store`] owns the in-memory collection and its persisted file,
//! managed as a unit. Insertion order is preserved and lookups are linear;
//! there is no secondary index. Every mutation rewrites the file in full,
//! so I/O cost per mutation is proportional to the total record count.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{Emergency, domain::EmergencyId, storage::line};

/// A capacity-bounded, insertion-ordered collection of emergency records
/// backed by a flat text file.
#[derive(Debug)]
pub struct Store {
    /// The records, in insertion order.
    records: Vec<Emergency>,
    /// The maximum number of records held.
    capacity: usize,
    /// The persisted file.
    path: PathBuf,
}

/// Errors reported by store mutations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store is full; the record was not added.
    #[error("store is at capacity ({0} records)")]
    CapacityExceeded(usize),

    /// No record matched the identifier; nothing was changed.
    #[error("no emergency with id {0}")]
    NotFound(EmergencyId),
}

impl Store {
    /// Opens a store backed by the file at `path`, loading any existing
    /// records best-effort.
    ///
    /// A missing file means zero existing records, not an error. Lines that
    /// fail to parse are skipped (see [`line::read_records`]); a file that
    /// cannot be read at all is treated as empty and logged.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        let records = match File::open(&path) {
            Ok(file) => line::read_records(BufReader::new(file), capacity).unwrap_or_else(|error| {
                tracing::warn!("could not read {}: {error}", path.display());
                Vec::new()
            }),
            Err(error) => {
                tracing::debug!("no existing data at {}: {error}", path.display());
                Vec::new()
            }
        };

        tracing::debug!("loaded {} record(s) from {}", records.len(), path.display());

        Self {
            records,
            capacity,
            path,
        }
    }

    /// Appends a record and rewrites the persisted file.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::CapacityExceeded`] when the store is full;
    /// the record is not added and the file is untouched.
    pub fn add(&mut self, emergency: Emergency) -> Result<(), StoreError> {
        if self.records.len() >= self.capacity {
            return Err(StoreError::CapacityExceeded(self.capacity));
        }

        tracing::debug!(
            "recording {} emergency {}",
            emergency.kind().tag(),
            emergency.id()
        );
        self.records.push(emergency);
        self.persist();
        Ok(())
    }

    /// Updates the status of the first record whose identifier equals `id`
    /// (case-sensitive exact match) and rewrites the persisted file.
    ///
    /// Identifiers are not unique; when several records share one, only the
    /// earliest-inserted match changes.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`] when no record matches; nothing
    /// is changed and the file is untouched.
    pub fn update_status(&mut self, id: &EmergencyId, new_status: &str) -> Result<(), StoreError> {
        let Some(record) = self.records.iter_mut().find(|record| record.id() == id) else {
            return Err(StoreError::NotFound(id.clone()));
        };

        record.update_status(new_status.to_string());
        self.persist();
        Ok(())
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Emergency> {
        self.records.iter()
    }

    /// The number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The maximum number of records the store will hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The path of the persisted file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the persisted file from scratch: one line per record, in
    /// insertion order, truncating any prior content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written to.
    pub fn save(&self) -> io::Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        line::write_records(&mut writer, &self.records)?;
        writer.flush()
    }

    /// Persistence failure does not fail the mutation: the in-memory state
    /// stays authoritative and the error is reported on the error stream.
    fn persist(&self) {
        if let Err(error) = self.save() {
            tracing::error!("could not write {}: {error}", self.path.display());
        }
    }
}
