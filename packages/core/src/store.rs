//! In-memory record stores.
//!
//! `RecordStore<T>` holds the records of one entity type in insertion
//! order, backed by a `Vec`. Lookups are linear id scans, which is fine for
//! the handful of records a field office produces.
//!
//! The store itself is not `Sync`; callers wrap it in
//! `Arc<RwLock<RecordStore<T>>>` so each read-modify-write sequence (id
//! assignment + append, scan + replace, scan + delete) runs under a single
//! write guard.

use thiserror::Error;

/// Errors raised by store operations and entity validators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: u64 },

    #[error("{message}")]
    InvalidInput { message: String },

    #[error("{message}")]
    Conflict { message: String },
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict { message: message.into() }
    }

    /// Short machine-readable label, used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::InvalidInput { .. } => "invalid_input",
            Self::Conflict { .. } => "conflict",
        }
    }
}

/// An entity that can live in a [`RecordStore`].
///
/// The hooks default to accepting everything; entities override the ones
/// their invariants need.
pub trait Record: Clone {
    /// Human-readable entity name used in error messages.
    const ENTITY: &'static str;

    fn id(&self) -> u64;

    fn set_id(&mut self, id: u64);

    /// Checked on both insert and replace.
    fn validate(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Checked on insert only, against the current contents.
    fn check_insert(&self, _existing: &[Self]) -> Result<(), StoreError> {
        Ok(())
    }

    /// Fills defaults on a record that passed validation, before it is stored.
    fn prepare_insert(&mut self) {}
}

/// Insertion-ordered in-memory store for one entity type.
#[derive(Debug)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Create a store holding `records` as-is, keeping their ids.
    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// All records, in insertion order.
    pub fn list(&self) -> &[T] {
        &self.records
    }

    /// First record whose id equals `id`.
    pub fn get(&self, id: u64) -> Result<&T, StoreError> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(T::ENTITY, id))
    }

    /// The id the next insert will receive: highest existing id + 1, or 1.
    pub fn next_id(&self) -> u64 {
        self.records.iter().map(Record::id).max().unwrap_or(0) + 1
    }

    /// Validate and append `record` under a freshly assigned id.
    ///
    /// Any id on the incoming record is ignored.
    pub fn insert(&mut self, mut record: T) -> Result<T, StoreError> {
        record.validate()?;
        record.check_insert(&self.records)?;
        record.prepare_insert();
        record.set_id(self.next_id());

        self.records.push(record.clone());
        Ok(record)
    }

    /// Overwrite the record with id `id`. The stored record always carries
    /// `id`, whatever the body said.
    pub fn replace(&mut self, id: u64, mut record: T) -> Result<T, StoreError> {
        record.validate()?;

        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(T::ENTITY, id))?;

        record.set_id(id);
        *slot = record.clone();
        Ok(record)
    }

    /// Remove and return the record with id `id`.
    pub fn delete(&mut self, id: u64) -> Result<T, StoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(T::ENTITY, id))?;

        Ok(self.records.remove(index))
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
