//! Durable storage of scheduling records, one per (learner, card) pair.
//!
//! The scheduler itself is pure; everything stateful lives behind the
//! `RecordStore` trait. Two implementations ship with the crate: an
//! in-memory map and a SQLite store.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::models::SchedulingRecord;
use chrono::{DateTime, Utc};
use thiserror::Error;

pub type LearnerId = i64;
pub type CardId = i64;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A persisted timestamp column holds a value outside the representable
    /// date range. Indicates a corrupted row, not a caller mistake.
    #[error("invalid stored timestamp: {0}")]
    InvalidTimestamp(i64),
}

/// Storage contract for scheduling records.
///
/// Mutation goes through `&mut self`, so a store shared between callers sits
/// behind a lock and each review's read-modify-write cycle sees the most
/// recently persisted record. Lost updates would silently corrupt
/// `repetitions` and `easiness`.
pub trait RecordStore {
    /// Returns the record for (learner, card), or `None` if the learner has
    /// never reviewed that card.
    fn get(&self, learner_id: LearnerId, card_id: CardId) -> Result<Option<SchedulingRecord>>;

    /// Inserts or overwrites the record for (learner, card).
    fn put(
        &mut self,
        learner_id: LearnerId,
        card_id: CardId,
        record: &SchedulingRecord,
    ) -> Result<()>;

    /// Returns every record of the learner whose next review time has
    /// passed, oldest due date first.
    fn find_due(
        &self,
        learner_id: LearnerId,
        now: DateTime<Utc>,
    ) -> Result<Vec<(CardId, SchedulingRecord)>>;
}
