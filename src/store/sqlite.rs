//! SQLite-backed record store.
//!
//! One row per (learner, card). Timestamps are stored as integer unix
//! seconds to keep the schema free of text date parsing; they are converted
//! back to `DateTime<Utc>` on read. Calendar-day arithmetic happens in the
//! scheduler, never here.

use super::{CardId, LearnerId, RecordStore, Result, StoreError};
use crate::models::SchedulingRecord;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use tracing::debug;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and ensures the schema
    /// exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Fresh in-memory database, handy for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS scheduling_records (
                learner_id INTEGER NOT NULL,
                card_id INTEGER NOT NULL,
                easiness REAL NOT NULL DEFAULT 2.5,
                interval_days INTEGER NOT NULL DEFAULT 0,
                repetitions INTEGER NOT NULL DEFAULT 0,
                next_review_at INTEGER NOT NULL,
                last_reviewed_at INTEGER,
                PRIMARY KEY (learner_id, card_id)
            )",
            (),
        )?;

        debug!("sqlite record store ready");
        Ok(Self { conn })
    }
}

fn timestamp_from_secs(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(StoreError::InvalidTimestamp(secs))
}

/// Raw row before the unix-seconds columns are converted back to dates.
struct RawRecord {
    easiness: f64,
    interval_days: u32,
    repetitions: u32,
    next_review_at: i64,
    last_reviewed_at: Option<i64>,
}

impl RawRecord {
    fn into_record(self) -> Result<SchedulingRecord> {
        Ok(SchedulingRecord {
            easiness: self.easiness,
            interval_days: self.interval_days,
            repetitions: self.repetitions,
            next_review_at: timestamp_from_secs(self.next_review_at)?,
            last_reviewed_at: self
                .last_reviewed_at
                .map(timestamp_from_secs)
                .transpose()?,
        })
    }
}

impl RecordStore for SqliteStore {
    fn get(&self, learner_id: LearnerId, card_id: CardId) -> Result<Option<SchedulingRecord>> {
        let raw = self
            .conn
            .query_row(
                "SELECT easiness, interval_days, repetitions, next_review_at, last_reviewed_at
                 FROM scheduling_records
                 WHERE learner_id = ?1 AND card_id = ?2",
                params![learner_id, card_id],
                |row| {
                    Ok(RawRecord {
                        easiness: row.get(0)?,
                        interval_days: row.get(1)?,
                        repetitions: row.get(2)?,
                        next_review_at: row.get(3)?,
                        last_reviewed_at: row.get(4)?,
                    })
                },
            )
            .optional()?;

        raw.map(RawRecord::into_record).transpose()
    }

    fn put(
        &mut self,
        learner_id: LearnerId,
        card_id: CardId,
        record: &SchedulingRecord,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT INTO scheduling_records
                 (learner_id, card_id, easiness, interval_days, repetitions,
                  next_review_at, last_reviewed_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT (learner_id, card_id) DO UPDATE SET
                 easiness = excluded.easiness,
                 interval_days = excluded.interval_days,
                 repetitions = excluded.repetitions,
                 next_review_at = excluded.next_review_at,
                 last_reviewed_at = excluded.last_reviewed_at",
            params![
                learner_id,
                card_id,
                record.easiness,
                record.interval_days,
                record.repetitions,
                record.next_review_at.timestamp(),
                record.last_reviewed_at.map(|at| at.timestamp()),
            ],
        )?;

        Ok(())
    }

    fn find_due(
        &self,
        learner_id: LearnerId,
        now: DateTime<Utc>,
    ) -> Result<Vec<(CardId, SchedulingRecord)>> {
        let mut stmt = self.conn.prepare(
            "SELECT card_id, easiness, interval_days, repetitions, next_review_at, last_reviewed_at
             FROM scheduling_records
             WHERE learner_id = ?1 AND next_review_at <= ?2
             ORDER BY next_review_at ASC, card_id ASC",
        )?;

        let rows = stmt
            .query_map(params![learner_id, now.timestamp()], |row| {
                Ok((
                    row.get::<_, CardId>(0)?,
                    RawRecord {
                        easiness: row.get(1)?,
                        interval_days: row.get(2)?,
                        repetitions: row.get(3)?,
                        next_review_at: row.get(4)?,
                        last_reviewed_at: row.get(5)?,
                    },
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|(card_id, raw)| Ok((card_id, raw.into_record()?)))
            .collect()
    }
}
