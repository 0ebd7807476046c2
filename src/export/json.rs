//! JSON export/import of a learner's scheduling progress.
//! Lets a learner move their review history between devices or back it up.

use crate::models::SchedulingRecord;
use crate::store::{CardId, LearnerId};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use tracing::debug;

/// Snapshot of one learner's scheduling records.
#[derive(Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub learner_id: LearnerId,
    pub records: Vec<CardProgress>,
}

#[derive(Serialize, Deserialize)]
pub struct CardProgress {
    pub card_id: CardId,
    pub record: SchedulingRecord,
}

impl ProgressSnapshot {
    pub fn new(learner_id: LearnerId, records: Vec<(CardId, SchedulingRecord)>) -> Self {
        Self {
            learner_id,
            records: records
                .into_iter()
                .map(|(card_id, record)| CardProgress { card_id, record })
                .collect(),
        }
    }
}

/// Exports a progress snapshot to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_progress_to_path(
    snapshot: &ProgressSnapshot,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_string = serde_json::to_string_pretty(snapshot)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Imports a progress snapshot from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_progress(filename: &str) -> Result<ProgressSnapshot, Box<dyn std::error::Error>> {
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let snapshot: ProgressSnapshot = serde_json::from_str(&contents)?;

    debug!(
        learner_id = snapshot.learner_id,
        records = snapshot.records.len(),
        "progress snapshot imported from '{}'",
        filename
    );
    Ok(snapshot)
}
