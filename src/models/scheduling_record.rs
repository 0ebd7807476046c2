//! Per-(learner, card) scheduling state tracked by the SM-2 algorithm.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Easiness factor assigned to a card the learner has never reviewed.
pub const DEFAULT_EASINESS: f64 = 2.5;

/// Lower bound for the easiness factor. SM-2 never lets it fall below this.
pub const MIN_EASINESS: f64 = 1.3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchedulingRecord {
    /// How easy this card is for this learner; higher means intervals grow faster.
    pub easiness: f64,
    /// Days until the next scheduled review.
    pub interval_days: u32,
    /// Consecutive reviews with acceptable recall (quality >= 3).
    pub repetitions: u32,
    /// When this record becomes due.
    pub next_review_at: DateTime<Utc>,
    /// Set on every review; `None` for a record that was never reviewed.
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl SchedulingRecord {
    /// Fresh record for a card the learner is seeing for the first time.
    /// Due immediately, no review history.
    pub fn initialize(now: DateTime<Utc>) -> Self {
        Self {
            easiness: DEFAULT_EASINESS,
            interval_days: 0,
            repetitions: 0,
            next_review_at: now,
            last_reviewed_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_defaults() {
        let now = Utc::now();
        let record = SchedulingRecord::initialize(now);

        assert_eq!(record.easiness, 2.5);
        assert_eq!(record.interval_days, 0);
        assert_eq!(record.repetitions, 0);
        assert_eq!(record.next_review_at, now);
        assert!(record.last_reviewed_at.is_none());
    }
}
