//! SM-2 (SuperMemo 2) spaced repetition algorithm.
//!
//! The SM-2 algorithm calculates optimal review intervals based on recall quality:
//! - Each card has an easiness factor (EF) that adjusts based on performance
//! - Quality grades 0-2: repetitions reset and the card comes back in one day
//! - Quality grades 3-5: intervals grow progressively (1 day → 6 days → EF multiplier)
//! - EF is adjusted after each review and has a minimum value of 1.3
//! - Higher quality responses lead to longer intervals between reviews
//!
//! Everything here is pure: callers inject `now` and own persistence of the
//! returned record.

use super::scheduling_record::{MIN_EASINESS, SchedulingRecord};
use chrono::{DateTime, Days, Utc};

/// Calculates the updated scheduling record according to the SM-2 algorithm.
///
/// `quality` is a 0-5 recall score (0 = complete blackout, 5 = perfect
/// response); out-of-range values are clamped rather than rejected, since
/// callers may hand over unvalidated UI or API input.
///
/// The next review date is computed by adding whole calendar days, not
/// `interval * 86400` seconds, so intervals do not drift across DST
/// transitions.
pub fn update(record: &SchedulingRecord, quality: i32, now: DateTime<Utc>) -> SchedulingRecord {
    let quality = quality.clamp(0, 5);
    let acceptable = quality >= 3;

    // Calculate new E-Factor (easiness factor)
    let q = quality as f64;
    let mut new_easiness = record.easiness + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));

    // E-Factor should not fall below 1.3
    if new_easiness < MIN_EASINESS {
        new_easiness = MIN_EASINESS;
    }

    let (new_interval_days, new_repetitions) = if !acceptable {
        // Failed recall: streak resets and the card comes back tomorrow,
        // regardless of prior history.
        (1, 0)
    } else {
        let new_reps = record.repetitions + 1;
        let new_interval = match new_reps {
            1 => 1, // First successful recall: next-day review
            2 => 6, // Second: fixed 6-day gap (SM-2 constant, not EF-derived)
            // Subsequent: prior interval grows by the new EF, rounded to the
            // nearest day (ties away from zero).
            _ => (record.interval_days as f64 * new_easiness).round() as u32,
        };
        (new_interval, new_reps)
    };

    SchedulingRecord {
        easiness: new_easiness,
        interval_days: new_interval_days,
        repetitions: new_repetitions,
        next_review_at: now + Days::new(new_interval_days as u64),
        last_reviewed_at: Some(now),
    }
}

/// True when the record's scheduled review time has passed.
/// Boundary equality counts as due.
pub fn is_due(record: &SchedulingRecord, now: DateTime<Utc>) -> bool {
    record.next_review_at <= now
}
