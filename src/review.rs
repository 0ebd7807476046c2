//! Review flow glue: look up the learner's scheduling state, run the SM-2
//! update, persist the result.
//!
//! Adapted for callers that own a store and a clock; the service holds both
//! so each review is a single read-modify-write against the store. Share a
//! service between threads by wrapping it in a lock, the same way a single
//! database connection would be shared.

use crate::clock::Clock;
use crate::models::{SchedulingRecord, sm2};
use crate::store::{CardId, LearnerId, RecordStore, Result};
use tracing::debug;

pub struct ReviewService<S, C> {
    store: S,
    clock: C,
}

impl<S: RecordStore, C: Clock> ReviewService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Records one review event and returns the updated scheduling state.
    ///
    /// The record is created lazily the first time a learner reviews a
    /// card. `quality` is clamped to 0-5 by the scheduler.
    pub fn record_review(
        &mut self,
        learner_id: LearnerId,
        card_id: CardId,
        quality: i32,
    ) -> Result<SchedulingRecord> {
        let now = self.clock.now();
        let current = self
            .store
            .get(learner_id, card_id)?
            .unwrap_or_else(|| SchedulingRecord::initialize(now));

        let updated = sm2::update(&current, quality, now);
        self.store.put(learner_id, card_id, &updated)?;

        debug!(
            learner_id,
            card_id,
            quality,
            repetitions = updated.repetitions,
            interval_days = updated.interval_days,
            "review recorded"
        );

        Ok(updated)
    }

    /// All of the learner's cards that are due right now, oldest first.
    pub fn due_cards(&self, learner_id: LearnerId) -> Result<Vec<(CardId, SchedulingRecord)>> {
        self.store.find_due(learner_id, self.clock.now())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
