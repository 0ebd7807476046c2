//! In-memory record store, used in tests and by embedders that persist
//! elsewhere.

use super::{CardId, LearnerId, RecordStore, Result};
use crate::models::{SchedulingRecord, sm2};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[derive(Default)]
pub struct MemoryStore {
    records: HashMap<(LearnerId, CardId), SchedulingRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, learner_id: LearnerId, card_id: CardId) -> Result<Option<SchedulingRecord>> {
        Ok(self.records.get(&(learner_id, card_id)).cloned())
    }

    fn put(
        &mut self,
        learner_id: LearnerId,
        card_id: CardId,
        record: &SchedulingRecord,
    ) -> Result<()> {
        self.records.insert((learner_id, card_id), record.clone());
        Ok(())
    }

    fn find_due(
        &self,
        learner_id: LearnerId,
        now: DateTime<Utc>,
    ) -> Result<Vec<(CardId, SchedulingRecord)>> {
        let mut due: Vec<(CardId, SchedulingRecord)> = self
            .records
            .iter()
            .filter(|(key, record)| key.0 == learner_id && sm2::is_due(record, now))
            .map(|(key, record)| (key.1, record.clone()))
            .collect();

        // Oldest due date first, card id as tie-breaker for a stable order
        due.sort_by(|(card_a, a), (card_b, b)| {
            a.next_review_at
                .cmp(&b.next_review_at)
                .then(card_a.cmp(card_b))
        });

        Ok(due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, TimeZone};

    fn day0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_get_absent_record() {
        let store = MemoryStore::new();
        assert!(store.get(1, 42).unwrap().is_none());
    }

    #[test]
    fn test_put_then_get() {
        let mut store = MemoryStore::new();
        let record = SchedulingRecord::initialize(day0());

        store.put(1, 42, &record).unwrap();

        assert_eq!(store.get(1, 42).unwrap(), Some(record));
        assert!(store.get(2, 42).unwrap().is_none()); // other learner
    }

    #[test]
    fn test_put_overwrites() {
        let mut store = MemoryStore::new();
        let record = SchedulingRecord::initialize(day0());
        store.put(1, 42, &record).unwrap();

        let updated = sm2::update(&record, 5, day0());
        store.put(1, 42, &updated).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1, 42).unwrap(), Some(updated));
    }

    #[test]
    fn test_find_due_filters_and_orders() {
        let mut store = MemoryStore::new();

        let mut due_later = SchedulingRecord::initialize(day0());
        due_later.next_review_at = day0() + Days::new(1);
        let mut due_earlier = SchedulingRecord::initialize(day0());
        due_earlier.next_review_at = day0() - Days::new(3);
        let mut not_due = SchedulingRecord::initialize(day0());
        not_due.next_review_at = day0() + Days::new(10);

        store.put(1, 10, &due_later).unwrap();
        store.put(1, 20, &due_earlier).unwrap();
        store.put(1, 30, &not_due).unwrap();
        store.put(2, 40, &due_earlier).unwrap(); // other learner

        let due = store.find_due(1, day0() + Days::new(1)).unwrap();
        let ids: Vec<CardId> = due.iter().map(|(id, _)| *id).collect();

        assert_eq!(ids, vec![20, 10]);
    }

    #[test]
    fn test_find_due_boundary_equality() {
        let mut store = MemoryStore::new();
        let record = SchedulingRecord::initialize(day0());
        store.put(1, 10, &record).unwrap();

        assert_eq!(store.find_due(1, day0()).unwrap().len(), 1);
        assert!(
            store
                .find_due(1, day0() - Days::new(1))
                .unwrap()
                .is_empty()
        );
    }
}
