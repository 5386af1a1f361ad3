//! In-memory implementation of ReactionRepository

use dashmap::DashMap;
use tracing::instrument;

use pulse_core::entities::{ReactionKind, ReactionTally};
use pulse_core::traits::ReactionRepository;
use pulse_core::value_objects::EventId;

/// In-memory implementation of ReactionRepository
///
/// Uses `DashMap` so increments on different events never contend. Each
/// increment runs under the entry's shard lock.
#[derive(Debug, Default)]
pub struct MemReactionRepository {
    tallies: DashMap<EventId, ReactionTally>,
}

impl MemReactionRepository {
    /// Create an empty MemReactionRepository
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReactionRepository for MemReactionRepository {
    fn ensure(&self, event_id: EventId) {
        self.tallies.entry(event_id).or_insert_with(ReactionTally::zero);
    }

    #[instrument(skip(self))]
    fn increment(&self, event_id: EventId, kind: ReactionKind) -> ReactionTally {
        let mut tally = self.tallies.entry(event_id).or_insert_with(ReactionTally::zero);
        tally.increment(kind);
        *tally
    }

    fn find(&self, event_id: EventId) -> Option<ReactionTally> {
        self.tallies.get(&event_id).map(|tally| *tally)
    }

    fn total(&self) -> u64 {
        self.tallies.iter().map(|entry| entry.value().total()).sum()
    }
}
