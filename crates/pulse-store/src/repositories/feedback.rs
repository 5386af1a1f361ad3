//! In-memory implementation of FeedbackRepository

use parking_lot::RwLock;
use tracing::instrument;

use pulse_core::entities::{Feedback, NewFeedback};
use pulse_core::traits::FeedbackRepository;
use pulse_core::value_objects::{EventId, FeedbackId, IdAllocator};

/// In-memory implementation of FeedbackRepository
///
/// Append-only. Feedback ids come from an allocator that is independent of
/// the event id allocator.
#[derive(Debug, Default)]
pub struct MemFeedbackRepository {
    feedback: RwLock<Vec<Feedback>>,
    ids: IdAllocator,
}

impl MemFeedbackRepository {
    /// Create an empty MemFeedbackRepository
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedbackRepository for MemFeedbackRepository {
    #[instrument(skip(self, feedback), fields(event_id = %feedback.event_id))]
    fn create(&self, feedback: NewFeedback) -> Feedback {
        let mut all = self.feedback.write();
        let feedback = Feedback::new(FeedbackId::new(self.ids.next()), feedback);
        all.push(feedback.clone());
        feedback
    }

    fn list(&self) -> Vec<Feedback> {
        self.feedback.read().clone()
    }

    fn list_by_event(&self, event_id: EventId) -> Vec<Feedback> {
        self.feedback
            .read()
            .iter()
            .filter(|feedback| feedback.is_for(event_id))
            .cloned()
            .collect()
    }

    fn count(&self) -> usize {
        self.feedback.read().len()
    }
}
