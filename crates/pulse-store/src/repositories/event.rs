//! In-memory implementation of EventRepository

use parking_lot::RwLock;
use tracing::instrument;

use pulse_core::entities::{Event, NewEvent};
use pulse_core::traits::EventRepository;
use pulse_core::value_objects::{EventId, IdAllocator};

/// In-memory implementation of EventRepository
///
/// Events are kept in a vector in insertion order. Ids are allocated while
/// the write lock is held, so insertion order and id order always agree.
#[derive(Debug, Default)]
pub struct MemEventRepository {
    events: RwLock<Vec<Event>>,
    ids: IdAllocator,
}

impl MemEventRepository {
    /// Create an empty MemEventRepository
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventRepository for MemEventRepository {
    #[instrument(skip(self, event), fields(title = %event.title))]
    fn create(&self, event: NewEvent) -> Event {
        let mut events = self.events.write();
        let event = Event::new(EventId::new(self.ids.next()), event);
        events.push(event.clone());
        event
    }

    fn list(&self) -> Vec<Event> {
        self.events.read().clone()
    }

    fn find_by_id(&self, id: EventId) -> Option<Event> {
        self.events.read().iter().find(|event| event.id == id).cloned()
    }

    fn exists(&self, id: EventId) -> bool {
        self.events.read().iter().any(|event| event.id == id)
    }

    fn count(&self) -> usize {
        self.events.read().len()
    }
}
