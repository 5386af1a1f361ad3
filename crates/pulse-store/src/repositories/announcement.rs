//! In-memory implementation of AnnouncementRepository

use parking_lot::RwLock;
use tracing::instrument;

use pulse_core::entities::Announcement;
use pulse_core::traits::AnnouncementRepository;

/// In-memory implementation of AnnouncementRepository
///
/// Holds exactly one announcement. `set` replaces it; nothing is kept of
/// earlier messages.
#[derive(Debug)]
pub struct MemAnnouncementRepository {
    current: RwLock<Announcement>,
}

impl MemAnnouncementRepository {
    /// Create a slot holding the given initial message
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(Announcement::new(initial)),
        }
    }
}

impl Default for MemAnnouncementRepository {
    fn default() -> Self {
        Self::new(Announcement::DEFAULT_MESSAGE)
    }
}

impl AnnouncementRepository for MemAnnouncementRepository {
    #[instrument(skip(self, message))]
    fn set(&self, message: String) -> Announcement {
        let announcement = Announcement::new(message);
        *self.current.write() = announcement.clone();
        announcement
    }

    fn get(&self) -> Announcement {
        self.current.read().clone()
    }
}
