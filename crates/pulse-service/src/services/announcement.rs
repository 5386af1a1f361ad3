//! Announcement service

use tracing::{info, instrument};

use crate::dto::{AnnouncementResponse, SetAnnouncementRequest};

use super::context::ServiceContext;

/// Announcement service
pub struct AnnouncementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnnouncementService<'a> {
    /// Create a new AnnouncementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Replace the current announcement
    #[instrument(skip_all)]
    pub fn set_announcement(&self, request: SetAnnouncementRequest) -> AnnouncementResponse {
        let announcement = self.ctx.announcement_repo().set(request.message);

        info!(length = announcement.message.len(), "Announcement updated");

        AnnouncementResponse::from(announcement)
    }

    /// Current announcement
    pub fn get_announcement(&self) -> AnnouncementResponse {
        AnnouncementResponse::from(self.ctx.announcement_repo().get())
    }
}
