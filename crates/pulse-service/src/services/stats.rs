//! Dashboard statistics

use crate::dto::StatsResponse;

use super::context::ServiceContext;

/// Stats service
///
/// Totals are computed from the stores on every call.
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub fn get_stats(&self) -> StatsResponse {
        StatsResponse {
            total_events: self.ctx.event_repo().count(),
            total_feedback: self.ctx.feedback_repo().count(),
            total_reactions: self.ctx.reaction_repo().total(),
        }
    }
}
