//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use pulse_core::{DomainError, EventId};

use crate::response::ApiError;

/// Event id taken from the single path parameter of the route
///
/// A value that is not an integer is rejected with 422 before any handler runs.
#[derive(Debug, Clone, Copy)]
pub struct EventIdPath(pub EventId);

#[async_trait]
impl<S> FromRequestParts<S> for EventIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        let id = raw.parse::<EventId>().map_err(DomainError::from)?;
        Ok(EventIdPath(id))
    }
}
