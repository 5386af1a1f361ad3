//! Integer identifiers for events and feedback
//!
//! Each entity type gets its own newtype so an event id can never be passed
//! where a feedback id is expected. Ids are handed out by an [`IdAllocator`],
//! one allocator per entity type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Identifier of an [`Event`](crate::entities::Event)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

/// Identifier of a [`Feedback`](crate::entities::Feedback) record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(i64);

/// Error when parsing an identifier from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("identifier must be an integer")]
    InvalidFormat,
}

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            /// Create an id from a raw integer value
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner integer value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidFormat)
            }
        }
    };
}

impl_id!(EventId);
impl_id!(FeedbackId);

/// Monotonic identifier allocator
///
/// Starts at 1 and never hands out the same value twice. A value is consumed
/// by `next()` whether or not the caller ends up storing anything with it.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicI64,
}

impl IdAllocator {
    /// First value returned by a fresh allocator
    pub const FIRST: i64 = 1;

    /// Create an allocator starting at 1
    pub fn new() -> Self {
        Self {
            next: AtomicI64::new(Self::FIRST),
        }
    }

    /// Allocate the next identifier
    pub fn next(&self) -> i64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
