//! Integration test utilities for the event dashboard
//!
//! This crate provides helpers for running end-to-end tests against the
//! REST API over a real TCP socket.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
