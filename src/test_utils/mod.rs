//! Test utilities for unit and route testing.
//!
//! This module provides:
//! - A manually driven clock and a scripted reply picker
//! - In-memory waitlist sinks for observing or failing deliveries
//! - A builder for `AppState` wired with those doubles

mod app_state_builder;
mod mocks;

pub use app_state_builder::*;
pub use mocks::*;
