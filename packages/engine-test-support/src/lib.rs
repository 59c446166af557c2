//! Engine test support utilities
//!
//! Shared, test-only helpers for the engine's unit and integration tests.

pub mod logging;
