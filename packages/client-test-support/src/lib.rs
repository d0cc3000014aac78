//! Shared test utilities for the quiz client.
//!
//! Currently this is the unified logging initialization used by both unit
//! test modules and integration test binaries.

pub mod logging;
