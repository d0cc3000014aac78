//! Orchestration services: session lifecycle, timing, results, export.

pub mod export;
pub mod results;
pub mod session;
pub mod timer;
