#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod clock;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod protocol;
pub mod services;
pub mod transport;

// Re-exports for public API
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ClientConfig;
pub use errors::domain::DomainError;
pub use http::transport::HttpTransport;
pub use services::export::ExportCoordinator;
pub use services::results::{ResultsAssembler, SessionResults};
pub use services::session::{GuessOutcome, SessionService, StartMeta};
pub use services::timer::ElapsedTimeTracker;
pub use transport::SessionTransport;

// Prelude for test convenience
pub mod prelude {
    pub use super::clock::*;
    pub use super::domain::*;
    pub use super::errors::domain::*;
    pub use super::services::export::*;
    pub use super::services::results::*;
    pub use super::services::session::*;
    pub use super::transport::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    client_test_support::logging::init();
}
