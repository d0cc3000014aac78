//! Error handling for the quiz client.

pub mod domain;

pub use domain::DomainError;
