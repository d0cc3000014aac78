//! Domain-level error type used across services and the transport.
//!
//! The taxonomy keeps three caller-visible families apart: validation
//! problems that never left the process, state problems (an operation called
//! in the wrong lifecycle phase, locally or as judged by the server), and
//! transport problems. Callers redirect on state errors and offer a retry on
//! transport errors, so the distinction is load-bearing.

use thiserror::Error;

/// Local input validation failures. No network call was made and no state
/// was mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    EmptyGuess,
    MissingTitle,
    InvalidContentId,
    Other(String),
}

/// Lifecycle-phase violations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateKind {
    /// A session-mutating call with nothing Active.
    NoActiveSession,
    /// The operation requires a Completed session (results, export).
    NotCompleted,
    /// The server rejected the call as out-of-phase (HTTP 400 family).
    ServerRejected,
    Other(String),
}

/// Missing resources in domain terms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
    Content,
    Other(String),
}

/// Transport and server-side operational failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportKind {
    Connect,
    Timeout,
    /// Non-success status from the server (5xx and unexpected codes).
    Server(u16),
    /// Response body did not decode into the expected shape.
    Decode,
    /// Server data contradicts frozen local facts (e.g. roster counts that
    /// do not reconcile with the snapshot).
    DataCorruption,
    Other(String),
}

/// Central domain error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("validation error ({kind:?}): {detail}")]
    Validation { kind: ValidationKind, detail: String },
    #[error("invalid state ({kind:?}): {detail}")]
    State { kind: StateKind, detail: String },
    #[error("not found ({kind:?}): {detail}")]
    NotFound { kind: NotFoundKind, detail: String },
    #[error("transport failure ({kind:?}): {detail}")]
    Transport { kind: TransportKind, detail: String },
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub fn state(kind: StateKind, detail: impl Into<String>) -> Self {
        Self::State {
            kind,
            detail: detail.into(),
        }
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            detail: detail.into(),
        }
    }

    pub fn transport(kind: TransportKind, detail: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            detail: detail.into(),
        }
    }

    /// True for failures worth a retry prompt (as opposed to a redirect).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
