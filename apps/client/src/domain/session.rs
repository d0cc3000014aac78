//! Live session state and verdict merging.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::errors::domain::{DomainError, StateKind};
use crate::protocol::wire::GuessVerdict;

pub type SessionId = i64;

/// Overall session lifecycle status.
///
/// Transitions are monotonic: Idle → Active → Completed. The only road back
/// to Idle is a local `reset`, which replaces the whole live slot rather
/// than stepping the status backward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No session in this client context.
    Idle,
    /// A play-through is in progress; guesses are accepted.
    Active,
    /// The server declared the session finished. Terminal per session id.
    Completed,
}

/// One recorded guess. Append-only while the session is Active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub text: String,
    pub is_correct: bool,
    /// Canonical name of the matched item, when the guess was correct.
    pub matched_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
}

/// The mutable play-through record. Counters and score are
/// server-authoritative: verdict merging copies them verbatim and never
/// recomputes locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub total_items: u32,
    pub correct_count: u32,
    pub guess_count: u32,
    pub score: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    pub cover_image: Option<String>,
    pub banner_image: Option<String>,
}

impl Session {
    /// Merge a server verdict into the session counters.
    pub fn apply_verdict(&mut self, verdict: &GuessVerdict) {
        self.correct_count = verdict.correct_count;
        self.guess_count = verdict.total_guess_count;
        self.score = verdict.score;

        debug_assert!(
            self.correct_count <= self.total_items,
            "correct_count must not exceed total_items"
        );
        debug_assert!(
            self.guess_count >= self.correct_count,
            "guess_count must not fall below correct_count"
        );
    }
}

/// Tagged union over the session lifecycle. This is the state machine's
/// single source of truth; view code never keeps its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LiveSession {
    #[default]
    Idle,
    Active(Session),
    Completed(Session),
}

impl LiveSession {
    pub fn status(&self) -> SessionStatus {
        match self {
            LiveSession::Idle => SessionStatus::Idle,
            LiveSession::Active(_) => SessionStatus::Active,
            LiveSession::Completed(_) => SessionStatus::Completed,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, LiveSession::Active(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            LiveSession::Idle => None,
            LiveSession::Active(s) | LiveSession::Completed(s) => Some(s),
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            LiveSession::Idle => None,
            LiveSession::Active(s) | LiveSession::Completed(s) => Some(s),
        }
    }

    /// Active → Completed flip. Any other starting state is a phase error.
    pub fn complete(&mut self) -> Result<(), DomainError> {
        match std::mem::take(self) {
            LiveSession::Active(session) => {
                *self = LiveSession::Completed(session);
                Ok(())
            }
            other => {
                *self = other;
                Err(DomainError::state(
                    StateKind::NoActiveSession,
                    "cannot complete: no session is Active",
                ))
            }
        }
    }
}
