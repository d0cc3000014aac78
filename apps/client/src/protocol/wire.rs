//! Wire DTOs for the quiz backend API.
//!
//! Counters in these payloads are server-authoritative; the client copies
//! them into local state without recomputing.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::roster::{CastRole, RosterItem};
use crate::domain::session::GuessRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSessionRequest {
    pub content_id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: i64,
    pub title: String,
    pub total_items: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

/// The server's answer to one guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessVerdict {
    pub is_correct: bool,
    /// Canonical name of the matched item, present on correct guesses.
    pub matched_name: Option<String>,
    pub correct_count: u32,
    pub total_guess_count: u32,
    pub score: i32,
    /// True when this verdict finished the session.
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndSessionResponse {
    pub final_score: i32,
    #[serde(default)]
    pub duration_seconds: Option<u64>,
}

/// Server-side view of the live play-through, used to detect an active
/// session surviving a client reload. The counter fields are absent when
/// nothing is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStateResponse {
    pub active: bool,
    #[serde(default)]
    pub session_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub total_items: Option<u32>,
    #[serde(default)]
    pub correct_count: Option<u32>,
    #[serde(default)]
    pub total_guess_count: Option<u32>,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl SessionStateResponse {
    /// The inactive shape the server returns when no session is live.
    pub fn inactive() -> Self {
        Self {
            active: false,
            session_id: None,
            title: None,
            total_items: None,
            correct_count: None,
            total_guess_count: None,
            score: None,
            completed: None,
        }
    }
}

/// One roster item as served for a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub role: CastRole,
    pub was_guessed: bool,
}

impl From<RosterEntry> for RosterItem {
    fn from(entry: RosterEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            image: entry.image,
            role: entry.role,
            was_guessed: entry.was_guessed,
        }
    }
}

/// Historical session summary, as listed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: i64,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
    pub total_guess_count: u32,
    pub correct_count: u32,
    pub total_items: u32,
    pub score: i32,
    pub completed: bool,
    #[serde(default)]
    pub duration_seconds: Option<u64>,
}

/// Full historical session: summary plus guesses in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHistory {
    #[serde(flatten)]
    pub summary: SessionSummary,
    pub guesses: Vec<GuessRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub title: String,
    pub score: i32,
    pub correct_count: u32,
    pub total_items: u32,
    pub date: String,
}

/// Error payload the server attaches to non-success responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
