//! Frozen completion snapshot read by results and export views.
//!
//! Taken at most once per session id, at the instant the session flips to
//! Completed. Later `start`/`reset` calls mutate or clear the live slot
//! while the user may still be looking at results, so everything
//! result-facing reads from here, never from the live session.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::session::{GuessRecord, Session, SessionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub title: String,
    pub total_items: u32,
    pub correct_count: u32,
    pub guess_count: u32,
    pub score: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    /// Timer value at the instant of completion. Never changes afterwards.
    pub elapsed_seconds: u64,
    pub cover_image: Option<String>,
    pub banner_image: Option<String>,
    /// Full guess history in submission order.
    pub guesses: Vec<GuessRecord>,
}

impl SessionSnapshot {
    /// Copy the session and its guess history into an immutable snapshot.
    ///
    /// The caller (the session service) is responsible for the
    /// once-per-session-id guarantee; this is the plain copy.
    pub fn freeze(session: &Session, guesses: &[GuessRecord], elapsed_seconds: u64) -> Self {
        Self {
            session_id: session.id,
            title: session.title.clone(),
            total_items: session.total_items,
            correct_count: session.correct_count,
            guess_count: session.guess_count,
            score: session.score,
            started_at: session.started_at,
            elapsed_seconds,
            cover_image: session.cover_image.clone(),
            banner_image: session.banner_image.clone(),
            guesses: guesses.to_vec(),
        }
    }
}
