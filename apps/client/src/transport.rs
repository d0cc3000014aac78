//! Port to the server-authoritative quiz backend.
//!
//! The session service and assemblers depend on this trait, never on a
//! concrete HTTP client, so tests substitute scripted fakes. All game
//! mutation (`start_session`, `submit_guess`, `end_session`) is scoped to
//! the caller's server-side session; the server tracks which play-through
//! is live for this client context.

use async_trait::async_trait;

use crate::errors::domain::DomainError;
use crate::protocol::wire::{
    EndSessionResponse, GuessVerdict, LeaderboardEntry, RosterEntry, SessionHistory,
    SessionStateResponse, SessionSummary, StartSessionResponse,
};

#[async_trait]
pub trait SessionTransport: Send + Sync {
    /// Begin a play-through against one content set.
    async fn start_session(
        &self,
        content_id: i64,
        title: &str,
    ) -> Result<StartSessionResponse, DomainError>;

    /// Submit one guess for the live session. At most one submission may be
    /// in flight at a time; the caller enforces this.
    async fn submit_guess(&self, text: &str) -> Result<GuessVerdict, DomainError>;

    /// Terminate the live session. Idempotent on the server side.
    async fn end_session(&self) -> Result<EndSessionResponse, DomainError>;

    /// Server-side view of the live session, if any. Lets a reloaded client
    /// discover a play-through that is still open on the server.
    async fn fetch_state(&self) -> Result<SessionStateResponse, DomainError>;

    /// Full content set for a completed session, with was-guessed flags.
    async fn fetch_roster(&self, session_id: i64) -> Result<Vec<RosterEntry>, DomainError>;

    /// All historical sessions for this client context, newest first.
    async fn fetch_sessions(&self) -> Result<Vec<SessionSummary>, DomainError>;

    /// One historical session with its guess list.
    async fn fetch_session(&self, session_id: i64) -> Result<SessionHistory, DomainError>;

    /// Top completed sessions across players.
    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, DomainError>;

    /// Server-rendered export document as opaque bytes.
    async fn export_session(&self, session_id: i64) -> Result<Vec<u8>, DomainError>;
}
