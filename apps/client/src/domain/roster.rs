//! Roster partitioning for the results view.

use serde::{Deserialize, Serialize};

use crate::domain::session::{LiveSession, SessionId};
use crate::domain::snapshot::SessionSnapshot;
use crate::errors::domain::{DomainError, StateKind, TransportKind};

/// Role classification of a roster item, as assigned by the content source.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CastRole {
    Main,
    Supporting,
    Background,
}

/// One item of the full content set, annotated with the server-determined
/// was-guessed flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterItem {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub role: CastRole,
    pub was_guessed: bool,
}

/// Roster split into found and missed items. Every input item lands in
/// exactly one of the two lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterPartition {
    pub found: Vec<RosterItem>,
    pub missed: Vec<RosterItem>,
}

impl RosterPartition {
    pub fn split(roster: Vec<RosterItem>) -> Self {
        let (found, missed) = roster.into_iter().partition(|item| item.was_guessed);
        Self { found, missed }
    }

    pub fn total(&self) -> usize {
        self.found.len() + self.missed.len()
    }
}

/// The frozen facts a fetched roster must agree with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionFacts {
    pub session_id: SessionId,
    pub total_items: u32,
    pub correct_count: u32,
}

impl From<&SessionSnapshot> for CompletionFacts {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            session_id: snapshot.session_id,
            total_items: snapshot.total_items,
            correct_count: snapshot.correct_count,
        }
    }
}

impl TryFrom<&LiveSession> for CompletionFacts {
    type Error = DomainError;

    /// Facts may also be read off a live session that is already Completed
    /// (e.g. before the snapshot has been handed to the results view).
    fn try_from(live: &LiveSession) -> Result<Self, Self::Error> {
        match live {
            LiveSession::Completed(session) => Ok(Self {
                session_id: session.id,
                total_items: session.total_items,
                correct_count: session.correct_count,
            }),
            _ => Err(DomainError::state(
                StateKind::NotCompleted,
                "completion facts require a Completed session",
            )),
        }
    }
}

/// Verify the partition agrees with the frozen counters.
///
/// A mismatch means the server's roster contradicts the completed session
/// (stale cache, wrong id); callers keep the Completed state and may retry
/// the fetch.
pub fn reconcile(partition: &RosterPartition, facts: &CompletionFacts) -> Result<(), DomainError> {
    if partition.total() != facts.total_items as usize {
        return Err(DomainError::transport(
            TransportKind::DataCorruption,
            format!(
                "roster has {} items but the session froze total_items={}",
                partition.total(),
                facts.total_items
            ),
        ));
    }
    if partition.found.len() != facts.correct_count as usize {
        return Err(DomainError::transport(
            TransportKind::DataCorruption,
            format!(
                "roster flags {} items as guessed but the session froze correct_count={}",
                partition.found.len(),
                facts.correct_count
            ),
        ));
    }
    Ok(())
}
