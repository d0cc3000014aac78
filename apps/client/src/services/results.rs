//! Results assembly for completed sessions.
//!
//! Valid only once the session (or its snapshot) is Completed. A failed or
//! inconsistent fetch leaves the Completed state and the snapshot intact;
//! retrying is a plain re-fetch and never re-invokes `end`.

use std::sync::Arc;

use tracing::debug;

use crate::domain::roster::{reconcile, CompletionFacts, RosterItem, RosterPartition};
use crate::errors::domain::DomainError;
use crate::protocol::wire::{LeaderboardEntry, SessionHistory, SessionSummary};
use crate::transport::SessionTransport;

/// Partitioned roster together with the facts it was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResults {
    pub facts: CompletionFacts,
    pub partition: RosterPartition,
}

pub struct ResultsAssembler {
    transport: Arc<dyn SessionTransport>,
}

impl ResultsAssembler {
    pub fn new(transport: Arc<dyn SessionTransport>) -> Self {
        Self { transport }
    }

    /// Fetch the roster for a completed session and partition it into found
    /// and missed items.
    ///
    /// `facts` come from the snapshot (or a live-Completed session); the
    /// fetched roster must reconcile with them or the whole assembly is
    /// rejected as corrupt.
    pub async fn assemble(&self, facts: CompletionFacts) -> Result<SessionResults, DomainError> {
        let entries = self.transport.fetch_roster(facts.session_id).await?;
        let roster: Vec<RosterItem> = entries.into_iter().map(RosterItem::from).collect();

        let partition = RosterPartition::split(roster);
        reconcile(&partition, &facts)?;

        debug!(
            session_id = facts.session_id,
            found = partition.found.len(),
            missed = partition.missed.len(),
            "roster assembled"
        );

        Ok(SessionResults { facts, partition })
    }

    /// Historical sessions for this client context (server-owned storage).
    pub async fn history(&self) -> Result<Vec<SessionSummary>, DomainError> {
        self.transport.fetch_sessions().await
    }

    /// One historical session with its guess list, for the details view.
    pub async fn session_details(&self, session_id: i64) -> Result<SessionHistory, DomainError> {
        self.transport.fetch_session(session_id).await
    }

    /// Top completed sessions across players.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, DomainError> {
        self.transport.fetch_leaderboard().await
    }
}
