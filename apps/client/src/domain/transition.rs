//! Edge-triggered lifecycle transitions and navigation relevance.
//!
//! View routing reacts to transitions (not states) so the Active → Completed
//! flip is observed exactly once, and the guard below keeps the results view
//! from bouncing to the start screen while a completed snapshot is still
//! pending display.

use crate::domain::session::{SessionId, SessionStatus};

/// Minimal view of the lifecycle used to derive transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLifecycleView {
    pub status: SessionStatus,
    pub session_id: Option<SessionId>,
    /// A completed snapshot exists and has not been superseded.
    pub snapshot_pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransition {
    /// Edge-triggered: a session moved from Idle into Active.
    SessionStarted { session_id: SessionId },

    /// Edge-triggered: the session moved from Active to Completed.
    SessionCompleted { session_id: SessionId },

    /// Explicit: the live slot was cleared back to Idle (local reset).
    SessionDiscarded,
}

/// Derive lifecycle transitions from before/after views.
pub fn derive_session_transitions(
    before: &SessionLifecycleView,
    after: &SessionLifecycleView,
) -> Vec<SessionTransition> {
    let mut transitions = Vec::new();

    if before.status != SessionStatus::Active && after.status == SessionStatus::Active {
        if let Some(session_id) = after.session_id {
            transitions.push(SessionTransition::SessionStarted { session_id });
        }
    }

    if before.status != SessionStatus::Completed && after.status == SessionStatus::Completed {
        if let Some(session_id) = after.session_id {
            transitions.push(SessionTransition::SessionCompleted { session_id });
        }
    }

    if before.status != SessionStatus::Idle && after.status == SessionStatus::Idle {
        transitions.push(SessionTransition::SessionDiscarded);
    }

    transitions
}

/// Navigation guard: the session screens stay relevant while a session is
/// Active or a completed snapshot is still awaiting its results view.
pub fn view_still_relevant(view: &SessionLifecycleView) -> bool {
    view.status == SessionStatus::Active || view.snapshot_pending
}
