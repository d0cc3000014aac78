//! Domain layer: pure session lifecycle types and helpers.

pub mod export;
pub mod roster;
pub mod session;
pub mod snapshot;
pub mod transition;

#[cfg(test)]
mod tests_export;
#[cfg(test)]
mod tests_props_roster;
#[cfg(test)]
mod tests_session;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use export::{ExportDocument, ExportSource, ExportSummary};
pub use roster::{CastRole, CompletionFacts, RosterItem, RosterPartition};
pub use session::{GuessRecord, LiveSession, Session, SessionId, SessionStatus};
pub use snapshot::SessionSnapshot;
pub use transition::{derive_session_transitions, SessionLifecycleView, SessionTransition};
