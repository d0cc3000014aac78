//! Portable export document for a finished play-through.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::roster::RosterItem;
use crate::domain::session::{GuessRecord, LiveSession, SessionId};
use crate::domain::snapshot::SessionSnapshot;
use crate::errors::domain::{DomainError, StateKind};

/// Headline numbers of the play-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub session_id: SessionId,
    pub title: String,
    pub score: i32,
    pub correct_count: u32,
    pub guess_count: u32,
    pub total_items: u32,
    /// Rounded percentage of correct guesses over all guesses.
    pub accuracy_pct: u8,
    pub duration_seconds: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
}

/// The downloadable artifact: summary, guess history in submission order,
/// and the roster with correctness flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub summary: ExportSummary,
    pub guesses: Vec<GuessRecord>,
    pub roster: Vec<RosterItem>,
}

/// What the document is built from. Either works; both carry everything
/// needed, so building performs no network call.
#[derive(Debug, Clone, Copy)]
pub enum ExportSource<'a> {
    Snapshot(&'a SessionSnapshot),
    /// A live session that has already reached Completed, with its guess
    /// history and frozen elapsed time.
    LiveCompleted {
        live: &'a LiveSession,
        guesses: &'a [GuessRecord],
        elapsed_seconds: u64,
    },
}

/// Assemble the export document.
pub fn build_document(
    source: ExportSource<'_>,
    roster: &[RosterItem],
) -> Result<ExportDocument, DomainError> {
    let (summary, guesses) = match source {
        ExportSource::Snapshot(snapshot) => (
            ExportSummary {
                session_id: snapshot.session_id,
                title: snapshot.title.clone(),
                score: snapshot.score,
                correct_count: snapshot.correct_count,
                guess_count: snapshot.guess_count,
                total_items: snapshot.total_items,
                accuracy_pct: accuracy_pct(snapshot.correct_count, snapshot.guess_count),
                duration_seconds: snapshot.elapsed_seconds,
                started_at: snapshot.started_at,
            },
            snapshot.guesses.clone(),
        ),
        ExportSource::LiveCompleted {
            live,
            guesses,
            elapsed_seconds,
        } => {
            let session = match live {
                LiveSession::Completed(session) => session,
                _ => {
                    return Err(DomainError::state(
                        StateKind::NotCompleted,
                        "export requires a Completed session",
                    ))
                }
            };
            (
                ExportSummary {
                    session_id: session.id,
                    title: session.title.clone(),
                    score: session.score,
                    correct_count: session.correct_count,
                    guess_count: session.guess_count,
                    total_items: session.total_items,
                    accuracy_pct: accuracy_pct(session.correct_count, session.guess_count),
                    duration_seconds: elapsed_seconds,
                    started_at: session.started_at,
                },
                guesses.to_vec(),
            )
        }
    };

    Ok(ExportDocument {
        summary,
        guesses,
        roster: roster.to_vec(),
    })
}

/// Rounded guess accuracy, 0 when nothing was guessed. Capped at 100 so
/// contradictory server counters cannot truncate through the cast.
pub fn accuracy_pct(correct: u32, total_guesses: u32) -> u8 {
    if total_guesses == 0 {
        return 0;
    }
    let pct = (f64::from(correct) / f64::from(total_guesses) * 100.0).round();
    pct.min(100.0) as u8
}

/// MM:SS rendering of an elapsed duration, as shown in the play view.
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
