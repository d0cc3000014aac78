use time::OffsetDateTime;

use crate::domain::session::{LiveSession, Session, SessionStatus};
use crate::errors::domain::{DomainError, StateKind};
use crate::protocol::wire::GuessVerdict;

fn session() -> Session {
    Session {
        id: 11,
        title: "Cowboy Bebop".to_string(),
        total_items: 10,
        correct_count: 0,
        guess_count: 0,
        score: 0,
        started_at: OffsetDateTime::UNIX_EPOCH,
        cover_image: None,
        banner_image: None,
    }
}

#[test]
fn verdict_counters_are_copied_verbatim() {
    let mut s = session();
    let verdict = GuessVerdict {
        is_correct: true,
        matched_name: Some("Spike Spiegel".to_string()),
        correct_count: 4,
        total_guess_count: 9,
        score: 8,
        completed: false,
    };

    s.apply_verdict(&verdict);

    assert_eq!(s.correct_count, 4);
    assert_eq!(s.guess_count, 9);
    assert_eq!(s.score, 8);
}

#[test]
fn default_live_slot_is_idle() {
    let live = LiveSession::default();
    assert_eq!(live.status(), SessionStatus::Idle);
    assert!(live.session().is_none());
    assert!(!live.is_active());
}

#[test]
fn complete_flips_active_to_completed() {
    let mut live = LiveSession::Active(session());
    live.complete().unwrap();
    assert_eq!(live.status(), SessionStatus::Completed);
    assert_eq!(live.session().map(|s| s.id), Some(11));
}

#[test]
fn complete_rejects_idle() {
    let mut live = LiveSession::Idle;
    let err = live.complete().unwrap_err();
    assert!(matches!(
        err,
        DomainError::State {
            kind: StateKind::NoActiveSession,
            ..
        }
    ));
    assert_eq!(live.status(), SessionStatus::Idle);
}

#[test]
fn complete_is_not_reentrant() {
    let mut live = LiveSession::Completed(session());
    assert!(live.complete().is_err());
    // The slot keeps its session; the failed flip does not clobber it.
    assert_eq!(live.status(), SessionStatus::Completed);
    assert_eq!(live.session().map(|s| s.id), Some(11));
}
