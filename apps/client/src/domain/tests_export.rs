use time::OffsetDateTime;

use crate::domain::export::{
    accuracy_pct, build_document, format_duration, ExportDocument, ExportSource,
};
use crate::domain::roster::{CastRole, RosterItem};
use crate::domain::session::{GuessRecord, LiveSession, Session};
use crate::domain::snapshot::SessionSnapshot;
use crate::errors::domain::{DomainError, StateKind};

fn session() -> Session {
    Session {
        id: 3,
        title: "Mushishi".to_string(),
        total_items: 4,
        correct_count: 3,
        guess_count: 6,
        score: 5,
        started_at: OffsetDateTime::UNIX_EPOCH,
        cover_image: None,
        banner_image: None,
    }
}

fn guesses() -> Vec<GuessRecord> {
    ["ginko", "adashino", "nui"]
        .iter()
        .map(|text| GuessRecord {
            text: (*text).to_string(),
            is_correct: true,
            matched_name: Some((*text).to_string()),
            submitted_at: OffsetDateTime::UNIX_EPOCH,
        })
        .collect()
}

fn roster() -> Vec<RosterItem> {
    (1..=4)
        .map(|id| RosterItem {
            id,
            name: format!("Item {id}"),
            image: None,
            role: CastRole::Main,
            was_guessed: id <= 3,
        })
        .collect()
}

#[test]
fn snapshot_and_live_sources_build_the_same_document() {
    let history = guesses();
    let snapshot = SessionSnapshot::freeze(&session(), &history, 120);
    let live = LiveSession::Completed(session());

    let from_snapshot = build_document(ExportSource::Snapshot(&snapshot), &roster()).unwrap();
    let from_live = build_document(
        ExportSource::LiveCompleted {
            live: &live,
            guesses: &history,
            elapsed_seconds: 120,
        },
        &roster(),
    )
    .unwrap();

    assert_eq!(from_snapshot, from_live);
    assert_eq!(from_snapshot.summary.duration_seconds, 120);
    assert_eq!(from_snapshot.summary.accuracy_pct, 50);
    assert_eq!(from_snapshot.guesses.len(), 3);
    assert_eq!(from_snapshot.roster.len(), 4);
}

#[test]
fn live_source_must_be_completed() {
    let history = guesses();
    let live = LiveSession::Active(session());
    let err = build_document(
        ExportSource::LiveCompleted {
            live: &live,
            guesses: &history,
            elapsed_seconds: 0,
        },
        &[],
    )
    .unwrap_err();

    assert!(matches!(
        err,
        DomainError::State {
            kind: StateKind::NotCompleted,
            ..
        }
    ));
}

#[test]
fn document_round_trips_through_json_in_order() {
    let history = guesses();
    let snapshot = SessionSnapshot::freeze(&session(), &history, 120);
    let document = build_document(ExportSource::Snapshot(&snapshot), &roster()).unwrap();

    let bytes = serde_json::to_vec(&document).unwrap();
    let decoded: ExportDocument = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(decoded, document);
    let texts: Vec<&str> = decoded.guesses.iter().map(|g| g.text.as_str()).collect();
    assert_eq!(texts, vec!["ginko", "adashino", "nui"]);
}

#[test]
fn accuracy_is_rounded_and_safe_on_zero() {
    assert_eq!(accuracy_pct(0, 0), 0);
    assert_eq!(accuracy_pct(1, 3), 33);
    assert_eq!(accuracy_pct(2, 3), 67);
    assert_eq!(accuracy_pct(5, 5), 100);
}

#[test]
fn accuracy_caps_at_one_hundred_on_contradictory_counters() {
    // correct > total can only come from a misbehaving server; the value
    // must saturate, not truncate through the u8 cast.
    assert_eq!(accuracy_pct(7, 5), 100);
    assert_eq!(accuracy_pct(1000, 1), 100);
}

#[test]
fn duration_renders_as_minutes_and_seconds() {
    assert_eq!(format_duration(0), "00:00");
    assert_eq!(format_duration(65), "01:05");
    assert_eq!(format_duration(754), "12:34");
}
