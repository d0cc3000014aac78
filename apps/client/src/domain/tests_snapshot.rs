use time::OffsetDateTime;

use crate::domain::session::{GuessRecord, Session};
use crate::domain::snapshot::SessionSnapshot;

fn session() -> Session {
    Session {
        id: 7,
        title: "Trigun".to_string(),
        total_items: 5,
        correct_count: 2,
        guess_count: 6,
        score: 4,
        started_at: OffsetDateTime::UNIX_EPOCH,
        cover_image: Some("cover.png".to_string()),
        banner_image: None,
    }
}

fn record(text: &str, correct: bool) -> GuessRecord {
    GuessRecord {
        text: text.to_string(),
        is_correct: correct,
        matched_name: correct.then(|| text.to_string()),
        submitted_at: OffsetDateTime::UNIX_EPOCH,
    }
}

#[test]
fn freeze_copies_session_and_history() {
    let guesses = vec![record("vash", true), record("knives", false)];
    let snapshot = SessionSnapshot::freeze(&session(), &guesses, 93);

    assert_eq!(snapshot.session_id, 7);
    assert_eq!(snapshot.title, "Trigun");
    assert_eq!(snapshot.total_items, 5);
    assert_eq!(snapshot.correct_count, 2);
    assert_eq!(snapshot.guess_count, 6);
    assert_eq!(snapshot.score, 4);
    assert_eq!(snapshot.elapsed_seconds, 93);
    assert_eq!(snapshot.cover_image.as_deref(), Some("cover.png"));
    assert_eq!(snapshot.guesses, guesses);
}

#[test]
fn snapshot_is_independent_of_later_mutation() {
    let mut live = session();
    let mut guesses = vec![record("vash", true)];
    let snapshot = SessionSnapshot::freeze(&live, &guesses, 10);

    live.score = 999;
    guesses.push(record("meryl", true));
    guesses.clear();

    assert_eq!(snapshot.score, 4);
    assert_eq!(snapshot.guesses.len(), 1);
    assert_eq!(snapshot.elapsed_seconds, 10);
}
