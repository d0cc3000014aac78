//! Builders for test data.

use std::sync::Arc;

use client::clock::ManualClock;
use client::domain::roster::CastRole;
use client::protocol::wire::{GuessVerdict, RosterEntry, SessionSummary};
use client::services::session::{SessionService, StartMeta};
use time::macros::datetime;

use super::fake_transport::FakeTransport;

pub fn meta(title: &str) -> StartMeta {
    StartMeta {
        title: title.to_string(),
        cover_image: None,
        banner_image: None,
    }
}

/// A correct, non-completing verdict with explicit running counters.
pub fn correct(name: &str, correct_count: u32, total_guess_count: u32, score: i32) -> GuessVerdict {
    GuessVerdict {
        is_correct: true,
        matched_name: Some(name.to_string()),
        correct_count,
        total_guess_count,
        score,
        completed: false,
    }
}

/// An incorrect verdict with explicit running counters.
pub fn wrong(correct_count: u32, total_guess_count: u32, score: i32) -> GuessVerdict {
    GuessVerdict {
        is_correct: false,
        matched_name: None,
        correct_count,
        total_guess_count,
        score,
        completed: false,
    }
}

pub fn completing(verdict: GuessVerdict) -> GuessVerdict {
    GuessVerdict {
        completed: true,
        ..verdict
    }
}

pub fn roster_entry(id: i64, name: &str, was_guessed: bool) -> RosterEntry {
    RosterEntry {
        id,
        name: name.to_string(),
        image: None,
        role: if id % 2 == 0 {
            CastRole::Supporting
        } else {
            CastRole::Main
        },
        was_guessed,
    }
}

pub fn summary(id: i64, title: &str, score: i32) -> SessionSummary {
    SessionSummary {
        id,
        title: title.to_string(),
        started_at: datetime!(2024-05-01 12:00 UTC),
        ended_at: Some(datetime!(2024-05-01 12:03:20 UTC)),
        total_guess_count: 9,
        correct_count: 7,
        total_items: 10,
        score,
        completed: true,
        duration_seconds: Some(200),
    }
}

/// A service wired to a fresh fake transport and a manual clock, with the
/// pieces handed back for scripting and assertions.
pub fn service(total_items: u32) -> (SessionService, Arc<FakeTransport>, ManualClock) {
    let transport = Arc::new(FakeTransport::new(total_items));
    let clock = ManualClock::at_epoch();
    let service = SessionService::new(transport.clone(), Arc::new(clock.clone()));
    (service, transport, clock)
}
