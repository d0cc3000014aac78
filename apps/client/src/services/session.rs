//! Session lifecycle orchestration: start, guess, end, reset.
//!
//! One `SessionService` instance owns the whole lifecycle for a client
//! context: the live tagged-union slot, the guess history, the one-shot
//! completion snapshot, and the timer. Commands are processed sequentially
//! through `&mut self`, which is also what gives mutating calls their
//! single-flight discipline: a caller cannot overlap `start`/`guess`/`end`
//! on the same service.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::domain::session::{GuessRecord, LiveSession, Session, SessionStatus};
use crate::domain::snapshot::SessionSnapshot;
use crate::domain::transition::{view_still_relevant, SessionLifecycleView};
use crate::errors::domain::{DomainError, StateKind, ValidationKind};
use crate::protocol::wire::{GuessVerdict, SessionStateResponse};
use crate::services::timer::{spawn_ticker, ElapsedTimeTracker, TickerHandle};
use crate::transport::SessionTransport;

const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Display metadata supplied by the catalog screen at start time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartMeta {
    pub title: String,
    pub cover_image: Option<String>,
    pub banner_image: Option<String>,
}

/// What one accepted guess produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub record: GuessRecord,
    /// True when this verdict finished the session.
    pub completed: bool,
}

pub struct SessionService {
    transport: Arc<dyn SessionTransport>,
    clock: Arc<dyn Clock>,
    live: LiveSession,
    guesses: Vec<GuessRecord>,
    last_snapshot: Option<SessionSnapshot>,
    timer: ElapsedTimeTracker,
    ticker: Option<TickerHandle>,
    tick_period: Duration,
}

impl SessionService {
    pub fn new(transport: Arc<dyn SessionTransport>, clock: Arc<dyn Clock>) -> Self {
        Self {
            transport,
            timer: ElapsedTimeTracker::new(clock.clone()),
            clock,
            live: LiveSession::Idle,
            guesses: Vec::new(),
            last_snapshot: None,
            ticker: None,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }

    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// Begin a play-through against one content set.
    ///
    /// An Active predecessor is ended first (exactly one `end` call, with
    /// its snapshot frozen) before the new start response is applied; a
    /// Completed predecessor is discarded locally with `reset` semantics.
    /// On any transport failure the prior state is left as it was.
    pub async fn start(&mut self, content_id: i64, meta: StartMeta) -> Result<Session, DomainError> {
        if content_id <= 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidContentId,
                "content id must be positive",
            ));
        }
        if meta.title.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::MissingTitle,
                "a content title is required",
            ));
        }

        match self.live {
            LiveSession::Active(_) => {
                info!("implicitly ending the active session before a new start");
                self.end_active().await?;
            }
            LiveSession::Completed(_) => self.reset(),
            LiveSession::Idle => {}
        }

        let response = self.transport.start_session(content_id, &meta.title).await?;
        let started_at = self.clock.now();

        let session = Session {
            id: response.session_id,
            title: response.title,
            total_items: response.total_items,
            correct_count: 0,
            guess_count: 0,
            score: 0,
            started_at,
            cover_image: meta.cover_image,
            banner_image: meta.banner_image,
        };

        info!(
            session_id = session.id,
            total_items = session.total_items,
            "session started"
        );

        self.live = LiveSession::Active(session.clone());
        self.guesses.clear();
        self.timer.start_at(started_at);
        self.ticker = Some(spawn_ticker(
            self.clock.clone(),
            started_at,
            self.tick_period,
        ));

        Ok(session)
    }

    /// Submit one guess. Empty or whitespace-only text is rejected locally
    /// with no transport call and no state change.
    pub async fn guess(&mut self, text: &str) -> Result<GuessOutcome, DomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyGuess,
                "guess text is empty",
            ));
        }
        if !self.live.is_active() {
            return Err(DomainError::state(
                StateKind::NoActiveSession,
                "guess requires an Active session",
            ));
        }

        let verdict = self.transport.submit_guess(trimmed).await?;
        self.merge_verdict(trimmed, &verdict)
    }

    /// Explicit termination. Idempotent: when the session is already
    /// Completed, the existing snapshot is returned without a network call.
    pub async fn end(&mut self) -> Result<SessionSnapshot, DomainError> {
        match self.live {
            LiveSession::Idle => Err(DomainError::state(
                StateKind::NoActiveSession,
                "end requires a session",
            )),
            LiveSession::Completed(_) => self.take_snapshot_once(),
            LiveSession::Active(_) => self.end_active().await,
        }
    }

    /// Local-only: clear the live slot back to Idle defaults. Performs no
    /// network call and leaves a previously taken snapshot untouched.
    pub fn reset(&mut self) {
        self.stop_ticker();
        self.timer.clear();
        self.live = LiveSession::Idle;
        self.guesses.clear();
        debug!("session reset to idle");
    }

    // --- accessors -------------------------------------------------------

    pub fn status(&self) -> SessionStatus {
        self.live.status()
    }

    pub fn session(&self) -> Option<&Session> {
        self.live.session()
    }

    pub fn live(&self) -> &LiveSession {
        &self.live
    }

    /// Guess history of the live session, in submission order.
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// The frozen snapshot of the most recently completed session, if any.
    pub fn last_snapshot(&self) -> Option<&SessionSnapshot> {
        self.last_snapshot.as_ref()
    }

    pub fn has_active_session(&self) -> bool {
        self.live.is_active()
    }

    /// Elapsed seconds for display: live timer while Active, frozen value
    /// after completion.
    pub fn elapsed_seconds(&self) -> u64 {
        self.timer.elapsed_seconds()
    }

    /// Receiver of periodic elapsed-seconds updates while Active.
    pub fn tick_receiver(&self) -> Option<watch::Receiver<u64>> {
        self.ticker.as_ref().map(TickerHandle::subscribe)
    }

    pub fn lifecycle_view(&self) -> SessionLifecycleView {
        SessionLifecycleView {
            status: self.live.status(),
            session_id: self.live.session().map(|s| s.id),
            snapshot_pending: self.last_snapshot.is_some(),
        }
    }

    /// Navigation guard for the session screens.
    pub fn results_relevant(&self) -> bool {
        view_still_relevant(&self.lifecycle_view())
    }

    /// Ask the server which play-through it considers live for this client
    /// context. Read-only; a freshly constructed service can use this to
    /// discover a session that survived a reload.
    pub async fn remote_state(&self) -> Result<SessionStateResponse, DomainError> {
        self.transport.fetch_state().await
    }

    // --- internals -------------------------------------------------------

    async fn end_active(&mut self) -> Result<SessionSnapshot, DomainError> {
        let response = self.transport.end_session().await?;
        self.complete_live(Some(response.final_score))
    }

    /// Flip Active → Completed: freeze the timer, stop the ticker, merge the
    /// final score when the server supplied one, and take the snapshot.
    fn complete_live(&mut self, final_score: Option<i32>) -> Result<SessionSnapshot, DomainError> {
        self.live.complete()?;
        self.timer.freeze();
        self.stop_ticker();
        if let (Some(score), Some(session)) = (final_score, self.live.session_mut()) {
            session.score = score;
        }
        let snapshot = self.take_snapshot_once()?;
        info!(
            session_id = snapshot.session_id,
            score = snapshot.score,
            elapsed_seconds = snapshot.elapsed_seconds,
            "session completed"
        );
        Ok(snapshot)
    }

    /// Merge a server verdict into the live state.
    ///
    /// A verdict that arrives after the session already flipped to Completed
    /// (its submission overtaken by the terminating call) is applied to the
    /// live slot only; the snapshot guard keeps it out of the results view.
    fn merge_verdict(
        &mut self,
        text: &str,
        verdict: &GuessVerdict,
    ) -> Result<GuessOutcome, DomainError> {
        let record = GuessRecord {
            text: text.to_string(),
            is_correct: verdict.is_correct,
            matched_name: verdict.matched_name.clone(),
            submitted_at: self.clock.now(),
        };

        match self.live.session_mut() {
            Some(session) => session.apply_verdict(verdict),
            None => {
                return Err(DomainError::state(
                    StateKind::NoActiveSession,
                    "verdict received with no session",
                ))
            }
        }
        self.guesses.push(record.clone());

        if verdict.completed {
            if self.live.is_active() {
                self.complete_live(None)?;
            } else {
                warn!("late verdict observed after completion; snapshot left untouched");
            }
        }

        Ok(GuessOutcome {
            record,
            completed: verdict.completed,
        })
    }

    /// Exactly-once snapshot per session id. Re-entry for the same id hands
    /// back the existing copy untouched.
    fn take_snapshot_once(&mut self) -> Result<SessionSnapshot, DomainError> {
        let session = match &self.live {
            LiveSession::Completed(session) => session,
            _ => {
                return Err(DomainError::state(
                    StateKind::NotCompleted,
                    "snapshot requires a Completed session",
                ))
            }
        };

        if let Some(existing) = &self.last_snapshot {
            if existing.session_id == session.id {
                return Ok(existing.clone());
            }
        }

        let snapshot = SessionSnapshot::freeze(session, &self.guesses, self.timer.elapsed_seconds());
        self.last_snapshot = Some(snapshot.clone());
        Ok(snapshot)
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
