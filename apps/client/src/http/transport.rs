//! `reqwest`-backed transport.
//!
//! The server scopes the live play-through to its session cookie, so the
//! client carries a cookie store and game mutation endpoints take no id.
//! Status mapping keeps the caller-facing taxonomy intact: 400 means the
//! server judged the call out-of-phase, 404 means the resource is unknown,
//! everything else non-success is a transport failure.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::domain::{DomainError, NotFoundKind, StateKind, TransportKind};
use crate::protocol::wire::{
    EndSessionResponse, ErrorBody, GuessRequest, GuessVerdict, LeaderboardEntry, RosterEntry,
    SessionHistory, SessionStateResponse, SessionSummary, StartSessionRequest,
    StartSessionResponse,
};
use crate::transport::SessionTransport;

pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                DomainError::transport(
                    TransportKind::Other("client build".to_string()),
                    e.to_string(),
                )
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(request_error)?;
        decode_json(check_status(response).await?).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, DomainError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(request_error)?;
        decode_json(check_status(response).await?).await
    }
}

#[async_trait]
impl SessionTransport for HttpTransport {
    async fn start_session(
        &self,
        content_id: i64,
        title: &str,
    ) -> Result<StartSessionResponse, DomainError> {
        debug!(content_id, title, "starting session");
        let request = StartSessionRequest {
            content_id,
            title: title.to_string(),
        };
        self.post_json("/session/start", &request).await
    }

    async fn submit_guess(&self, text: &str) -> Result<GuessVerdict, DomainError> {
        let request = GuessRequest {
            guess: text.to_string(),
        };
        self.post_json("/session/guess", &request).await
    }

    async fn end_session(&self) -> Result<EndSessionResponse, DomainError> {
        debug!("ending session");
        self.post_json("/session/end", &()).await
    }

    async fn fetch_state(&self) -> Result<SessionStateResponse, DomainError> {
        self.get_json("/session/state").await
    }

    async fn fetch_roster(&self, session_id: i64) -> Result<Vec<RosterEntry>, DomainError> {
        self.get_json(&format!("/session/{session_id}/roster")).await
    }

    async fn fetch_sessions(&self) -> Result<Vec<SessionSummary>, DomainError> {
        self.get_json("/sessions").await
    }

    async fn fetch_session(&self, session_id: i64) -> Result<SessionHistory, DomainError> {
        self.get_json(&format!("/session/{session_id}")).await
    }

    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, DomainError> {
        self.get_json("/leaderboard").await
    }

    async fn export_session(&self, session_id: i64) -> Result<Vec<u8>, DomainError> {
        let response = self
            .http
            .get(self.url(&format!("/session/{session_id}/export")))
            .send()
            .await
            .map_err(request_error)?;
        let response = check_status(response).await?;
        let bytes = response.bytes().await.map_err(request_error)?;
        Ok(bytes.to_vec())
    }
}

/// Map a non-success response into the domain taxonomy, pulling the server's
/// `{"error": ...}` detail when it has one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| status.to_string());

    Err(match status.as_u16() {
        400 => DomainError::state(StateKind::ServerRejected, detail),
        404 => DomainError::not_found(NotFoundKind::Session, detail),
        code => DomainError::transport(TransportKind::Server(code), detail),
    })
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, DomainError> {
    response
        .json::<T>()
        .await
        .map_err(|e| DomainError::transport(TransportKind::Decode, e.to_string()))
}

fn request_error(e: reqwest::Error) -> DomainError {
    let kind = if e.is_timeout() {
        TransportKind::Timeout
    } else if e.is_connect() {
        TransportKind::Connect
    } else if e.is_decode() {
        TransportKind::Decode
    } else {
        TransportKind::Other("request".to_string())
    };
    DomainError::transport(kind, e.to_string())
}
