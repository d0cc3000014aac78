//! Export packaging for completed sessions.

use std::sync::Arc;

use crate::domain::export::{build_document, ExportDocument, ExportSource};
use crate::domain::roster::RosterItem;
use crate::errors::domain::{DomainError, TransportKind};
use crate::transport::SessionTransport;

pub struct ExportCoordinator {
    transport: Arc<dyn SessionTransport>,
}

impl ExportCoordinator {
    pub fn new(transport: Arc<dyn SessionTransport>) -> Self {
        Self { transport }
    }

    /// Package a completed play-through and its already-fetched roster into
    /// a portable document. No network call is made.
    pub fn build(
        source: ExportSource<'_>,
        roster: &[RosterItem],
    ) -> Result<ExportDocument, DomainError> {
        build_document(source, roster)
    }

    /// Render the document as pretty-printed JSON bytes for download.
    pub fn to_json(document: &ExportDocument) -> Result<Vec<u8>, DomainError> {
        serde_json::to_vec_pretty(document)
            .map_err(|e| DomainError::transport(TransportKind::Decode, e.to_string()))
    }

    /// Fetch the server-rendered export for a historical session.
    pub async fn download(&self, session_id: i64) -> Result<Vec<u8>, DomainError> {
        self.transport.export_session(session_id).await
    }
}
