use crate::domain::entities::{Need, NeedsOverview, SyncBatchOutcome, VerificationSubmission};
use crate::domain::value_objects::{NeedId, VolunteerId};
use crate::shared::error::AppError;
use async_trait::async_trait;
use thiserror::Error;

/// Failure taxonomy of the remote need store. No retries happen at this
/// layer; retry policy belongs to the sync engine, which treats a timeout
/// the same as unreachable.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Remote store unreachable: {0}")]
    Unreachable(String),

    #[error("Remote request timed out")]
    Timeout,

    #[error("Remote store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Need not found on the remote store")]
    NotFound,

    #[error("Remote store rejected the sync batch: {0}")]
    InvalidBatch(String),

    #[error("Remote response could not be decoded: {0}")]
    Decode(String),
}

impl RemoteError {
    /// True for failures where queueing the intent for a later drain is
    /// the right move.
    pub fn is_queueable(&self) -> bool {
        !matches!(self, RemoteError::NotFound | RemoteError::InvalidBatch(_))
    }
}

impl From<RemoteError> for AppError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::NotFound => AppError::NotFound("Need not found on remote store".into()),
            RemoteError::InvalidBatch(msg) => AppError::InvalidInput(msg),
            RemoteError::Decode(msg) => AppError::DeserializationError(msg),
            other => AppError::Network(other.to_string()),
        }
    }
}

/// Thin typed wrapper over the remote need store's HTTP surface. Owns no
/// state, only transport.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// `GET /needs/unverified`
    async fn fetch_unverified_needs(&self) -> Result<Vec<Need>, RemoteError>;

    /// `GET /needs` — full list plus statistics for the dashboard.
    async fn fetch_needs_overview(&self) -> Result<NeedsOverview, RemoteError>;

    /// `GET /needs/{id}`
    async fn fetch_need(&self, id: &NeedId) -> Result<Need, RemoteError>;

    /// `PUT /needs/{id}/verify`
    async fn verify_need(
        &self,
        id: &NeedId,
        volunteer_id: &VolunteerId,
        notes: Option<&str>,
    ) -> Result<Need, RemoteError>;

    /// `POST /needs/sync` — the whole batch in one round trip.
    async fn sync_verifications(
        &self,
        batch: &[VerificationSubmission],
    ) -> Result<SyncBatchOutcome, RemoteError>;
}
