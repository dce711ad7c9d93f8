use crate::domain::entities::{Need, NeedPatch, PendingVerification, PendingVerificationDraft};
use crate::domain::value_objects::{LocalQueueId, NeedId};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Durable on-device persistence: the cached need snapshot plus the
/// outbox of pending verification intents. The sync engine owns the
/// decision of when to read and write; implementations own nothing but
/// storage.
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Current cached snapshot, possibly empty.
    async fn get_cached_needs(&self) -> Result<Vec<Need>, AppError>;

    /// Atomically clear and repopulate the cache. Used only after a
    /// successful authoritative fetch.
    async fn replace_cached_needs(&self, needs: &[Need]) -> Result<(), AppError>;

    /// Merge fields into the cached record if present; no-op when the id
    /// is absent. Never fabricates a record from a partial patch.
    async fn patch_cached_need(&self, id: &NeedId, patch: NeedPatch) -> Result<(), AppError>;

    /// Append an unsynced intent to the outbox. Whole-operation
    /// atomicity; an existing entry is never overwritten.
    async fn enqueue_verification(
        &self,
        draft: PendingVerificationDraft,
    ) -> Result<LocalQueueId, AppError>;

    /// All entries with `synced = false`, in enqueue order (local id
    /// ascending) for deterministic replay.
    async fn list_unsynced_verifications(&self) -> Result<Vec<PendingVerification>, AppError>;

    /// Number of unsynced outbox entries.
    async fn count_unsynced(&self) -> Result<u32, AppError>;

    /// Idempotent: marking an already-synced or absent entry is a no-op.
    async fn mark_synced(&self, local_id: LocalQueueId) -> Result<(), AppError>;

    /// Wipe both collections. Explicit reset and tests only, never the
    /// normal flow.
    async fn clear_all(&self) -> Result<(), AppError>;
}
