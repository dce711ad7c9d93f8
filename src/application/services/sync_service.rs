use crate::application::ports::local_store::LocalStore;
use crate::application::ports::remote_client::{RemoteClient, RemoteError};
use crate::application::services::connectivity_service::{ConnectivityEvent, OnlineFlag};
use crate::domain::entities::{
    DrainReport, Need, NeedPatch, PendingVerificationDraft, VerificationSubmission, VerifyOutcome,
};
use crate::domain::value_objects::{NeedId, VolunteerId};
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct EngineStatus {
    pub is_draining: bool,
    pub last_drain_at: Option<DateTime<Utc>>,
    pub drain_errors: u32,
}

/// The offline-first verification sync engine. Decides the online or
/// offline path on verify, drains the outbox against the remote store,
/// and keeps the cached need list consistent with both local edits and
/// server truth. The remote store is authoritative; the local store is a
/// cache plus an outbox.
#[derive(Clone)]
pub struct SyncEngine {
    store: Arc<dyn LocalStore>,
    remote: Arc<dyn RemoteClient>,
    online: Arc<OnlineFlag>,
    status: Arc<RwLock<EngineStatus>>,
}

impl SyncEngine {
    pub fn new(
        store: Arc<dyn LocalStore>,
        remote: Arc<dyn RemoteClient>,
        online: Arc<OnlineFlag>,
    ) -> Self {
        Self {
            store,
            remote,
            online,
            status: Arc::new(RwLock::new(EngineStatus::default())),
        }
    }

    pub fn is_online(&self) -> bool {
        self.online.is_online()
    }

    pub async fn status(&self) -> EngineStatus {
        self.status.read().await.clone()
    }

    pub async fn pending_count(&self) -> Result<u32, AppError> {
        self.store.count_unsynced().await
    }

    /// Verify a need. The cached record is patched before any network
    /// I/O so the caller's next read already shows the verification.
    /// A remote failure (other than a missing target) degrades to a
    /// durable queued intent, reported as `QueuedOffline` rather than an
    /// error.
    pub async fn verify(
        &self,
        need_id: &NeedId,
        volunteer_id: &VolunteerId,
        notes: Option<String>,
    ) -> Result<VerifyOutcome, AppError> {
        let verified_at = Utc::now();
        let patch = NeedPatch::verification(volunteer_id.clone(), verified_at, notes.clone());
        self.store.patch_cached_need(need_id, patch).await?;

        if !self.online.is_online() {
            let local_id = self
                .enqueue(need_id, volunteer_id, notes, verified_at)
                .await?;
            debug!("Verification for need {} queued offline", need_id);
            return Ok(VerifyOutcome::QueuedOffline { local_id });
        }

        let result = self
            .remote
            .verify_need(need_id, volunteer_id, notes.as_deref())
            .await;
        match result {
            Ok(need) => Ok(VerifyOutcome::Confirmed(need)),
            Err(err) if !err.is_queueable() => {
                warn!("Verification of need {} rejected outright: {}", need_id, err);
                Err(err.into())
            }
            Err(err) => {
                warn!(
                    "Verification of need {} failed ({}); queueing for later sync",
                    need_id, err
                );
                let local_id = self
                    .enqueue(need_id, volunteer_id, notes, verified_at)
                    .await?;
                Ok(VerifyOutcome::QueuedOffline { local_id })
            }
        }
    }

    /// Drain the outbox: submit every unsynced intent in one batch, in
    /// enqueue order. Mutually exclusive with itself; a trigger while a
    /// drain is in flight is dropped, never interleaved. Only items the
    /// remote positively accepted are marked synced — a per-item
    /// rejection stays queued for the next drain.
    pub async fn drain(&self) -> Result<DrainReport, AppError> {
        {
            let mut status = self.status.write().await;
            if status.is_draining {
                drop(status);
                debug!("Drain already in flight; dropping trigger");
                let pending = self.store.count_unsynced().await.unwrap_or(0);
                return Ok(DrainReport::skipped(pending));
            }
            status.is_draining = true;
        }

        let result = self.drain_inner().await;

        let mut status = self.status.write().await;
        status.is_draining = false;
        match &result {
            Ok(report) if !report.skipped => {
                status.last_drain_at = Some(Utc::now());
            }
            Err(_) => {
                status.drain_errors += 1;
            }
            _ => {}
        }
        result
    }

    async fn drain_inner(&self) -> Result<DrainReport, AppError> {
        let pending = self.store.list_unsynced_verifications().await?;
        if pending.is_empty() {
            return Ok(DrainReport::empty());
        }

        let batch: Vec<VerificationSubmission> = pending
            .iter()
            .map(|entry| VerificationSubmission {
                need_id: entry.need_id.clone(),
                volunteer_id: entry.volunteer_id.clone(),
                notes: entry.notes.clone(),
                verified_at: entry.verified_at,
            })
            .collect();

        let outcome = self
            .remote
            .sync_verifications(&batch)
            .await
            .map_err(|err: RemoteError| {
                warn!("Drain failed before any item was accepted: {}", err);
                AppError::from(err)
            })?;

        let mut accepted = 0u32;
        let mut rejected = 0u32;
        for (idx, entry) in pending.iter().enumerate() {
            // Results come back in submission order; fall back to an id
            // lookup if the remote reordered them.
            let item = outcome
                .results
                .get(idx)
                .filter(|r| r.need_id == entry.need_id)
                .or_else(|| outcome.results.iter().find(|r| r.need_id == entry.need_id));
            match item {
                Some(result) if result.success => {
                    self.store.mark_synced(entry.local_id).await?;
                    accepted += 1;
                }
                Some(result) => {
                    warn!(
                        "Remote rejected verification of need {}: {}; keeping it queued",
                        entry.need_id,
                        result.error.as_deref().unwrap_or("no reason given")
                    );
                    rejected += 1;
                }
                None => {
                    warn!(
                        "Remote reported no result for need {}; keeping it queued",
                        entry.need_id
                    );
                    rejected += 1;
                }
            }
        }

        if accepted > 0 {
            // Reflect server-confirmed state; a failure here degrades to
            // the stale cache and the next tick retries.
            let _ = self.fetch_needs().await;
        }

        let pending_remaining = self.store.count_unsynced().await?;
        info!(
            "Drained outbox: {} submitted, {} accepted, {} rejected, {} remaining",
            pending.len(),
            accepted,
            rejected,
            pending_remaining
        );

        Ok(DrainReport {
            submitted: pending.len() as u32,
            accepted,
            rejected,
            pending_remaining,
            skipped: false,
        })
    }

    /// Read the need list. Never a hard failure: offline or on any remote
    /// error this degrades to the cached snapshot.
    pub async fn fetch_needs(&self) -> Vec<Need> {
        if !self.online.is_online() {
            return self.cached_or_empty().await;
        }
        match self.remote.fetch_unverified_needs().await {
            Ok(needs) => {
                if let Err(err) = self.store.replace_cached_needs(&needs).await {
                    warn!("Failed to refresh the local cache: {}", err);
                }
                needs
            }
            Err(err) => {
                warn!("Fetch failed ({}); serving cached needs", err);
                self.cached_or_empty().await
            }
        }
    }

    /// Connectivity triggers: coming online drains the outbox and then
    /// refreshes; a tick refreshes only; going offline changes nothing
    /// here (the shared flag already flipped).
    pub async fn handle_event(&self, event: ConnectivityEvent) -> Result<(), AppError> {
        match event {
            ConnectivityEvent::CameOnline => {
                let report = self.drain().await?;
                if report.skipped {
                    return Ok(());
                }
                self.fetch_needs().await;
                Ok(())
            }
            ConnectivityEvent::Tick => {
                if !self.online.is_online() {
                    return Ok(());
                }
                // A queue left over from a previous session would never
                // see an offline-to-online edge; the timer picks it up.
                if self.store.count_unsynced().await.unwrap_or(0) > 0 {
                    if let Err(err) = self.drain().await {
                        warn!("Periodic drain failed: {}", err);
                    }
                }
                self.fetch_needs().await;
                Ok(())
            }
            ConnectivityEvent::WentOffline => Ok(()),
        }
    }

    async fn enqueue(
        &self,
        need_id: &NeedId,
        volunteer_id: &VolunteerId,
        notes: Option<String>,
        verified_at: DateTime<Utc>,
    ) -> Result<crate::domain::value_objects::LocalQueueId, AppError> {
        self.store
            .enqueue_verification(PendingVerificationDraft::new(
                need_id.clone(),
                volunteer_id.clone(),
                notes,
                verified_at,
            ))
            .await
    }

    async fn cached_or_empty(&self) -> Vec<Need> {
        match self.store.get_cached_needs().await {
            Ok(needs) => needs,
            Err(err) => {
                warn!("Local cache unavailable ({}); serving empty list", err);
                Vec::new()
            }
        }
    }
}
