use crate::application::ports::local_store::LocalStore;
use crate::application::services::connectivity_service::ConnectivityEvent;
use crate::application::services::sync_service::SyncEngine;
use crate::domain::entities::{DrainReport, Need, VerifyOutcome};
use crate::domain::value_objects::{NeedId, VolunteerId};
use crate::shared::error::AppError;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tracing::warn;

/// What the presentation layer renders.
#[derive(Debug, Clone, Serialize, Default)]
pub struct AppSnapshot {
    pub needs: Vec<Need>,
    pub loading: bool,
    pub is_online: bool,
    pub pending_count: u32,
}

/// Application state facade between the presentation layer and the sync
/// engine. Holds the session-scoped volunteer identity and the current
/// snapshot; the pending count is recomputed from the local store after
/// every verify/drain cycle rather than maintained incrementally.
#[derive(Clone)]
pub struct AppService {
    engine: SyncEngine,
    store: Arc<dyn LocalStore>,
    volunteer_id: VolunteerId,
    state: Arc<RwLock<AppSnapshot>>,
}

impl AppService {
    pub fn new(engine: SyncEngine, store: Arc<dyn LocalStore>) -> Self {
        Self {
            engine,
            store,
            // Generated once per session, never persisted across restarts.
            volunteer_id: VolunteerId::generate(),
            state: Arc::new(RwLock::new(AppSnapshot {
                loading: true,
                ..AppSnapshot::default()
            })),
        }
    }

    pub fn volunteer_id(&self) -> &VolunteerId {
        &self.volunteer_id
    }

    pub async fn snapshot(&self) -> AppSnapshot {
        self.state.read().await.clone()
    }

    /// Reload the need list (server truth when online, cache otherwise)
    /// and recompute the derived state.
    pub async fn refresh(&self) -> Vec<Need> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
        }
        let needs = self.engine.fetch_needs().await;
        self.publish(needs.clone(), false).await;
        needs
    }

    /// Verify a need on behalf of this session's volunteer. A queued
    /// outcome is a success from the caller's point of view; only a
    /// missing remote target surfaces as an error.
    pub async fn verify(
        &self,
        need_id: &NeedId,
        notes: Option<String>,
    ) -> Result<VerifyOutcome, AppError> {
        let result = self.engine.verify(need_id, &self.volunteer_id, notes).await;
        // Win or lose, the cached list and pending count may have moved.
        self.refresh().await;
        result
    }

    /// Drain the outbox, then refresh the visible list.
    pub async fn sync(&self) -> Result<DrainReport, AppError> {
        let report = self.engine.drain().await;
        self.refresh().await;
        report
    }

    /// Consume connectivity triggers for the lifetime of the session.
    pub fn spawn_event_loop(
        &self,
        mut events: mpsc::UnboundedReceiver<ConnectivityEvent>,
    ) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                service.handle_event(event).await;
            }
        })
    }

    pub async fn handle_event(&self, event: ConnectivityEvent) {
        {
            let mut state = self.state.write().await;
            state.is_online = self.engine.is_online();
        }
        if let Err(err) = self.engine.handle_event(event).await {
            warn!("Connectivity trigger {:?} failed: {}", event, err);
        }
        // The engine already reconciled the cache; mirror it into the
        // snapshot without another network round trip.
        let needs = match self.store.get_cached_needs().await {
            Ok(needs) => needs,
            Err(err) => {
                warn!("Could not read cached needs: {}", err);
                return;
            }
        };
        self.publish(needs, false).await;
    }

    async fn publish(&self, needs: Vec<Need>, loading: bool) {
        let pending_count = self.engine.pending_count().await.unwrap_or_else(|err| {
            warn!("Could not recompute pending count: {}", err);
            0
        });
        let mut state = self.state.write().await;
        state.needs = needs;
        state.loading = loading;
        state.is_online = self.engine.is_online();
        state.pending_count = pending_count;
    }
}
