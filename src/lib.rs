pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::ports::local_store::LocalStore;
pub use application::ports::remote_client::{RemoteClient, RemoteError};
pub use application::services::{
    AppService, AppSnapshot, ConnectivityEvent, ConnectivityMonitor, EngineStatus, SyncEngine,
};
pub use domain::entities::{
    DrainReport, Need, NeedPatch, NeedsOverview, PendingVerification, VerifyOutcome,
};
pub use domain::value_objects::{
    LocalQueueId, NeedId, NeedStatus, NeedType, Urgency, VerificationState, VolunteerId,
};
pub use shared::{AppConfig, AppError};

use crate::infrastructure::database::Database;
use crate::infrastructure::offline::SqliteLocalStore;
use crate::infrastructure::remote::HttpRemoteClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// The wired-up session: the state facade for the presentation layer and
/// the monitor the host environment feeds connectivity edges into.
pub struct AppHandles {
    pub app: AppService,
    pub monitor: ConnectivityMonitor,
}

/// Wire the full stack: SQLite local store, HTTP remote client, sync
/// engine, connectivity monitor and state facade. The event loop and the
/// periodic ticker (when auto-sync is on) run detached for the lifetime
/// of the session; teardown simply abandons them — any unconfirmed
/// intent survives in durable storage for the next session to drain.
pub async fn bootstrap(config: AppConfig) -> Result<AppHandles, AppError> {
    info!("Starting reliefsync session...");

    let pool = Database::initialize(&config.database.url).await?;
    let store: Arc<dyn LocalStore> = Arc::new(SqliteLocalStore::new(pool));
    let remote: Arc<dyn RemoteClient> = Arc::new(HttpRemoteClient::new(&config.remote)?);

    // Sessions start offline until the host reports otherwise.
    let (monitor, events) = ConnectivityMonitor::new(
        false,
        Duration::from_secs(config.sync.refresh_interval_secs),
    );
    let engine = SyncEngine::new(store.clone(), remote, monitor.online_flag());
    let app = AppService::new(engine, store);

    app.spawn_event_loop(events);
    if config.sync.auto_sync {
        monitor.spawn_ticker();
    }

    Ok(AppHandles { app, monitor })
}

pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reliefsync=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
