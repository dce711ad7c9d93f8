use async_trait::async_trait;
use chrono::Utc;
use reliefsync::application::services::{ConnectivityEvent, ConnectivityMonitor, SyncEngine};
use reliefsync::domain::entities::{
    Need, NeedsOverview, SubmissionResult, SyncBatchOutcome, VerificationSubmission,
};
use reliefsync::domain::value_objects::{NeedId, NeedStatus, NeedType, Urgency, VolunteerId};
use reliefsync::infrastructure::database::Database;
use reliefsync::infrastructure::offline::SqliteLocalStore;
use reliefsync::{AppService, RemoteClient, RemoteError};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Recording stand-in for the remote need store.
pub struct MockRemote {
    served_needs: Mutex<Vec<Need>>,
    network_down: Mutex<bool>,
    batch_calls: Mutex<Vec<Vec<VerificationSubmission>>>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self {
            served_needs: Mutex::new(Vec::new()),
            network_down: Mutex::new(false),
            batch_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn serve(&self, needs: Vec<Need>) {
        *self.served_needs.lock().unwrap() = needs;
    }

    /// Simulate a remote that accepts nothing: every call fails as
    /// unreachable.
    pub fn take_network_down(&self, down: bool) {
        *self.network_down.lock().unwrap() = down;
    }

    pub fn batch_calls(&self) -> Vec<Vec<VerificationSubmission>> {
        self.batch_calls.lock().unwrap().clone()
    }

    fn check_network(&self) -> Result<(), RemoteError> {
        if *self.network_down.lock().unwrap() {
            return Err(RemoteError::Unreachable("network down".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteClient for MockRemote {
    async fn fetch_unverified_needs(&self) -> Result<Vec<Need>, RemoteError> {
        self.check_network()?;
        Ok(self.served_needs.lock().unwrap().clone())
    }

    async fn fetch_needs_overview(&self) -> Result<NeedsOverview, RemoteError> {
        self.check_network()?;
        Ok(NeedsOverview {
            stats: Default::default(),
            needs: self.served_needs.lock().unwrap().clone(),
        })
    }

    async fn fetch_need(&self, id: &NeedId) -> Result<Need, RemoteError> {
        self.check_network()?;
        self.served_needs
            .lock()
            .unwrap()
            .iter()
            .find(|need| &need.id == id)
            .cloned()
            .ok_or(RemoteError::NotFound)
    }

    async fn verify_need(
        &self,
        id: &NeedId,
        volunteer_id: &VolunteerId,
        notes: Option<&str>,
    ) -> Result<Need, RemoteError> {
        self.check_network()?;
        let mut need = self
            .served_needs
            .lock()
            .unwrap()
            .iter()
            .find(|need| &need.id == id)
            .cloned()
            .ok_or(RemoteError::NotFound)?;
        need.apply_verification(
            volunteer_id.clone(),
            Utc::now(),
            notes.map(ToString::to_string),
        )
        .map_err(|message| RemoteError::Rejected {
            status: 500,
            message,
        })?;
        Ok(need)
    }

    async fn sync_verifications(
        &self,
        batch: &[VerificationSubmission],
    ) -> Result<SyncBatchOutcome, RemoteError> {
        self.check_network()?;
        self.batch_calls.lock().unwrap().push(batch.to_vec());
        let results = batch
            .iter()
            .map(|submission| SubmissionResult {
                need_id: submission.need_id.clone(),
                success: true,
                need: None,
                error: None,
            })
            .collect();
        Ok(SyncBatchOutcome {
            results,
            message: None,
        })
    }
}

pub struct TestApp {
    pub app: AppService,
    pub store: Arc<SqliteLocalStore>,
    pub remote: Arc<MockRemote>,
    pub monitor: ConnectivityMonitor,
    pub events: Option<mpsc::UnboundedReceiver<ConnectivityEvent>>,
    _temp_dir: TempDir,
}

/// Wire a session against a temp-file store and the mock remote,
/// starting offline.
pub async fn setup_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("session.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = Database::initialize(&db_url).await.unwrap();

    let store = Arc::new(SqliteLocalStore::new(pool));
    let remote = Arc::new(MockRemote::new());
    let (monitor, events) = ConnectivityMonitor::new(false, Duration::from_secs(3600));
    let engine = SyncEngine::new(store.clone(), remote.clone(), monitor.online_flag());
    let app = AppService::new(engine, store.clone());

    TestApp {
        app,
        store,
        remote,
        monitor,
        events: Some(events),
        _temp_dir: temp_dir,
    }
}

pub fn sample_need(id: &str, need_type: NeedType) -> Need {
    Need {
        id: NeedId::new(id.into()).unwrap(),
        need_type,
        urgency: Urgency::High,
        details: Some("reported by SMS".into()),
        location: Some("east district".into()),
        phone_number: None,
        status: NeedStatus::Unverified,
        verified_by: None,
        verified_at: None,
        verification_notes: None,
        created_at: Utc::now(),
    }
}

/// Poll until `predicate` holds or the deadline passes.
pub async fn wait_until<F, Fut>(deadline: Duration, mut predicate: F)
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    let start = std::time::Instant::now();
    loop {
        if predicate().await {
            return;
        }
        if start.elapsed() > deadline {
            panic!("condition not reached within {deadline:?}");
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
