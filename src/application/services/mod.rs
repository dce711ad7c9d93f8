pub mod app_service;
pub mod connectivity_service;
pub mod sync_service;

pub use app_service::{AppService, AppSnapshot};
pub use connectivity_service::{ConnectivityEvent, ConnectivityMonitor, OnlineFlag};
pub use sync_service::{EngineStatus, SyncEngine};
