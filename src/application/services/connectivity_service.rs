use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Triggers fed into the sync engine. `CameOnline` fires a drain then a
/// fetch; `Tick` fires a fetch only; `WentOffline` records state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityEvent {
    CameOnline,
    WentOffline,
    Tick,
}

/// Shared online/offline signal. The monitor writes it; the sync engine
/// reads it to pick the online or offline path.
#[derive(Debug)]
pub struct OnlineFlag(AtomicBool);

impl OnlineFlag {
    pub fn new(initial: bool) -> Self {
        Self(AtomicBool::new(initial))
    }

    pub fn is_online(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Flip the flag, returning the previous value.
    pub fn set(&self, online: bool) -> bool {
        self.0.swap(online, Ordering::SeqCst)
    }
}

/// Tracks online/offline transitions reported by the host environment and
/// emits timed ticks while online. Detection only; the reconciliation
/// policy lives in the sync engine.
pub struct ConnectivityMonitor {
    flag: Arc<OnlineFlag>,
    events: mpsc::UnboundedSender<ConnectivityEvent>,
    refresh_interval: Duration,
}

impl ConnectivityMonitor {
    pub fn new(
        initial_online: bool,
        refresh_interval: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<ConnectivityEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let monitor = Self {
            flag: Arc::new(OnlineFlag::new(initial_online)),
            events: tx,
            refresh_interval,
        };
        (monitor, rx)
    }

    pub fn online_flag(&self) -> Arc<OnlineFlag> {
        self.flag.clone()
    }

    pub fn is_online(&self) -> bool {
        self.flag.is_online()
    }

    /// Record a connectivity edge from the host environment. Only actual
    /// transitions emit an event; repeating the current state is silent.
    pub fn set_online(&self, online: bool) {
        let was_online = self.flag.set(online);
        if was_online == online {
            return;
        }
        let event = if online {
            ConnectivityEvent::CameOnline
        } else {
            ConnectivityEvent::WentOffline
        };
        debug!("Connectivity transition: {:?}", event);
        let _ = self.events.send(event);
    }

    /// Periodic refresh trigger. Ticks are suppressed while offline.
    pub fn spawn_ticker(&self) -> JoinHandle<()> {
        let flag = self.flag.clone();
        let events = self.events.clone();
        let period = self.refresh_interval;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // first tick completes immediately
            loop {
                interval.tick().await;
                if !flag.is_online() {
                    continue;
                }
                if events.send(ConnectivityEvent::Tick).is_err() {
                    break;
                }
            }
        })
    }
}
