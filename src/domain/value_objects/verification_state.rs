use serde::{Deserialize, Serialize};

/// Explicit state of one verification attempt. Derived from outbox
/// presence and the synced flag: no entry means the attempt either never
/// happened or was confirmed directly online.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationState {
    Unverified,
    QueuedOffline,
    Confirmed,
}

impl VerificationState {
    pub fn as_str(&self) -> &str {
        match self {
            VerificationState::Unverified => "unverified",
            VerificationState::QueuedOffline => "queued_offline",
            VerificationState::Confirmed => "confirmed",
        }
    }
}
