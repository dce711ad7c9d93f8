use crate::domain::value_objects::{LocalQueueId, NeedId, VerificationState, VolunteerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A durable intent to verify a need, recorded when the verify could not
/// be confirmed against the remote store immediately. Never deleted
/// before being marked synced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingVerification {
    pub local_id: LocalQueueId,
    pub need_id: NeedId,
    pub volunteer_id: VolunteerId,
    pub notes: Option<String>,
    pub verified_at: DateTime<Utc>,
    pub synced: bool,
}

impl PendingVerification {
    pub fn verification_state(&self) -> VerificationState {
        if self.synced {
            VerificationState::Confirmed
        } else {
            VerificationState::QueuedOffline
        }
    }
}

/// What the sync engine hands the store when queueing an intent; the
/// store assigns the local id and the unsynced flag.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingVerificationDraft {
    pub need_id: NeedId,
    pub volunteer_id: VolunteerId,
    pub notes: Option<String>,
    pub verified_at: DateTime<Utc>,
}

impl PendingVerificationDraft {
    pub fn new(
        need_id: NeedId,
        volunteer_id: VolunteerId,
        notes: Option<String>,
        verified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            need_id,
            volunteer_id,
            notes,
            verified_at,
        }
    }
}
