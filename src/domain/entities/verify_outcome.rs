use crate::domain::entities::Need;
use crate::domain::value_objects::LocalQueueId;
use serde::{Deserialize, Serialize};

/// Result of a verify call. `QueuedOffline` is a distinguishable success,
/// not an error: the intent is durable and will drain later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VerifyOutcome {
    /// The remote store accepted the verification immediately.
    Confirmed(Need),
    /// The intent was persisted to the outbox for a later drain.
    QueuedOffline { local_id: LocalQueueId },
}

impl VerifyOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, VerifyOutcome::Confirmed(_))
    }

    pub fn is_queued(&self) -> bool {
        matches!(self, VerifyOutcome::QueuedOffline { .. })
    }
}
