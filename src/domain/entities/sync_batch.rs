use crate::domain::entities::Need;
use crate::domain::value_objects::{NeedId, VolunteerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One verification intent as submitted in a bulk sync call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationSubmission {
    pub need_id: NeedId,
    pub volunteer_id: VolunteerId,
    pub notes: Option<String>,
    pub verified_at: DateTime<Utc>,
}

/// Per-item result reported by the remote store for a bulk sync call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionResult {
    pub need_id: NeedId,
    pub success: bool,
    pub need: Option<Need>,
    pub error: Option<String>,
}

/// Outcome of one bulk sync round trip, in submission order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SyncBatchOutcome {
    pub results: Vec<SubmissionResult>,
    pub message: Option<String>,
}
