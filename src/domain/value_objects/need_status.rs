use serde::{Deserialize, Serialize};

/// Lifecycle status of a need. Monotonic: unverified -> verified ->
/// fulfilled, never regresses under normal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeedStatus {
    Unverified,
    Verified,
    Fulfilled,
}

impl NeedStatus {
    pub fn as_str(&self) -> &str {
        match self {
            NeedStatus::Unverified => "unverified",
            NeedStatus::Verified => "verified",
            NeedStatus::Fulfilled => "fulfilled",
        }
    }

    pub fn can_transition_to(&self, next: NeedStatus) -> bool {
        next.rank() >= self.rank()
    }

    fn rank(&self) -> u8 {
        match self {
            NeedStatus::Unverified => 0,
            NeedStatus::Verified => 1,
            NeedStatus::Fulfilled => 2,
        }
    }
}

impl From<&str> for NeedStatus {
    fn from(value: &str) -> Self {
        match value {
            "verified" => NeedStatus::Verified,
            "fulfilled" => NeedStatus::Fulfilled,
            _ => NeedStatus::Unverified,
        }
    }
}
