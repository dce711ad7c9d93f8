use serde::{Deserialize, Serialize};

/// Summary of one drain of the pending-verification outbox.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DrainReport {
    pub submitted: u32,
    pub accepted: u32,
    pub rejected: u32,
    pub pending_remaining: u32,
    /// True when the trigger was dropped because another drain was
    /// already in flight.
    pub skipped: bool,
}

impl DrainReport {
    /// Nothing queued, no network call made.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The trigger was dropped by the re-entrancy guard.
    pub fn skipped(pending_remaining: u32) -> Self {
        Self {
            pending_remaining,
            skipped: true,
            ..Self::default()
        }
    }
}
