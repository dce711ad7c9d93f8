use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-local identifier of an outbox entry. Auto-incrementing, never
/// sent remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalQueueId(i64);

impl LocalQueueId {
    pub fn new(value: i64) -> Result<Self, String> {
        if value <= 0 {
            return Err("Local queue id must be positive".to_string());
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for LocalQueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<LocalQueueId> for i64 {
    fn from(id: LocalQueueId) -> Self {
        id.0
    }
}
