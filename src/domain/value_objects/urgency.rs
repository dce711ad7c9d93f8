use serde::{Deserialize, Serialize};

/// Urgency of a reported need. Unknown wire values fall back to `Medium`,
/// matching the remote store's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn as_str(&self) -> &str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }
}

impl From<&str> for Urgency {
    fn from(value: &str) -> Self {
        match value {
            "High" => Urgency::High,
            "Low" => Urgency::Low,
            _ => Urgency::Medium,
        }
    }
}
