use serde::{Deserialize, Serialize};

/// Category of a reported need. Unknown wire values fall back to `Other`,
/// matching the remote store's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeedType {
    Water,
    Food,
    Medical,
    Rescue,
    Other,
}

impl NeedType {
    pub fn as_str(&self) -> &str {
        match self {
            NeedType::Water => "Water",
            NeedType::Food => "Food",
            NeedType::Medical => "Medical",
            NeedType::Rescue => "Rescue",
            NeedType::Other => "Other",
        }
    }
}

impl From<&str> for NeedType {
    fn from(value: &str) -> Self {
        match value {
            "Water" => NeedType::Water,
            "Food" => NeedType::Food,
            "Medical" => NeedType::Medical,
            "Rescue" => NeedType::Rescue,
            _ => NeedType::Other,
        }
    }
}
