use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote-assigned identifier of a need record (`_id` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeedId(String);

impl NeedId {
    pub fn new(value: String) -> Result<Self, String> {
        Self::validate(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err("Need ID cannot be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for NeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NeedId> for String {
    fn from(value: NeedId) -> Self {
        value.0
    }
}
