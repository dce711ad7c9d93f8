use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of the verifying actor. Client-generated, session-scoped,
/// not authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolunteerId(String);

impl VolunteerId {
    pub fn new(value: String) -> Result<Self, String> {
        Self::validate(&value)?;
        Ok(Self(value))
    }

    /// Mint a fresh identity for this session. Never persisted across
    /// restarts.
    pub fn generate() -> Self {
        Self(format!("volunteer-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err("Volunteer ID cannot be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for VolunteerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<VolunteerId> for String {
    fn from(value: VolunteerId) -> Self {
        value.0
    }
}
