use crate::domain::value_objects::{NeedId, NeedStatus, NeedType, Urgency, VolunteerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reported requirement for aid. Created server-side on report
/// submission; this core reads it and may move it to verified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Need {
    pub id: NeedId,
    pub need_type: NeedType,
    pub urgency: Urgency,
    pub details: Option<String>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub status: NeedStatus,
    pub verified_by: Option<VolunteerId>,
    pub verified_at: Option<DateTime<Utc>>,
    pub verification_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Need {
    /// Optimistically mark this need verified. Refuses a status
    /// regression: a fulfilled need stays fulfilled.
    pub fn apply_verification(
        &mut self,
        volunteer_id: VolunteerId,
        verified_at: DateTime<Utc>,
        notes: Option<String>,
    ) -> Result<(), String> {
        if !self.status.can_transition_to(NeedStatus::Verified) {
            return Err(format!(
                "Need {} cannot move from {} back to verified",
                self.id,
                self.status.as_str()
            ));
        }
        if self.status == NeedStatus::Unverified {
            self.status = NeedStatus::Verified;
        }
        self.verified_by = Some(volunteer_id);
        self.verified_at = Some(verified_at);
        self.verification_notes = notes;
        Ok(())
    }

    pub fn apply_patch(&mut self, patch: NeedPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(verified_by) = patch.verified_by {
            self.verified_by = Some(verified_by);
        }
        if let Some(verified_at) = patch.verified_at {
            self.verified_at = Some(verified_at);
        }
        if let Some(notes) = patch.verification_notes {
            self.verification_notes = Some(notes);
        }
    }
}

/// Partial fields merged into a cached need record. A patch never
/// fabricates a record; patching an absent id is a no-op at the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeedPatch {
    pub status: Option<NeedStatus>,
    pub verified_by: Option<VolunteerId>,
    pub verified_at: Option<DateTime<Utc>>,
    pub verification_notes: Option<String>,
}

impl NeedPatch {
    /// The patch applied by a verify action before any network I/O.
    pub fn verification(
        volunteer_id: VolunteerId,
        verified_at: DateTime<Utc>,
        notes: Option<String>,
    ) -> Self {
        Self {
            status: Some(NeedStatus::Verified),
            verified_by: Some(volunteer_id),
            verified_at: Some(verified_at),
            verification_notes: notes,
        }
    }
}
