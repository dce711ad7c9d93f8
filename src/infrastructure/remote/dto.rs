use crate::application::ports::remote_client::RemoteError;
use crate::domain::entities::{
    Need, NeedStats, SubmissionResult, TypeBreakdown, UrgencyBreakdown, VerificationSubmission,
};
use crate::domain::value_objects::{NeedId, NeedStatus, NeedType, Urgency, VolunteerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Need record as the remote store serializes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub need_type: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub verified_by: Option<String>,
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub verification_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NeedDto {
    pub fn into_domain(self) -> Result<Need, RemoteError> {
        let verified_by = self
            .verified_by
            .map(VolunteerId::new)
            .transpose()
            .map_err(RemoteError::Decode)?;

        Ok(Need {
            id: NeedId::new(self.id).map_err(RemoteError::Decode)?,
            need_type: self
                .need_type
                .as_deref()
                .map(NeedType::from)
                .unwrap_or(NeedType::Other),
            urgency: self
                .urgency
                .as_deref()
                .map(Urgency::from)
                .unwrap_or(Urgency::Medium),
            details: self.details,
            location: self.location,
            phone_number: self.phone_number,
            status: self
                .status
                .as_deref()
                .map(NeedStatus::from)
                .unwrap_or(NeedStatus::Unverified),
            verified_by,
            verified_at: self.verified_at,
            verification_notes: self.verification_notes,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequestBody {
    pub volunteer_id: String,
    pub notes: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDto {
    pub need_id: String,
    pub volunteer_id: String,
    pub notes: String,
    pub verified_at: DateTime<Utc>,
}

impl From<&VerificationSubmission> for VerificationDto {
    fn from(submission: &VerificationSubmission) -> Self {
        Self {
            need_id: submission.need_id.to_string(),
            volunteer_id: submission.volunteer_id.to_string(),
            notes: submission.notes.clone().unwrap_or_default(),
            verified_at: submission.verified_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SyncRequestBody {
    pub verifications: Vec<VerificationDto>,
}

#[derive(Debug, Deserialize)]
pub struct ListNeedsResponse {
    #[serde(rename = "success")]
    pub _success: bool,
    #[serde(default, rename = "count")]
    pub _count: Option<u32>,
    pub data: Vec<NeedDto>,
}

#[derive(Debug, Deserialize)]
pub struct NeedsOverviewResponse {
    #[serde(rename = "success")]
    pub _success: bool,
    pub stats: NeedStatsDto,
    pub data: Vec<NeedDto>,
}

#[derive(Debug, Deserialize)]
pub struct SingleNeedResponse {
    #[serde(rename = "success")]
    pub _success: bool,
    #[serde(default, rename = "message")]
    pub _message: Option<String>,
    pub data: NeedDto,
}

#[derive(Debug, Deserialize)]
pub struct SyncResponse {
    #[serde(rename = "success")]
    pub _success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub results: Vec<SyncResultDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResultDto {
    pub need_id: String,
    pub success: bool,
    #[serde(default)]
    pub data: Option<NeedDto>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SyncResultDto {
    pub fn into_domain(self) -> Result<SubmissionResult, RemoteError> {
        Ok(SubmissionResult {
            need_id: NeedId::new(self.need_id).map_err(RemoteError::Decode)?,
            success: self.success,
            need: self.data.map(NeedDto::into_domain).transpose()?,
            error: self.error,
        })
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NeedStatsDto {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub unverified: u32,
    #[serde(default)]
    pub verified: u32,
    #[serde(default)]
    pub fulfilled: u32,
    #[serde(default)]
    pub by_type: TypeBreakdownDto,
    #[serde(default)]
    pub by_urgency: UrgencyBreakdownDto,
}

#[derive(Debug, Deserialize, Default)]
pub struct TypeBreakdownDto {
    #[serde(default)]
    pub water: u32,
    #[serde(default)]
    pub food: u32,
    #[serde(default)]
    pub medical: u32,
    #[serde(default)]
    pub rescue: u32,
    #[serde(default)]
    pub other: u32,
}

#[derive(Debug, Deserialize, Default)]
pub struct UrgencyBreakdownDto {
    #[serde(default)]
    pub high: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub low: u32,
}

impl NeedStatsDto {
    pub fn into_domain(self) -> NeedStats {
        NeedStats {
            total: self.total,
            unverified: self.unverified,
            verified: self.verified,
            fulfilled: self.fulfilled,
            by_type: TypeBreakdown {
                water: self.by_type.water,
                food: self.by_type.food,
                medical: self.by_type.medical,
                rescue: self.by_type.rescue,
                other: self.by_type.other,
            },
            by_urgency: UrgencyBreakdown {
                high: self.by_urgency.high,
                medium: self.by_urgency.medium,
                low: self.by_urgency.low,
            },
        }
    }
}
