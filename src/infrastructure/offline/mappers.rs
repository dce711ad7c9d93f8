use crate::domain::entities::{Need, PendingVerification};
use crate::domain::value_objects::{
    LocalQueueId, NeedId, NeedStatus, NeedType, Urgency, VolunteerId,
};
use crate::infrastructure::offline::rows::{CachedNeedRow, PendingVerificationRow};
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};

pub fn need_from_row(row: CachedNeedRow) -> Result<Need, AppError> {
    let verified_by = row
        .verified_by
        .map(VolunteerId::new)
        .transpose()
        .map_err(AppError::ValidationError)?;

    Ok(Need {
        id: NeedId::new(row.id).map_err(AppError::ValidationError)?,
        need_type: NeedType::from(row.need_type.as_str()),
        urgency: Urgency::from(row.urgency.as_str()),
        details: row.details,
        location: row.location,
        phone_number: row.phone_number,
        status: NeedStatus::from(row.status.as_str()),
        verified_by,
        verified_at: row.verified_at.map(timestamp_to_datetime).transpose()?,
        verification_notes: row.verification_notes,
        created_at: timestamp_to_datetime(row.created_at)?,
    })
}

pub fn pending_from_row(row: PendingVerificationRow) -> Result<PendingVerification, AppError> {
    Ok(PendingVerification {
        local_id: LocalQueueId::new(row.id).map_err(AppError::ValidationError)?,
        need_id: NeedId::new(row.need_id).map_err(AppError::ValidationError)?,
        volunteer_id: VolunteerId::new(row.volunteer_id).map_err(AppError::ValidationError)?,
        notes: row.notes,
        verified_at: timestamp_to_datetime(row.verified_at)?,
        synced: row.synced,
    })
}

fn timestamp_to_datetime(secs: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| AppError::Database(format!("Timestamp out of range: {secs}")))
}
