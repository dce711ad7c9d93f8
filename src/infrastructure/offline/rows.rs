use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CachedNeedRow {
    pub id: String,
    pub need_type: String,
    pub urgency: String,
    pub details: Option<String>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub status: String,
    pub verified_by: Option<String>,
    pub verified_at: Option<i64>,
    pub verification_notes: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct PendingVerificationRow {
    pub id: i64,
    pub need_id: String,
    pub volunteer_id: String,
    pub notes: Option<String>,
    pub verified_at: i64,
    pub synced: bool,
}
