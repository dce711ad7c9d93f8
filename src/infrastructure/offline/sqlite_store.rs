use crate::application::ports::local_store::LocalStore;
use crate::domain::entities::{Need, NeedPatch, PendingVerification, PendingVerificationDraft};
use crate::domain::value_objects::{LocalQueueId, NeedId};
use crate::infrastructure::database::DbPool;
use crate::infrastructure::offline::mappers::{need_from_row, pending_from_row};
use crate::infrastructure::offline::rows::{CachedNeedRow, PendingVerificationRow};
use crate::shared::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, Sqlite, Transaction};

/// SQLite-backed local store: cached need snapshots plus the pending
/// verification outbox.
pub struct SqliteLocalStore {
    pool: DbPool,
}

impl SqliteLocalStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn insert_need(tx: &mut Transaction<'_, Sqlite>, need: &Need) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO cached_needs (
                id, need_type, urgency, details, location, phone_number,
                status, verified_by, verified_at, verification_notes, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )
        .bind(need.id.as_str())
        .bind(need.need_type.as_str())
        .bind(need.urgency.as_str())
        .bind(&need.details)
        .bind(&need.location)
        .bind(&need.phone_number)
        .bind(need.status.as_str())
        .bind(need.verified_by.as_ref().map(|v| v.as_str().to_string()))
        .bind(need.verified_at.map(|at| at.timestamp()))
        .bind(&need.verification_notes)
        .bind(need.created_at.timestamp())
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl LocalStore for SqliteLocalStore {
    async fn get_cached_needs(&self) -> Result<Vec<Need>, AppError> {
        let rows = sqlx::query_as::<_, CachedNeedRow>(
            "SELECT * FROM cached_needs ORDER BY created_at DESC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(need_from_row).collect()
    }

    async fn replace_cached_needs(&self, needs: &[Need]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM cached_needs")
            .execute(&mut *tx)
            .await?;
        for need in needs {
            Self::insert_need(&mut tx, need).await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn patch_cached_need(&self, id: &NeedId, patch: NeedPatch) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, CachedNeedRow>("SELECT * FROM cached_needs WHERE id = ?1")
            .bind(id.as_str())
            .fetch_optional(&mut *tx)
            .await?;

        // A patch never fabricates a record.
        let Some(row) = row else {
            tx.commit().await?;
            return Ok(());
        };

        let mut need = need_from_row(row)?;
        need.apply_patch(patch);

        sqlx::query(
            r#"
            UPDATE cached_needs
            SET status = ?1, verified_by = ?2, verified_at = ?3, verification_notes = ?4
            WHERE id = ?5
            "#,
        )
        .bind(need.status.as_str())
        .bind(need.verified_by.as_ref().map(|v| v.as_str().to_string()))
        .bind(need.verified_at.map(|at| at.timestamp()))
        .bind(&need.verification_notes)
        .bind(id.as_str())
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn enqueue_verification(
        &self,
        draft: PendingVerificationDraft,
    ) -> Result<LocalQueueId, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO pending_verifications (need_id, volunteer_id, notes, verified_at, synced)
            VALUES (?1, ?2, ?3, ?4, 0)
            "#,
        )
        .bind(draft.need_id.as_str())
        .bind(draft.volunteer_id.as_str())
        .bind(&draft.notes)
        .bind(draft.verified_at.timestamp())
        .execute(&self.pool)
        .await?;

        LocalQueueId::new(result.last_insert_rowid()).map_err(AppError::Database)
    }

    async fn list_unsynced_verifications(&self) -> Result<Vec<PendingVerification>, AppError> {
        let rows = sqlx::query_as::<_, PendingVerificationRow>(
            r#"
            SELECT * FROM pending_verifications
            WHERE synced = 0
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(pending_from_row).collect()
    }

    async fn count_unsynced(&self) -> Result<u32, AppError> {
        let row =
            sqlx::query("SELECT COUNT(*) as count FROM pending_verifications WHERE synced = 0")
                .fetch_one(&self.pool)
                .await?;
        let count: i64 = row.try_get("count").unwrap_or(0);
        Ok(count as u32)
    }

    async fn mark_synced(&self, local_id: LocalQueueId) -> Result<(), AppError> {
        // Absent or already-synced rows simply match nothing.
        sqlx::query("UPDATE pending_verifications SET synced = 1 WHERE id = ?1")
            .bind(local_id.value())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM cached_needs")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM pending_verifications")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }
}
