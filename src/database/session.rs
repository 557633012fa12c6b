use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::session::Session;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait::async_trait]
pub trait SessionRepository {
    /// Store `session`, removing any session its user already had.
    async fn replace_user_session(&self, session: &Session) -> Result<(), AppError>;
    async fn get_session(&self, id: &Uuid) -> Result<Option<Session>, AppError>;
    /// Bump the activity timestamp. Returns `false` when the row is gone.
    async fn touch_session(&self, id: &Uuid, at: DateTime<Utc>) -> Result<bool, AppError>;
    async fn delete_session(&self, id: &Uuid) -> Result<(), AppError>;
    async fn list_sessions(&self) -> Result<Vec<Session>, AppError>;
}

#[async_trait::async_trait]
impl SessionRepository for PostgresRepository {
    async fn replace_user_session(&self, session: &Session) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        // Serializes concurrent logins for the same user.
        sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(session.user_id)
            .execute(&mut *tx)
            .await?;

        let replaced = sqlx::query("DELETE FROM session WHERE user_id = $1")
            .bind(session.user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO session (id, user_id, creation_date, last_active_date)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.id)
        .bind(session.user_id)
        .bind(session.creation_date)
        .bind(session.last_active_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        if replaced.rows_affected() > 0 {
            tracing::info!(user_id = %session.user_id, "previous session superseded");
        }

        Ok(())
    }

    async fn get_session(&self, id: &Uuid) -> Result<Option<Session>, AppError> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, user_id, creation_date, last_active_date
            FROM session
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }

    async fn touch_session(&self, id: &Uuid, at: DateTime<Utc>) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE session SET last_active_date = $1 WHERE id = $2")
            .bind(at)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_session(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM session WHERE id = $1").bind(id).execute(&self.pool).await?;

        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, AppError> {
        let sessions = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, user_id, creation_date, last_active_date
            FROM session
            ORDER BY creation_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }
}
