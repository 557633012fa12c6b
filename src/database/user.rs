use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::user::{NewUser, User, UserChanges};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, first_name, last_name, username, pass_hash, pass_salt, perms";

#[async_trait::async_trait]
pub trait UserRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User, AppError>;
    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    async fn update_user(&self, id: &Uuid, changes: &UserChanges) -> Result<Option<User>, AppError>;
    /// Remove the user together with its session, emails and phone numbers.
    /// Returns `false` if there was no such user.
    async fn delete_user(&self, id: &Uuid) -> Result<bool, AppError>;
}

#[async_trait::async_trait]
impl UserRepository for PostgresRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, first_name, last_name, username, pass_hash, pass_salt, perms)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.pass_hash)
        .bind(&user.pass_salt)
        .bind(user.perms)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1"))
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY username"))
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn update_user(&self, id: &Uuid, changes: &UserChanges) -> Result<Option<User>, AppError> {
        let (pass_hash, pass_salt) = match &changes.credentials {
            Some((hash, salt)) => (Some(hash.as_str()), Some(salt.as_str())),
            None => (None, None),
        };

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET first_name = COALESCE($1, first_name),
                last_name = COALESCE($2, last_name),
                username = COALESCE($3, username),
                pass_hash = COALESCE($4, pass_hash),
                pass_salt = COALESCE($5, pass_salt),
                perms = COALESCE($6, perms)
            WHERE id = $7
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(changes.first_name.as_deref())
        .bind(changes.last_name.as_deref())
        .bind(changes.username.as_deref())
        .bind(pass_hash)
        .bind(pass_salt)
        .bind(changes.perms)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn delete_user(&self, id: &Uuid) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        for table in ["session", "email", "phone_number"] {
            sqlx::query(&format!("DELETE FROM {table} WHERE user_id = $1"))
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        let deleted = sqlx::query("DELETE FROM users WHERE id = $1").bind(id).execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(deleted.rows_affected() > 0)
    }
}
