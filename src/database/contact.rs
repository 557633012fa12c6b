use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::contact::{Email, PhoneNumber, UpdateEmailRequest, UpdatePhoneNumberRequest};
use uuid::Uuid;

/// Email addresses and phone numbers, always scoped to their owning user.
#[async_trait::async_trait]
pub trait ContactRepository {
    async fn create_email(&self, user_id: &Uuid, address: &str) -> Result<Email, AppError>;
    async fn list_emails(&self, user_id: &Uuid) -> Result<Vec<Email>, AppError>;
    async fn list_all_emails(&self) -> Result<Vec<Email>, AppError>;
    async fn update_email(&self, user_id: &Uuid, id: &Uuid, request: &UpdateEmailRequest) -> Result<Option<Email>, AppError>;
    async fn delete_email(&self, user_id: &Uuid, id: &Uuid) -> Result<bool, AppError>;

    async fn create_phone_number(&self, user_id: &Uuid, number: &str) -> Result<PhoneNumber, AppError>;
    async fn list_phone_numbers(&self, user_id: &Uuid) -> Result<Vec<PhoneNumber>, AppError>;
    async fn update_phone_number(&self, user_id: &Uuid, id: &Uuid, request: &UpdatePhoneNumberRequest) -> Result<Option<PhoneNumber>, AppError>;
    async fn delete_phone_number(&self, user_id: &Uuid, id: &Uuid) -> Result<bool, AppError>;
}

#[async_trait::async_trait]
impl ContactRepository for PostgresRepository {
    async fn create_email(&self, user_id: &Uuid, address: &str) -> Result<Email, AppError> {
        let email = sqlx::query_as::<_, Email>(
            r#"
            INSERT INTO email (id, user_id, address, verified)
            VALUES ($1, $2, $3, FALSE)
            RETURNING id, user_id, address, verified
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(address)
        .fetch_one(&self.pool)
        .await?;

        Ok(email)
    }

    async fn list_emails(&self, user_id: &Uuid) -> Result<Vec<Email>, AppError> {
        let emails = sqlx::query_as::<_, Email>("SELECT id, user_id, address, verified FROM email WHERE user_id = $1 ORDER BY address")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(emails)
    }

    async fn list_all_emails(&self) -> Result<Vec<Email>, AppError> {
        let emails = sqlx::query_as::<_, Email>("SELECT id, user_id, address, verified FROM email ORDER BY address")
            .fetch_all(&self.pool)
            .await?;

        Ok(emails)
    }

    async fn update_email(&self, user_id: &Uuid, id: &Uuid, request: &UpdateEmailRequest) -> Result<Option<Email>, AppError> {
        let email = sqlx::query_as::<_, Email>(
            r#"
            UPDATE email
            SET address = COALESCE($1, address),
                verified = CASE WHEN $1 IS NOT NULL AND $1 <> address THEN FALSE ELSE COALESCE($2, verified) END
            WHERE user_id = $3 AND id = $4
            RETURNING id, user_id, address, verified
            "#,
        )
        .bind(request.address.as_deref())
        .bind(request.verified)
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(email)
    }

    async fn delete_email(&self, user_id: &Uuid, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM email WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_phone_number(&self, user_id: &Uuid, number: &str) -> Result<PhoneNumber, AppError> {
        let phone = sqlx::query_as::<_, PhoneNumber>(
            r#"
            INSERT INTO phone_number (id, user_id, number, verified)
            VALUES ($1, $2, $3, FALSE)
            RETURNING id, user_id, number, verified
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(number)
        .fetch_one(&self.pool)
        .await?;

        Ok(phone)
    }

    async fn list_phone_numbers(&self, user_id: &Uuid) -> Result<Vec<PhoneNumber>, AppError> {
        let phones = sqlx::query_as::<_, PhoneNumber>("SELECT id, user_id, number, verified FROM phone_number WHERE user_id = $1 ORDER BY number")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(phones)
    }

    async fn update_phone_number(&self, user_id: &Uuid, id: &Uuid, request: &UpdatePhoneNumberRequest) -> Result<Option<PhoneNumber>, AppError> {
        let phone = sqlx::query_as::<_, PhoneNumber>(
            r#"
            UPDATE phone_number
            SET number = COALESCE($1, number),
                verified = CASE WHEN $1 IS NOT NULL AND $1 <> number THEN FALSE ELSE COALESCE($2, verified) END
            WHERE user_id = $3 AND id = $4
            RETURNING id, user_id, number, verified
            "#,
        )
        .bind(request.number.as_deref())
        .bind(request.verified)
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(phone)
    }

    async fn delete_phone_number(&self, user_id: &Uuid, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM phone_number WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
