use crate::database::contact::ContactRepository;
use crate::database::user::UserRepository;
use crate::error::app_error::AppError;
use crate::models::contact::{Email, PhoneNumber, UpdateEmailRequest, UpdatePhoneNumberRequest};
use uuid::Uuid;

/// Email addresses and phone numbers attached to a user.
///
/// New entries start unverified. Changing an address or number resets its
/// verification; only a caller allowed to verify may set the flag directly.
pub struct ContactService<'a, R> {
    repo: &'a R,
}

impl<'a, R> ContactService<'a, R>
where
    R: ContactRepository + UserRepository + Sync,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    async fn ensure_user(&self, user_id: &Uuid) -> Result<(), AppError> {
        match self.repo.get_user_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("User")),
        }
    }

    pub async fn list_emails(&self, user_id: &Uuid) -> Result<Vec<Email>, AppError> {
        self.ensure_user(user_id).await?;
        self.repo.list_emails(user_id).await
    }

    /// Every address on record, across all users.
    pub async fn list_all_emails(&self) -> Result<Vec<Email>, AppError> {
        self.repo.list_all_emails().await
    }

    pub async fn add_email(&self, user_id: &Uuid, address: &str) -> Result<Email, AppError> {
        self.ensure_user(user_id).await?;
        self.repo.create_email(user_id, address).await
    }

    pub async fn update_email(&self, user_id: &Uuid, id: &Uuid, request: &UpdateEmailRequest, may_verify: bool) -> Result<Email, AppError> {
        if request.touches_verification() && !may_verify {
            return Err(AppError::Forbidden("Verification status cannot be set directly".to_string()));
        }
        self.repo.update_email(user_id, id, request).await?.ok_or_else(|| AppError::not_found("Email"))
    }

    pub async fn delete_email(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError> {
        if !self.repo.delete_email(user_id, id).await? {
            return Err(AppError::not_found("Email"));
        }
        Ok(())
    }

    pub async fn list_phone_numbers(&self, user_id: &Uuid) -> Result<Vec<PhoneNumber>, AppError> {
        self.ensure_user(user_id).await?;
        self.repo.list_phone_numbers(user_id).await
    }

    pub async fn add_phone_number(&self, user_id: &Uuid, number: &str) -> Result<PhoneNumber, AppError> {
        self.ensure_user(user_id).await?;
        self.repo.create_phone_number(user_id, number).await
    }

    pub async fn update_phone_number(&self, user_id: &Uuid, id: &Uuid, request: &UpdatePhoneNumberRequest, may_verify: bool) -> Result<PhoneNumber, AppError> {
        if request.touches_verification() && !may_verify {
            return Err(AppError::Forbidden("Verification status cannot be set directly".to_string()));
        }
        self.repo
            .update_phone_number(user_id, id, request)
            .await?
            .ok_or_else(|| AppError::not_found("Phone number"))
    }

    pub async fn delete_phone_number(&self, user_id: &Uuid, id: &Uuid) -> Result<(), AppError> {
        if !self.repo.delete_phone_number(user_id, id).await? {
            return Err(AppError::not_found("Phone number"));
        }
        Ok(())
    }
}
