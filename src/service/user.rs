use crate::database::user::UserRepository;
use crate::error::app_error::AppError;
use crate::models::user::{UpdateUserRequest, User, UserChanges};
use crate::service::credentials::new_credentials;
use tracing::info;
use uuid::Uuid;

pub struct UserService<'a, R> {
    repo: &'a R,
}

impl<'a, R: UserRepository + Sync> UserService<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub async fn get_user(&self, id: &Uuid) -> Result<User, AppError> {
        self.repo.get_user_by_id(id).await?.ok_or_else(|| AppError::not_found("User"))
    }

    /// Apply a profile update. A new password gets a fresh salt. `perms` is
    /// ignored unless `may_grant_perms` is set.
    pub async fn update_user(&self, id: &Uuid, request: &UpdateUserRequest, may_grant_perms: bool) -> Result<User, AppError> {
        if let Some(username) = &request.username
            && let Some(existing) = self.repo.get_user_by_username(username).await?
            && existing.id != *id
        {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }

        let changes = UserChanges {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            username: request.username.clone(),
            credentials: request.password.as_deref().map(new_credentials),
            perms: request.perms.filter(|_| may_grant_perms),
        };

        let user = self.repo.update_user(id, &changes).await?.ok_or_else(|| AppError::not_found("User"))?;
        if changes.credentials.is_some() {
            info!(user_id = %id, "password changed");
        }
        Ok(user)
    }

    /// Removes the user together with its sessions and contact details.
    pub async fn delete_user(&self, id: &Uuid) -> Result<(), AppError> {
        if !self.repo.delete_user(id).await? {
            return Err(AppError::not_found("User"));
        }
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}
