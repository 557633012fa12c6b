use crate::database::session::SessionRepository;
use crate::database::user::UserRepository;
use crate::error::app_error::AppError;
use crate::models::session::Session;
use crate::models::user::{LoginRequest, NewUser, RegisterRequest};
use crate::service::credentials::{new_credentials, verify_password};
use crate::service::session::SessionAuthenticator;
use chrono::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// Registration, login and logout.
pub struct AuthService<'a, R> {
    repo: &'a R,
    sessions: SessionAuthenticator<'a, R>,
}

impl<'a, R> AuthService<'a, R>
where
    R: UserRepository + SessionRepository + Sync,
{
    pub fn new(repo: &'a R, window: Duration) -> Self {
        Self {
            repo,
            sessions: SessionAuthenticator::new(repo, window),
        }
    }

    /// Create the account and log it in. `perms` is stored as given; callers
    /// decide whether the requester may grant permissions at all.
    pub async fn register(&self, request: &RegisterRequest, perms: i32) -> Result<Session, AppError> {
        if self.repo.get_user_by_username(&request.username).await?.is_some() {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }

        let (pass_hash, pass_salt) = new_credentials(&request.password);
        let user = self
            .repo
            .create_user(&NewUser {
                id: Uuid::new_v4(),
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                username: request.username.clone(),
                pass_hash,
                pass_salt,
                perms,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, perms = user.perms, "user registered");
        self.sessions.open_session(&user.id).await
    }

    /// Unknown usernames and wrong passwords fail identically.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, AppError> {
        let Some(user) = self.repo.get_user_by_username(&request.username).await? else {
            warn!(username = %request.username, "login for unknown user");
            return Err(AppError::InvalidCredentials);
        };

        if !verify_password(&user, &request.password) {
            warn!(user_id = %user.id, "login with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        self.sessions.open_session(&user.id).await
    }

    pub async fn logout(&self, session_id: &Uuid) -> Result<(), AppError> {
        self.repo.delete_session(session_id).await?;
        info!(session_id = %session_id, "session closed");
        Ok(())
    }
}
