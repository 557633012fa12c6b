use crate::database::session::SessionRepository;
use crate::error::app_error::AppError;
use crate::models::session::Session;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

/// Resolves bearer tokens to live sessions and issues new ones.
///
/// Resolution is not read-only: a live session has its activity timestamp
/// bumped, an expired one is deleted. A single call never does both.
pub struct SessionAuthenticator<'a, R> {
    repo: &'a R,
    window: Duration,
}

/// Whether a session created at `creation_date` is still usable at `now`.
/// The boundary itself counts as live.
pub fn is_within_window(creation_date: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    now - creation_date <= window
}

impl<'a, R: SessionRepository + Sync> SessionAuthenticator<'a, R> {
    pub fn new(repo: &'a R, window: Duration) -> Self {
        Self { repo, window }
    }

    pub async fn resolve_at(&self, token: &str, now: DateTime<Utc>) -> Result<Option<Session>, AppError> {
        let Ok(session_id) = Uuid::parse_str(token) else {
            debug!("bearer token is not a session id");
            return Ok(None);
        };

        let Some(mut session) = self.repo.get_session(&session_id).await? else {
            return Ok(None);
        };

        if !is_within_window(session.creation_date, now, self.window) {
            self.repo.delete_session(&session_id).await?;
            info!(session_id = %session_id, user_id = %session.user_id, "expired session removed");
            return Ok(None);
        }

        if !self.repo.touch_session(&session_id, now).await? {
            debug!(session_id = %session_id, "session disappeared during resolution");
            return Ok(None);
        }

        session.last_active_date = now;
        Ok(Some(session))
    }

    pub async fn open_session(&self, user_id: &Uuid) -> Result<Session, AppError> {
        self.open_session_at(user_id, Utc::now()).await
    }

    /// Start a session for `user_id`, superseding any session it already has.
    pub async fn open_session_at(&self, user_id: &Uuid, now: DateTime<Utc>) -> Result<Session, AppError> {
        let session = Session::new(*user_id, now);
        self.repo.replace_user_session(&session).await?;
        info!(session_id = %session.id, user_id = %user_id, "session opened");
        Ok(session)
    }
}
