use crate::config::Config;
use crate::database::postgres_repository::PostgresRepository;
use crate::database::session::SessionRepository;
use crate::database::user::UserRepository;
use crate::error::app_error::AppError;
use crate::service::credentials::constant_time_eq;
use crate::service::session::SessionAuthenticator;
use chrono::{DateTime, Utc};
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{FromRequest, Outcome as RequestOutcome, Request};
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionIdentity {
    pub session_id: Uuid,
    pub user_id: Uuid,
}

/// Who is calling, resolved once per request from the `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthContext {
    /// The configured developer key was presented. Passes every check.
    DeveloperOverride,
    Session(SessionIdentity),
    Unauthenticated,
}

impl AuthContext {
    pub fn is_developer(&self) -> bool {
        matches!(self, AuthContext::DeveloperOverride)
    }

    pub fn describe(&self) -> String {
        match self {
            AuthContext::DeveloperOverride => "developer".to_string(),
            AuthContext::Session(identity) => format!("user:{}", identity.user_id),
            AuthContext::Unauthenticated => "anonymous".to_string(),
        }
    }

    /// The caller must be `user_id` (or the developer).
    pub fn ensure_owner(&self, user_id: &Uuid) -> Result<(), AppError> {
        match self {
            AuthContext::DeveloperOverride => Ok(()),
            AuthContext::Session(identity) if identity.user_id == *user_id => Ok(()),
            AuthContext::Session(_) => Err(AppError::Forbidden("Resource belongs to another user".to_string())),
            AuthContext::Unauthenticated => Err(AppError::Unauthenticated),
        }
    }

    /// The caller must be holding `session_id` (or be the developer).
    pub fn ensure_session_owner(&self, session_id: &Uuid) -> Result<(), AppError> {
        match self {
            AuthContext::DeveloperOverride => Ok(()),
            AuthContext::Session(identity) if identity.session_id == *session_id => Ok(()),
            AuthContext::Session(_) => Err(AppError::Forbidden("Session belongs to another caller".to_string())),
            AuthContext::Unauthenticated => Err(AppError::Unauthenticated),
        }
    }

    pub async fn ensure_admin<R: UserRepository + Sync>(&self, repo: &R) -> Result<(), AppError> {
        match self {
            AuthContext::DeveloperOverride => Ok(()),
            AuthContext::Session(identity) => {
                let user = repo
                    .get_user_by_id(&identity.user_id)
                    .await?
                    .ok_or_else(|| AppError::Internal(format!("session {} has no user", identity.session_id)))?;
                if user.is_admin() {
                    Ok(())
                } else {
                    Err(AppError::Forbidden("Administrator permission required".to_string()))
                }
            }
            AuthContext::Unauthenticated => Err(AppError::Unauthenticated),
        }
    }
}

/// Turn a raw bearer token into an [`AuthContext`].
///
/// The token is compared verbatim. A developer key of `None` disables the
/// override entirely.
pub async fn authorize<R: SessionRepository + Sync>(
    token: Option<&str>,
    dev_key: Option<&str>,
    authenticator: &SessionAuthenticator<'_, R>,
    now: DateTime<Utc>,
) -> Result<AuthContext, AppError> {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Ok(AuthContext::Unauthenticated);
    };

    if dev_key.is_some_and(|key| constant_time_eq(key.as_bytes(), token.as_bytes())) {
        info!("developer override used");
        return Ok(AuthContext::DeveloperOverride);
    }

    Ok(match authenticator.resolve_at(token, now).await? {
        Some(session) => AuthContext::Session(SessionIdentity {
            session_id: session.id,
            user_id: session.user_id,
        }),
        None => AuthContext::Unauthenticated,
    })
}

async fn resolve_request(req: &Request<'_>) -> Result<AuthContext, AppError> {
    let config = req
        .rocket()
        .state::<Config>()
        .ok_or_else(|| AppError::Internal("configuration is not managed".to_string()))?;
    let token = req.headers().get_one("Authorization");

    let pool = req
        .rocket()
        .state::<PgPool>()
        .ok_or_else(|| AppError::Internal("database pool is not managed".to_string()))?;
    let repo = PostgresRepository { pool: pool.clone() };
    let authenticator = SessionAuthenticator::new(&repo, config.auth.session_ttl());

    authorize(token, config.auth.dev_key(), &authenticator, Utc::now()).await
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthContext {
    type Error = AppError;

    async fn from_request(req: &'r Request<'_>) -> RequestOutcome<Self, Self::Error> {
        let cached = req
            .local_cache_async(async {
                match resolve_request(req).await {
                    Ok(context) => Some(context),
                    Err(err) => {
                        error!(error = ?err, "failed to resolve caller");
                        None
                    }
                }
            })
            .await;

        match cached {
            Some(context) => Outcome::Success(context.clone()),
            None => Outcome::Error((Status::InternalServerError, AppError::Internal("caller could not be resolved".to_string()))),
        }
    }
}

/// A caller with a live session or the developer key.
pub struct Authorized(pub AuthContext);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Authorized {
    type Error = AppError;

    async fn from_request(req: &'r Request<'_>) -> RequestOutcome<Self, Self::Error> {
        match AuthContext::from_request(req).await {
            Outcome::Success(AuthContext::Unauthenticated) => Outcome::Error((Status::Forbidden, AppError::Unauthenticated)),
            Outcome::Success(context) => Outcome::Success(Authorized(context)),
            Outcome::Error(failure) => Outcome::Error(failure),
            Outcome::Forward(status) => Outcome::Forward(status),
        }
    }
}

/// A caller with a live session. The developer key is not enough.
pub struct SessionCaller(pub SessionIdentity);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionCaller {
    type Error = AppError;

    async fn from_request(req: &'r Request<'_>) -> RequestOutcome<Self, Self::Error> {
        match AuthContext::from_request(req).await {
            Outcome::Success(AuthContext::Session(identity)) => Outcome::Success(SessionCaller(identity)),
            Outcome::Success(_) => Outcome::Error((Status::Forbidden, AppError::Unauthenticated)),
            Outcome::Error(failure) => Outcome::Error(failure),
            Outcome::Forward(status) => Outcome::Forward(status),
        }
    }
}
