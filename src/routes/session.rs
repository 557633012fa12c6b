use crate::auth::Authorized;
use crate::database::postgres_repository::PostgresRepository;
use crate::database::session::SessionRepository;
use crate::error::app_error::AppError;
use crate::models::session::Session;
use rocket::serde::json::Json;
use rocket::{State, get, routes};
use sqlx::PgPool;
use uuid::Uuid;

#[get("/")]
pub async fn list_sessions(pool: &State<PgPool>, caller: Authorized) -> Result<Json<Vec<Session>>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    caller.0.ensure_admin(&repo).await?;
    Ok(Json(repo.list_sessions().await?))
}

/// A session caller may only look at the session it is holding.
#[get("/<id>")]
pub async fn get_session(pool: &State<PgPool>, caller: Authorized, id: &str) -> Result<Json<Session>, AppError> {
    let session_id = Uuid::parse_str(id)?;
    caller.0.ensure_session_owner(&session_id)?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    repo.get_session(&session_id).await?.map(Json).ok_or_else(|| AppError::not_found("Session"))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list_sessions, get_session]
}
