use crate::auth::{AuthContext, Authorized, SessionCaller};
use crate::config::Config;
use crate::database::postgres_repository::PostgresRepository;
use crate::database::user::UserRepository;
use crate::error::app_error::AppError;
use crate::error::json::JsonBody;
use crate::models::session::Session;
use crate::models::user::{LoginRequest, RegisterRequest, UpdateUserRequest, UserResponse};
use crate::routes::location;
use crate::service::auth::AuthService;
use crate::service::user::UserService;
use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put, routes};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Create an account and log it in. Permissions in the body are only
/// honoured for the developer.
#[post("/register/user", data = "<payload>")]
pub async fn register(
    pool: &State<PgPool>,
    config: &State<Config>,
    caller: AuthContext,
    payload: JsonBody<RegisterRequest>,
) -> Result<Created<Json<Session>>, AppError> {
    payload.validate()?;

    let perms = if caller.is_developer() { payload.perms } else { 0 };
    let repo = PostgresRepository { pool: pool.inner().clone() };
    let session = AuthService::new(&repo, config.auth.session_ttl()).register(&payload, perms).await?;

    Ok(Created::new(location(config, format_args!("/sessions/{}", session.id))).body(Json(session)))
}

#[post("/login", data = "<payload>")]
pub async fn login(pool: &State<PgPool>, config: &State<Config>, payload: JsonBody<LoginRequest>) -> Result<Created<Json<Session>>, AppError> {
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let session = AuthService::new(&repo, config.auth.session_ttl()).login(&payload).await?;

    Ok(Created::new(location(config, format_args!("/users/{}", session.user_id))).body(Json(session)))
}

#[post("/logout")]
pub async fn logout(pool: &State<PgPool>, config: &State<Config>, caller: SessionCaller) -> Result<Status, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    AuthService::new(&repo, config.auth.session_ttl()).logout(&caller.0.session_id).await?;
    Ok(Status::NoContent)
}

#[get("/")]
pub async fn list_users(pool: &State<PgPool>, caller: Authorized) -> Result<Json<Vec<UserResponse>>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    caller.0.ensure_admin(&repo).await?;

    let users = repo.list_users().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

#[get("/<id>")]
pub async fn get_user(pool: &State<PgPool>, caller: Authorized, id: &str) -> Result<Json<UserResponse>, AppError> {
    let user_id = Uuid::parse_str(id)?;
    caller.0.ensure_owner(&user_id)?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let user = UserService::new(&repo).get_user(&user_id).await?;
    Ok(Json(UserResponse::from(&user)))
}

#[put("/<id>", data = "<payload>")]
pub async fn update_user(pool: &State<PgPool>, caller: Authorized, id: &str, payload: JsonBody<UpdateUserRequest>) -> Result<Json<UserResponse>, AppError> {
    let user_id = Uuid::parse_str(id)?;
    caller.0.ensure_owner(&user_id)?;
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let user = UserService::new(&repo).update_user(&user_id, &payload, caller.0.is_developer()).await?;
    Ok(Json(UserResponse::from(&user)))
}

#[delete("/<id>")]
pub async fn delete_user(pool: &State<PgPool>, caller: Authorized, id: &str) -> Result<Status, AppError> {
    let user_id = Uuid::parse_str(id)?;
    caller.0.ensure_owner(&user_id)?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    UserService::new(&repo).delete_user(&user_id).await?;
    Ok(Status::NoContent)
}

/// Registration, login and logout, mounted at the API root.
pub fn auth_routes() -> Vec<rocket::Route> {
    routes![register, login, logout]
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list_users, get_user, update_user, delete_user]
}
