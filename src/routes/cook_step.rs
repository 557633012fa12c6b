use crate::auth::Authorized;
use crate::config::Config;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::error::json::JsonBody;
use crate::models::cook_step::{CookStep, CookStepRequest, UpdateCookStepRequest};
use crate::routes::location;
use crate::service::cook_step::CookStepService;
use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put, routes};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Append a step to the end of a recipe's method.
#[post("/", data = "<payload>")]
pub async fn create_step(
    pool: &State<PgPool>,
    config: &State<Config>,
    _caller: Authorized,
    payload: JsonBody<CookStepRequest>,
) -> Result<Created<Json<CookStep>>, AppError> {
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let step = CookStepService::new(&repo).add_step(&payload).await?;
    Ok(Created::new(location(config, format_args!("/cook-steps/{}/{}", step.recipe_id, step.id))).body(Json(step)))
}

#[get("/<recipe_id>")]
pub async fn list_steps(pool: &State<PgPool>, _caller: Authorized, recipe_id: &str) -> Result<Json<Vec<CookStep>>, AppError> {
    let recipe_id = Uuid::parse_str(recipe_id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(CookStepService::new(&repo).list_steps(&recipe_id).await?))
}

#[get("/<recipe_id>/<id>")]
pub async fn get_step(pool: &State<PgPool>, _caller: Authorized, recipe_id: &str, id: i32) -> Result<Json<CookStep>, AppError> {
    let recipe_id = Uuid::parse_str(recipe_id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(CookStepService::new(&repo).get_step(&recipe_id, id).await?))
}

#[put("/<recipe_id>/<id>", data = "<payload>")]
pub async fn update_step(
    pool: &State<PgPool>,
    _caller: Authorized,
    recipe_id: &str,
    id: i32,
    payload: JsonBody<UpdateCookStepRequest>,
) -> Result<Json<CookStep>, AppError> {
    let recipe_id = Uuid::parse_str(recipe_id)?;
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(CookStepService::new(&repo).update_step(&recipe_id, id, &payload.description).await?))
}

/// Remove a step. Later steps move up so numbering stays contiguous.
#[delete("/<recipe_id>/<id>")]
pub async fn delete_step(pool: &State<PgPool>, _caller: Authorized, recipe_id: &str, id: i32) -> Result<Status, AppError> {
    let recipe_id = Uuid::parse_str(recipe_id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    CookStepService::new(&repo).delete_step(&recipe_id, id).await?;
    Ok(Status::NoContent)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![create_step, list_steps, get_step, update_step, delete_step]
}
