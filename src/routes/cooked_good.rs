use crate::auth::Authorized;
use crate::config::Config;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::error::json::JsonBody;
use crate::models::cooked_good::{CookedGood, CookedGoodRequest, UpdateCookedGoodRequest};
use crate::routes::location;
use crate::service::cooked_good::CookedGoodService;
use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put, routes};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

#[post("/", data = "<payload>")]
pub async fn create_cooked_good(
    pool: &State<PgPool>,
    config: &State<Config>,
    _caller: Authorized,
    payload: JsonBody<CookedGoodRequest>,
) -> Result<Created<Json<CookedGood>>, AppError> {
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let good = CookedGoodService::new(&repo).create_cooked_good(&payload).await?;
    Ok(Created::new(location(config, format_args!("/cooked-goods/{}", good.recipe_id))).body(Json(good)))
}

#[get("/")]
pub async fn list_cooked_goods(pool: &State<PgPool>, _caller: Authorized) -> Result<Json<Vec<CookedGood>>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(CookedGoodService::new(&repo).list_cooked_goods().await?))
}

#[get("/<recipe_id>")]
pub async fn get_cooked_good(pool: &State<PgPool>, _caller: Authorized, recipe_id: &str) -> Result<Json<CookedGood>, AppError> {
    let recipe_id = Uuid::parse_str(recipe_id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(CookedGoodService::new(&repo).get_cooked_good(&recipe_id).await?))
}

#[put("/<recipe_id>", data = "<payload>")]
pub async fn update_cooked_good(
    pool: &State<PgPool>,
    _caller: Authorized,
    recipe_id: &str,
    payload: JsonBody<UpdateCookedGoodRequest>,
) -> Result<Json<CookedGood>, AppError> {
    let recipe_id = Uuid::parse_str(recipe_id)?;
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(CookedGoodService::new(&repo).update_quantity(&recipe_id, payload.quantity).await?))
}

#[delete("/<recipe_id>")]
pub async fn delete_cooked_good(pool: &State<PgPool>, _caller: Authorized, recipe_id: &str) -> Result<Status, AppError> {
    let recipe_id = Uuid::parse_str(recipe_id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    CookedGoodService::new(&repo).delete_cooked_good(&recipe_id).await?;
    Ok(Status::NoContent)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![create_cooked_good, list_cooked_goods, get_cooked_good, update_cooked_good, delete_cooked_good]
}
