use crate::auth::Authorized;
use crate::config::Config;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::error::json::JsonBody;
use crate::models::inventory::{InventoryItem, InventoryRequest, UpdateInventoryRequest};
use crate::routes::location;
use crate::service::inventory::InventoryService;
use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put, routes};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

#[post("/", data = "<payload>")]
pub async fn create_item(
    pool: &State<PgPool>,
    config: &State<Config>,
    _caller: Authorized,
    payload: JsonBody<InventoryRequest>,
) -> Result<Created<Json<InventoryItem>>, AppError> {
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let item = InventoryService::new(&repo).create_item(&payload).await?;
    Ok(Created::new(location(config, format_args!("/inventory/{}", item.id))).body(Json(item)))
}

#[get("/")]
pub async fn list_items(pool: &State<PgPool>, _caller: Authorized) -> Result<Json<Vec<InventoryItem>>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(InventoryService::new(&repo).list_items().await?))
}

#[get("/<id>")]
pub async fn get_item(pool: &State<PgPool>, _caller: Authorized, id: &str) -> Result<Json<InventoryItem>, AppError> {
    let item_id = Uuid::parse_str(id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(InventoryService::new(&repo).get_item(&item_id).await?))
}

#[put("/<id>", data = "<payload>")]
pub async fn update_item(pool: &State<PgPool>, _caller: Authorized, id: &str, payload: JsonBody<UpdateInventoryRequest>) -> Result<Json<InventoryItem>, AppError> {
    let item_id = Uuid::parse_str(id)?;
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(InventoryService::new(&repo).update_item(&item_id, &payload).await?))
}

#[delete("/<id>")]
pub async fn delete_item(pool: &State<PgPool>, _caller: Authorized, id: &str) -> Result<Status, AppError> {
    let item_id = Uuid::parse_str(id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    InventoryService::new(&repo).delete_item(&item_id).await?;
    Ok(Status::NoContent)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![create_item, list_items, get_item, update_item, delete_item]
}
