use crate::auth::Authorized;
use crate::config::Config;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::error::json::JsonBody;
use crate::models::ingredient::{Ingredient, IngredientRequest, UpdateIngredientRequest};
use crate::routes::location;
use crate::service::ingredient::IngredientService;
use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put, routes};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

#[post("/", data = "<payload>")]
pub async fn create_ingredient(
    pool: &State<PgPool>,
    config: &State<Config>,
    _caller: Authorized,
    payload: JsonBody<IngredientRequest>,
) -> Result<Created<Json<Ingredient>>, AppError> {
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let ingredient = IngredientService::new(&repo).create_ingredient(&payload).await?;
    Ok(Created::new(location(config, format_args!("/ingredients/{}/{}", ingredient.recipe_id, ingredient.id))).body(Json(ingredient)))
}

#[get("/<recipe_id>")]
pub async fn list_ingredients(pool: &State<PgPool>, _caller: Authorized, recipe_id: &str) -> Result<Json<Vec<Ingredient>>, AppError> {
    let recipe_id = Uuid::parse_str(recipe_id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(IngredientService::new(&repo).list_ingredients(&recipe_id).await?))
}

#[get("/<recipe_id>/<id>")]
pub async fn get_ingredient(pool: &State<PgPool>, _caller: Authorized, recipe_id: &str, id: i32) -> Result<Json<Ingredient>, AppError> {
    let recipe_id = Uuid::parse_str(recipe_id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(IngredientService::new(&repo).get_ingredient(&recipe_id, id).await?))
}

#[put("/<recipe_id>/<id>", data = "<payload>")]
pub async fn update_ingredient(
    pool: &State<PgPool>,
    _caller: Authorized,
    recipe_id: &str,
    id: i32,
    payload: JsonBody<UpdateIngredientRequest>,
) -> Result<Json<Ingredient>, AppError> {
    let recipe_id = Uuid::parse_str(recipe_id)?;
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(IngredientService::new(&repo).update_ingredient(&recipe_id, id, &payload).await?))
}

#[delete("/<recipe_id>/<id>")]
pub async fn delete_ingredient(pool: &State<PgPool>, _caller: Authorized, recipe_id: &str, id: i32) -> Result<Status, AppError> {
    let recipe_id = Uuid::parse_str(recipe_id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    IngredientService::new(&repo).delete_ingredient(&recipe_id, id).await?;
    Ok(Status::NoContent)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![create_ingredient, list_ingredients, get_ingredient, update_ingredient, delete_ingredient]
}
