use crate::auth::Authorized;
use crate::config::Config;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::error::json::JsonBody;
use crate::models::recipe::{Recipe, RecipeRequest, UpdateRecipeRequest};
use crate::routes::location;
use crate::service::recipe::RecipeService;
use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put, routes};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

#[post("/", data = "<payload>")]
pub async fn create_recipe(
    pool: &State<PgPool>,
    config: &State<Config>,
    _caller: Authorized,
    payload: JsonBody<RecipeRequest>,
) -> Result<Created<Json<Recipe>>, AppError> {
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let recipe = RecipeService::new(&repo).create_recipe(&payload).await?;
    Ok(Created::new(location(config, format_args!("/recipes/{}", recipe.id))).body(Json(recipe)))
}

#[get("/")]
pub async fn list_recipes(pool: &State<PgPool>, _caller: Authorized) -> Result<Json<Vec<Recipe>>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(RecipeService::new(&repo).list_recipes().await?))
}

#[get("/<id>")]
pub async fn get_recipe(pool: &State<PgPool>, _caller: Authorized, id: &str) -> Result<Json<Recipe>, AppError> {
    let recipe_id = Uuid::parse_str(id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(RecipeService::new(&repo).get_recipe(&recipe_id).await?))
}

#[put("/<id>", data = "<payload>")]
pub async fn update_recipe(pool: &State<PgPool>, _caller: Authorized, id: &str, payload: JsonBody<UpdateRecipeRequest>) -> Result<Json<Recipe>, AppError> {
    let recipe_id = Uuid::parse_str(id)?;
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(RecipeService::new(&repo).update_recipe(&recipe_id, &payload).await?))
}

#[delete("/<id>")]
pub async fn delete_recipe(pool: &State<PgPool>, _caller: Authorized, id: &str) -> Result<Status, AppError> {
    let recipe_id = Uuid::parse_str(id)?;
    let repo = PostgresRepository { pool: pool.inner().clone() };
    RecipeService::new(&repo).delete_recipe(&recipe_id).await?;
    Ok(Status::NoContent)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![create_recipe, list_recipes, get_recipe, update_recipe, delete_recipe]
}
