use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::ingredient::{Ingredient, IngredientRequest, UpdateIngredientRequest};
use uuid::Uuid;

const INGREDIENT_COLUMNS: &str = "id, recipe_id, inventory_id, name, quantity, min_quantity, unit";

#[async_trait::async_trait]
pub trait IngredientRepository {
    /// Insert under the next free per-recipe id.
    async fn create_ingredient(&self, request: &IngredientRequest) -> Result<Ingredient, AppError>;
    async fn get_ingredient(&self, recipe_id: &Uuid, id: i32) -> Result<Option<Ingredient>, AppError>;
    async fn find_ingredient_link(&self, recipe_id: &Uuid, inventory_id: &Uuid) -> Result<Option<Ingredient>, AppError>;
    async fn list_ingredients(&self, recipe_id: &Uuid) -> Result<Vec<Ingredient>, AppError>;
    async fn update_ingredient(&self, recipe_id: &Uuid, id: i32, request: &UpdateIngredientRequest) -> Result<Option<Ingredient>, AppError>;
    async fn delete_ingredient(&self, recipe_id: &Uuid, id: i32) -> Result<bool, AppError>;
}

#[async_trait::async_trait]
impl IngredientRepository for PostgresRepository {
    async fn create_ingredient(&self, request: &IngredientRequest) -> Result<Ingredient, AppError> {
        let ingredient = sqlx::query_as::<_, Ingredient>(&format!(
            r#"
            INSERT INTO ingredient (id, recipe_id, inventory_id, name, quantity, min_quantity, unit)
            SELECT COALESCE(MAX(id), 0) + 1, $1, $2, $3, $4, $5, $6
            FROM ingredient
            WHERE recipe_id = $1
            RETURNING {INGREDIENT_COLUMNS}
            "#
        ))
        .bind(request.recipe_id)
        .bind(request.inventory_id)
        .bind(&request.name)
        .bind(request.quantity)
        .bind(request.min_quantity)
        .bind(&request.unit)
        .fetch_one(&self.pool)
        .await?;

        Ok(ingredient)
    }

    async fn get_ingredient(&self, recipe_id: &Uuid, id: i32) -> Result<Option<Ingredient>, AppError> {
        let ingredient = sqlx::query_as::<_, Ingredient>(&format!("SELECT {INGREDIENT_COLUMNS} FROM ingredient WHERE recipe_id = $1 AND id = $2"))
            .bind(recipe_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ingredient)
    }

    async fn find_ingredient_link(&self, recipe_id: &Uuid, inventory_id: &Uuid) -> Result<Option<Ingredient>, AppError> {
        let ingredient = sqlx::query_as::<_, Ingredient>(&format!(
            "SELECT {INGREDIENT_COLUMNS} FROM ingredient WHERE recipe_id = $1 AND inventory_id = $2"
        ))
        .bind(recipe_id)
        .bind(inventory_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ingredient)
    }

    async fn list_ingredients(&self, recipe_id: &Uuid) -> Result<Vec<Ingredient>, AppError> {
        let ingredients = sqlx::query_as::<_, Ingredient>(&format!("SELECT {INGREDIENT_COLUMNS} FROM ingredient WHERE recipe_id = $1 ORDER BY id"))
            .bind(recipe_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(ingredients)
    }

    async fn update_ingredient(&self, recipe_id: &Uuid, id: i32, request: &UpdateIngredientRequest) -> Result<Option<Ingredient>, AppError> {
        let ingredient = sqlx::query_as::<_, Ingredient>(&format!(
            r#"
            UPDATE ingredient
            SET name = COALESCE($1, name),
                quantity = COALESCE($2, quantity),
                min_quantity = COALESCE($3, min_quantity),
                unit = COALESCE($4, unit)
            WHERE recipe_id = $5 AND id = $6
            RETURNING {INGREDIENT_COLUMNS}
            "#
        ))
        .bind(request.name.as_deref())
        .bind(request.quantity)
        .bind(request.min_quantity)
        .bind(request.unit.as_deref())
        .bind(recipe_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ingredient)
    }

    async fn delete_ingredient(&self, recipe_id: &Uuid, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM ingredient WHERE recipe_id = $1 AND id = $2")
            .bind(recipe_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
