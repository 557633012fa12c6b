use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::recipe::{Recipe, RecipeRequest, UpdateRecipeRequest};
use uuid::Uuid;

const RECIPE_COLUMNS: &str = "id, name, description, prep_unit, cook_unit, rating, prep_time, cook_time";

#[async_trait::async_trait]
pub trait RecipeRepository {
    async fn create_recipe(&self, request: &RecipeRequest) -> Result<Recipe, AppError>;
    async fn get_recipe_by_id(&self, id: &Uuid) -> Result<Option<Recipe>, AppError>;
    async fn list_recipes(&self) -> Result<Vec<Recipe>, AppError>;
    async fn update_recipe(&self, id: &Uuid, request: &UpdateRecipeRequest) -> Result<Option<Recipe>, AppError>;
    /// Remove the recipe with its cook steps, ingredients and cooked good.
    async fn delete_recipe(&self, id: &Uuid) -> Result<bool, AppError>;
}

#[async_trait::async_trait]
impl RecipeRepository for PostgresRepository {
    async fn create_recipe(&self, request: &RecipeRequest) -> Result<Recipe, AppError> {
        let recipe = sqlx::query_as::<_, Recipe>(&format!(
            r#"
            INSERT INTO recipe (id, name, description, prep_unit, cook_unit, rating, prep_time, cook_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {RECIPE_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.prep_unit)
        .bind(&request.cook_unit)
        .bind(request.rating)
        .bind(request.prep_time)
        .bind(request.cook_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(recipe)
    }

    async fn get_recipe_by_id(&self, id: &Uuid) -> Result<Option<Recipe>, AppError> {
        let recipe = sqlx::query_as::<_, Recipe>(&format!("SELECT {RECIPE_COLUMNS} FROM recipe WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(recipe)
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>, AppError> {
        let recipes = sqlx::query_as::<_, Recipe>(&format!("SELECT {RECIPE_COLUMNS} FROM recipe ORDER BY name"))
            .fetch_all(&self.pool)
            .await?;

        Ok(recipes)
    }

    async fn update_recipe(&self, id: &Uuid, request: &UpdateRecipeRequest) -> Result<Option<Recipe>, AppError> {
        let mut tx = self.pool.begin().await?;

        let recipe = sqlx::query_as::<_, Recipe>(&format!(
            r#"
            UPDATE recipe
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                prep_unit = COALESCE($3, prep_unit),
                cook_unit = COALESCE($4, cook_unit),
                rating = COALESCE($5, rating),
                prep_time = COALESCE($6, prep_time),
                cook_time = COALESCE($7, cook_time)
            WHERE id = $8
            RETURNING {RECIPE_COLUMNS}
            "#
        ))
        .bind(request.name.as_deref())
        .bind(request.description.as_deref())
        .bind(request.prep_unit.as_deref())
        .bind(request.cook_unit.as_deref())
        .bind(request.rating)
        .bind(request.prep_time)
        .bind(request.cook_time)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        // A cooked good carries its recipe's name.
        if let (Some(recipe), Some(_)) = (&recipe, &request.name) {
            sqlx::query("UPDATE cooked_good SET name = $1 WHERE recipe_id = $2")
                .bind(&recipe.name)
                .bind(recipe.id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(recipe)
    }

    async fn delete_recipe(&self, id: &Uuid) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        for table in ["cook_step", "ingredient", "cooked_good"] {
            sqlx::query(&format!("DELETE FROM {table} WHERE recipe_id = $1"))
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        let deleted = sqlx::query("DELETE FROM recipe WHERE id = $1").bind(id).execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(deleted.rows_affected() > 0)
    }
}
