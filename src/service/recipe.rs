use crate::database::recipe::RecipeRepository;
use crate::error::app_error::AppError;
use crate::models::recipe::{Recipe, RecipeRequest, UpdateRecipeRequest};
use tracing::info;
use uuid::Uuid;

pub struct RecipeService<'a, R> {
    repo: &'a R,
}

impl<'a, R: RecipeRepository + Sync> RecipeService<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub async fn create_recipe(&self, request: &RecipeRequest) -> Result<Recipe, AppError> {
        self.repo.create_recipe(request).await
    }

    pub async fn get_recipe(&self, id: &Uuid) -> Result<Recipe, AppError> {
        self.repo.get_recipe_by_id(id).await?.ok_or_else(|| AppError::not_found("Recipe"))
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, AppError> {
        self.repo.list_recipes().await
    }

    pub async fn update_recipe(&self, id: &Uuid, request: &UpdateRecipeRequest) -> Result<Recipe, AppError> {
        self.repo.update_recipe(id, request).await?.ok_or_else(|| AppError::not_found("Recipe"))
    }

    /// Deletes the recipe along with its steps, ingredients and cooked goods.
    pub async fn delete_recipe(&self, id: &Uuid) -> Result<(), AppError> {
        if !self.repo.delete_recipe(id).await? {
            return Err(AppError::not_found("Recipe"));
        }
        info!(recipe_id = %id, "recipe deleted");
        Ok(())
    }
}
