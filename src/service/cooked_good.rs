use crate::database::cooked_good::CookedGoodRepository;
use crate::database::recipe::RecipeRepository;
use crate::error::app_error::AppError;
use crate::models::cooked_good::{CookedGood, CookedGoodRequest};
use uuid::Uuid;

pub struct CookedGoodService<'a, R> {
    repo: &'a R,
}

impl<'a, R> CookedGoodService<'a, R>
where
    R: CookedGoodRepository + RecipeRepository + Sync,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Start tracking stock for a recipe. The good is named after the recipe.
    pub async fn create_cooked_good(&self, request: &CookedGoodRequest) -> Result<CookedGood, AppError> {
        let recipe = self.repo.get_recipe_by_id(&request.recipe_id).await?.ok_or_else(|| AppError::not_found("Recipe"))?;

        if self.repo.get_cooked_good(&recipe.id).await?.is_some() {
            return Err(AppError::Conflict(format!("Cooked good for '{}' already exists", recipe.name)));
        }

        self.repo.create_cooked_good(&recipe.id, &recipe.name, request.quantity).await
    }

    pub async fn get_cooked_good(&self, recipe_id: &Uuid) -> Result<CookedGood, AppError> {
        self.repo.get_cooked_good(recipe_id).await?.ok_or_else(|| AppError::not_found("Cooked good"))
    }

    pub async fn list_cooked_goods(&self) -> Result<Vec<CookedGood>, AppError> {
        self.repo.list_cooked_goods().await
    }

    pub async fn update_quantity(&self, recipe_id: &Uuid, quantity: i32) -> Result<CookedGood, AppError> {
        self.repo
            .update_cooked_good(recipe_id, quantity)
            .await?
            .ok_or_else(|| AppError::not_found("Cooked good"))
    }

    pub async fn delete_cooked_good(&self, recipe_id: &Uuid) -> Result<(), AppError> {
        if !self.repo.delete_cooked_good(recipe_id).await? {
            return Err(AppError::not_found("Cooked good"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{InMemoryRepository, sample_recipe_request};

    #[tokio::test]
    async fn name_comes_from_the_recipe() {
        let repo = InMemoryRepository::default();
        let service = CookedGoodService::new(&repo);
        let recipe = repo.create_recipe(&sample_recipe_request("Croissant")).await.unwrap();

        let good = service
            .create_cooked_good(&CookedGoodRequest {
                recipe_id: recipe.id,
                quantity: 12,
            })
            .await
            .unwrap();

        assert_eq!(good.name, "Croissant");
        assert_eq!(good.quantity, 12);
    }

    #[tokio::test]
    async fn one_per_recipe() {
        let repo = InMemoryRepository::default();
        let service = CookedGoodService::new(&repo);
        let recipe = repo.create_recipe(&sample_recipe_request("Croissant")).await.unwrap();
        let request = CookedGoodRequest {
            recipe_id: recipe.id,
            quantity: 12,
        };
        service.create_cooked_good(&request).await.unwrap();

        assert!(matches!(service.create_cooked_good(&request).await, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn unknown_recipe_is_not_found() {
        let repo = InMemoryRepository::default();
        let service = CookedGoodService::new(&repo);

        let result = service
            .create_cooked_good(&CookedGoodRequest {
                recipe_id: Uuid::new_v4(),
                quantity: 1,
            })
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn quantity_is_replaced() {
        let repo = InMemoryRepository::default();
        let service = CookedGoodService::new(&repo);
        let recipe = repo.create_recipe(&sample_recipe_request("Croissant")).await.unwrap();
        service
            .create_cooked_good(&CookedGoodRequest {
                recipe_id: recipe.id,
                quantity: 12,
            })
            .await
            .unwrap();

        assert_eq!(service.update_quantity(&recipe.id, 4).await.unwrap().quantity, 4);
        assert!(matches!(service.update_quantity(&Uuid::new_v4(), 4).await, Err(AppError::NotFound(_))));
    }
}
