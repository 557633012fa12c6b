use crate::database::ingredient::IngredientRepository;
use crate::database::inventory::InventoryRepository;
use crate::database::recipe::RecipeRepository;
use crate::error::app_error::AppError;
use crate::models::ingredient::{Ingredient, IngredientRequest, UpdateIngredientRequest};
use uuid::Uuid;

pub struct IngredientService<'a, R> {
    repo: &'a R,
}

impl<'a, R> IngredientService<'a, R>
where
    R: IngredientRepository + RecipeRepository + InventoryRepository + Sync,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    async fn ensure_recipe(&self, recipe_id: &Uuid) -> Result<(), AppError> {
        match self.repo.get_recipe_by_id(recipe_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Recipe")),
        }
    }

    /// Link an inventory item to a recipe. Each pair may be linked once.
    pub async fn create_ingredient(&self, request: &IngredientRequest) -> Result<Ingredient, AppError> {
        self.ensure_recipe(&request.recipe_id).await?;
        if self.repo.get_inventory_item(&request.inventory_id).await?.is_none() {
            return Err(AppError::not_found("Inventory item"));
        }
        if self.repo.find_ingredient_link(&request.recipe_id, &request.inventory_id).await?.is_some() {
            return Err(AppError::Conflict("Inventory item is already an ingredient of this recipe".to_string()));
        }

        self.repo.create_ingredient(request).await
    }

    pub async fn list_ingredients(&self, recipe_id: &Uuid) -> Result<Vec<Ingredient>, AppError> {
        self.ensure_recipe(recipe_id).await?;
        self.repo.list_ingredients(recipe_id).await
    }

    pub async fn get_ingredient(&self, recipe_id: &Uuid, id: i32) -> Result<Ingredient, AppError> {
        self.repo.get_ingredient(recipe_id, id).await?.ok_or_else(|| AppError::not_found("Ingredient"))
    }

    pub async fn update_ingredient(&self, recipe_id: &Uuid, id: i32, request: &UpdateIngredientRequest) -> Result<Ingredient, AppError> {
        self.repo
            .update_ingredient(recipe_id, id, request)
            .await?
            .ok_or_else(|| AppError::not_found("Ingredient"))
    }

    pub async fn delete_ingredient(&self, recipe_id: &Uuid, id: i32) -> Result<(), AppError> {
        if !self.repo.delete_ingredient(recipe_id, id).await? {
            return Err(AppError::not_found("Ingredient"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{InMemoryRepository, sample_inventory_request, sample_recipe_request};

    fn link(recipe_id: Uuid, inventory_id: Uuid, name: &str) -> IngredientRequest {
        IngredientRequest {
            recipe_id,
            inventory_id,
            name: name.to_string(),
            quantity: 500,
            min_quantity: 450,
            unit: "g".to_string(),
        }
    }

    #[tokio::test]
    async fn ids_count_up_within_a_recipe() {
        let repo = InMemoryRepository::default();
        let service = IngredientService::new(&repo);
        let bread = repo.create_recipe(&sample_recipe_request("Bread")).await.unwrap();
        let flour = repo.create_inventory_item(&sample_inventory_request("Flour")).await.unwrap();
        let salt = repo.create_inventory_item(&sample_inventory_request("Salt")).await.unwrap();

        let first = service.create_ingredient(&link(bread.id, flour.id, "flour")).await.unwrap();
        let second = service.create_ingredient(&link(bread.id, salt.id, "salt")).await.unwrap();

        assert_eq!((first.id, second.id), (1, 2));
    }

    #[tokio::test]
    async fn linking_twice_is_a_conflict() {
        let repo = InMemoryRepository::default();
        let service = IngredientService::new(&repo);
        let bread = repo.create_recipe(&sample_recipe_request("Bread")).await.unwrap();
        let flour = repo.create_inventory_item(&sample_inventory_request("Flour")).await.unwrap();
        service.create_ingredient(&link(bread.id, flour.id, "flour")).await.unwrap();

        let result = service.create_ingredient(&link(bread.id, flour.id, "more flour")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn recipe_and_inventory_must_exist() {
        let repo = InMemoryRepository::default();
        let service = IngredientService::new(&repo);
        let bread = repo.create_recipe(&sample_recipe_request("Bread")).await.unwrap();
        let flour = repo.create_inventory_item(&sample_inventory_request("Flour")).await.unwrap();

        let no_recipe = service.create_ingredient(&link(Uuid::new_v4(), flour.id, "flour")).await;
        let no_item = service.create_ingredient(&link(bread.id, Uuid::new_v4(), "flour")).await;

        assert!(matches!(no_recipe, Err(AppError::NotFound(_))));
        assert!(matches!(no_item, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn linked_inventory_cannot_be_deleted() {
        let repo = InMemoryRepository::default();
        let service = IngredientService::new(&repo);
        let bread = repo.create_recipe(&sample_recipe_request("Bread")).await.unwrap();
        let flour = repo.create_inventory_item(&sample_inventory_request("Flour")).await.unwrap();
        let ingredient = service.create_ingredient(&link(bread.id, flour.id, "flour")).await.unwrap();

        assert!(matches!(repo.delete_inventory_item(&flour.id).await, Err(AppError::Conflict(_))));

        service.delete_ingredient(&bread.id, ingredient.id).await.unwrap();
        assert!(repo.delete_inventory_item(&flour.id).await.unwrap());
    }
}
