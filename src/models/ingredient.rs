use rocket::serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An inventory item used by a recipe. `id` is only unique within its recipe.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Ingredient {
    pub id: i32,
    pub recipe_id: Uuid,
    pub inventory_id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub min_quantity: i32,
    pub unit: String,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct IngredientRequest {
    pub recipe_id: Uuid,
    pub inventory_id: Uuid,
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(range(min = 0))]
    pub quantity: i32,
    #[validate(range(min = 0))]
    pub min_quantity: i32,
    #[validate(length(max = 50))]
    pub unit: String,
}

#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateIngredientRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    #[validate(range(min = 0))]
    pub min_quantity: Option<i32>,
    #[validate(length(max = 50))]
    pub unit: Option<String>,
}

