use rocket::serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Baked stock on hand for a recipe. There is at most one per recipe.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CookedGood {
    pub recipe_id: Uuid,
    pub name: String,
    pub quantity: i32,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct CookedGoodRequest {
    pub recipe_id: Uuid,
    #[validate(range(min = 0))]
    pub quantity: i32,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct UpdateCookedGoodRequest {
    #[validate(range(min = 0))]
    pub quantity: i32,
}
