use rocket::serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One step of a recipe's method. `id` is the 1-based position within the recipe.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CookStep {
    pub recipe_id: Uuid,
    pub id: i32,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct CookStepRequest {
    pub recipe_id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct UpdateCookStepRequest {
    #[validate(length(min = 1, max = 255))]
    pub description: String,
}
