use rocket::serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub prep_unit: String,
    pub cook_unit: String,
    pub rating: f32,
    pub prep_time: f32,
    pub cook_time: f32,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct RecipeRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(max = 255))]
    pub description: String,
    #[validate(length(max = 50))]
    pub prep_unit: String,
    #[validate(length(max = 50))]
    pub cook_unit: String,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f32,
    #[validate(range(min = 0.0))]
    pub prep_time: f32,
    #[validate(range(min = 0.0))]
    pub cook_time: f32,
}

/// Partial recipe update; absent fields keep their stored value.
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateRecipeRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub description: Option<String>,
    #[validate(length(max = 50))]
    pub prep_unit: Option<String>,
    #[validate(length(max = 50))]
    pub cook_unit: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f32>,
    #[validate(range(min = 0.0))]
    pub prep_time: Option<f32>,
    #[validate(range(min = 0.0))]
    pub cook_time: Option<f32>,
}
