use crate::database::cook_step::CookStepRepository;
use crate::database::recipe::RecipeRepository;
use crate::error::app_error::AppError;
use crate::models::cook_step::{CookStep, CookStepRequest};
use tracing::info;
use uuid::Uuid;

/// A step moving from position `from` to position `to` within its recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepShift {
    pub from: i32,
    pub to: i32,
}

/// Position for a step appended to a recipe that currently has `count` steps.
pub fn next_step_number(count: i64) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX - 1) + 1
}

/// Moves that close the gap left by removing position `removed`.
///
/// Works on the positions as an ordered list: remove at index, then reindex
/// everything after it. The result is in ascending `from` order, which is the
/// order the moves must be applied in so no target slot is still occupied.
pub fn shifts_after_removal(steps: &[CookStep], removed: i32) -> Vec<StepShift> {
    let mut positions: Vec<i32> = steps.iter().map(|step| step.id).collect();
    positions.sort_unstable();

    let Some(index) = positions.iter().position(|&position| position == removed) else {
        return Vec::new();
    };
    positions.remove(index);

    positions
        .iter()
        .enumerate()
        .skip(index)
        .filter_map(|(slot, &from)| {
            let to = slot as i32 + 1;
            (from != to).then_some(StepShift { from, to })
        })
        .collect()
}

pub struct CookStepService<'a, R> {
    repo: &'a R,
}

impl<'a, R> CookStepService<'a, R>
where
    R: CookStepRepository + RecipeRepository + Sync,
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

    pub async fn add_step(&self, request: &CookStepRequest) -> Result<CookStep, AppError> {
        self.repo
            .append_cook_step(&request.recipe_id, &request.description)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))
    }

    pub async fn list_steps(&self, recipe_id: &Uuid) -> Result<Vec<CookStep>, AppError> {
        self.ensure_recipe(recipe_id).await?;
        self.repo.list_cook_steps(recipe_id).await
    }

    pub async fn get_step(&self, recipe_id: &Uuid, id: i32) -> Result<CookStep, AppError> {
        self.ensure_recipe(recipe_id).await?;
        self.repo.get_cook_step(recipe_id, id).await?.ok_or_else(|| AppError::not_found("Cook step"))
    }

    pub async fn update_step(&self, recipe_id: &Uuid, id: i32, description: &str) -> Result<CookStep, AppError> {
        self.ensure_recipe(recipe_id).await?;
        self.repo
            .update_cook_step(recipe_id, id, description)
            .await?
            .ok_or_else(|| AppError::not_found("Cook step"))
    }

    /// Delete a step and renumber the ones after it so positions stay 1..N.
    pub async fn delete_step(&self, recipe_id: &Uuid, id: i32) -> Result<(), AppError> {
        self.ensure_recipe(recipe_id).await?;

        let shifts = self.repo.remove_cook_step(recipe_id, id).await?.ok_or_else(|| AppError::not_found("Cook step"))?;

        info!(recipe_id = %recipe_id, removed = id, renumbered = shifts.len(), "cook step removed");
        Ok(())
    }
}
