use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::cook_step::CookStep;
use crate::service::cook_step::{StepShift, next_step_number, shifts_after_removal};
use uuid::Uuid;

#[async_trait::async_trait]
pub trait CookStepRepository {
    /// Append a step at position `count + 1`. `None` if the recipe does not exist.
    async fn append_cook_step(&self, recipe_id: &Uuid, description: &str) -> Result<Option<CookStep>, AppError>;
    async fn get_cook_step(&self, recipe_id: &Uuid, id: i32) -> Result<Option<CookStep>, AppError>;
    /// Steps of a recipe in position order.
    async fn list_cook_steps(&self, recipe_id: &Uuid) -> Result<Vec<CookStep>, AppError>;
    async fn update_cook_step(&self, recipe_id: &Uuid, id: i32, description: &str) -> Result<Option<CookStep>, AppError>;
    /// Delete a step and close the gap it leaves, atomically.
    /// `None` if the step does not exist; otherwise the shifts that were applied.
    async fn remove_cook_step(&self, recipe_id: &Uuid, id: i32) -> Result<Option<Vec<StepShift>>, AppError>;
}

#[async_trait::async_trait]
impl CookStepRepository for PostgresRepository {
    async fn append_cook_step(&self, recipe_id: &Uuid, description: &str) -> Result<Option<CookStep>, AppError> {
        let mut tx = self.pool.begin().await?;

        // Serializes appends and removals on the same recipe.
        let locked: Option<Uuid> = sqlx::query_scalar("SELECT id FROM recipe WHERE id = $1 FOR UPDATE")
            .bind(recipe_id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cook_step WHERE recipe_id = $1")
            .bind(recipe_id)
            .fetch_one(&mut *tx)
            .await?;

        let step = sqlx::query_as::<_, CookStep>(
            r#"
            INSERT INTO cook_step (recipe_id, id, description)
            VALUES ($1, $2, $3)
            RETURNING recipe_id, id, description
            "#,
        )
        .bind(recipe_id)
        .bind(next_step_number(count))
        .bind(description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(step))
    }

    async fn get_cook_step(&self, recipe_id: &Uuid, id: i32) -> Result<Option<CookStep>, AppError> {
        let step = sqlx::query_as::<_, CookStep>("SELECT recipe_id, id, description FROM cook_step WHERE recipe_id = $1 AND id = $2")
            .bind(recipe_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(step)
    }

    async fn list_cook_steps(&self, recipe_id: &Uuid) -> Result<Vec<CookStep>, AppError> {
        let steps = sqlx::query_as::<_, CookStep>("SELECT recipe_id, id, description FROM cook_step WHERE recipe_id = $1 ORDER BY id")
            .bind(recipe_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(steps)
    }

    async fn update_cook_step(&self, recipe_id: &Uuid, id: i32, description: &str) -> Result<Option<CookStep>, AppError> {
        let step = sqlx::query_as::<_, CookStep>(
            r#"
            UPDATE cook_step
            SET description = $1
            WHERE recipe_id = $2 AND id = $3
            RETURNING recipe_id, id, description
            "#,
        )
        .bind(description)
        .bind(recipe_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(step)
    }

    async fn remove_cook_step(&self, recipe_id: &Uuid, id: i32) -> Result<Option<Vec<StepShift>>, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT id FROM recipe WHERE id = $1 FOR UPDATE")
            .bind(recipe_id)
            .execute(&mut *tx)
            .await?;

        let steps = sqlx::query_as::<_, CookStep>("SELECT recipe_id, id, description FROM cook_step WHERE recipe_id = $1 ORDER BY id")
            .bind(recipe_id)
            .fetch_all(&mut *tx)
            .await?;

        if !steps.iter().any(|step| step.id == id) {
            return Ok(None);
        }

        let shifts = shifts_after_removal(&steps, id);

        sqlx::query("DELETE FROM cook_step WHERE recipe_id = $1 AND id = $2")
            .bind(recipe_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // The position is part of the key, so each shift is a delete and a
        // re-insert. Ascending order means every target slot is already free.
        for shift in &shifts {
            let description: Option<String> = sqlx::query_scalar("DELETE FROM cook_step WHERE recipe_id = $1 AND id = $2 RETURNING description")
                .bind(recipe_id)
                .bind(shift.from)
                .fetch_optional(&mut *tx)
                .await?;

            let Some(description) = description else {
                return Err(AppError::Internal(format!("cook step {} vanished while renumbering recipe {}", shift.from, recipe_id)));
            };

            sqlx::query("INSERT INTO cook_step (recipe_id, id, description) VALUES ($1, $2, $3)")
                .bind(recipe_id)
                .bind(shift.to)
                .bind(description)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(Some(shifts))
    }
}
