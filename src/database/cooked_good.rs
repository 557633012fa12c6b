use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::cooked_good::CookedGood;
use uuid::Uuid;

#[async_trait::async_trait]
pub trait CookedGoodRepository {
    async fn create_cooked_good(&self, recipe_id: &Uuid, name: &str, quantity: i32) -> Result<CookedGood, AppError>;
    async fn get_cooked_good(&self, recipe_id: &Uuid) -> Result<Option<CookedGood>, AppError>;
    async fn list_cooked_goods(&self) -> Result<Vec<CookedGood>, AppError>;
    async fn update_cooked_good(&self, recipe_id: &Uuid, quantity: i32) -> Result<Option<CookedGood>, AppError>;
    async fn delete_cooked_good(&self, recipe_id: &Uuid) -> Result<bool, AppError>;
}

#[async_trait::async_trait]
impl CookedGoodRepository for PostgresRepository {
    async fn create_cooked_good(&self, recipe_id: &Uuid, name: &str, quantity: i32) -> Result<CookedGood, AppError> {
        let good = sqlx::query_as::<_, CookedGood>(
            r#"
            INSERT INTO cooked_good (recipe_id, name, quantity)
            VALUES ($1, $2, $3)
            RETURNING recipe_id, name, quantity
            "#,
        )
        .bind(recipe_id)
        .bind(name)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(good)
    }

    async fn get_cooked_good(&self, recipe_id: &Uuid) -> Result<Option<CookedGood>, AppError> {
        let good = sqlx::query_as::<_, CookedGood>("SELECT recipe_id, name, quantity FROM cooked_good WHERE recipe_id = $1")
            .bind(recipe_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(good)
    }

    async fn list_cooked_goods(&self) -> Result<Vec<CookedGood>, AppError> {
        let goods = sqlx::query_as::<_, CookedGood>("SELECT recipe_id, name, quantity FROM cooked_good ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(goods)
    }

    async fn update_cooked_good(&self, recipe_id: &Uuid, quantity: i32) -> Result<Option<CookedGood>, AppError> {
        let good = sqlx::query_as::<_, CookedGood>(
            r#"
            UPDATE cooked_good
            SET quantity = $1
            WHERE recipe_id = $2
            RETURNING recipe_id, name, quantity
            "#,
        )
        .bind(quantity)
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(good)
    }

    async fn delete_cooked_good(&self, recipe_id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cooked_good WHERE recipe_id = $1").bind(recipe_id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }
}
