use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::inventory::{InventoryItem, InventoryRequest, UpdateInventoryRequest};
use uuid::Uuid;

const INVENTORY_COLUMNS: &str = "id, name, quantity, purchase_quantity, cost_per_purchase_unit, unit, notes";

#[async_trait::async_trait]
pub trait InventoryRepository {
    async fn create_inventory_item(&self, request: &InventoryRequest) -> Result<InventoryItem, AppError>;
    async fn get_inventory_item(&self, id: &Uuid) -> Result<Option<InventoryItem>, AppError>;
    async fn get_inventory_item_by_name(&self, name: &str) -> Result<Option<InventoryItem>, AppError>;
    async fn list_inventory_items(&self) -> Result<Vec<InventoryItem>, AppError>;
    async fn update_inventory_item(&self, id: &Uuid, request: &UpdateInventoryRequest) -> Result<Option<InventoryItem>, AppError>;
    async fn delete_inventory_item(&self, id: &Uuid) -> Result<bool, AppError>;
}

#[async_trait::async_trait]
impl InventoryRepository for PostgresRepository {
    async fn create_inventory_item(&self, request: &InventoryRequest) -> Result<InventoryItem, AppError> {
        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            r#"
            INSERT INTO inventory_item (id, name, quantity, purchase_quantity, cost_per_purchase_unit, unit, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {INVENTORY_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(request.quantity)
        .bind(request.purchase_quantity)
        .bind(request.cost_per_purchase_unit)
        .bind(&request.unit)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn get_inventory_item(&self, id: &Uuid) -> Result<Option<InventoryItem>, AppError> {
        let item = sqlx::query_as::<_, InventoryItem>(&format!("SELECT {INVENTORY_COLUMNS} FROM inventory_item WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn get_inventory_item_by_name(&self, name: &str) -> Result<Option<InventoryItem>, AppError> {
        let item = sqlx::query_as::<_, InventoryItem>(&format!("SELECT {INVENTORY_COLUMNS} FROM inventory_item WHERE name = $1"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn list_inventory_items(&self) -> Result<Vec<InventoryItem>, AppError> {
        let items = sqlx::query_as::<_, InventoryItem>(&format!("SELECT {INVENTORY_COLUMNS} FROM inventory_item ORDER BY name"))
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn update_inventory_item(&self, id: &Uuid, request: &UpdateInventoryRequest) -> Result<Option<InventoryItem>, AppError> {
        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            r#"
            UPDATE inventory_item
            SET name = COALESCE($1, name),
                quantity = COALESCE($2, quantity),
                purchase_quantity = COALESCE($3, purchase_quantity),
                cost_per_purchase_unit = COALESCE($4, cost_per_purchase_unit),
                unit = COALESCE($5, unit),
                notes = COALESCE($6, notes)
            WHERE id = $7
            RETURNING {INVENTORY_COLUMNS}
            "#
        ))
        .bind(request.name.as_deref())
        .bind(request.quantity)
        .bind(request.purchase_quantity)
        .bind(request.cost_per_purchase_unit)
        .bind(request.unit.as_deref())
        .bind(request.notes.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn delete_inventory_item(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM inventory_item WHERE id = $1").bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }
}
