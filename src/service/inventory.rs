use crate::database::inventory::InventoryRepository;
use crate::error::app_error::AppError;
use crate::models::inventory::{InventoryItem, InventoryRequest, UpdateInventoryRequest};
use uuid::Uuid;

pub struct InventoryService<'a, R> {
    repo: &'a R,
}

impl<'a, R: InventoryRepository + Sync> InventoryService<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    async fn ensure_name_free(&self, name: &str, except: Option<&Uuid>) -> Result<(), AppError> {
        match self.repo.get_inventory_item_by_name(name).await? {
            Some(existing) if Some(&existing.id) != except => Err(AppError::Conflict(format!("Inventory item '{}' already exists", name))),
            _ => Ok(()),
        }
    }

    pub async fn create_item(&self, request: &InventoryRequest) -> Result<InventoryItem, AppError> {
        self.ensure_name_free(&request.name, None).await?;
        self.repo.create_inventory_item(request).await
    }

    pub async fn get_item(&self, id: &Uuid) -> Result<InventoryItem, AppError> {
        self.repo.get_inventory_item(id).await?.ok_or_else(|| AppError::not_found("Inventory item"))
    }

    pub async fn list_items(&self) -> Result<Vec<InventoryItem>, AppError> {
        self.repo.list_inventory_items().await
    }

    pub async fn update_item(&self, id: &Uuid, request: &UpdateInventoryRequest) -> Result<InventoryItem, AppError> {
        if let Some(name) = &request.name {
            self.ensure_name_free(name, Some(id)).await?;
        }
        self.repo.update_inventory_item(id, request).await?.ok_or_else(|| AppError::not_found("Inventory item"))
    }

    /// Fails with a conflict while any ingredient still links to the item.
    pub async fn delete_item(&self, id: &Uuid) -> Result<(), AppError> {
        if !self.repo.delete_inventory_item(id).await? {
            return Err(AppError::not_found("Inventory item"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{InMemoryRepository, sample_inventory_request};

    #[tokio::test]
    async fn names_are_unique() {
        let repo = InMemoryRepository::default();
        let service = InventoryService::new(&repo);
        service.create_item(&sample_inventory_request("Flour")).await.unwrap();

        let result = service.create_item(&sample_inventory_request("Flour")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn renaming_checks_other_items_only() {
        let repo = InMemoryRepository::default();
        let service = InventoryService::new(&repo);
        let flour = service.create_item(&sample_inventory_request("Flour")).await.unwrap();
        service.create_item(&sample_inventory_request("Salt")).await.unwrap();

        let keep_name = UpdateInventoryRequest {
            name: Some("Flour".to_string()),
            quantity: Some(3),
            ..UpdateInventoryRequest::default()
        };
        assert_eq!(service.update_item(&flour.id, &keep_name).await.unwrap().quantity, 3);

        let steal_name = UpdateInventoryRequest {
            name: Some("Salt".to_string()),
            ..UpdateInventoryRequest::default()
        };
        assert!(matches!(service.update_item(&flour.id, &steal_name).await, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn missing_items_are_not_found() {
        let repo = InMemoryRepository::default();
        let service = InventoryService::new(&repo);

        assert!(matches!(service.get_item(&Uuid::new_v4()).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete_item(&Uuid::new_v4()).await, Err(AppError::NotFound(_))));
    }
}
