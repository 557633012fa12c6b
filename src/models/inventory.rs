use rocket::serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub purchase_quantity: i32,
    pub cost_per_purchase_unit: f32,
    pub unit: String,
    pub notes: String,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct InventoryRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(range(min = 0))]
    pub quantity: i32,
    #[validate(range(min = 0))]
    pub purchase_quantity: i32,
    #[validate(range(min = 0.0))]
    pub cost_per_purchase_unit: f32,
    #[validate(length(max = 50))]
    pub unit: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub notes: String,
}

/// Partial inventory update. A present field always replaces the stored value.
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateInventoryRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    #[validate(range(min = 0))]
    pub purchase_quantity: Option<i32>,
    #[validate(range(min = 0.0))]
    pub cost_per_purchase_unit: Option<f32>,
    #[validate(length(max = 50))]
    pub unit: Option<String>,
    #[validate(length(max = 255))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{apply_inventory_update, inventory_from_request};

    #[test]
    fn new_quantity_replaces_old_one() {
        let mut item = inventory_from_request(
            Uuid::new_v4(),
            &InventoryRequest {
                name: "Flour".to_string(),
                quantity: 10,
                purchase_quantity: 25,
                cost_per_purchase_unit: 18.5,
                unit: "kg".to_string(),
                notes: String::new(),
            },
        );

        apply_inventory_update(
            &mut item,
            &UpdateInventoryRequest {
                quantity: Some(4),
                ..UpdateInventoryRequest::default()
            },
        );

        assert_eq!(item.quantity, 4);
        assert_eq!(item.purchase_quantity, 25);
        assert_eq!(item.name, "Flour");
    }

    #[test]
    fn notes_default_to_empty() {
        let request: InventoryRequest =
            serde_json::from_str(r#"{"name":"Salt","quantity":1,"purchase_quantity":1,"cost_per_purchase_unit":0.5,"unit":"kg"}"#).expect("valid body");
        assert_eq!(request.notes, "");
    }
}
