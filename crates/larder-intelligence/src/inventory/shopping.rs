// ABOUTME: Moves bought shopping list items into the inventory
// ABOUTME: Carries amount, unit and category across and stamps purchase time and buyer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use larder_core::errors::AppError;
use larder_core::models::{Inventory, InventoryItem, ShoppingList};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Errors from marking a shopping list item as bought
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShoppingError {
    /// No shopping list item has this identifier
    #[error("Shopping item {0} not found")]
    ItemNotFound(Uuid),
}

impl From<ShoppingError> for AppError {
    fn from(error: ShoppingError) -> Self {
        match error {
            ShoppingError::ItemNotFound(id) => {
                Self::not_found("Shopping item").with_resource_id(id.to_string())
            }
        }
    }
}

/// Take item `id` off the list and stock it as a new inventory item
///
/// The new item is stamped as purchased now by `purchased_by`. Both
/// collections are left untouched when the item is not on the list.
///
/// # Errors
///
/// Returns [`ShoppingError::ItemNotFound`] when no item has that identifier.
pub fn mark_bought(
    list: &mut ShoppingList,
    inventory: &mut Inventory,
    id: Uuid,
    purchased_by: Option<&str>,
) -> Result<InventoryItem, ShoppingError> {
    let bought = list.remove(id).ok_or(ShoppingError::ItemNotFound(id))?;

    let item = InventoryItem {
        id: Uuid::new_v4(),
        name: bought.name,
        amount: bought.amount,
        unit: bought.unit,
        low_stock_threshold: None,
        category: bought.category,
        purchased_at: Some(Utc::now()),
        purchased_by: purchased_by.map(str::to_owned),
    };
    info!(
        shopping.id = %id,
        item.id = %item.id,
        ingredient = %item.name,
        "Moved bought item into inventory"
    );
    inventory.add(item.clone());
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::errors::ErrorCode;
    use larder_core::models::{IngredientUnit, ShoppingItem};
    use std::iter;

    fn list_with(item: ShoppingItem) -> ShoppingList {
        iter::once(item).collect()
    }

    #[test]
    fn test_bought_item_moves_with_metadata() {
        let milk = ShoppingItem::new("Milk", 2.0, IngredientUnit::Liters)
            .with_category("dairy")
            .with_added_by("alex");
        let milk_id = milk.id;
        let mut list = list_with(milk);
        let mut inventory = Inventory::new();

        let before = Utc::now();
        let stocked = mark_bought(&mut list, &mut inventory, milk_id, Some("sam")).unwrap();

        assert_eq!(stocked.name, "Milk");
        assert!((stocked.amount - 2.0).abs() < f64::EPSILON);
        assert_eq!(stocked.unit, IngredientUnit::Liters);
        assert_eq!(stocked.category.as_deref(), Some("dairy"));
        assert_eq!(stocked.purchased_by.as_deref(), Some("sam"));
        assert!(stocked.purchased_at.unwrap() >= before);
        assert_ne!(stocked.id, milk_id);

        assert!(list.is_empty());
        assert_eq!(inventory.get(stocked.id), Some(&stocked));
    }

    #[test]
    fn test_existing_stock_is_not_merged() {
        let mut inventory: Inventory =
            iter::once(InventoryItem::new("Eggs", 4.0, IngredientUnit::Pieces)).collect();
        let eggs = ShoppingItem::new("Eggs", 12.0, IngredientUnit::Pieces);
        let eggs_id = eggs.id;
        let mut list = list_with(eggs);

        let stocked = mark_bought(&mut list, &mut inventory, eggs_id, None).unwrap();
        assert!(stocked.purchased_by.is_none());
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_unknown_item_leaves_both_collections_alone() {
        let bread = ShoppingItem::new("Bread", 1.0, IngredientUnit::Units);
        let mut list = list_with(bread.clone());
        let mut inventory = Inventory::new();
        let missing = Uuid::new_v4();

        let err = mark_bought(&mut list, &mut inventory, missing, Some("sam")).unwrap_err();
        assert_eq!(err, ShoppingError::ItemNotFound(missing));
        assert_eq!(list.get(bread.id), Some(&bread));
        assert!(inventory.is_empty());

        let app_error = AppError::from(err);
        assert_eq!(app_error.code, ErrorCode::ResourceNotFound);
        assert_eq!(app_error.context.resource_id, Some(missing.to_string()));
    }
}
