// ABOUTME: Shopping list commands for larder-cli
// ABOUTME: Adds, removes and lists items and moves bought items into the inventory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use larder::errors::{AppError, AppResult};
use larder::models::ShoppingItem;
use larder::services::KitchenState;
use larder::validation::parse_unit;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::helpers::display::print_json;

/// Fields for a new shopping list item
pub struct NewShoppingItem {
    /// Item name
    pub name: String,
    /// Amount to buy
    pub amount: f64,
    /// Unit name, parsed case-insensitively
    pub unit: String,
    /// Category carried into the inventory
    pub category: Option<String>,
    /// Who asked for the item
    pub added_by: Option<String>,
    /// Expected price
    pub estimated_price: Option<f64>,
}

/// Put an item on the list
pub fn add(state: &mut KitchenState, new: NewShoppingItem, save_to: Option<&Path>) -> AppResult<()> {
    let unit = parse_unit(&new.unit).map_err(AppError::from)?;
    let mut item = ShoppingItem::new(new.name, new.amount, unit);
    item.category = new.category;
    item.added_by = new.added_by;
    item.estimated_price = new.estimated_price;

    let id = state.add_shopping_item(item)?;
    persist_list(state, save_to)?;
    print_json(&json!({ "id": id, "message": "Item added to shopping list" }))
}

/// Take an item off the list without buying it
pub fn remove(state: &mut KitchenState, id: Uuid, save_to: Option<&Path>) -> AppResult<()> {
    let removed = state.remove_shopping_item(id)?;
    persist_list(state, save_to)?;
    print_json(&removed)
}

/// Print the list
pub fn list(state: &KitchenState) -> AppResult<()> {
    print_json(&state.shopping)
}

/// Move a bought item into the inventory
pub fn bought(
    state: &mut KitchenState,
    id: Uuid,
    purchased_by: Option<&str>,
    save_to: Option<(&Path, &Path)>,
) -> AppResult<()> {
    let stocked = state.mark_bought(id, purchased_by)?;
    if let Some((shopping_path, inventory_path)) = save_to {
        state.save_inventory(inventory_path)?;
        state.save_shopping_list(shopping_path)?;
        info!(
            shopping = %shopping_path.display(),
            inventory = %inventory_path.display(),
            "Shopping list and inventory saved"
        );
    }
    print_json(&stocked)
}

fn persist_list(state: &KitchenState, save_to: Option<&Path>) -> AppResult<()> {
    if let Some(path) = save_to {
        state.save_shopping_list(path)?;
        info!(path = %path.display(), "Shopping list saved");
    }
    Ok(())
}
