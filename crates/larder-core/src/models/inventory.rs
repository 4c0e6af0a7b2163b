// ABOUTME: Inventory models for items the user currently has in stock
// ABOUTME: InventoryItem with amount, unit and low-stock threshold plus the Inventory collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::slice::Iter;
use uuid::Uuid;

use super::unit::IngredientUnit;

/// Single item in stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Item identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Item name
    pub name: String,
    /// Amount in stock
    pub amount: f64,
    /// Unit of `amount`
    pub unit: IngredientUnit,
    /// Alert when the amount drops to or below this value
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "lowStockThreshold")]
    pub low_stock_threshold: Option<f64>,
    /// Free-form category (produce, dairy, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// When the item was purchased
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "purchasedAt")]
    pub purchased_at: Option<DateTime<Utc>>,
    /// Who purchased the item
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "purchasedBy")]
    pub purchased_by: Option<String>,
}

impl InventoryItem {
    /// Create an item purchased now
    #[must_use]
    pub fn new(name: impl Into<String>, amount: f64, unit: IngredientUnit) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            unit,
            low_stock_threshold: None,
            category: None,
            purchased_at: Some(Utc::now()),
            purchased_by: None,
        }
    }

    /// Set the low-stock threshold
    #[must_use]
    pub const fn with_low_stock_threshold(mut self, threshold: f64) -> Self {
        self.low_stock_threshold = Some(threshold);
        self
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether `amount` is at or below a positive low-stock threshold
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.low_stock_threshold
            .is_some_and(|threshold| threshold > 0.0 && self.amount <= threshold)
    }
}

/// Items the user has in stock
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    /// Create an empty inventory
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item
    pub fn add(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    /// Find the first item whose name equals `name`, ignoring case and surrounding whitespace
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&InventoryItem> {
        let wanted = name.trim().to_lowercase();
        self.items
            .iter()
            .find(|item| item.name.trim().to_lowercase() == wanted)
    }

    /// Mutable lookup by name, same rules as [`Inventory::find_by_name`]
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut InventoryItem> {
        let wanted = name.trim().to_lowercase();
        self.items
            .iter_mut()
            .find(|item| item.name.trim().to_lowercase() == wanted)
    }

    /// Look up an item by identifier
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutable lookup by identifier
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut InventoryItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Remove an item by identifier
    pub fn remove(&mut self, id: Uuid) -> Option<InventoryItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items
    pub fn iter(&self) -> Iter<'_, InventoryItem> {
        self.items.iter()
    }
}

impl FromIterator<InventoryItem> for Inventory {
    fn from_iter<I: IntoIterator<Item = InventoryItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a InventoryItem;
    type IntoIter = Iter<'a, InventoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
