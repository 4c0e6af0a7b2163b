// ABOUTME: Shopping list models for items the household still has to buy
// ABOUTME: ShoppingItem with amount, unit and purchase hints plus the ShoppingList collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::slice::Iter;
use uuid::Uuid;

use super::unit::IngredientUnit;

const fn default_amount() -> f64 {
    1.0
}

const fn default_unit() -> IngredientUnit {
    IngredientUnit::Units
}

/// Single entry on the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Item identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Item name
    pub name: String,
    /// Amount to buy, one unit when absent
    #[serde(default = "default_amount")]
    pub amount: f64,
    /// Unit of `amount`
    #[serde(default = "default_unit")]
    pub unit: IngredientUnit,
    /// Free-form category, carried into the inventory when bought
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Expected price
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "estimatedPrice")]
    pub estimated_price: Option<f64>,
    /// Who put the item on the list
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "addedBy")]
    pub added_by: Option<String>,
    /// When the item was put on the list
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "addedAt")]
    pub added_at: Option<DateTime<Utc>>,
}

impl ShoppingItem {
    /// Create an item added now
    #[must_use]
    pub fn new(name: impl Into<String>, amount: f64, unit: IngredientUnit) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            unit,
            category: None,
            estimated_price: None,
            added_by: None,
            added_at: Some(Utc::now()),
        }
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set who added the item
    #[must_use]
    pub fn with_added_by(mut self, user: impl Into<String>) -> Self {
        self.added_by = Some(user.into());
        self
    }

    /// Set the expected price
    #[must_use]
    pub const fn with_estimated_price(mut self, price: f64) -> Self {
        self.estimated_price = Some(price);
        self
    }
}

/// Items still to buy, shared by everyone in the household
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item
    pub fn add(&mut self, item: ShoppingItem) {
        self.items.push(item);
    }

    /// Look up an item by identifier
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether an item with this identifier is on the list
    #[must_use]
    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// Remove an item by identifier
    pub fn remove(&mut self, id: Uuid) -> Option<ShoppingItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in the order they were added
    pub fn iter(&self) -> Iter<'_, ShoppingItem> {
        self.items.iter()
    }
}

impl FromIterator<ShoppingItem> for ShoppingList {
    fn from_iter<I: IntoIterator<Item = ShoppingItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a ShoppingItem;
    type IntoIter = Iter<'a, ShoppingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_document_defaults_to_one_unit() {
        let list: ShoppingList = serde_json::from_str(
            r#"[{"name": "Milk", "addedBy": "sam", "estimatedPrice": 1.2}]"#,
        )
        .unwrap();
        let item = list.iter().next().unwrap();
        assert!((item.amount - 1.0).abs() < f64::EPSILON);
        assert_eq!(item.unit, IngredientUnit::Units);
        assert_eq!(item.added_by.as_deref(), Some("sam"));
        assert!(item.added_at.is_none());
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut list: ShoppingList = ["Eggs", "Flour", "Sugar"]
            .into_iter()
            .map(|name| ShoppingItem::new(name, 1.0, IngredientUnit::Units))
            .collect();
        let flour = list.iter().nth(1).unwrap().id;

        assert_eq!(list.remove(flour).unwrap().name, "Flour");
        assert!(!list.contains(flour));
        assert!(list.remove(flour).is_none());
        let names: Vec<&str> = list.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Eggs", "Sugar"]);
    }
}
