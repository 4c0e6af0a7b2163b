// ABOUTME: Low-stock reporting over an in-memory inventory
// ABOUTME: Lists items at or below their threshold with the percentage remaining
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use larder_core::models::{IngredientUnit, Inventory, InventoryItem};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// Item at or below its low-stock threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockEntry {
    /// Item identifier
    pub id: Uuid,
    /// Item name
    pub name: String,
    /// Amount in stock
    pub amount: f64,
    /// Unit of the amounts
    pub unit: IngredientUnit,
    /// Threshold the amount is at or below
    pub low_stock_threshold: f64,
    /// `amount / threshold * 100`
    pub percent_remaining: f64,
    /// Item category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// When the item was purchased
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_at: Option<DateTime<Utc>>,
}

impl LowStockEntry {
    fn from_item(item: &InventoryItem) -> Option<Self> {
        if !item.is_low_stock() {
            return None;
        }
        let threshold = item.low_stock_threshold?;
        Some(Self {
            id: item.id,
            name: item.name.clone(),
            amount: item.amount,
            unit: item.unit,
            low_stock_threshold: threshold,
            percent_remaining: item.amount / threshold * 100.0,
            category: item.category.clone(),
            purchased_at: item.purchased_at,
        })
    }
}

/// Low-stock items and their count
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LowStockReport {
    /// Items in inventory order
    pub low_stock_items: Vec<LowStockEntry>,
    /// Number of items
    pub count: usize,
}

/// Every item whose amount is at or below a positive threshold
#[must_use]
pub fn low_stock_report(inventory: &Inventory) -> LowStockReport {
    let low_stock_items: Vec<LowStockEntry> =
        inventory.iter().filter_map(LowStockEntry::from_item).collect();
    debug!(
        items = inventory.len(),
        low_stock = low_stock_items.len(),
        "Built low-stock report"
    );
    LowStockReport {
        count: low_stock_items.len(),
        low_stock_items,
    }
}
