// ABOUTME: In-memory inventory operations: consumption, amount edits, low-stock and shopping
// ABOUTME: Operates on an explicit Inventory value; nothing is persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod consumption;
mod shopping;
mod stock;

pub use consumption::{
    consume_ingredient, consume_recipe, update_amount, AmountUpdate, ConsumeOutcome,
    ConsumedIngredient, ConsumptionError, LowStockNotice, MissingIngredient, RecipeConsumption,
};
pub use shopping::{mark_bought, ShoppingError};
pub use stock::{low_stock_report, LowStockEntry, LowStockReport};
