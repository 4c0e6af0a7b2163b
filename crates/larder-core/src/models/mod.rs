// ABOUTME: Core data models for the Larder recipe and inventory platform
// ABOUTME: Re-exports Recipe, InventoryItem, ShoppingItem, UserIngredientSet and unit types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records arrive already deserialized from whatever storage the host
//! application uses. Recipe ingredients are kept exactly as authored; the
//! matching engine normalizes them on every call.
//!
//! ## Core Models
//!
//! - `Recipe`: a user's recipe with its ordered ingredient lines
//! - `RecipeDocument`: the loosely-typed storage shape of a recipe
//! - `InventoryItem` / `Inventory`: what the user has in stock
//! - `ShoppingItem` / `ShoppingList`: what the household still has to buy
//! - `UserIngredientSet`: case-insensitive set of owned ingredient names
//! - `IngredientUnit`: measurement units accepted for amounts

mod ingredients;
mod inventory;
mod recipe;
mod shopping;
mod unit;

pub use ingredients::UserIngredientSet;
pub use inventory::{Inventory, InventoryItem};
pub use recipe::{Recipe, RecipeDocument, RecipeIngredient};
pub use shopping::{ShoppingItem, ShoppingList};
pub use unit::{IngredientUnit, ParseUnitError};
