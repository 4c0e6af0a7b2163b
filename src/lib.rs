// ABOUTME: Main library entry point for the larder recipe suggestion platform
// ABOUTME: Wires configuration, logging and services over the core and intelligence crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder
//!
//! Suggests recipes a user can cook from the ingredients already in their
//! inventory, and keeps that inventory up to date as recipes are cooked.
//!
//! ## Architecture
//!
//! - **larder-core**: models, validation and the shared error type
//! - **larder-intelligence**: ingredient matching, suggestion ranking and
//!   inventory consumption and the shopping list hand-off
//! - **this crate**: configuration, logging, the service layer and the
//!   `larder-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use larder::intelligence::MatchMode;
//! use larder::models::{IngredientUnit, Inventory, InventoryItem, Recipe};
//! use larder::services::{KitchenState, SuggestionService};
//!
//! let recipes = vec![Recipe::new("sam", "Pasta").with_ingredients(["pasta", "tomato"])];
//! let inventory: Inventory = [
//!     InventoryItem::new("Pasta", 500.0, IngredientUnit::Grams),
//!     InventoryItem::new("Cherry tomato", 6.0, IngredientUnit::Pieces),
//! ]
//! .into_iter()
//! .collect();
//!
//! let state = KitchenState::new(recipes, inventory);
//! let service = SuggestionService::default();
//! let suggestions = service.suggest(&state, Some("sam"), MatchMode::Exact, None);
//!
//! assert_eq!(suggestions.len(), 1);
//! assert_eq!(suggestions[0].match_percentage, 100);
//! ```

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Domain services over explicit kitchen state
pub mod services;

/// Shared error types
pub use larder_core::errors;

/// Recipe and inventory models
pub use larder_core::models;

/// Input validation
pub use larder_core::validation;

/// Matching, ranking and inventory consumption
pub use larder_intelligence as intelligence;
