// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Validation limits, allowed units, and service names for the Larder platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Host crate / CLI service name
    pub const LARDER: &str = "larder";
}

/// Recipe field limits
pub mod recipe_limits {
    /// Maximum recipe name length (characters)
    pub const MAX_NAME_LEN: usize = 200;
    /// Maximum owning user name length (characters)
    pub const MAX_USER_LEN: usize = 100;
    /// Minimum number of ingredients / instructions
    pub const MIN_LIST_ITEMS: usize = 1;
    /// Maximum number of ingredients / instructions
    pub const MAX_LIST_ITEMS: usize = 100;
    /// Maximum length of a single ingredient or instruction line
    pub const MAX_LIST_ITEM_LEN: usize = 500;
    /// Maximum prep or cook time in minutes
    pub const MAX_TIME_MINS: u32 = 10_000;
    /// Minimum servings
    pub const MIN_SERVINGS: u32 = 1;
    /// Maximum servings
    pub const MAX_SERVINGS: u32 = 100;
}

/// Inventory and detailed-ingredient limits
pub mod inventory_limits {
    /// Maximum item name length (characters)
    pub const MAX_NAME_LEN: usize = 200;
    /// Maximum amount for a single item or ingredient (exclusive lower bound is 0)
    pub const MAX_AMOUNT: f64 = 10_000.0;
    /// Maximum low-stock threshold
    pub const MAX_LOW_STOCK_THRESHOLD: f64 = 10_000.0;
    /// Maximum estimated price of a shopping list item
    pub const MAX_ESTIMATED_PRICE: f64 = 10_000.0;
    /// Maximum servings multiplier when consuming a recipe
    pub const MAX_SERVINGS_MULTIPLIER: f64 = 10.0;
}

/// Characters stripped from (or rejected in) free-text names
pub const FORBIDDEN_NAME_CHARS: [char; 3] = ['$', '{', '}'];
