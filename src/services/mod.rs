// ABOUTME: Domain service layer over the explicit kitchen state
// ABOUTME: Provides the suggestion service and state loading used by the CLI and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services take the [`KitchenState`] they work on as an argument. Nothing
//! here keeps global mutable state.

/// Recipe collection and inventory loading
pub mod kitchen;

/// Recipe suggestions ranked against the inventory
pub mod suggestions;

pub use kitchen::KitchenState;
pub use suggestions::SuggestionService;
