// ABOUTME: Recipe intelligence engine: ingredient matching, suggestion ranking, inventory use
// ABOUTME: Pure, synchronous computation over in-memory recipes and inventory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder Intelligence
//!
//! The one part of the platform with an actual algorithm: deciding which
//! recipes a user can cook from what they already own.
//!
//! ## Modules
//!
//! - **matching**: ingredient normalization, pairwise matching, per-recipe
//!   scoring and the suggestion ranker
//! - **inventory**: consuming ingredients and recipes from an in-memory
//!   inventory, low-stock reporting
//! - **config**: thresholds and ranking limits with environment overrides
//!
//! Every operation is a pure function of its inputs. Nothing here performs
//! I/O or holds shared mutable state, so calls are safe from any thread.

/// Matching thresholds and ranking configuration
pub mod config;

/// In-memory inventory consumption and stock reporting
pub mod inventory;

/// Ingredient matching and recipe suggestion ranking
pub mod matching;

pub use config::{ConfigError, MatchingConfig};
pub use matching::{
    find_close_matches, find_exact_matches, find_partial_recipes, find_recipes_with_ingredients,
    ingredients_match, match_recipe_with_ingredients, normalize_ingredient, MatchMode,
    MatchResult, SuggestionRanker,
};
