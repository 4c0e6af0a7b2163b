// ABOUTME: Ingredient matching module: normalizer, pairwise matcher, recipe scorer, ranker
// ABOUTME: Re-exports the public matching operations consumed by the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingredient Matching
//!
//! ## Algorithm
//!
//! 1. **Normalize** both sides: lower-case, collapse whitespace, trim, drop
//!    everything from the first comma ("Tomatoes, chopped" → "tomatoes").
//! 2. **Pairwise match**: equal, or either normalized string contains the
//!    other ("tomato" ↔ "cherry tomato").
//! 3. **Score** a recipe: an ingredient line is matched when any owned
//!    ingredient satisfies step 2; percentage is matched / total, rounded
//!    half-up to an integer.
//! 4. **Rank**: keep recipes at or above a threshold and stable-sort them by
//!    percentage, highest first.
//!
//! Substring containment has known false positives ("lime" would satisfy
//! "limestone"); they are part of the observable behavior and are kept.
//!
//! ## Example
//!
//! ```
//! use larder_core::models::Recipe;
//! use larder_intelligence::matching::match_recipe_with_ingredients;
//!
//! let recipe = Recipe::new("sam", "Pasta al pomodoro")
//!     .with_ingredients(["tomato", "pasta", "basil"]);
//! let result = match_recipe_with_ingredients(&recipe, &["cherry tomato", "pasta"]);
//!
//! assert_eq!(result.match_percentage, 67);
//! assert_eq!(result.matched_ingredients, vec!["tomato", "pasta"]);
//! assert_eq!(result.missing_ingredients, vec!["basil"]);
//! ```

mod matcher;
mod normalize;
mod ranker;

pub use matcher::{match_recipe_with_ingredients, MatchResult};
pub use normalize::{ingredients_match, normalize_ingredient};
pub use ranker::{
    find_close_matches, find_exact_matches, find_partial_recipes, find_recipes_with_ingredients,
    MatchMode, SuggestionRanker, CLOSE_MATCH_PERCENTAGE, EXACT_MATCH_PERCENTAGE,
};
