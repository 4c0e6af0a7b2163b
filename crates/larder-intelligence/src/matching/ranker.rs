// ABOUTME: Suggestion ranker that scores a recipe collection, filters by threshold and sorts
// ABOUTME: Exposes exact-match (100%) and close-match (80%) modes as named default thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Reverse;

use larder_core::models::Recipe;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::matcher::{score_recipe, MatchResult};
use super::normalize::normalize_all;
use crate::config::MatchingConfig;

/// Default threshold for exact-match mode: the recipe is fully coverable
pub const EXACT_MATCH_PERCENTAGE: u8 = 100;

/// Default threshold for close-match mode: the recipe is nearly coverable
pub const CLOSE_MATCH_PERCENTAGE: u8 = 80;

/// Collections at least this large are scored on the rayon pool
const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Named threshold presets for the suggestion ranker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Recipes the user can cook right now
    #[default]
    Exact,
    /// Recipes the user can almost cook
    Close,
}

impl MatchMode {
    /// Built-in default threshold for this mode
    #[must_use]
    pub const fn default_threshold(&self) -> u8 {
        match self {
            Self::Exact => EXACT_MATCH_PERCENTAGE,
            Self::Close => CLOSE_MATCH_PERCENTAGE,
        }
    }

    /// Parse a mode name, falling back to exact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "close" | "partial" => Self::Close,
            _ => Self::Exact,
        }
    }
}

/// Recipes whose match percentage is at least `min_match_percentage`,
/// highest first
///
/// Pass [`EXACT_MATCH_PERCENTAGE`] for the exact-match default. Ties keep
/// their input order.
#[must_use]
pub fn find_recipes_with_ingredients<'a, S: AsRef<str>>(
    recipes: &'a [Recipe],
    owned_ingredients: &[S],
    min_match_percentage: u8,
) -> Vec<MatchResult<'a>> {
    SuggestionRanker::default().rank_with_threshold(recipes, owned_ingredients, min_match_percentage)
}

/// Same operation as [`find_recipes_with_ingredients`]; callers pass
/// [`CLOSE_MATCH_PERCENTAGE`] for the close-match default
#[must_use]
pub fn find_partial_recipes<'a, S: AsRef<str>>(
    recipes: &'a [Recipe],
    owned_ingredients: &[S],
    min_match_percentage: u8,
) -> Vec<MatchResult<'a>> {
    find_recipes_with_ingredients(recipes, owned_ingredients, min_match_percentage)
}

/// Exact-match mode with its default threshold (100%)
#[must_use]
pub fn find_exact_matches<'a, S: AsRef<str>>(
    recipes: &'a [Recipe],
    owned_ingredients: &[S],
) -> Vec<MatchResult<'a>> {
    find_recipes_with_ingredients(recipes, owned_ingredients, EXACT_MATCH_PERCENTAGE)
}

/// Close-match mode with its default threshold (80%)
#[must_use]
pub fn find_close_matches<'a, S: AsRef<str>>(
    recipes: &'a [Recipe],
    owned_ingredients: &[S],
) -> Vec<MatchResult<'a>> {
    find_partial_recipes(recipes, owned_ingredients, CLOSE_MATCH_PERCENTAGE)
}

/// Scores, filters and sorts a recipe collection
///
/// Mode thresholds come from configuration; an explicit threshold always
/// wins. Large collections are scored in parallel, and the output is the
/// same as the sequential path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRanker {
    exact_threshold: u8,
    close_threshold: u8,
    parallel_threshold: usize,
    max_results: Option<usize>,
}

impl Default for SuggestionRanker {
    fn default() -> Self {
        Self {
            exact_threshold: EXACT_MATCH_PERCENTAGE,
            close_threshold: CLOSE_MATCH_PERCENTAGE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            max_results: None,
        }
    }
}

impl SuggestionRanker {
    /// Build a ranker from matching configuration
    #[must_use]
    pub const fn from_config(config: &MatchingConfig) -> Self {
        Self {
            exact_threshold: config.thresholds.exact_match_percentage,
            close_threshold: config.thresholds.close_match_percentage,
            parallel_threshold: config.ranking.parallel_threshold,
            max_results: config.ranking.max_results,
        }
    }

    /// Threshold used for `mode`
    #[must_use]
    pub const fn threshold_for(&self, mode: MatchMode) -> u8 {
        match mode {
            MatchMode::Exact => self.exact_threshold,
            MatchMode::Close => self.close_threshold,
        }
    }

    /// Rank using the configured threshold for `mode`
    ///
    /// `recipes` is any iterator of recipe references, so callers can rank a
    /// filtered view without cloning.
    #[must_use]
    pub fn rank<'a, I, S>(
        &self,
        recipes: I,
        owned_ingredients: &[S],
        mode: MatchMode,
    ) -> Vec<MatchResult<'a>>
    where
        I: IntoIterator<Item = &'a Recipe>,
        S: AsRef<str>,
    {
        self.rank_with_threshold(recipes, owned_ingredients, self.threshold_for(mode))
    }

    /// Rank with an explicit minimum match percentage
    #[must_use]
    pub fn rank_with_threshold<'a, I, S>(
        &self,
        recipes: I,
        owned_ingredients: &[S],
        min_match_percentage: u8,
    ) -> Vec<MatchResult<'a>>
    where
        I: IntoIterator<Item = &'a Recipe>,
        S: AsRef<str>,
    {
        let recipes: Vec<&'a Recipe> = recipes.into_iter().collect();
        let normalized_owned = normalize_all(owned_ingredients);
        let parallel = recipes.len() >= self.parallel_threshold;

        let mut results: Vec<MatchResult<'a>> = if parallel {
            recipes
                .par_iter()
                .map(|&recipe| score_recipe(recipe, &normalized_owned))
                .filter(|result| result.match_percentage >= min_match_percentage)
                .collect()
        } else {
            recipes
                .iter()
                .map(|&recipe| score_recipe(recipe, &normalized_owned))
                .filter(|result| result.match_percentage >= min_match_percentage)
                .collect()
        };

        // stable: equal percentages keep input order
        results.sort_by_key(|result| Reverse(result.match_percentage));

        if let Some(limit) = self.max_results {
            results.truncate(limit);
        }

        debug!(
            recipes = recipes.len(),
            owned = normalized_owned.len(),
            min_match_percentage,
            parallel,
            retained = results.len(),
            "Ranked recipe suggestions"
        );

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!(MatchMode::from_str_or_default("close"), MatchMode::Close);
        assert_eq!(MatchMode::from_str_or_default(" Partial "), MatchMode::Close);
        assert_eq!(MatchMode::from_str_or_default("exact"), MatchMode::Exact);
        assert_eq!(MatchMode::from_str_or_default("whatever"), MatchMode::Exact);
    }

    #[test]
    fn test_mode_default_thresholds() {
        assert_eq!(MatchMode::Exact.default_threshold(), 100);
        assert_eq!(MatchMode::Close.default_threshold(), 80);
    }

    #[test]
    fn test_ranker_from_default_config_matches_builtin_defaults() {
        let ranker = SuggestionRanker::from_config(&MatchingConfig::default());
        assert_eq!(ranker, SuggestionRanker::default());
    }
}
