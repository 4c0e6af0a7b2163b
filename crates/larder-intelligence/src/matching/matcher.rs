// ABOUTME: Scores a single recipe against the user's owned ingredients
// ABOUTME: Produces MatchResult with matched/missing partitions and a rounded percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder_core::models::Recipe;
use serde::Serialize;
use tracing::trace;

use super::normalize::{normalize_all, normalize_ingredient, normalized_match};

/// Outcome of matching one recipe against the owned ingredients
///
/// Constructed fresh on every call and never persisted. Every recipe
/// ingredient line appears in exactly one of `matched_ingredients` or
/// `missing_ingredients`, with original casing and recipe order preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    /// Recipe that was scored
    pub recipe: &'a Recipe,
    /// Integer percentage (0-100) of recipe ingredients satisfied
    pub match_percentage: u8,
    /// Satisfied ingredient lines, as authored, in recipe order
    pub matched_ingredients: Vec<&'a str>,
    /// Unsatisfied ingredient lines, as authored, in recipe order
    pub missing_ingredients: Vec<&'a str>,
}

impl MatchResult<'_> {
    /// Whether every ingredient is covered
    ///
    /// A recipe without ingredients is never complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.recipe.ingredients.is_empty() && self.missing_ingredients.is_empty()
    }
}

/// Score one recipe against the owned ingredients
///
/// A recipe with no ingredients scores 0% with empty matched and missing
/// lists.
#[must_use]
pub fn match_recipe_with_ingredients<'a, S: AsRef<str>>(
    recipe: &'a Recipe,
    owned_ingredients: &[S],
) -> MatchResult<'a> {
    score_recipe(recipe, &normalize_all(owned_ingredients))
}

/// Score one recipe against owned ingredients that are already normalized
pub(crate) fn score_recipe<'a>(recipe: &'a Recipe, normalized_owned: &[String]) -> MatchResult<'a> {
    let (matched_ingredients, missing_ingredients): (Vec<&str>, Vec<&str>) = recipe
        .ingredients
        .iter()
        .map(String::as_str)
        .partition(|line| {
            let wanted = normalize_ingredient(line);
            normalized_owned
                .iter()
                .any(|owned| normalized_match(owned, &wanted))
        });

    let match_percentage = percentage(matched_ingredients.len(), recipe.ingredients.len());
    trace!(
        recipe.id = %recipe.id,
        matched = matched_ingredients.len(),
        missing = missing_ingredients.len(),
        match_percentage,
        "Scored recipe"
    );

    MatchResult {
        recipe,
        match_percentage,
        matched_ingredients,
        missing_ingredients,
    }
}

/// `round(matched / total * 100)` with half-up rounding, in integer arithmetic
fn percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (matched * 200 + total) / (total * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
