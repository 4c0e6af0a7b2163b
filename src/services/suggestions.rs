// ABOUTME: Recipe suggestion service ranking a user's recipes against the kitchen inventory
// ABOUTME: Wraps the suggestion ranker with per-user filtering and single-recipe lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder_core::errors::{AppError, AppResult};
use larder_core::models::Recipe;
use larder_intelligence::{
    match_recipe_with_ingredients, MatchMode, MatchResult, MatchingConfig, SuggestionRanker,
};
use tracing::debug;
use uuid::Uuid;

use super::kitchen::KitchenState;

/// Suggests recipes from what the kitchen already holds
#[derive(Debug, Clone, Default)]
pub struct SuggestionService {
    ranker: SuggestionRanker,
}

impl SuggestionService {
    /// Create a service using `config` for thresholds and ranking limits
    #[must_use]
    pub const fn new(config: &MatchingConfig) -> Self {
        Self {
            ranker: SuggestionRanker::from_config(config),
        }
    }

    /// Create a service from the global matching configuration
    #[must_use]
    pub fn from_global_config() -> Self {
        Self::new(MatchingConfig::global())
    }

    /// Threshold that `mode` resolves to
    #[must_use]
    pub const fn threshold_for(&self, mode: MatchMode) -> u8 {
        self.ranker.threshold_for(mode)
    }

    /// Rank recipes against the ingredients in the inventory
    ///
    /// `user` restricts the candidates to that user's recipes.
    /// `min_override` replaces the mode threshold.
    #[must_use]
    pub fn suggest<'a>(
        &self,
        state: &'a KitchenState,
        user: Option<&str>,
        mode: MatchMode,
        min_override: Option<u8>,
    ) -> Vec<MatchResult<'a>> {
        let owned = state.owned_ingredients();
        self.suggest_for_ingredients(state, owned.as_slice(), user, mode, min_override)
    }

    /// Rank recipes against an explicit list of owned ingredients
    #[must_use]
    pub fn suggest_for_ingredients<'a, S: AsRef<str>>(
        &self,
        state: &'a KitchenState,
        owned_ingredients: &[S],
        user: Option<&str>,
        mode: MatchMode,
        min_override: Option<u8>,
    ) -> Vec<MatchResult<'a>> {
        let threshold = min_override.unwrap_or_else(|| self.ranker.threshold_for(mode));
        let candidates = Self::recipes_for_user(state, user);
        debug!(
            user = user.unwrap_or("*"),
            ?mode,
            threshold,
            candidates = candidates.len(),
            "Suggesting recipes"
        );
        self.ranker
            .rank_with_threshold(candidates, owned_ingredients, threshold)
    }

    /// Score one recipe against the inventory
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::ResourceNotFound`] when no recipe has `recipe_id`.
    ///
    /// [`ErrorCode::ResourceNotFound`]: larder_core::errors::ErrorCode::ResourceNotFound
    pub fn match_recipe<'a>(
        &self,
        state: &'a KitchenState,
        recipe_id: Uuid,
    ) -> AppResult<MatchResult<'a>> {
        let recipe = state.recipe(recipe_id).ok_or_else(|| {
            AppError::not_found(format!("Recipe {recipe_id}"))
                .with_resource_id(recipe_id.to_string())
        })?;
        let owned = state.owned_ingredients();
        Ok(match_recipe_with_ingredients(recipe, owned.as_slice()))
    }

    /// Recipes owned by `user`, or every recipe when `user` is `None`
    #[must_use]
    pub fn recipes_for_user<'a>(state: &'a KitchenState, user: Option<&str>) -> Vec<&'a Recipe> {
        state
            .recipes
            .iter()
            .filter(|recipe| user.is_none_or(|wanted| recipe.user == wanted))
            .collect()
    }
}
