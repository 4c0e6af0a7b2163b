// ABOUTME: Suggestion commands for larder-cli
// ABOUTME: Ranks recipes against the inventory and scores single recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder::errors::AppResult;
use larder::intelligence::MatchMode;
use larder::services::{KitchenState, SuggestionService};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::helpers::display::print_json;

/// Options for the `suggest` command
pub struct SuggestOptions {
    pub user: Option<String>,
    pub mode: MatchMode,
    pub min_match_percentage: Option<u8>,
    pub have: Option<Vec<String>>,
}

/// Rank recipes and print the suggestions
pub fn suggest(
    service: &SuggestionService,
    state: &KitchenState,
    options: &SuggestOptions,
) -> AppResult<()> {
    let user = options.user.as_deref();
    let threshold = options
        .min_match_percentage
        .unwrap_or_else(|| service.threshold_for(options.mode));

    let suggestions = match &options.have {
        Some(have) => service.suggest_for_ingredients(
            state,
            have,
            user,
            options.mode,
            options.min_match_percentage,
        ),
        None => service.suggest(state, user, options.mode, options.min_match_percentage),
    };

    info!(
        count = suggestions.len(),
        threshold,
        "Found {} matching recipes",
        suggestions.len()
    );

    print_json(&json!({
        "mode": options.mode,
        "min_match_percentage": threshold,
        "count": suggestions.len(),
        "suggestions": suggestions,
    }))
}

/// Score one recipe against the inventory and print the result
pub fn match_recipe(
    service: &SuggestionService,
    state: &KitchenState,
    recipe_id: Uuid,
) -> AppResult<()> {
    let result = service.match_recipe(state, recipe_id)?;
    print_json(&result)
}
