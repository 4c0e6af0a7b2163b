// ABOUTME: Inventory commands for larder-cli
// ABOUTME: Consumes ingredients or whole recipes and reports low-stock items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use larder::errors::{AppError, AppResult};
use larder::intelligence::inventory::{consume_ingredient, consume_recipe, low_stock_report};
use larder::services::KitchenState;
use larder::validation::parse_unit;
use tracing::{info, warn};
use uuid::Uuid;

use crate::helpers::display::print_json;

/// Consume a single ingredient
pub fn consume_one(
    state: &mut KitchenState,
    name: &str,
    amount: f64,
    unit: &str,
    save_to: Option<&Path>,
) -> AppResult<()> {
    let unit = parse_unit(unit).map_err(AppError::from)?;
    let outcome = consume_ingredient(&mut state.inventory, name, amount, unit)?;
    persist(state, save_to)?;
    print_json(&outcome)
}

/// Consume every measured ingredient of a recipe
pub fn consume_for_recipe(
    state: &mut KitchenState,
    recipe_id: Uuid,
    servings_multiplier: f64,
    save_to: Option<&Path>,
) -> AppResult<()> {
    let recipe = state
        .recipe(recipe_id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;
    let report = consume_recipe(&mut state.inventory, &recipe, servings_multiplier)?;
    for warning in &report.warnings {
        warn!("{warning}");
    }
    persist(state, save_to)?;
    print_json(&report)
}

/// Print items at or below their low-stock threshold
pub fn low_stock(state: &KitchenState) -> AppResult<()> {
    print_json(&low_stock_report(&state.inventory))
}

fn persist(state: &KitchenState, save_to: Option<&Path>) -> AppResult<()> {
    if let Some(path) = save_to {
        state.save_inventory(path)?;
        info!(path = %path.display(), "Inventory saved");
    }
    Ok(())
}
