// ABOUTME: Subtracts ingredients from an in-memory inventory, singly or for a whole recipe
// ABOUTME: Removes exhausted items and reports low-stock, missing and mismatched ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder_core::constants::inventory_limits;
use larder_core::errors::{AppError, AppResult};
use larder_core::models::{IngredientUnit, Inventory, Recipe, RecipeIngredient};
use larder_core::validation::{validate_amount, ValidationError};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// Errors from consuming a single ingredient or editing an amount
#[derive(Debug, Error)]
pub enum ConsumptionError {
    /// No inventory item has this name
    #[error("Ingredient '{name}' not found in inventory")]
    NotFound {
        /// Requested name, as given
        name: String,
    },

    /// No inventory item has this identifier
    #[error("Inventory item {0} not found")]
    ItemNotFound(Uuid),

    /// The item is stocked in a different unit
    #[error("Unit mismatch: '{name}' is stored in '{stored}', but you're trying to consume in '{requested}'")]
    UnitMismatch {
        /// Requested name, as given
        name: String,
        /// Unit the item is stocked in
        stored: IngredientUnit,
        /// Unit of the request
        requested: IngredientUnit,
    },

    /// Amount outside the accepted range
    #[error(transparent)]
    InvalidAmount(#[from] ValidationError),
}

impl From<ConsumptionError> for AppError {
    fn from(error: ConsumptionError) -> Self {
        match error {
            ConsumptionError::NotFound { ref name } => {
                Self::not_found(format!("Ingredient '{name}'")).with_resource_id(name.clone())
            }
            ConsumptionError::ItemNotFound(id) => {
                Self::not_found("Inventory item").with_resource_id(id.to_string())
            }
            ConsumptionError::UnitMismatch { .. } => Self::invalid_input(error.to_string()),
            ConsumptionError::InvalidAmount(inner) => inner.into(),
        }
    }
}

/// Result of consuming a single ingredient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumeOutcome {
    /// Item that was consumed from
    pub item_id: Uuid,
    /// Human-readable summary
    pub message: String,
    /// Amount before consumption
    pub previous_amount: f64,
    /// Amount requested
    pub consumed_amount: f64,
    /// Amount left (0 when the item was removed)
    pub remaining_amount: f64,
    /// Item was used up and removed
    pub removed: bool,
    /// Remaining amount is at or below the item's threshold
    pub low_stock: bool,
    /// Threshold that was crossed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<f64>,
}

/// Consume `amount` of the item named `name`
///
/// The item is removed when nothing is left.
///
/// # Errors
///
/// Returns [`ConsumptionError`] when the amount is outside (0, 10000], no
/// item has that name, or the item is stocked in another unit.
pub fn consume_ingredient(
    inventory: &mut Inventory,
    name: &str,
    amount: f64,
    unit: IngredientUnit,
) -> Result<ConsumeOutcome, ConsumptionError> {
    validate_amount("amount", amount)?;

    let item = inventory
        .find_by_name_mut(name)
        .ok_or_else(|| ConsumptionError::NotFound {
            name: name.to_owned(),
        })?;

    if item.unit != unit {
        return Err(ConsumptionError::UnitMismatch {
            name: name.to_owned(),
            stored: item.unit,
            requested: unit,
        });
    }

    let item_id = item.id;
    let previous_amount = item.amount;
    let new_amount = previous_amount - amount;

    if new_amount <= 0.0 {
        inventory.remove(item_id);
        info!(item.id = %item_id, ingredient = name, "Consumed all of ingredient, removed from inventory");
        return Ok(ConsumeOutcome {
            item_id,
            message: format!("Consumed all {name} - removed from inventory"),
            previous_amount,
            consumed_amount: amount,
            remaining_amount: 0.0,
            removed: true,
            low_stock: false,
            low_stock_threshold: None,
        });
    }

    item.amount = new_amount;
    let mut message = format!("Consumed {amount}{unit} from {name}");
    let low_stock_threshold = item.is_low_stock().then_some(item.low_stock_threshold).flatten();
    if let Some(threshold) = low_stock_threshold {
        warn!(item.id = %item_id, ingredient = name, remaining = new_amount, threshold, "Ingredient is low on stock");
        message.push_str(&format!(
            " LOW STOCK WARNING: Only {new_amount}{unit} remaining (threshold: {threshold}{unit})"
        ));
    }

    Ok(ConsumeOutcome {
        item_id,
        message,
        previous_amount,
        consumed_amount: amount,
        remaining_amount: new_amount,
        removed: false,
        low_stock: low_stock_threshold.is_some(),
        low_stock_threshold,
    })
}

/// One ingredient taken from stock while consuming a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumedIngredient {
    /// Ingredient name, as written in the recipe
    pub name: String,
    /// Amount actually taken
    pub consumed: f64,
    /// Unit of the amounts
    pub unit: IngredientUnit,
    /// Amount left in stock
    pub remaining: f64,
    /// Item was used up and removed
    pub removed: bool,
    /// Threshold crossed, when the item is now low on stock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<f64>,
}

/// Item left at or below its threshold after consuming a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockNotice {
    /// Ingredient name
    pub name: String,
    /// Amount left
    pub remaining: f64,
    /// Threshold crossed
    pub threshold: f64,
    /// Unit of the amounts
    pub unit: IngredientUnit,
}

/// Recipe ingredient with no inventory item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingIngredient {
    /// Ingredient name
    pub name: String,
    /// Amount the recipe called for
    pub needed: f64,
    /// Unit of `needed`
    pub unit: IngredientUnit,
}

/// Report of consuming every measured ingredient of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeConsumption {
    /// Recipe that was cooked
    pub recipe_id: Uuid,
    /// Summary
    pub message: String,
    /// Ingredients taken from stock
    pub consumed: Vec<ConsumedIngredient>,
    /// Items now low on stock
    pub low_stock: Vec<LowStockNotice>,
    /// Names of items used up and removed
    pub removed: Vec<String>,
    /// Ingredients not stocked at all
    pub missing: Vec<MissingIngredient>,
    /// Every warning raised, in order
    pub warnings: Vec<String>,
}

/// Consume the measured ingredients of `recipe`, scaled by `servings_multiplier`
///
/// Missing ingredients and unit mismatches are reported and skipped. When
/// stock is short, whatever is there is consumed.
///
/// # Errors
///
/// Returns an error when the multiplier is outside (0, 10] or the recipe has
/// no measured ingredients.
pub fn consume_recipe(
    inventory: &mut Inventory,
    recipe: &Recipe,
    servings_multiplier: f64,
) -> AppResult<RecipeConsumption> {
    if !(servings_multiplier > 0.0 && servings_multiplier <= inventory_limits::MAX_SERVINGS_MULTIPLIER)
    {
        return Err(AppError::value_out_of_range(format!(
            "servings multiplier must be greater than 0 and at most {}",
            inventory_limits::MAX_SERVINGS_MULTIPLIER
        )));
    }

    if !recipe.has_detailed_ingredients() {
        return Err(AppError::invalid_input(
            "Recipe does not have detailed ingredient measurements",
        )
        .with_resource_id(recipe.id.to_string()));
    }

    let mut report = RecipeConsumption {
        recipe_id: recipe.id,
        ..RecipeConsumption::default()
    };

    for ingredient in &recipe.ingredients_detailed {
        consume_one(inventory, ingredient, servings_multiplier, &mut report);
    }

    report.message = if report.consumed.is_empty() {
        format!("Could not consume any ingredients for '{}'", recipe.name)
    } else {
        format!("Successfully consumed ingredients for '{}'", recipe.name)
    };

    info!(
        recipe.id = %recipe.id,
        consumed = report.consumed.len(),
        removed = report.removed.len(),
        missing = report.missing.len(),
        low_stock = report.low_stock.len(),
        "Consumed recipe ingredients"
    );

    Ok(report)
}

fn consume_one(
    inventory: &mut Inventory,
    ingredient: &RecipeIngredient,
    multiplier: f64,
    report: &mut RecipeConsumption,
) {
    let name = ingredient.name.as_str();
    let unit = ingredient.unit;
    let mut needed = ingredient.amount * multiplier;

    let Some(item) = inventory.find_by_name_mut(name) else {
        warn!(ingredient = name, needed, "Recipe ingredient missing from inventory");
        report
            .warnings
            .push(format!("Missing: {name} ({needed}{unit} needed)"));
        report.missing.push(MissingIngredient {
            name: name.to_owned(),
            needed,
            unit,
        });
        return;
    };

    if item.unit != unit {
        warn!(ingredient = name, needed = %unit, stocked = %item.unit, "Unit mismatch, skipping ingredient");
        report.warnings.push(format!(
            "Unit mismatch: {name} needs {unit} but inventory has {}",
            item.unit
        ));
        return;
    }

    let current = item.amount;
    if current < needed {
        warn!(ingredient = name, needed, available = current, "Insufficient stock, consuming what is left");
        report.warnings.push(format!(
            "Insufficient: {name} (need {needed}{unit}, have {current}{unit})"
        ));
        needed = current;
    }

    let remaining = current - needed;
    let mut consumed = ConsumedIngredient {
        name: name.to_owned(),
        consumed: needed,
        unit,
        remaining,
        removed: false,
        low_stock_threshold: None,
    };

    if remaining <= 0.0 {
        let id = item.id;
        inventory.remove(id);
        info!(item.id = %id, ingredient = name, "Ingredient used up, removed from inventory");
        consumed.removed = true;
        report.removed.push(name.to_owned());
        report
            .warnings
            .push(format!("Removed: {name} (used up completely)"));
    } else {
        item.amount = remaining;
        if let Some(threshold) = item.is_low_stock().then_some(item.low_stock_threshold).flatten() {
            consumed.low_stock_threshold = Some(threshold);
            report.low_stock.push(LowStockNotice {
                name: name.to_owned(),
                remaining,
                threshold,
                unit,
            });
            report.warnings.push(format!(
                "LOW STOCK: {name} ({remaining}{unit} remaining, threshold: {threshold}{unit})"
            ));
        }
    }

    report.consumed.push(consumed);
}

/// Result of setting an item's amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountUpdate {
    /// Item that was updated
    pub item_id: Uuid,
    /// Summary
    pub message: String,
    /// Amount before the update
    pub previous_amount: f64,
    /// Amount after the update
    pub new_amount: f64,
    /// Item was removed because the new amount is 0
    pub removed: bool,
    /// New amount is at or below the item's threshold
    pub low_stock: bool,
}

/// Set the amount of item `id`; an amount of 0 removes the item
///
/// # Errors
///
/// Returns [`ConsumptionError::ItemNotFound`] for an unknown id and
/// [`ConsumptionError::InvalidAmount`] for an amount outside [0, 10000].
pub fn update_amount(
    inventory: &mut Inventory,
    id: Uuid,
    amount: f64,
) -> Result<AmountUpdate, ConsumptionError> {
    if !(0.0..=inventory_limits::MAX_AMOUNT).contains(&amount) {
        return Err(ValidationError::OutOfRange {
            field: "amount",
            bounds: format!("between 0 and {}", inventory_limits::MAX_AMOUNT),
            value: amount,
        }
        .into());
    }

    let item = inventory
        .get_mut(id)
        .ok_or(ConsumptionError::ItemNotFound(id))?;
    let previous_amount = item.amount;
    let name = item.name.clone();

    if amount <= 0.0 {
        inventory.remove(id);
        info!(item.id = %id, ingredient = %name, "Amount set to 0, removed from inventory");
        return Ok(AmountUpdate {
            item_id: id,
            message: format!("Removed {name} from inventory (amount set to 0)"),
            previous_amount,
            new_amount: amount,
            removed: true,
            low_stock: false,
        });
    }

    item.amount = amount;
    let mut message = format!("Updated {name} amount");
    let low_stock = item.is_low_stock();
    if let (true, Some(threshold)) = (low_stock, item.low_stock_threshold) {
        message.push_str(&format!(
            " LOW STOCK: {amount}{} (threshold: {threshold})",
            item.unit
        ));
    }

    Ok(AmountUpdate {
        item_id: id,
        message,
        previous_amount,
        new_amount: amount,
        removed: false,
        low_stock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::errors::ErrorCode;

    #[test]
    fn test_not_found_maps_to_resource_not_found() {
        let err: AppError = ConsumptionError::NotFound {
            name: "saffron".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_unit_mismatch_maps_to_invalid_input() {
        let err: AppError = ConsumptionError::UnitMismatch {
            name: "milk".into(),
            stored: IngredientUnit::Liters,
            requested: IngredientUnit::Cups,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("stored in 'l'"));
    }

    #[test]
    fn test_invalid_amount_maps_to_out_of_range() {
        let mut inventory = Inventory::new();
        let err: AppError = consume_ingredient(&mut inventory, "rice", 0.0, IngredientUnit::Grams)
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}
