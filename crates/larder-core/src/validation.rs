// ABOUTME: Validation and sanitisation rules for recipe and inventory input
// ABOUTME: Enforces field lengths, list sizes, numeric ranges and allowed units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Input Validation
//!
//! Recipes and inventory items are validated when they enter the system, not
//! when they are matched. Names that end up in document-store queries either
//! reject or strip the characters `$`, `{` and `}`:
//!
//! - recipe name and owner are *rejected* when they contain one
//! - ingredient and inventory item names have them *stripped*
//!
//! List fields (ingredients, instructions) are trimmed and blank lines are
//! dropped; at least one non-blank line must remain.

use thiserror::Error;

use crate::constants::{inventory_limits, recipe_limits, FORBIDDEN_NAME_CHARS};
use crate::errors::{AppError, ErrorCode};
use crate::models::{
    IngredientUnit, InventoryItem, ParseUnitError, Recipe, RecipeIngredient, ShoppingItem,
};

/// Validation failures for recipe and inventory input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field empty after trimming
    #[error("{field} cannot be empty")]
    Empty {
        /// Field name
        field: &'static str,
    },
    /// Field longer than allowed
    #[error("{field} exceeds {max} characters")]
    TooLong {
        /// Field name
        field: &'static str,
        /// Maximum allowed characters
        max: usize,
    },
    /// Field contains a forbidden character
    #[error("Invalid character \"{character}\" not allowed in {field}")]
    ForbiddenCharacter {
        /// Field name
        field: &'static str,
        /// Offending character
        character: char,
    },
    /// List has the wrong number of items
    #[error("{field} must contain between {min} and {max} items, got {actual}")]
    ItemCount {
        /// Field name
        field: &'static str,
        /// Minimum items
        min: usize,
        /// Maximum items
        max: usize,
        /// Items supplied
        actual: usize,
    },
    /// A list item is longer than allowed
    #[error("Item in {field} too long (max {max} characters)")]
    ItemTooLong {
        /// Field name
        field: &'static str,
        /// Maximum allowed characters
        max: usize,
    },
    /// Every list item was blank
    #[error("At least one valid item required in {field}")]
    NoValidItems {
        /// Field name
        field: &'static str,
    },
    /// Numeric value outside its range
    #[error("{field} must be {bounds}, got {value}")]
    OutOfRange {
        /// Field name
        field: &'static str,
        /// Human-readable bounds, e.g. "between 1 and 100"
        bounds: String,
        /// Offending value
        value: f64,
    },
    /// Unit not in the allowed list
    #[error(transparent)]
    Unit(#[from] ParseUnitError),
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match error {
            ValidationError::OutOfRange { .. } => ErrorCode::ValueOutOfRange,
            ValidationError::Unit(_) => ErrorCode::InvalidFormat,
            _ => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Validate and clean a recipe
///
/// Returns the recipe with trimmed name/user, cleaned ingredient and
/// instruction lists, and validated measured ingredients.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_recipe(recipe: Recipe) -> Result<Recipe, ValidationError> {
    let name = reject_forbidden("name", &recipe.name, recipe_limits::MAX_NAME_LEN)?;
    let user = reject_forbidden("user", &recipe.user, recipe_limits::MAX_USER_LEN)?;
    let ingredients = clean_list("ingredients", &recipe.ingredients)?;
    let instructions = clean_list("instructions", &recipe.instructions)?;

    check_range_u32(
        "prep_time",
        recipe.prep_time_mins,
        0,
        recipe_limits::MAX_TIME_MINS,
    )?;
    check_range_u32(
        "cook_time",
        recipe.cook_time_mins,
        0,
        recipe_limits::MAX_TIME_MINS,
    )?;
    check_range_u32(
        "servings",
        recipe.servings,
        recipe_limits::MIN_SERVINGS,
        recipe_limits::MAX_SERVINGS,
    )?;

    let ingredients_detailed = recipe
        .ingredients_detailed
        .into_iter()
        .map(validate_detailed_ingredient)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Recipe {
        name,
        user,
        ingredients,
        instructions,
        ingredients_detailed,
        ..recipe
    })
}

/// Validate a measured recipe ingredient
///
/// # Errors
///
/// Returns an error for an empty/too-long name or an amount outside (0, 10000].
pub fn validate_detailed_ingredient(
    ingredient: RecipeIngredient,
) -> Result<RecipeIngredient, ValidationError> {
    let name = sanitize_name("ingredient name", &ingredient.name, inventory_limits::MAX_NAME_LEN)?;
    validate_amount("amount", ingredient.amount)?;
    Ok(RecipeIngredient { name, ..ingredient })
}

/// Validate an inventory item
///
/// # Errors
///
/// Returns an error for an invalid name, amount, or low-stock threshold.
pub fn validate_inventory_item(item: InventoryItem) -> Result<InventoryItem, ValidationError> {
    let name = sanitize_name("item name", &item.name, inventory_limits::MAX_NAME_LEN)?;
    validate_amount("amount", item.amount)?;
    if let Some(threshold) = item.low_stock_threshold {
        if !(0.0..=inventory_limits::MAX_LOW_STOCK_THRESHOLD).contains(&threshold) {
            return Err(ValidationError::OutOfRange {
                field: "low_stock_threshold",
                bounds: format!(
                    "between 0 and {}",
                    inventory_limits::MAX_LOW_STOCK_THRESHOLD
                ),
                value: threshold,
            });
        }
    }
    Ok(InventoryItem { name, ..item })
}

/// Validate a shopping list item
///
/// # Errors
///
/// Returns an error for an invalid name, amount, or estimated price.
pub fn validate_shopping_item(item: ShoppingItem) -> Result<ShoppingItem, ValidationError> {
    let name = sanitize_name("item name", &item.name, inventory_limits::MAX_NAME_LEN)?;
    validate_amount("amount", item.amount)?;
    if let Some(price) = item.estimated_price {
        if !(0.0..=inventory_limits::MAX_ESTIMATED_PRICE).contains(&price) {
            return Err(ValidationError::OutOfRange {
                field: "estimated_price",
                bounds: format!("between 0 and {}", inventory_limits::MAX_ESTIMATED_PRICE),
                value: price,
            });
        }
    }
    Ok(ShoppingItem { name, ..item })
}

/// Parse a unit name from client input
///
/// # Errors
///
/// Returns [`ValidationError::Unit`] when the unit is not in the allowed list.
pub fn parse_unit(value: &str) -> Result<IngredientUnit, ValidationError> {
    Ok(value.parse::<IngredientUnit>()?)
}

/// Check an amount lies in (0, 10000]
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] otherwise.
pub fn validate_amount(field: &'static str, amount: f64) -> Result<(), ValidationError> {
    if amount > 0.0 && amount <= inventory_limits::MAX_AMOUNT {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            bounds: format!("greater than 0 and at most {}", inventory_limits::MAX_AMOUNT),
            value: amount,
        })
    }
}

/// Trim a name and strip `$`, `{`, `}`
///
/// # Errors
///
/// Returns an error when the name is blank or too long.
pub fn sanitize_name(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<String, ValidationError> {
    if value.chars().count() > max_len {
        return Err(ValidationError::TooLong {
            field,
            max: max_len,
        });
    }
    let stripped: String = value
        .chars()
        .filter(|c| !FORBIDDEN_NAME_CHARS.contains(c))
        .collect();
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn reject_forbidden(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<String, ValidationError> {
    if value.chars().count() > max_len {
        return Err(ValidationError::TooLong {
            field,
            max: max_len,
        });
    }
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if let Some(character) = value.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
        return Err(ValidationError::ForbiddenCharacter { field, character });
    }
    Ok(trimmed.to_owned())
}

fn clean_list(field: &'static str, items: &[String]) -> Result<Vec<String>, ValidationError> {
    if !(recipe_limits::MIN_LIST_ITEMS..=recipe_limits::MAX_LIST_ITEMS).contains(&items.len()) {
        return Err(ValidationError::ItemCount {
            field,
            min: recipe_limits::MIN_LIST_ITEMS,
            max: recipe_limits::MAX_LIST_ITEMS,
            actual: items.len(),
        });
    }

    let mut cleaned = Vec::with_capacity(items.len());
    for item in items {
        if item.trim().is_empty() {
            continue;
        }
        if item.chars().count() > recipe_limits::MAX_LIST_ITEM_LEN {
            return Err(ValidationError::ItemTooLong {
                field,
                max: recipe_limits::MAX_LIST_ITEM_LEN,
            });
        }
        cleaned.push(item.trim().to_owned());
    }

    if cleaned.is_empty() {
        return Err(ValidationError::NoValidItems { field });
    }
    Ok(cleaned)
}

fn check_range_u32(
    field: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            bounds: format!("between {min} and {max}"),
            value: f64::from(value),
        })
    }
}
