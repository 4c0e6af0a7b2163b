// ABOUTME: Measurement units accepted for recipe ingredients and inventory items
// ABOUTME: Case-insensitive parsing from the short unit names used by clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Unit name that is not in the allowed list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unit must be one of: {allowed}, got '{0}'", allowed = IngredientUnit::allowed_names().join(", "))]
pub struct ParseUnitError(pub String);

/// Measurement unit for an amount of an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IngredientUnit {
    /// Kilograms
    #[serde(rename = "kg")]
    Kilograms,
    /// Grams
    #[serde(rename = "g")]
    Grams,
    /// Liters
    #[serde(rename = "l", alias = "L")]
    Liters,
    /// Milliliters
    #[serde(rename = "ml")]
    Milliliters,
    /// Ounces
    #[serde(rename = "oz")]
    Ounces,
    /// Pounds
    #[serde(rename = "lb")]
    Pounds,
    /// Cups
    #[serde(rename = "cup")]
    Cups,
    /// Tablespoons
    #[serde(rename = "tbsp")]
    Tablespoons,
    /// Teaspoons
    #[serde(rename = "tsp")]
    Teaspoons,
    /// Generic unit count
    #[serde(rename = "unit")]
    Units,
    /// Whole pieces (eggs, onions, ...)
    #[serde(rename = "piece")]
    Pieces,
}

impl IngredientUnit {
    /// Every accepted unit, in display order
    pub const ALL: [Self; 11] = [
        Self::Kilograms,
        Self::Grams,
        Self::Liters,
        Self::Milliliters,
        Self::Ounces,
        Self::Pounds,
        Self::Cups,
        Self::Tablespoons,
        Self::Teaspoons,
        Self::Units,
        Self::Pieces,
    ];

    /// Short name used on the wire and in messages
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Grams => "g",
            Self::Liters => "l",
            Self::Milliliters => "ml",
            Self::Ounces => "oz",
            Self::Pounds => "lb",
            Self::Cups => "cup",
            Self::Tablespoons => "tbsp",
            Self::Teaspoons => "tsp",
            Self::Units => "unit",
            Self::Pieces => "piece",
        }
    }

    /// Short names of every accepted unit
    #[must_use]
    pub fn allowed_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::abbreviation).collect()
    }
}

impl FromStr for IngredientUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|unit| unit.abbreviation() == lowered)
            .ok_or_else(|| ParseUnitError(s.to_owned()))
    }
}

impl Display for IngredientUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_lists_allowed_units() {
        let err = "bushel".parse::<IngredientUnit>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unit must be one of: kg, g, l, ml, oz, lb, cup, tbsp, tsp, unit, piece, got 'bushel'"
        );
    }

    #[test]
    fn test_display_uses_short_name() {
        assert_eq!(IngredientUnit::Tablespoons.to_string(), "tbsp");
        assert_eq!("Piece".parse::<IngredientUnit>(), Ok(IngredientUnit::Pieces));
    }
}
