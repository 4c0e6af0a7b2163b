// ABOUTME: Recipe data models with free-text and detailed ingredient lists
// ABOUTME: Defines Recipe, RecipeIngredient, and the storage-shaped RecipeDocument
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::unit::IngredientUnit;
use crate::errors::{AppError, AppResult};

/// Ingredient with a measured amount, used when consuming a recipe from inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name, matched case-insensitively against inventory item names
    pub name: String,
    /// Amount needed for one batch of the recipe
    pub amount: f64,
    /// Unit of `amount`
    pub unit: IngredientUnit,
}

impl RecipeIngredient {
    /// Create a measured ingredient
    #[must_use]
    pub fn new(name: impl Into<String>, amount: f64, unit: IngredientUnit) -> Self {
        Self {
            name: name.into(),
            amount,
            unit,
        }
    }
}

/// A user's recipe
///
/// `ingredients` holds the lines exactly as authored ("Tomatoes, chopped",
/// "2 cups flour"); they are never normalized at storage time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Opaque recipe identifier
    pub id: Uuid,
    /// Owning user name
    pub user: String,
    /// Recipe name
    pub name: String,
    /// Ordered ingredient lines as authored
    pub ingredients: Vec<String>,
    /// Optional measured ingredients used for inventory consumption
    #[serde(default, alias = "ingredientsDetailed")]
    pub ingredients_detailed: Vec<RecipeIngredient>,
    /// Ordered instruction steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Preparation time in minutes
    #[serde(default, alias = "prep_time")]
    pub prep_time_mins: u32,
    /// Cooking time in minutes
    #[serde(default, alias = "cook_time")]
    pub cook_time_mins: u32,
    /// Number of servings the recipe makes
    #[serde(default = "default_servings")]
    pub servings: u32,
}

const fn default_servings() -> u32 {
    1
}

impl Recipe {
    /// Create a recipe with a fresh identifier and no ingredients
    #[must_use]
    pub fn new(user: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: user.into(),
            name: name.into(),
            ingredients: Vec::new(),
            ingredients_detailed: Vec::new(),
            instructions: Vec::new(),
            prep_time_mins: 0,
            cook_time_mins: 0,
            servings: default_servings(),
        }
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Add several ingredient lines
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients
            .extend(ingredients.into_iter().map(Into::into));
        self
    }

    /// Add a measured ingredient
    #[must_use]
    pub fn with_detailed_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients_detailed.push(ingredient);
        self
    }

    /// Add an instruction step
    #[must_use]
    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// Set preparation and cooking time
    #[must_use]
    pub const fn with_times(mut self, prep_mins: u32, cook_mins: u32) -> Self {
        self.prep_time_mins = prep_mins;
        self.cook_time_mins = cook_mins;
        self
    }

    /// Set servings
    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    /// Total time (prep + cook)
    #[must_use]
    pub const fn total_time_mins(&self) -> u32 {
        self.prep_time_mins.saturating_add(self.cook_time_mins)
    }

    /// Whether the recipe carries measured ingredients
    #[must_use]
    pub fn has_detailed_ingredients(&self) -> bool {
        !self.ingredients_detailed.is_empty()
    }
}

/// Recipe as it comes out of the document store
///
/// Every field the store may omit is optional here. Converting into
/// [`Recipe`] fails fast when the ingredient list is absent or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeDocument {
    /// Identifier; a fresh one is assigned when absent
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Owning user name
    #[serde(default)]
    pub user: Option<String>,
    /// Recipe name
    #[serde(default)]
    pub name: Option<String>,
    /// Ingredient lines; `None` covers both a missing key and an explicit null
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    /// Measured ingredients
    #[serde(default, alias = "ingredientsDetailed")]
    pub ingredients_detailed: Option<Vec<RecipeIngredient>>,
    /// Instruction steps
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
    /// Preparation time in minutes
    #[serde(default, alias = "prep_time", alias = "prepTime")]
    pub prep_time_mins: Option<u32>,
    /// Cooking time in minutes
    #[serde(default, alias = "cook_time", alias = "cookTime")]
    pub cook_time_mins: Option<u32>,
    /// Servings
    #[serde(default)]
    pub servings: Option<u32>,
}

impl TryFrom<RecipeDocument> for Recipe {
    type Error = AppError;

    fn try_from(doc: RecipeDocument) -> AppResult<Self> {
        let id = doc.id.unwrap_or_else(Uuid::new_v4);
        let Some(ingredients) = doc.ingredients else {
            return Err(AppError::missing_field("ingredients").with_resource_id(id.to_string()));
        };

        Ok(Self {
            id,
            user: doc.user.unwrap_or_default(),
            name: doc.name.unwrap_or_default(),
            ingredients,
            ingredients_detailed: doc.ingredients_detailed.unwrap_or_default(),
            instructions: doc.instructions.unwrap_or_default(),
            prep_time_mins: doc.prep_time_mins.unwrap_or_default(),
            cook_time_mins: doc.cook_time_mins.unwrap_or_default(),
            servings: doc.servings.unwrap_or_else(default_servings),
        })
    }
}
