// ABOUTME: Explicit kitchen state: recipes, the inventory they are matched against, and the shopping list
// ABOUTME: Loads both from JSON documents, failing fast on recipes without an ingredient list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use larder_core::errors::{AppError, AppResult};
use larder_core::models::{
    Inventory, InventoryItem, Recipe, RecipeDocument, ShoppingItem, ShoppingList,
    UserIngredientSet,
};
use larder_core::validation::{validate_inventory_item, validate_recipe, validate_shopping_item};
use larder_intelligence::inventory::mark_bought;
use tracing::{debug, info};
use uuid::Uuid;

/// Recipes and inventory the services operate on
///
/// Passed explicitly to every operation; there is no process-wide store.
#[derive(Debug, Clone, Default)]
pub struct KitchenState {
    /// Recipe collection, in load order
    pub recipes: Vec<Recipe>,
    /// Items currently in stock
    pub inventory: Inventory,
    /// Items still to buy
    pub shopping: ShoppingList,
}

impl KitchenState {
    /// Create state from already-built parts
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>, inventory: Inventory) -> Self {
        Self {
            recipes,
            inventory,
            shopping: ShoppingList::new(),
        }
    }

    /// Replace the shopping list
    #[must_use]
    pub fn with_shopping_list(mut self, shopping: ShoppingList) -> Self {
        self.shopping = shopping;
        self
    }

    /// Build state from raw recipe documents
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::MissingRequiredField`] for the first document
    /// whose ingredient list is absent or null.
    ///
    /// [`ErrorCode::MissingRequiredField`]: larder_core::errors::ErrorCode::MissingRequiredField
    pub fn from_documents(documents: Vec<RecipeDocument>, inventory: Inventory) -> AppResult<Self> {
        let recipes = documents
            .into_iter()
            .map(Recipe::try_from)
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Self::new(recipes, inventory))
    }

    /// Parse recipe and inventory JSON arrays
    ///
    /// # Errors
    ///
    /// Returns an error when either document is malformed or a recipe has
    /// no ingredient list.
    pub fn from_json(recipes_json: &str, inventory_json: &str) -> AppResult<Self> {
        let documents: Vec<RecipeDocument> = serde_json::from_str(recipes_json)?;
        let inventory: Inventory = serde_json::from_str(inventory_json)?;
        Self::from_documents(documents, inventory)
    }

    /// Load state from JSON files; a missing path means an empty collection
    ///
    /// # Errors
    ///
    /// Returns an error when a file cannot be read or parsed.
    pub fn load(recipes_path: Option<&Path>, inventory_path: Option<&Path>) -> AppResult<Self> {
        let recipes_json = read_or_empty(recipes_path)?;
        let inventory_json = read_or_empty(inventory_path)?;
        let state = Self::from_json(&recipes_json, &inventory_json)?;
        info!(
            recipes = state.recipes.len(),
            inventory = state.inventory.len(),
            "Loaded kitchen state"
        );
        Ok(state)
    }

    /// Load the shopping list from a JSON file; a missing path means an empty list
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load_shopping_list(&mut self, path: Option<&Path>) -> AppResult<()> {
        let json = read_or_empty(path)?;
        self.shopping = serde_json::from_str(&json)?;
        debug!(items = self.shopping.len(), "Loaded shopping list");
        Ok(())
    }

    /// Write the shopping list back as a JSON array
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn save_shopping_list(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(&self.shopping)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), items = self.shopping.len(), "Saved shopping list");
        Ok(())
    }

    /// Write the inventory back as a JSON array
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn save_inventory(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(&self.inventory)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), items = self.inventory.len(), "Saved inventory");
        Ok(())
    }

    /// Validate and add a recipe
    ///
    /// # Errors
    ///
    /// Returns an invalid-input or out-of-range error when validation fails,
    /// and an already-exists error when a recipe has the same identifier.
    pub fn add_recipe(&mut self, recipe: Recipe) -> AppResult<Uuid> {
        let recipe = validate_recipe(recipe).map_err(AppError::from)?;
        let id = recipe.id;
        if self.recipe(id).is_some() {
            return Err(AppError::already_exists(format!("Recipe {id}"))
                .with_user(recipe.user)
                .with_resource_id(id.to_string()));
        }
        self.recipes.push(recipe);
        Ok(id)
    }

    /// Validate and add an inventory item
    ///
    /// # Errors
    ///
    /// Returns an invalid-input or out-of-range error when validation fails,
    /// and an already-exists error when an item has the same identifier.
    pub fn add_inventory_item(&mut self, item: InventoryItem) -> AppResult<Uuid> {
        let item = validate_inventory_item(item).map_err(AppError::from)?;
        let id = item.id;
        if self.inventory.get(id).is_some() {
            return Err(AppError::already_exists(format!("Inventory item {id}"))
                .with_resource_id(id.to_string()));
        }
        self.inventory.add(item);
        Ok(id)
    }

    /// Validate and put an item on the shopping list
    ///
    /// # Errors
    ///
    /// Returns an invalid-input or out-of-range error when validation fails,
    /// and an already-exists error when an item has the same identifier.
    pub fn add_shopping_item(&mut self, item: ShoppingItem) -> AppResult<Uuid> {
        let item = validate_shopping_item(item).map_err(AppError::from)?;
        let id = item.id;
        if self.shopping.contains(id) {
            let mut error = AppError::already_exists(format!("Shopping item {id}"))
                .with_resource_id(id.to_string());
            if let Some(user) = item.added_by {
                error = error.with_user(user);
            }
            return Err(error);
        }
        self.shopping.add(item);
        Ok(id)
    }

    /// Take an item off the shopping list
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no item has that identifier.
    pub fn remove_shopping_item(&mut self, id: Uuid) -> AppResult<ShoppingItem> {
        self.shopping.remove(id).ok_or_else(|| {
            AppError::not_found("Shopping item").with_resource_id(id.to_string())
        })
    }

    /// Move a bought shopping list item into the inventory
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no item has that identifier.
    pub fn mark_bought(&mut self, id: Uuid, purchased_by: Option<&str>) -> AppResult<InventoryItem> {
        mark_bought(&mut self.shopping, &mut self.inventory, id, purchased_by)
            .map_err(AppError::from)
    }

    /// Look up a recipe by identifier
    #[must_use]
    pub fn recipe(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Ingredient names owned, derived from the inventory
    #[must_use]
    pub fn owned_ingredients(&self) -> UserIngredientSet {
        UserIngredientSet::from_inventory(&self.inventory)
    }
}

fn read_or_empty(path: Option<&Path>) -> AppResult<String> {
    path.map_or_else(
        || Ok("[]".to_owned()),
        |path| {
            fs::read_to_string(path).map_err(|e| {
                AppError::storage(format!("Failed to read {}", path.display())).with_source(e)
            })
        },
    )
}
