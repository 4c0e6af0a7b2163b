// ABOUTME: Integration tests for kitchen state loading and the recipe suggestion service
// ABOUTME: Exercises JSON files on disk, per-user filtering, threshold overrides and lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use std::fs;

use larder::errors::ErrorCode;
use larder::intelligence::config::{MatchThresholds, RankingLimits};
use larder::intelligence::{MatchMode, MatchingConfig};
use larder::models::{IngredientUnit, InventoryItem, Recipe, ShoppingItem};
use larder::services::{KitchenState, SuggestionService};
use tempfile::TempDir;
use uuid::Uuid;

const PASTA_ID: &str = "0b7c6d1e-2f34-4a5b-8c9d-0e1f2a3b4c5d";

const RECIPES_JSON: &str = r#"[
    {
        "id": "0b7c6d1e-2f34-4a5b-8c9d-0e1f2a3b4c5d",
        "user": "sam",
        "name": "Pasta al pomodoro",
        "ingredients": ["tomato", "pasta", "basil"],
        "instructions": ["Boil pasta", "Add sauce"]
    },
    {
        "user": "sam",
        "name": "Tomato salad",
        "ingredients": ["Cherry tomatoes, halved", "Olive oil"],
        "ingredientsDetailed": [
            {"name": "cherry tomato", "amount": 250, "unit": "g"},
            {"name": "olive oil", "amount": 0.05, "unit": "L"}
        ]
    },
    {
        "user": "alex",
        "name": "Plain pasta",
        "ingredients": ["Pasta"]
    }
]"#;

const INVENTORY_JSON: &str = r#"[
    {"name": "Cherry tomato", "amount": 500, "unit": "g", "lowStockThreshold": 100},
    {"name": "Pasta", "amount": 1, "unit": "kg"},
    {"name": "Olive oil", "amount": 0.5, "unit": "l", "category": "pantry"}
]"#;

fn kitchen() -> KitchenState {
    KitchenState::from_json(RECIPES_JSON, INVENTORY_JSON).unwrap()
}

fn names(results: &[larder::intelligence::MatchResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.recipe.name.clone()).collect()
}

// ============================================================================
// Loading and saving
// ============================================================================

#[test]
fn test_load_from_files() {
    let dir = TempDir::new().unwrap();
    let recipes = dir.path().join("recipes.json");
    let inventory = dir.path().join("inventory.json");
    fs::write(&recipes, RECIPES_JSON).unwrap();
    fs::write(&inventory, INVENTORY_JSON).unwrap();

    let state = KitchenState::load(Some(&recipes), Some(&inventory)).unwrap();
    assert_eq!(state.recipes.len(), 3);
    assert_eq!(state.inventory.len(), 3);
    assert_eq!(
        state.recipes[0].id,
        Uuid::parse_str(PASTA_ID).unwrap()
    );
    assert_eq!(state.recipes[1].ingredients_detailed[1].unit, IngredientUnit::Liters);
}

#[test]
fn test_missing_paths_mean_empty_state() {
    let state = KitchenState::load(None, None).unwrap();
    assert!(state.recipes.is_empty());
    assert!(state.inventory.is_empty());
}

#[test]
fn test_unreadable_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let err = KitchenState::load(Some(&dir.path().join("absent.json")), None).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(err.message.contains("absent.json"));
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let err = KitchenState::from_json("[{", "[]").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_recipe_with_null_ingredients_rejected_on_load() {
    let err = KitchenState::from_json(
        r#"[{"user": "sam", "name": "Broken", "ingredients": null}]"#,
        "[]",
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_save_inventory_round_trips_through_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let mut state = kitchen();
    state
        .add_inventory_item(InventoryItem::new("Basil", 20.0, IngredientUnit::Grams))
        .unwrap();
    state.save_inventory(&path).unwrap();

    let reloaded = KitchenState::load(None, Some(&path)).unwrap();
    assert_eq!(reloaded.inventory, state.inventory);
    assert_eq!(reloaded.inventory.find_by_name("basil").unwrap().amount, 20.0);
}

#[test]
fn test_add_recipe_validates() {
    let mut state = KitchenState::default();
    let bad = Recipe::new("sam", "No steps").with_ingredient("water");
    assert_eq!(
        state.add_recipe(bad).unwrap_err().code,
        ErrorCode::InvalidInput
    );

    let good = Recipe::new("sam", " Broth ")
        .with_ingredient("water")
        .with_instruction("Simmer");
    let id = state.add_recipe(good).unwrap();
    assert_eq!(state.recipe(id).unwrap().name, "Broth");
}

#[test]
fn test_add_inventory_item_validates() {
    let mut state = KitchenState::default();
    let err = state
        .add_inventory_item(InventoryItem::new("Rice", 0.0, IngredientUnit::Kilograms))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(state.inventory.is_empty());
}

#[test]
fn test_duplicate_recipe_id_rejected() {
    let mut state = kitchen();
    let duplicate = Recipe {
        id: Uuid::parse_str(PASTA_ID).unwrap(),
        ..Recipe::new("alex", "Copycat pasta")
            .with_ingredient("pasta")
            .with_instruction("Boil")
    };

    let err = state.add_recipe(duplicate).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(err.context.user.as_deref(), Some("alex"));
    assert_eq!(err.context.resource_id.as_deref(), Some(PASTA_ID));
    assert_eq!(state.recipes.len(), 3);
}

#[test]
fn test_duplicate_inventory_id_rejected() {
    let mut state = KitchenState::default();
    let item = InventoryItem::new("Rice", 1.0, IngredientUnit::Kilograms);
    state.add_inventory_item(item.clone()).unwrap();

    let err = state.add_inventory_item(item).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(state.inventory.len(), 1);
}

// ============================================================================
// Shopping list
// ============================================================================

#[test]
fn test_shopping_list_add_and_remove() {
    let mut state = KitchenState::default();
    let id = state
        .add_shopping_item(
            ShoppingItem::new(" Basil ", 30.0, IngredientUnit::Grams).with_added_by("sam"),
        )
        .unwrap();
    assert_eq!(state.shopping.get(id).unwrap().name, "Basil");

    let again = state.shopping.get(id).cloned().unwrap();
    let err = state.add_shopping_item(again).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(err.context.user.as_deref(), Some("sam"));

    assert_eq!(state.remove_shopping_item(id).unwrap().name, "Basil");
    assert_eq!(
        state.remove_shopping_item(id).unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}

#[test]
fn test_bought_item_feeds_suggestions() {
    let mut state = kitchen();
    let service = SuggestionService::default();
    let pasta = Uuid::parse_str(PASTA_ID).unwrap();
    assert_eq!(service.match_recipe(&state, pasta).unwrap().match_percentage, 67);

    let basil = state
        .add_shopping_item(ShoppingItem::new("Basil", 1.0, IngredientUnit::Pieces).with_category("herbs"))
        .unwrap();
    let stocked = state.mark_bought(basil, Some("sam")).unwrap();

    assert!(state.shopping.is_empty());
    assert_eq!(stocked.category.as_deref(), Some("herbs"));
    assert_eq!(stocked.purchased_by.as_deref(), Some("sam"));
    assert_eq!(service.match_recipe(&state, pasta).unwrap().match_percentage, 100);

    let err = state.mark_bought(basil, None).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_shopping_list_round_trips_through_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shopping.json");
    fs::write(
        &path,
        r#"[{"name": "Flour", "amount": 1, "unit": "kg", "addedBy": "alex", "estimatedPrice": 1.5}]"#,
    )
    .unwrap();

    let mut state = KitchenState::default();
    state.load_shopping_list(Some(&path)).unwrap();
    assert_eq!(state.shopping.len(), 1);
    state
        .add_shopping_item(ShoppingItem::new("Yeast", 7.0, IngredientUnit::Grams))
        .unwrap();
    state.save_shopping_list(&path).unwrap();

    let mut reloaded = KitchenState::default();
    reloaded.load_shopping_list(Some(&path)).unwrap();
    assert_eq!(reloaded.shopping, state.shopping);

    let mut empty = KitchenState::default();
    empty.load_shopping_list(None).unwrap();
    assert!(empty.shopping.is_empty());
}

// ============================================================================
// Suggestions
// ============================================================================

#[test]
fn test_exact_suggestions_from_inventory() {
    let state = kitchen();
    let service = SuggestionService::default();

    let results = service.suggest(&state, None, MatchMode::Exact, None);
    assert_eq!(names(&results), vec!["Tomato salad", "Plain pasta"]);
    assert!(results.iter().all(|r| r.match_percentage == 100));
}

#[test]
fn test_suggestions_filtered_by_user() {
    let state = kitchen();
    let service = SuggestionService::default();

    let sam = service.suggest(&state, Some("sam"), MatchMode::Exact, None);
    assert_eq!(names(&sam), vec!["Tomato salad"]);

    let alex = service.suggest(&state, Some("alex"), MatchMode::Exact, None);
    assert_eq!(names(&alex), vec!["Plain pasta"]);

    assert!(service
        .suggest(&state, Some("nobody"), MatchMode::Close, Some(0))
        .is_empty());
}

#[test]
fn test_min_override_replaces_mode_threshold() {
    let state = kitchen();
    let service = SuggestionService::default();

    assert_eq!(service.suggest(&state, Some("sam"), MatchMode::Close, None).len(), 1);

    let results = service.suggest(&state, Some("sam"), MatchMode::Close, Some(60));
    assert_eq!(names(&results), vec!["Tomato salad", "Pasta al pomodoro"]);
    assert_eq!(results[1].match_percentage, 67);
    assert_eq!(results[1].missing_ingredients, vec!["basil"]);
}

#[test]
fn test_suggest_for_explicit_ingredients() {
    let state = kitchen();
    let service = SuggestionService::default();

    let results = service.suggest_for_ingredients(
        &state,
        &["basil", "tomato"],
        None,
        MatchMode::Exact,
        Some(50),
    );
    assert_eq!(names(&results), vec!["Pasta al pomodoro", "Tomato salad"]);
    assert_eq!(results[0].match_percentage, 67);
    assert_eq!(results[1].match_percentage, 50);
}

#[test]
fn test_configured_thresholds_drive_modes() {
    let config = MatchingConfig {
        thresholds: MatchThresholds {
            exact_match_percentage: 100,
            close_match_percentage: 60,
        },
        ranking: RankingLimits::default(),
    };
    let service = SuggestionService::new(&config);
    assert_eq!(service.threshold_for(MatchMode::Close), 60);

    let state = kitchen();
    let results = service.suggest(&state, None, MatchMode::Close, None);
    assert_eq!(results.len(), 3);
    assert_eq!(results[2].recipe.name, "Pasta al pomodoro");
}

#[test]
fn test_match_single_recipe() {
    let state = kitchen();
    let service = SuggestionService::default();

    let result = service
        .match_recipe(&state, Uuid::parse_str(PASTA_ID).unwrap())
        .unwrap();
    assert_eq!(result.match_percentage, 67);
    assert_eq!(result.matched_ingredients, vec!["tomato", "pasta"]);

    let missing = service.match_recipe(&state, Uuid::new_v4()).unwrap_err();
    assert_eq!(missing.code, ErrorCode::ResourceNotFound);
    assert!(missing.message.ends_with("not found"));
}

#[test]
fn test_recipes_for_user() {
    let state = kitchen();
    assert_eq!(SuggestionService::recipes_for_user(&state, None).len(), 3);
    assert_eq!(SuggestionService::recipes_for_user(&state, Some("sam")).len(), 2);
}
