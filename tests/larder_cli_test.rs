// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Integration tests for the larder-cli binary
// ABOUTME: Runs real commands against JSON files in a temp directory and reloads what they saved

//! Integration tests for the larder-cli binary.
//!
//! These tests verify that commands write their changes back to disk only
//! when asked to, and report failures in the JSON error envelope.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use std::fs;
use std::path::Path;
use std::process::Command;

use larder::models::IngredientUnit;
use larder::services::KitchenState;
use serde_json::Value;
use tempfile::TempDir;

const INVENTORY_JSON: &str = r#"[
    {"name": "Pasta", "amount": 1, "unit": "kg", "lowStockThreshold": 0.5},
    {"name": "Olive oil", "amount": 0.5, "unit": "l"}
]"#;

/// Run the CLI with a clean logging and matching environment
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_larder-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("LARDER_EXACT_MATCH_PERCENTAGE")
        .env_remove("LARDER_CLOSE_MATCH_PERCENTAGE")
        .env_remove("LARDER_PARALLEL_THRESHOLD")
        .env_remove("LARDER_MAX_RESULTS")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn write_inventory(dir: &TempDir) -> String {
    let path = dir.path().join("inventory.json");
    fs::write(&path, INVENTORY_JSON).unwrap();
    path.display().to_string()
}

fn reload(inventory: &str, shopping: Option<&str>) -> KitchenState {
    let mut state = KitchenState::load(None, Some(Path::new(inventory))).unwrap();
    state.load_shopping_list(shopping.map(Path::new)).unwrap();
    state
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["suggest", "match", "consume", "low-stock", "shopping"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_consume_with_save_writes_inventory() {
    let dir = TempDir::new().unwrap();
    let inventory = write_inventory(&dir);

    let (exit_code, stdout, stderr) = run_cli(&[
        "--inventory",
        &inventory,
        "consume",
        "ingredient",
        "pasta",
        "0.75",
        "kg",
        "--save",
    ]);
    assert_eq!(exit_code, 0, "consume failed: {stderr}");

    let outcome: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(outcome["remaining_amount"], 0.25);
    assert_eq!(outcome["low_stock"], true);

    let state = reload(&inventory, None);
    assert_eq!(state.inventory.find_by_name("Pasta").unwrap().amount, 0.25);
    assert_eq!(state.inventory.len(), 2);
}

#[test]
fn test_consume_without_save_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let inventory = write_inventory(&dir);

    let (exit_code, _stdout, _stderr) = run_cli(&[
        "--inventory",
        &inventory,
        "consume",
        "ingredient",
        "Olive oil",
        "0.5",
        "l",
    ]);
    assert_eq!(exit_code, 0);
    assert_eq!(fs::read_to_string(&inventory).unwrap(), INVENTORY_JSON);
}

#[test]
fn test_save_without_inventory_path_is_rejected() {
    let (exit_code, _stdout, stderr) =
        run_cli(&["consume", "ingredient", "pasta", "1", "kg", "--save"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("INVALID_INPUT"));
    assert!(stderr.contains("--save requires --inventory"));
}

#[test]
fn test_unknown_unit_reported_as_invalid_format() {
    let dir = TempDir::new().unwrap();
    let inventory = write_inventory(&dir);

    let (exit_code, _stdout, stderr) = run_cli(&[
        "--inventory",
        &inventory,
        "consume",
        "ingredient",
        "pasta",
        "1",
        "bushel",
    ]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("INVALID_FORMAT"));
}

#[test]
fn test_shopping_item_bought_into_inventory() {
    let dir = TempDir::new().unwrap();
    let inventory = write_inventory(&dir);
    let shopping_path = dir.path().join("shopping.json");
    fs::write(&shopping_path, "[]").unwrap();
    let shopping = shopping_path.display().to_string();

    let (exit_code, stdout, stderr) = run_cli(&[
        "--shopping",
        &shopping,
        "shopping",
        "add",
        "Milk",
        "2",
        "l",
        "--category",
        "dairy",
        "--added-by",
        "alex",
        "--save",
    ]);
    assert_eq!(exit_code, 0, "shopping add failed: {stderr}");
    let added: Value = serde_json::from_str(&stdout).unwrap();
    let id = added["id"].as_str().unwrap().to_owned();
    assert_eq!(reload(&inventory, Some(&shopping)).shopping.len(), 1);

    let (exit_code, stdout, stderr) = run_cli(&[
        "--shopping",
        &shopping,
        "--inventory",
        &inventory,
        "shopping",
        "bought",
        &id,
        "--by",
        "sam",
        "--save",
    ]);
    assert_eq!(exit_code, 0, "shopping bought failed: {stderr}");
    let stocked: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stocked["purchased_by"], "sam");

    let state = reload(&inventory, Some(&shopping));
    assert!(state.shopping.is_empty());
    let milk = state.inventory.find_by_name("milk").unwrap();
    assert_eq!(milk.amount, 2.0);
    assert_eq!(milk.unit, IngredientUnit::Liters);
    assert_eq!(milk.category.as_deref(), Some("dairy"));
    assert_eq!(milk.purchased_by.as_deref(), Some("sam"));
    assert_eq!(state.inventory.len(), 3);
}

#[test]
fn test_bought_unknown_item_is_not_found() {
    let dir = TempDir::new().unwrap();
    let shopping = dir.path().join("shopping.json");
    fs::write(&shopping, "[]").unwrap();

    let (exit_code, _stdout, stderr) = run_cli(&[
        "--shopping",
        &shopping.display().to_string(),
        "shopping",
        "bought",
        "0b7c6d1e-2f34-4a5b-8c9d-0e1f2a3b4c5d",
    ]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("RESOURCE_NOT_FOUND"));
}
