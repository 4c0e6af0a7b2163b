// ABOUTME: Larder CLI - recipe suggestions and inventory upkeep from JSON files
// ABOUTME: Handles suggest, match, consume, low-stock and shopping commands, printing JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Recipes I can cook right now
//! larder-cli --recipes recipes.json --inventory inventory.json suggest --user sam
//!
//! # Recipes I can almost cook
//! larder-cli --recipes recipes.json --inventory inventory.json suggest --mode close
//!
//! # Recipes matching an ad-hoc ingredient list, at least 50% covered
//! larder-cli --recipes recipes.json suggest --have "tomato,pasta" --min 50
//!
//! # Score one recipe
//! larder-cli --recipes recipes.json --inventory inventory.json match 6f1c...
//!
//! # Cook a recipe twice over and write the inventory back
//! larder-cli --recipes recipes.json --inventory inventory.json consume recipe 6f1c... --servings 2 --save
//!
//! # Items at or below their low-stock threshold
//! larder-cli --inventory inventory.json low-stock
//!
//! # Put milk on the shared shopping list, then stock it once bought
//! larder-cli --shopping shopping.json shopping add Milk 2 l --category dairy --save
//! larder-cli --shopping shopping.json --inventory inventory.json shopping bought 9a2e... --by sam --save
//! ```

mod commands;
mod helpers;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use larder::config::AppConfig;
use larder::errors::{AppError, AppResult};
use larder::intelligence::MatchMode;
use larder::services::{KitchenState, SuggestionService};
use tracing::debug;
use uuid::Uuid;

use commands::shopping::NewShoppingItem;
use commands::suggest::SuggestOptions;
use helpers::display::print_error;

#[derive(Parser)]
#[command(
    name = "larder-cli",
    about = "Larder recipe suggestion CLI",
    long_about = "Suggests recipes from the ingredients in your inventory and keeps the inventory up to date."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file holding an array of recipes
    #[arg(long, global = true)]
    recipes: Option<PathBuf>,

    /// JSON file holding an array of inventory items
    #[arg(long, global = true)]
    inventory: Option<PathBuf>,

    /// JSON file holding the shopping list
    #[arg(long, global = true)]
    shopping: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Every ingredient covered
    Exact,
    /// Most ingredients covered
    Close,
}

impl From<ModeArg> for MatchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Exact => Self::Exact,
            ModeArg::Close => Self::Close,
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Rank recipes by how much of them the inventory covers
    Suggest {
        /// Only consider this user's recipes
        #[arg(long)]
        user: Option<String>,

        /// Threshold preset
        #[arg(long, value_enum, default_value = "exact")]
        mode: ModeArg,

        /// Minimum match percentage, overriding the preset
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        min: Option<u8>,

        /// Comma-separated ingredients to use instead of the inventory
        #[arg(long, value_delimiter = ',')]
        have: Option<Vec<String>>,
    },

    /// Score a single recipe against the inventory
    Match {
        /// Recipe identifier
        recipe_id: Uuid,
    },

    /// Take ingredients out of the inventory
    Consume {
        #[command(subcommand)]
        action: ConsumeCommand,

        /// Write the updated inventory back to the --inventory file
        #[arg(long, global = true)]
        save: bool,
    },

    /// List items at or below their low-stock threshold
    LowStock,

    /// Manage the shared shopping list
    Shopping {
        #[command(subcommand)]
        action: ShoppingCommand,

        /// Write changes back to the --shopping (and, for bought, --inventory) files
        #[arg(long, global = true)]
        save: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ShoppingCommand {
    /// Put an item on the list
    Add {
        /// Item name
        name: String,

        /// Amount to buy
        #[arg(default_value = "1.0")]
        amount: f64,

        /// Unit (kg, g, l, ml, oz, lb, cup, tbsp, tsp, unit, piece)
        #[arg(default_value = "unit")]
        unit: String,

        /// Category carried into the inventory once bought
        #[arg(long)]
        category: Option<String>,

        /// Who asked for the item
        #[arg(long)]
        added_by: Option<String>,

        /// Expected price
        #[arg(long)]
        price: Option<f64>,
    },

    /// Take an item off the list without buying it
    Remove {
        /// Shopping item identifier
        id: Uuid,
    },

    /// Print the list
    List,

    /// Move a bought item into the inventory
    Bought {
        /// Shopping item identifier
        id: Uuid,

        /// Who bought the item
        #[arg(long)]
        by: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ConsumeCommand {
    /// Consume an amount of one ingredient
    Ingredient {
        /// Inventory item name (case-insensitive)
        name: String,

        /// Amount to consume
        amount: f64,

        /// Unit (kg, g, l, ml, oz, lb, cup, tbsp, tsp, unit, piece)
        unit: String,
    },

    /// Consume every measured ingredient of a recipe
    Recipe {
        /// Recipe identifier
        recipe_id: Uuid,

        /// Scale the recipe (2.0 cooks it twice over)
        #[arg(long, default_value = "1.0")]
        servings: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error(error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::from_env()?;

    // Initialize logging
    let logging = if cli.verbose {
        config.logging.clone().with_level("debug")
    } else {
        config.logging.clone()
    };
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;
    config.log_summary();

    let mut state = KitchenState::load(cli.recipes.as_deref(), cli.inventory.as_deref())?;
    state.load_shopping_list(cli.shopping.as_deref())?;
    let service = SuggestionService::new(&config.matching);
    debug!("Running command");

    match cli.command {
        Command::Suggest {
            user,
            mode,
            min,
            have,
        } => {
            let options = SuggestOptions {
                user,
                mode: mode.into(),
                min_match_percentage: min,
                have,
            };
            commands::suggest::suggest(&service, &state, &options)?;
        }
        Command::Match { recipe_id } => {
            commands::suggest::match_recipe(&service, &state, recipe_id)?;
        }
        Command::Consume { action, save } => {
            let save_to = if save {
                Some(cli.inventory.as_deref().ok_or_else(|| {
                    AppError::invalid_input("--save requires --inventory")
                })?)
            } else {
                None
            };
            match action {
                ConsumeCommand::Ingredient { name, amount, unit } => {
                    commands::inventory::consume_one(&mut state, &name, amount, &unit, save_to)?;
                }
                ConsumeCommand::Recipe {
                    recipe_id,
                    servings,
                } => {
                    commands::inventory::consume_for_recipe(
                        &mut state, recipe_id, servings, save_to,
                    )?;
                }
            }
        }
        Command::LowStock => {
            commands::inventory::low_stock(&state)?;
        }
        Command::Shopping { action, save } => {
            run_shopping(
                &mut state,
                cli.shopping.as_deref(),
                cli.inventory.as_deref(),
                action,
                save,
            )?;
        }
    }

    Ok(())
}

fn run_shopping(
    state: &mut KitchenState,
    shopping_path: Option<&Path>,
    inventory_path: Option<&Path>,
    action: ShoppingCommand,
    save: bool,
) -> AppResult<()> {
    let list_to = if save {
        Some(shopping_path.ok_or_else(|| {
            AppError::invalid_input("--save requires --shopping")
        })?)
    } else {
        None
    };

    match action {
        ShoppingCommand::Add {
            name,
            amount,
            unit,
            category,
            added_by,
            price,
        } => {
            let new = NewShoppingItem {
                name,
                amount,
                unit,
                category,
                added_by,
                estimated_price: price,
            };
            commands::shopping::add(state, new, list_to)
        }
        ShoppingCommand::Remove { id } => commands::shopping::remove(state, id, list_to),
        ShoppingCommand::List => commands::shopping::list(state),
        ShoppingCommand::Bought { id, by } => {
            let save_to = match list_to {
                Some(list_path) => Some((
                    list_path,
                    inventory_path.ok_or_else(|| {
                        AppError::invalid_input("--save requires --inventory for bought items")
                    })?,
                )),
                None => None,
            };
            commands::shopping::bought(state, id, by.as_deref(), save_to)
        }
    }
}
