// ABOUTME: Core types and constants for the Larder recipe and inventory platform
// ABOUTME: Foundation crate with error handling, domain models, and validation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder Core
//!
//! Foundation crate providing shared types and constants for the Larder
//! recipe and inventory platform. This crate is designed to change
//! infrequently so the matching engine and host crate compile incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Validation limits and allowed measurement units
//! - **models**: Recipes, inventory items, and the owned-ingredient set
//! - **validation**: Request validation rules for recipes and inventory items

/// Unified error handling system with standard error codes
pub mod errors;

/// Validation limits and other constants organized by domain
pub mod constants;

/// Core data models (Recipe, `InventoryItem`, `UserIngredientSet`, etc.)
pub mod models;

/// Validation and sanitisation for recipe and inventory input
pub mod validation;
