// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for larder-cli
// ABOUTME: Provides access to suggestion, inventory and shopping list commands

pub mod inventory;
pub mod shopping;
pub mod suggest;
