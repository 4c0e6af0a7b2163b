// ABOUTME: Configuration module for larder-intelligence crate
// ABOUTME: Re-exports matching configuration types and the config error enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

mod matching;

pub use error::ConfigError;
pub use matching::{
    MatchThresholds, MatchingConfig, RankingLimits, ENV_CLOSE_MATCH_PERCENTAGE,
    ENV_EXACT_MATCH_PERCENTAGE, ENV_MAX_RESULTS, ENV_PARALLEL_THRESHOLD,
};
