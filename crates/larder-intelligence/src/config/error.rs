// ABOUTME: Configuration error types for matching configuration validation
// ABOUTME: Defines error variants for invalid ranges and unparseable environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Thresholds are inconsistent with each other
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let message = error.to_string();
        match error {
            ConfigError::Parse(_) => Self::config(message),
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                Self::config_invalid(message)
            }
        }
        .with_source(error)
    }
}
