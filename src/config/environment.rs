// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses the deployment mode and assembles the application configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;

use larder_intelligence::config::ConfigError;
use larder_intelligence::MatchingConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::logging::LoggingConfig;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Matching thresholds and ranking limits
    pub matching: MatchingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a matching override is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT")
            .map(|raw| Environment::from_str_or_default(&raw))
            .unwrap_or_default();

        Ok(Self {
            environment,
            logging: LoggingConfig::from_env(),
            matching: MatchingConfig::load()?,
        })
    }

    /// Log a one-line summary of the effective configuration
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            exact_match_percentage = self.matching.thresholds.exact_match_percentage,
            close_match_percentage = self.matching.thresholds.close_match_percentage,
            parallel_threshold = self.matching.ranking.parallel_threshold,
            max_results = ?self.matching.ranking.max_results,
            "Configuration loaded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
        assert_eq!(Environment::Testing.to_string(), "testing");
    }
}
