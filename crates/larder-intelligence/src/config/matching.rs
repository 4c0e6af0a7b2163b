// ABOUTME: Matching thresholds and ranking limits with environment overrides
// ABOUTME: Loaded once into a global singleton, falling back to built-in defaults on error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;
use crate::matching::{CLOSE_MATCH_PERCENTAGE, EXACT_MATCH_PERCENTAGE};

/// Global configuration singleton
static MATCHING_CONFIG: OnceLock<MatchingConfig> = OnceLock::new();

/// Environment variable overriding the exact-match threshold
pub const ENV_EXACT_MATCH_PERCENTAGE: &str = "LARDER_EXACT_MATCH_PERCENTAGE";
/// Environment variable overriding the close-match threshold
pub const ENV_CLOSE_MATCH_PERCENTAGE: &str = "LARDER_CLOSE_MATCH_PERCENTAGE";
/// Environment variable overriding the parallel scoring cut-over
pub const ENV_PARALLEL_THRESHOLD: &str = "LARDER_PARALLEL_THRESHOLD";
/// Environment variable capping the number of ranked results (0 = no cap)
pub const ENV_MAX_RESULTS: &str = "LARDER_MAX_RESULTS";

/// Matching configuration container
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Mode thresholds
    pub thresholds: MatchThresholds,
    /// Ranking execution limits
    pub ranking: RankingLimits,
}

/// Minimum match percentages for the named match modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchThresholds {
    /// Threshold for exact-match mode
    pub exact_match_percentage: u8,
    /// Threshold for close-match mode
    pub close_match_percentage: u8,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            exact_match_percentage: EXACT_MATCH_PERCENTAGE,
            close_match_percentage: CLOSE_MATCH_PERCENTAGE,
        }
    }
}

/// Limits applied while ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingLimits {
    /// Collections at least this large are scored in parallel
    pub parallel_threshold: usize,
    /// Keep at most this many ranked results
    pub max_results: Option<usize>,
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
            max_results: None,
        }
    }
}

impl MatchingConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        MATCHING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load matching config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|name| env::var(name).ok())
    }

    /// Load configuration, reading overrides through `lookup`
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or validation fails
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::default().apply_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a percentage exceeds 100, the close threshold is
    /// above the exact threshold, or the parallel threshold is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thresholds.exact_match_percentage > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "exact_match_percentage must be between 0 and 100",
            ));
        }
        if self.thresholds.close_match_percentage > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "close_match_percentage must be between 0 and 100",
            ));
        }
        if self.thresholds.close_match_percentage > self.thresholds.exact_match_percentage {
            return Err(ConfigError::InvalidRange(
                "close_match_percentage must be <= exact_match_percentage",
            ));
        }
        if self.ranking.parallel_threshold == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "parallel_threshold must be greater than 0",
            ));
        }
        Ok(())
    }

    fn apply_overrides<F>(mut self, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        apply_var(
            lookup,
            ENV_EXACT_MATCH_PERCENTAGE,
            &mut self.thresholds.exact_match_percentage,
        )?;
        apply_var(
            lookup,
            ENV_CLOSE_MATCH_PERCENTAGE,
            &mut self.thresholds.close_match_percentage,
        )?;
        apply_var(
            lookup,
            ENV_PARALLEL_THRESHOLD,
            &mut self.ranking.parallel_threshold,
        )?;

        let mut max_results = self.ranking.max_results.unwrap_or(0);
        apply_var(lookup, ENV_MAX_RESULTS, &mut max_results)?;
        self.ranking.max_results = (max_results > 0).then_some(max_results);

        Ok(self)
    }
}

/// Parse and apply one override
fn apply_var<F, T>(lookup: &F, name: &str, target: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(name) {
        *target = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: {raw}")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_validate() {
        let config = MatchingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.thresholds.exact_match_percentage, 100);
        assert_eq!(config.thresholds.close_match_percentage, 80);
        assert_eq!(config.ranking.parallel_threshold, 256);
        assert_eq!(config.ranking.max_results, None);
    }

    #[test]
    fn test_overrides_applied() {
        let config = MatchingConfig::load_from(lookup_from(&[
            (ENV_EXACT_MATCH_PERCENTAGE, "95"),
            (ENV_CLOSE_MATCH_PERCENTAGE, " 60 "),
            (ENV_PARALLEL_THRESHOLD, "8"),
            (ENV_MAX_RESULTS, "5"),
        ]))
        .unwrap();

        assert_eq!(config.thresholds.exact_match_percentage, 95);
        assert_eq!(config.thresholds.close_match_percentage, 60);
        assert_eq!(config.ranking.parallel_threshold, 8);
        assert_eq!(config.ranking.max_results, Some(5));
    }

    #[test]
    fn test_zero_max_results_means_unlimited() {
        let config = MatchingConfig::load_from(lookup_from(&[(ENV_MAX_RESULTS, "0")])).unwrap();
        assert_eq!(config.ranking.max_results, None);
    }

    #[test]
    fn test_unparseable_override_rejected() {
        let err = MatchingConfig::load_from(lookup_from(&[(ENV_CLOSE_MATCH_PERCENTAGE, "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_percentage_above_100_rejected() {
        let err = MatchingConfig::load_from(lookup_from(&[(ENV_EXACT_MATCH_PERCENTAGE, "101")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    }

    #[test]
    fn test_close_above_exact_rejected() {
        let err = MatchingConfig::load_from(lookup_from(&[
            (ENV_EXACT_MATCH_PERCENTAGE, "70"),
            (ENV_CLOSE_MATCH_PERCENTAGE, "80"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange(_)));
    }

    #[test]
    fn test_zero_parallel_threshold_rejected() {
        let err =
            MatchingConfig::load_from(lookup_from(&[(ENV_PARALLEL_THRESHOLD, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    }
}
