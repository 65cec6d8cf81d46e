//! Core types for rapid_wordgraph
//!
//! This module defines the node identifier used by the graph arena and the
//! ranking configuration shared by the scorer and its callers.

use crate::errors::{GraphError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Node identifiers
// ============================================================================

/// Index of a node in the graph arena.
///
/// Ids are dense, assigned in first-appearance order and never reused, so
/// they double as indices into per-node vectors (distances, scores).
pub type WordId = u32;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for importance scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Damping factor, strictly between 0 and 1 (typically 0.85)
    pub damping: f64,
    /// Convergence threshold (stop when the largest per-node change < threshold)
    pub convergence_threshold: f64,
    /// Safety bound on the number of power iterations
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_max_iterations() -> usize {
    RankConfig::DEFAULT_MAX_ITERATIONS
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            convergence_threshold: 1e-6,
            max_iterations: default_max_iterations(),
        }
    }
}

impl RankConfig {
    /// Iteration bound used when none is configured.
    pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON, filling in defaults for omitted optional
    /// fields, and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(GraphError::invalid_config(format!(
                "damping must be in the open interval (0, 1), got {}",
                self.damping
            )));
        }

        if !(self.convergence_threshold.is_finite() && self.convergence_threshold > 0.0) {
            return Err(GraphError::invalid_config(format!(
                "convergence_threshold must be a finite value > 0, got {}",
                self.convergence_threshold
            )));
        }

        if self.max_iterations == 0 {
            return Err(GraphError::invalid_config("max_iterations must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RankConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.damping, 0.85);
        assert_eq!(config.convergence_threshold, 1e-6);
    }

    #[test]
    fn test_damping_bounds_are_exclusive() {
        assert!(RankConfig::default().with_damping(0.0).validate().is_err());
        assert!(RankConfig::default().with_damping(1.0).validate().is_err());
        assert!(RankConfig::default().with_damping(-0.2).validate().is_err());
        assert!(RankConfig::default().with_damping(f64::NAN).validate().is_err());
        assert!(RankConfig::default().with_damping(0.5).validate().is_ok());
    }

    #[test]
    fn test_threshold_must_be_positive_and_finite() {
        let err = RankConfig::default()
            .with_convergence_threshold(0.0)
            .validate()
            .unwrap_err();
        assert!(err.is_invalid_config());

        assert!(RankConfig::default()
            .with_convergence_threshold(-1e-3)
            .validate()
            .is_err());
        assert!(RankConfig::default()
            .with_convergence_threshold(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(RankConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_from_json_defaults_max_iterations() {
        let config =
            RankConfig::from_json(r#"{"damping": 0.9, "convergence_threshold": 1e-8}"#).unwrap();
        assert_eq!(config.damping, 0.9);
        assert_eq!(config.max_iterations, RankConfig::DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        let err = RankConfig::from_json(r#"{"damping": 1.2, "convergence_threshold": 1e-6}"#)
            .unwrap_err();
        assert!(err.is_invalid_config());

        let err = RankConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, GraphError::Serialization { .. }));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = RankConfig::default()
            .with_damping(0.7)
            .with_max_iterations(250);
        let json = serde_json::to_string(&config).unwrap();
        let back: RankConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
