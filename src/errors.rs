//! Error types for rapid_wordgraph
//!
//! Lookup misses and unreachable targets are ordinary query outcomes and live
//! next to the queries that produce them. This module only covers the cases
//! where an operation cannot produce a result at all.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GraphError>;

/// Main error type for rapid_wordgraph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The graph has no nodes, but the operation needs at least one
    #[error("Empty graph: {message}")]
    EmptyGraph { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl GraphError {
    /// Create an empty graph error
    pub fn empty_graph(message: impl Into<String>) -> Self {
        Self::EmptyGraph {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error was caused by a rejected configuration
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
