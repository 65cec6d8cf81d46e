//! Word adjacency graph
//!
//! - [`builder`]: the mutable arena graph built from a token stream
//! - [`csr`]: an immutable compressed-sparse-row snapshot for iterative algorithms
//! - [`snapshot`]: the read-only node and edge view handed to renderers

pub mod builder;
pub mod csr;
pub mod snapshot;
