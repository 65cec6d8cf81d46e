//! # rapid_wordgraph
//!
//! Turns free-form English text into a weighted directed graph of adjacent
//! words and answers structural queries over it.
//!
//! ## Features
//!
//! - **Graph construction**: one node per lowercase word, one edge per
//!   observed adjacency, weighted by its count (parallel for large inputs)
//! - **Bridge words**: words linking two others in two hops, and text
//!   expansion that inserts them
//! - **Shortest paths**: Dijkstra to one target or to every node
//! - **PageRank**: damped power iteration with dangling-node handling
//! - **Random walks**: seeded, edge-repetition free, optionally gated per step
//!
//! ## Example
//!
//! ```
//! use rapid_wordgraph::{PathFinder, WordGraph};
//!
//! let graph = WordGraph::from_text("the scientist analyzed it carefully the scientist analyzed it");
//! let result = PathFinder::new(&graph).find("the", Some("it")).unwrap();
//! assert_eq!(
//!     result.to_string(),
//!     "Shortest path: the -> scientist -> analyzed -> it (length: 6)"
//! );
//! ```

#[macro_use]
mod macros;

pub mod bridge;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod path;
pub mod types;
pub mod walk;

// Re-export commonly used types
pub use errors::{GraphError, Result};
pub use types::{RankConfig, WordId};

// Re-export main functionality
pub use bridge::{BridgeAnalyzer, BridgeOutcome};
pub use graph::{
    builder::{build_graph_parallel, WordGraph, WordNode},
    csr::CsrGraph,
    snapshot::{EdgeView, GraphSnapshot},
};
pub use nlp::tokenizer::{clean_words, Tokenizer};
pub use pagerank::{standard::StandardPageRank, PageRankResult, RankTable};
pub use path::{LookupMiss, PathFinder, PathResult, ShortestPathTree, TargetPath, WordPath};
pub use walk::{RandomWalker, StepDecision, Walk, WalkEnd};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
