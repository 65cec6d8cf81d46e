//! PageRank-style importance scoring
//!
//! - [`standard`]: damped power iteration with dangling-node redistribution

pub mod standard;

use crate::graph::csr::CsrGraph;
use serde::Serialize;
use std::collections::BTreeMap;

/// Scores keyed by word
pub type RankTable = BTreeMap<String, f64>;

/// Output of one ranking run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRankResult {
    /// Score per node ID
    pub scores: Vec<f64>,
    /// Number of power iterations performed
    pub iterations: usize,
    /// Whether the largest per-node change fell below the threshold
    pub converged: bool,
    /// Largest per-node change in the last iteration
    pub delta: f64,
}

impl PageRankResult {
    /// Result for a graph with no nodes
    pub fn empty() -> Self {
        Self {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
            delta: 0.0,
        }
    }

    /// Score of one node
    pub fn score(&self, node: usize) -> Option<f64> {
        self.scores.get(node).copied()
    }

    /// Scores keyed by word
    pub fn to_table(&self, graph: &CsrGraph) -> RankTable {
        self.scores
            .iter()
            .zip(&graph.words)
            .map(|(&score, word)| (word.clone(), score))
            .collect()
    }

    /// `(word, score)` pairs, highest score first, ties by word
    pub fn ranked(&self, graph: &CsrGraph) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self.to_table(graph).into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}
