//! Standard PageRank over a directed word graph
//!
//! ```text
//! score[u] = (1 - d) / N + d * (sum over v -> u of score[v] / outdeg(v) + dangling / N)
//! ```
//!
//! `outdeg(v)` counts distinct successors, ignoring weights. Nodes without
//! successors spread their mass uniformly instead of leaking it, so the
//! scores keep summing to one.

use crate::errors::Result;
use crate::graph::builder::WordGraph;
use crate::graph::csr::CsrGraph;
use crate::pagerank::{PageRankResult, RankTable};
use crate::types::RankConfig;

/// Synchronous power-iteration PageRank
#[derive(Debug, Clone, Default)]
pub struct StandardPageRank {
    config: RankConfig,
}

impl StandardPageRank {
    /// Create a ranker with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ranker with a custom configuration
    pub fn with_config(config: RankConfig) -> Self {
        Self { config }
    }

    /// Set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.config.damping = damping;
        self
    }

    /// Set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.config.convergence_threshold = threshold;
        self
    }

    /// Set maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Run PageRank on `graph`
    ///
    /// The configuration is validated first, even for an empty graph, which
    /// then yields an empty, converged result. Hitting `max_iterations`
    /// is not an error: the last vector is returned with `converged = false`.
    pub fn run(&self, graph: &CsrGraph) -> Result<PageRankResult> {
        self.config.validate()?;

        let n = graph.num_nodes;
        if n == 0 {
            return Ok(PageRankResult::empty());
        }

        let d = self.config.damping;
        let threshold = self.config.convergence_threshold;
        let n_f = n as f64;
        let teleport = (1.0 - d) / n_f;

        let inv_out_degree: Vec<f64> = (0..n)
            .map(|node| match graph.out_degree(node) {
                0 => 0.0,
                degree => 1.0 / degree as f64,
            })
            .collect();
        let dangling_nodes: Vec<usize> = (0..n).filter(|&node| graph.is_dangling(node)).collect();

        let mut scores = vec![1.0 / n_f; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        let mut converged = false;

        while iterations < self.config.max_iterations {
            let dangling_mass: f64 = dangling_nodes.iter().map(|&node| scores[node]).sum();
            let dangling_share = dangling_mass / n_f;

            delta = 0.0;
            for (u, slot) in next.iter_mut().enumerate() {
                let incoming: f64 = graph
                    .predecessors(u)
                    .iter()
                    .map(|&v| scores[v as usize] * inv_out_degree[v as usize])
                    .sum();
                *slot = teleport + d * (incoming + dangling_share);
                delta = delta.max((*slot - scores[u]).abs());
            }

            std::mem::swap(&mut scores, &mut next);
            iterations += 1;

            if delta < threshold {
                converged = true;
                break;
            }
        }

        if converged {
            trace_event!(debug, iterations, delta, nodes = n, "pagerank converged");
        } else {
            trace_event!(
                warn,
                iterations,
                delta,
                threshold,
                "pagerank stopped at max_iterations before converging"
            );
        }

        Ok(PageRankResult {
            scores,
            iterations,
            converged,
            delta,
        })
    }
}

/// Convenience function: score every word of `graph`
pub fn calc_page_rank(graph: &WordGraph, config: &RankConfig) -> Result<RankTable> {
    let csr = CsrGraph::from_builder(graph);
    let result = StandardPageRank::with_config(config.clone()).run(&csr)?;
    Ok(result.to_table(&csr))
}
