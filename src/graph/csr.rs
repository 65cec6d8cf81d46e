//! Compressed sparse row (CSR) snapshot of a word graph
//!
//! The arena graph is convenient to grow but slow to sweep repeatedly. The
//! CSR form packs successors into flat arrays, sorted by node ID so that
//! every sweep visits edges in the same order, and also stores the reverse
//! adjacency so rank propagation can pull from predecessors.

use crate::graph::builder::WordGraph;
use crate::types::WordId;

/// An immutable directed graph in CSR layout
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Offsets into `col_idx`/`weights`; row `i` spans `row_ptr[i]..row_ptr[i + 1]`
    pub row_ptr: Vec<usize>,
    /// Successor IDs
    pub col_idx: Vec<WordId>,
    /// Edge weights, parallel to `col_idx`
    pub weights: Vec<u32>,
    /// Offsets into `in_idx`
    pub in_ptr: Vec<usize>,
    /// Predecessor IDs
    pub in_idx: Vec<WordId>,
    /// Word for each node ID
    pub words: Vec<String>,
}

impl CsrGraph {
    /// Freeze a [`WordGraph`] into CSR form, keeping its node IDs
    pub fn from_builder(graph: &WordGraph) -> Self {
        let num_nodes = graph.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::with_capacity(graph.edge_count());
        let mut weights = Vec::with_capacity(graph.edge_count());
        let mut in_degree = vec![0usize; num_nodes];
        let mut words = Vec::with_capacity(num_nodes);

        row_ptr.push(0);
        for (_, node) in graph.nodes() {
            let mut row: Vec<(WordId, u32)> = node.edges.iter().map(|(&t, &w)| (t, w)).collect();
            row.sort_unstable_by_key(|&(t, _)| t);
            for (target, weight) in row {
                col_idx.push(target);
                weights.push(weight);
                in_degree[target as usize] += 1;
            }
            row_ptr.push(col_idx.len());
            words.push(node.word.clone());
        }

        // Counting sort of edges by target gives predecessor lists in source order.
        let mut in_ptr = Vec::with_capacity(num_nodes + 1);
        in_ptr.push(0);
        for degree in &in_degree {
            let last = in_ptr[in_ptr.len() - 1];
            in_ptr.push(last + degree);
        }
        let mut cursor = in_ptr[..num_nodes].to_vec();
        let mut in_idx = vec![0 as WordId; col_idx.len()];
        for source in 0..num_nodes {
            for &target in &col_idx[row_ptr[source]..row_ptr[source + 1]] {
                let slot = &mut cursor[target as usize];
                in_idx[*slot] = source as WordId;
                *slot += 1;
            }
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            in_ptr,
            in_idx,
            words,
        }
    }

    /// Number of directed edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Successors of `node` with their weights, in ascending ID order
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (WordId, u32)> + '_ {
        let range = self.row_ptr[node]..self.row_ptr[node + 1];
        self.col_idx[range.clone()]
            .iter()
            .copied()
            .zip(self.weights[range].iter().copied())
    }

    /// Predecessors of `node`, in ascending ID order
    pub fn predecessors(&self, node: usize) -> &[WordId] {
        &self.in_idx[self.in_ptr[node]..self.in_ptr[node + 1]]
    }

    /// Number of distinct successors of `node`
    pub fn out_degree(&self, node: usize) -> usize {
        self.row_ptr[node + 1] - self.row_ptr[node]
    }

    /// A node with no outgoing edges
    pub fn is_dangling(&self, node: usize) -> bool {
        self.out_degree(node) == 0
    }

    /// Word for a node ID
    pub fn word(&self, node: usize) -> Option<&str> {
        self.words.get(node).map(String::as_str)
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }
}
