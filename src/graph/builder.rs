//! Directed word graph with efficient edge handling
//!
//! Nodes live in an arena addressed by [`WordId`]; each node keeps an
//! FxHashMap from successor id to the number of times the pair was seen.
//! Edges are plain ids, so cycles and self-loops need no ownership tricks.

use crate::nlp::tokenizer::{normalize_word, Tokenizer};
use crate::types::WordId;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Token count below which [`build_graph_parallel`] stays sequential
pub const PARALLEL_THRESHOLD: usize = 1000;

/// A node in the word graph
#[derive(Debug, Clone)]
pub struct WordNode {
    /// The normalized word for this node
    pub word: String,
    /// Adjacency list: successor node ID -> number of observed adjacencies
    pub edges: FxHashMap<WordId, u32>,
}

impl WordNode {
    /// Create a new node
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            edges: FxHashMap::default(),
        }
    }

    /// Number of distinct successors
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Check whether an edge to `target` exists
    pub fn has_edge_to(&self, target: WordId) -> bool {
        self.edges.contains_key(&target)
    }
}

/// A mutable directed graph of adjacent-word counts
#[derive(Debug, Clone)]
pub struct WordGraph {
    /// Maps normalized word -> node ID
    word_to_id: FxHashMap<String, WordId>,
    /// Node storage
    nodes: Vec<WordNode>,
}

impl Default for WordGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl WordGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            word_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Build a graph from an ordered token sequence.
    ///
    /// Every consecutive pair becomes one `add_edge` call. A single token
    /// yields one isolated node, an empty sequence an empty graph.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut graph = Self::with_capacity(tokens.len() / 2);

        if let [only] = tokens {
            graph.get_or_create_node(only.as_ref());
        }
        for pair in tokens.windows(2) {
            graph.add_edge(pair[0].as_ref(), pair[1].as_ref());
        }

        trace_event!(
            debug,
            tokens = tokens.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built word graph"
        );
        graph
    }

    /// Tokenize `text` with the default tokenizer and build its graph
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(&Tokenizer::new().tokenize(text))
    }

    /// Get or create a node for the given word, returning its ID
    ///
    /// The word is lowercased first, so `"The"` and `"the"` share a node.
    pub fn get_or_create_node(&mut self, word: &str) -> WordId {
        let word = normalize_word(word);
        if let Some(&id) = self.word_to_id.get(&word) {
            return id;
        }

        let id = self.nodes.len() as WordId;
        self.nodes.push(WordNode::new(word.clone()));
        self.word_to_id.insert(word, id);
        id
    }

    /// Record one more observation of `from` directly followed by `to`
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from_id = self.get_or_create_node(from);
        let to_id = self.get_or_create_node(to);
        self.increment_edge(from_id, to_id, 1);
    }

    /// Increment the weight of the edge `from -> to`
    ///
    /// If the edge doesn't exist, it's created with the given weight. Unknown
    /// ids are ignored. Self-loops are kept: "the the" is a real adjacency.
    pub fn increment_edge(&mut self, from: WordId, to: WordId, weight: u32) {
        if to as usize >= self.nodes.len() {
            return;
        }
        if let Some(node) = self.nodes.get_mut(from as usize) {
            let entry = node.edges.entry(to).or_insert(0);
            *entry = entry.saturating_add(weight);
        }
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Sum of all edge weights (the number of adjacent pairs observed)
    pub fn total_weight(&self) -> u64 {
        self.nodes
            .iter()
            .flat_map(|n| n.edges.values())
            .map(|&w| u64::from(w))
            .sum()
    }

    /// Get a node by ID
    pub fn node(&self, id: WordId) -> Option<&WordNode> {
        self.nodes.get(id as usize)
    }

    /// Case-insensitive node lookup by word
    pub fn get_node(&self, word: &str) -> Option<&WordNode> {
        self.get_node_id(word).and_then(|id| self.node(id))
    }

    /// Case-insensitive node ID lookup by word
    pub fn get_node_id(&self, word: &str) -> Option<WordId> {
        self.word_to_id.get(&normalize_word(word)).copied()
    }

    /// Check whether a word is present
    pub fn contains(&self, word: &str) -> bool {
        self.get_node_id(word).is_some()
    }

    /// Get the word for a node ID
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.word.as_str())
    }

    /// Weight of the edge `from -> to`, if both words and the edge exist
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<u32> {
        let to_id = self.get_node_id(to)?;
        self.get_node(from)?.edges.get(&to_id).copied()
    }

    /// Successors of a node with their edge weights
    pub fn neighbors(&self, id: WordId) -> impl Iterator<Item = (WordId, u32)> + '_ {
        self.nodes
            .get(id as usize)
            .into_iter()
            .flat_map(|n| n.edges.iter().map(|(&t, &w)| (t, w)))
    }

    /// Number of distinct successors of a node (0 for unknown ids)
    pub fn out_degree(&self, id: WordId) -> usize {
        self.nodes.get(id as usize).map_or(0, WordNode::out_degree)
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (WordId, &WordNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as WordId, n))
    }

    /// Iterate over all words in node-ID order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.word.as_str())
    }

    /// Iterate over all edges as `(from, to, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.nodes.iter().flat_map(move |n| {
            n.edges
                .iter()
                .map(move |(&t, &w)| (n.word.as_str(), self.nodes[t as usize].word.as_str(), w))
        })
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build a graph from tokens in parallel (for large documents)
///
/// Pair counts are accumulated per rayon split and merged, which is sound
/// because weight increments commute per ordered pair. Nodes are created in
/// token order first, so IDs and weights match [`WordGraph::from_tokens`].
pub fn build_graph_parallel<S: AsRef<str> + Sync>(tokens: &[S]) -> WordGraph {
    // For small documents, sequential is faster
    if tokens.len() < PARALLEL_THRESHOLD {
        return WordGraph::from_tokens(tokens);
    }

    let pair_counts: FxHashMap<(&str, &str), u32> = tokens
        .par_windows(2)
        .fold(FxHashMap::default, |mut counts, pair| {
            *counts
                .entry((pair[0].as_ref(), pair[1].as_ref()))
                .or_insert(0) += 1;
            counts
        })
        .reduce(FxHashMap::default, |mut merged, partial| {
            for (pair, count) in partial {
                *merged.entry(pair).or_insert(0) += count;
            }
            merged
        });

    let mut graph = WordGraph::with_capacity(tokens.len() / 2);
    for token in tokens {
        graph.get_or_create_node(token.as_ref());
    }
    for ((from, to), count) in pair_counts {
        let from_id = graph.get_or_create_node(from);
        let to_id = graph.get_or_create_node(to);
        graph.increment_edge(from_id, to_id, count);
    }

    trace_event!(
        debug,
        tokens = tokens.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built word graph in parallel"
    );
    graph
}
