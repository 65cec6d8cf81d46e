//! Random walks that never reuse a directed edge
//!
//! A walk starts at a uniformly chosen node and keeps moving to a uniformly
//! chosen successor. It ends at a node without successors, right before it
//! would traverse an edge it already used, or when the step gate says stop.

use crate::errors::{GraphError, Result};
use crate::graph::builder::WordGraph;
use crate::types::WordId;
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt;

/// Answer of a step gate after each step of an interactive walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDecision {
    Continue,
    Stop,
}

/// Why a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkEnd {
    /// The current node has no outgoing edges
    DeadEnd,
    /// The chosen edge was already traversed in this walk
    RepeatedEdge,
    /// The step gate returned [`StepDecision::Stop`]
    Stopped,
}

/// The words visited by one walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walk {
    /// Visited words, starting node first; never empty
    pub words: Vec<String>,
    pub end: WalkEnd,
}

impl Walk {
    /// Number of edges traversed
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// Visited words joined by single spaces
    pub fn to_text(&self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for Walk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" -> "))
    }
}

/// Random walks over a built graph
#[derive(Debug, Clone, Copy)]
pub struct RandomWalker<'g> {
    graph: &'g WordGraph,
}

impl<'g> RandomWalker<'g> {
    /// Create a walker borrowing `graph`
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    /// Walk until a dead end or a repeated edge
    pub fn walk<R: Rng>(&self, rng: &mut R) -> Result<Walk> {
        self.walk_with(rng, |_| StepDecision::Continue)
    }

    /// Walk, asking `gate` after every step whether to go on
    ///
    /// The gate sees the words visited so far, the newest one last. It is
    /// not consulted before the first step.
    pub fn walk_with<R, F>(&self, rng: &mut R, gate: F) -> Result<Walk>
    where
        R: Rng,
        F: FnMut(&[String]) -> StepDecision,
    {
        let n = self.graph.node_count();
        if n == 0 {
            return Err(GraphError::empty_graph("cannot start a walk on a graph without nodes"));
        }
        let start = rng.random_range(0..n) as WordId;
        Ok(self.walk_from(start, rng, gate))
    }

    fn walk_from<R, F>(&self, start: WordId, rng: &mut R, mut gate: F) -> Walk
    where
        R: Rng,
        F: FnMut(&[String]) -> StepDecision,
    {
        let mut traversed: FxHashSet<(WordId, WordId)> = FxHashSet::default();
        let mut words: Vec<String> = self.graph.word(start).map(str::to_string).into_iter().collect();
        let mut current = start;

        let end = loop {
            let Some(node) = self.graph.node(current) else {
                break WalkEnd::DeadEnd;
            };
            let degree = node.out_degree();
            if degree == 0 {
                break WalkEnd::DeadEnd;
            }

            let pick = rng.random_range(0..degree);
            let Some(&next) = node.edges.keys().nth(pick) else {
                break WalkEnd::DeadEnd;
            };
            if !traversed.insert((current, next)) {
                break WalkEnd::RepeatedEdge;
            }

            current = next;
            if let Some(word) = self.graph.word(current) {
                words.push(word.to_string());
            }
            if gate(&words) == StepDecision::Stop {
                break WalkEnd::Stopped;
            }
        };

        trace_event!(debug, steps = words.len().saturating_sub(1), end = ?end, "random walk finished");
        Walk { words, end }
    }
}

/// Convenience function for a one-off walk
pub fn random_walk<R: Rng>(graph: &WordGraph, rng: &mut R) -> Result<Walk> {
    RandomWalker::new(graph).walk(rng)
}
