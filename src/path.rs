//! Weighted shortest paths (Dijkstra)
//!
//! Edge weights are adjacency counts, so a "short" path here is one built
//! from rarely observed transitions. Distances are `u64` sums of `u32`
//! weights; unreached nodes have no distance at all rather than a sentinel.
//!
//! One [`ShortestPathTree`] per source serves both query modes: a single
//! target reads one path out of it, the all-targets mode reads every path.

use crate::graph::builder::WordGraph;
use crate::types::WordId;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use thiserror::Error;

/// A supplied word that does not resolve to a node
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMiss {
    #[error("Start word is not in graph.")]
    Start,
    #[error("End word is not in graph.")]
    End,
    #[error("Start word and end word are not in graph.")]
    Both,
}

/// A path and its total weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordPath {
    /// Words from source to target, both included
    pub words: Vec<String>,
    /// Sum of the traversed edge weights
    pub weight: u64,
}

impl WordPath {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.words.len().saturating_sub(1)
    }
}

impl fmt::Display for WordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (length: {})", self.words.join(" -> "), self.weight)
    }
}

/// Shortest path to one target of an all-targets query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetPath {
    pub target: String,
    /// `None` when the target is unreachable from the source
    pub path: Option<WordPath>,
}

/// Result of a shortest-path query whose words were all found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathResult {
    /// Minimum-weight path to the requested target
    Single { path: WordPath },
    /// The requested target cannot be reached
    NoPath { from: String, to: String },
    /// Every other node, sorted by word
    AllTargets {
        source: String,
        targets: Vec<TargetPath>,
    },
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathResult::Single { path } => write!(f, "Shortest path: {path}"),
            PathResult::NoPath { from, to } => write!(f, "No path from {from} to {to}."),
            PathResult::AllTargets { source, targets } => {
                writeln!(f, "Shortest paths from \"{source}\":")?;
                for target in targets {
                    match &target.path {
                        Some(path) => writeln!(f, "To {}: {path}", target.target)?,
                        None => writeln!(f, "No path to {}.", target.target)?,
                    }
                }
                Ok(())
            }
        }
    }
}

/// Distances and predecessors from one source
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: WordId,
    dist: Vec<Option<u64>>,
    prev: Vec<Option<WordId>>,
}

impl ShortestPathTree {
    /// The source node
    pub fn source(&self) -> WordId {
        self.source
    }

    /// Shortest distance to `node`, `None` if unreachable or unknown
    pub fn distance(&self, node: WordId) -> Option<u64> {
        self.dist.get(node as usize).copied().flatten()
    }

    /// Whether `node` is reachable from the source
    pub fn is_reachable(&self, node: WordId) -> bool {
        self.distance(node).is_some()
    }

    /// Number of reachable nodes, the source included
    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }

    /// Node IDs along the shortest path from the source to `node`
    pub fn path_ids(&self, node: WordId) -> Option<Vec<WordId>> {
        self.distance(node)?;

        let mut ids = vec![node];
        let mut current = node;
        while current != self.source {
            current = self.prev[current as usize]?;
            ids.push(current);
        }
        ids.reverse();
        Some(ids)
    }

    /// The shortest path to `node` as words
    pub fn path_to(&self, graph: &WordGraph, node: WordId) -> Option<WordPath> {
        let words = self
            .path_ids(node)?
            .into_iter()
            .map(|id| graph.word(id).map(str::to_string))
            .collect::<Option<Vec<_>>>()?;
        Some(WordPath {
            words,
            weight: self.distance(node)?,
        })
    }
}

/// Shortest-path queries over a built graph
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g WordGraph,
}

impl<'g> PathFinder<'g> {
    /// Create a path finder borrowing `graph`
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    /// Run Dijkstra from `source`
    ///
    /// Improved distances are pushed again and stale heap entries skipped on
    /// pop, so no decrease-key is needed.
    pub fn shortest_path_tree(&self, source: WordId) -> ShortestPathTree {
        let n = self.graph.node_count();
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut prev: Vec<Option<WordId>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        if (source as usize) < n {
            dist[source as usize] = Some(0);
            heap.push(Reverse((0u64, source)));
        }

        while let Some(Reverse((d, u))) = heap.pop() {
            if dist[u as usize].is_some_and(|best| d > best) {
                continue;
            }
            for (v, weight) in self.graph.neighbors(u) {
                let alt = d + u64::from(weight);
                let slot = &mut dist[v as usize];
                if slot.map_or(true, |current| alt < current) {
                    *slot = Some(alt);
                    prev[v as usize] = Some(u);
                    heap.push(Reverse((alt, v)));
                }
            }
        }

        let tree = ShortestPathTree { source, dist, prev };
        trace_event!(
            debug,
            source,
            reachable = tree.reachable_count(),
            nodes = n,
            "computed shortest path tree"
        );
        tree
    }

    /// Shortest path(s) from `start`
    ///
    /// With a non-blank `end`, returns the path to that word. With `end`
    /// omitted or blank, returns paths to every other node. Missing words
    /// are reported as a [`LookupMiss`], checked for both words at once.
    pub fn find(&self, start: &str, end: Option<&str>) -> Result<PathResult, LookupMiss> {
        let end = end.map(str::trim).filter(|e| !e.is_empty());
        let source = self.graph.get_node_id(start);
        let target = end.map(|e| self.graph.get_node_id(e));

        match (source, target) {
            (None, Some(None)) => Err(LookupMiss::Both),
            (None, _) => Err(LookupMiss::Start),
            (Some(_), Some(None)) => Err(LookupMiss::End),
            (Some(source), Some(Some(target))) => {
                let tree = self.shortest_path_tree(source);
                Ok(match tree.path_to(self.graph, target) {
                    Some(path) => PathResult::Single { path },
                    None => PathResult::NoPath {
                        from: start.to_string(),
                        to: end.unwrap_or_default().to_string(),
                    },
                })
            }
            (Some(source), None) => Ok(self.all_targets(start, source)),
        }
    }

    /// Shortest path between two words
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<PathResult, LookupMiss> {
        if end.trim().is_empty() {
            // A blank target would silently switch to all-targets mode.
            return match self.graph.get_node_id(start) {
                Some(_) => Err(LookupMiss::End),
                None => Err(LookupMiss::Both),
            };
        }
        self.find(start, Some(end))
    }

    /// Shortest paths from one word to every other node
    pub fn shortest_paths_from(&self, start: &str) -> Result<PathResult, LookupMiss> {
        self.find(start, None)
    }

    fn all_targets(&self, start: &str, source: WordId) -> PathResult {
        let tree = self.shortest_path_tree(source);

        let mut targets: Vec<TargetPath> = self
            .graph
            .nodes()
            .filter(|&(id, _)| id != source)
            .map(|(id, node)| TargetPath {
                target: node.word.clone(),
                path: tree.path_to(self.graph, id),
            })
            .collect();
        targets.sort_by(|a, b| a.target.cmp(&b.target));

        PathResult::AllTargets {
            source: start.to_string(),
            targets,
        }
    }
}

/// Convenience function mirroring [`PathFinder::find`]
pub fn calc_shortest_path(
    graph: &WordGraph,
    start: &str,
    end: Option<&str>,
) -> Result<PathResult, LookupMiss> {
    PathFinder::new(graph).find(start, end)
}
