//! Read-only graph view for renderers
//!
//! A renderer needs the distinct words and the weighted edges, nothing else.
//! [`GraphSnapshot`] carries exactly that, serializes with serde, and can
//! format itself as Graphviz DOT text or as one `from -> to (weight: n)`
//! line per edge. Writing files or invoking Graphviz is left to the caller.

use crate::graph::builder::WordGraph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One directed edge in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

/// Distinct words plus weighted edges of a graph
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Words in node-ID order
    pub words: Vec<String>,
    /// Edges ordered by source ID, then target ID
    pub edges: Vec<EdgeView>,
}

impl GraphSnapshot {
    /// Capture the current nodes and edges of `graph`
    pub fn from_graph(graph: &WordGraph) -> Self {
        let words = graph.words().map(str::to_string).collect();

        let mut edges = Vec::with_capacity(graph.edge_count());
        for (_, node) in graph.nodes() {
            let mut row: Vec<_> = node.edges.iter().collect();
            row.sort_unstable_by_key(|(&target, _)| target);
            for (&target, &weight) in row {
                edges.push(EdgeView {
                    from: node.word.clone(),
                    to: graph.word(target).unwrap_or_default().to_string(),
                    weight,
                });
            }
        }

        Self { words, edges }
    }

    /// Render as a Graphviz `digraph`, labelling each edge with its weight
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph G {\n");
        for word in &self.words {
            out.push_str(&format!("    \"{}\";\n", escape_dot(word)));
        }
        for edge in &self.edges {
            out.push_str(&format!(
                "    \"{}\" -> \"{}\" [label=\"{}\"];\n",
                escape_dot(&edge.from),
                escape_dot(&edge.to),
                edge.weight
            ));
        }
        out.push_str("}\n");
        out
    }

    /// Serialize as JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&WordGraph> for GraphSnapshot {
    fn from(graph: &WordGraph) -> Self {
        Self::from_graph(graph)
    }
}

impl fmt::Display for GraphSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            writeln!(f, "{} -> {} (weight: {})", edge.from, edge.to, edge.weight)?;
        }
        Ok(())
    }
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
