//! Bridge words and bridge-based text expansion
//!
//! A bridge word between `a` and `b` is any word `m` with edges `a -> m` and
//! `m -> b`, whatever their weights. The relation is directional:
//! bridges from `a` to `b` say nothing about bridges from `b` to `a`.

use crate::graph::builder::WordGraph;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::WordId;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Outcome of a bridge-word query
///
/// Words are echoed back as the caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BridgeOutcome {
    /// Neither word is in the graph
    BothMissing { word1: String, word2: String },
    /// Exactly one word is missing
    Missing { word: String },
    /// Both words exist but nothing connects them in two hops
    NoBridge { word1: String, word2: String },
    /// Bridge words found, in graph-table order
    Found {
        word1: String,
        word2: String,
        bridges: Vec<String>,
    },
}

impl BridgeOutcome {
    /// The bridge words, empty unless the query found some
    pub fn bridges(&self) -> &[String] {
        match self {
            BridgeOutcome::Found { bridges, .. } => bridges,
            _ => &[],
        }
    }

    /// Whether at least one bridge word was found
    pub fn is_found(&self) -> bool {
        matches!(self, BridgeOutcome::Found { .. })
    }
}

impl fmt::Display for BridgeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeOutcome::BothMissing { word1, word2 } => {
                write!(f, "No {word1} and {word2} in the graph!")
            }
            BridgeOutcome::Missing { word } => write!(f, "No {word} in the graph!"),
            BridgeOutcome::NoBridge { word1, word2 } => {
                write!(f, "No bridge words from {word1} to {word2}!")
            }
            BridgeOutcome::Found {
                word1,
                word2,
                bridges,
            } => write!(
                f,
                "The bridge words from {word1} to {word2} is/are: {}.",
                bridges.join(", ")
            ),
        }
    }
}

/// Bridge-word queries over a built graph
#[derive(Debug, Clone, Copy)]
pub struct BridgeAnalyzer<'g> {
    graph: &'g WordGraph,
}

impl<'g> BridgeAnalyzer<'g> {
    /// Create an analyzer borrowing `graph`
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    /// Find the bridge words from `word1` to `word2`
    pub fn bridge_words(&self, word1: &str, word2: &str) -> BridgeOutcome {
        let (from, to) = match (self.graph.get_node_id(word1), self.graph.get_node_id(word2)) {
            (None, None) => {
                return BridgeOutcome::BothMissing {
                    word1: word1.to_string(),
                    word2: word2.to_string(),
                }
            }
            (None, Some(_)) => {
                return BridgeOutcome::Missing {
                    word: word1.to_string(),
                }
            }
            (Some(_), None) => {
                return BridgeOutcome::Missing {
                    word: word2.to_string(),
                }
            }
            (Some(from), Some(to)) => (from, to),
        };

        let bridges: Vec<String> = self
            .bridge_ids(from, to)
            .into_iter()
            .filter_map(|id| self.graph.word(id))
            .map(str::to_string)
            .collect();

        if bridges.is_empty() {
            BridgeOutcome::NoBridge {
                word1: word1.to_string(),
                word2: word2.to_string(),
            }
        } else {
            BridgeOutcome::Found {
                word1: word1.to_string(),
                word2: word2.to_string(),
                bridges,
            }
        }
    }

    /// IDs of every node `m` with edges `from -> m` and `m -> to`
    pub fn bridge_ids(&self, from: WordId, to: WordId) -> Vec<WordId> {
        self.graph
            .neighbors(from)
            .map(|(mid, _)| mid)
            .filter(|&mid| self.graph.node(mid).is_some_and(|n| n.has_edge_to(to)))
            .collect()
    }

    /// Insert one random bridge word between each adjacent pair that has any
    ///
    /// The input is tokenized first, so the output is lowercase words joined
    /// by single spaces. Empty input yields an empty string and a single word
    /// comes back on its own.
    pub fn expand_text<R: Rng>(&self, text: &str, rng: &mut R) -> String {
        let tokens = Tokenizer::new().tokenize(text);
        let Some(last) = tokens.last() else {
            return String::new();
        };

        let mut out: Vec<&str> = Vec::with_capacity(tokens.len() * 2);
        for pair in tokens.windows(2) {
            out.push(pair[0].as_str());

            let (Some(from), Some(to)) = (
                self.graph.get_node_id(&pair[0]),
                self.graph.get_node_id(&pair[1]),
            ) else {
                continue;
            };
            let bridges = self.bridge_ids(from, to);
            if bridges.is_empty() {
                continue;
            }
            let pick = bridges[rng.random_range(0..bridges.len())];
            if let Some(word) = self.graph.word(pick) {
                out.push(word);
            }
        }
        out.push(last.as_str());

        trace_event!(debug, tokens = tokens.len(), words = out.len(), "expanded text");
        out.join(" ")
    }
}

/// Convenience function for a one-off bridge query
pub fn query_bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> BridgeOutcome {
    BridgeAnalyzer::new(graph).bridge_words(word1, word2)
}

/// Convenience function for a one-off text expansion
pub fn generate_new_text<R: Rng>(graph: &WordGraph, text: &str, rng: &mut R) -> String {
    BridgeAnalyzer::new(graph).expand_text(text, rng)
}
