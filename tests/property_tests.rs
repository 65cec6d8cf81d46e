//! Property-based tests using proptest

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rapid_wordgraph::*;
use std::collections::{HashMap, HashSet};

const VOCABULARY: &[&str] = &[
    "the", "cat", "sat", "on", "mat", "dog", "ran", "to", "it", "and",
];

fn token_stream() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(VOCABULARY).prop_map(str::to_string),
        1..60,
    )
}

/// Bellman-Ford over the edge list, used as a slow reference for Dijkstra
fn reference_distances(graph: &WordGraph, source: &str) -> HashMap<String, u64> {
    let mut dist: HashMap<String, u64> = HashMap::new();
    dist.insert(source.to_string(), 0);
    for _ in 0..graph.node_count() {
        let mut changed = false;
        for (from, to, weight) in graph.edges() {
            let Some(&base) = dist.get(from) else {
                continue;
            };
            let candidate = base + u64::from(weight);
            if dist.get(to).map_or(true, |&d| candidate < d) {
                dist.insert(to.to_string(), candidate);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_tokenizer_emits_lowercase_letters_only(text in ".{0,200}") {
        for token in Tokenizer::new().tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase()), "bad token {:?}", token);
        }
    }

    #[test]
    fn test_one_node_per_distinct_token(tokens in token_stream()) {
        let graph = WordGraph::from_tokens(&tokens);
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        prop_assert_eq!(graph.node_count(), distinct.len());
        prop_assert_eq!(graph.total_weight(), (tokens.len() - 1) as u64);
    }

    #[test]
    fn test_edge_weights_count_adjacent_pairs(tokens in token_stream()) {
        let graph = WordGraph::from_tokens(&tokens);
        let mut counts: HashMap<(&str, &str), u32> = HashMap::new();
        for pair in tokens.windows(2) {
            *counts.entry((pair[0].as_str(), pair[1].as_str())).or_default() += 1;
        }
        prop_assert_eq!(graph.edge_count(), counts.len());
        for ((from, to), count) in counts {
            prop_assert_eq!(graph.edge_weight(from, to), Some(count));
        }
    }

    #[test]
    fn test_parallel_build_matches_sequential(tokens in token_stream()) {
        let seq = WordGraph::from_tokens(&tokens);
        let par = build_graph_parallel(&tokens);
        prop_assert_eq!(seq.node_count(), par.node_count());
        prop_assert_eq!(seq.edge_count(), par.edge_count());
        for (from, to, weight) in seq.edges() {
            prop_assert_eq!(par.edge_weight(from, to), Some(weight));
        }
    }

    #[test]
    fn test_pagerank_scores_sum_to_one(
        tokens in token_stream(),
        damping in 0.05f64..0.95
    ) {
        let csr = CsrGraph::from_builder(&WordGraph::from_tokens(&tokens));
        let result = StandardPageRank::new()
            .with_damping(damping)
            .run(&csr)
            .unwrap();

        prop_assert!(result.converged);
        prop_assert!(result.scores.iter().all(|&s| s > 0.0));
        let sum: f64 = result.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-6, "Scores sum to {} instead of 1", sum);
    }

    #[test]
    fn test_path_to_self_is_empty(tokens in token_stream()) {
        let graph = WordGraph::from_tokens(&tokens);
        let start = &tokens[0];
        let result = PathFinder::new(&graph).shortest_path(start, start).unwrap();
        match result {
            PathResult::Single { path } => {
                prop_assert_eq!(path.weight, 0);
                prop_assert_eq!(path.words, vec![start.clone()]);
            }
            other => prop_assert!(false, "unexpected {}", other),
        }
    }

    #[test]
    fn test_shortest_paths_are_minimal(tokens in token_stream()) {
        let graph = WordGraph::from_tokens(&tokens);
        let source = &tokens[0];
        let expected = reference_distances(&graph, source);

        let finder = PathFinder::new(&graph);
        let Some(id) = graph.get_node_id(source) else {
            return Err(TestCaseError::fail("source missing from graph"));
        };
        let tree = finder.shortest_path_tree(id);
        prop_assert_eq!(tree.reachable_count(), expected.len());

        for (target_id, node) in graph.nodes() {
            let Some(path) = tree.path_to(&graph, target_id) else {
                prop_assert!(!expected.contains_key(&node.word));
                continue;
            };
            prop_assert_eq!(Some(&path.weight), expected.get(&node.word));

            // The reported weight is the sum of the traversed edges
            let summed: u64 = path
                .words
                .windows(2)
                .map(|pair| graph.edge_weight(&pair[0], &pair[1]).map_or(0, u64::from))
                .sum();
            prop_assert_eq!(summed, path.weight);
            prop_assert_eq!(path.words.first(), Some(source));
            prop_assert_eq!(path.words.last(), Some(&node.word));
        }
    }

    #[test]
    fn test_walk_never_repeats_an_edge(tokens in token_stream(), seed in any::<u64>()) {
        let graph = WordGraph::from_tokens(&tokens);
        let walk = RandomWalker::new(&graph)
            .walk(&mut StdRng::seed_from_u64(seed))
            .unwrap();

        prop_assert!(!walk.words.is_empty());
        let mut seen = HashSet::new();
        for pair in walk.words.windows(2) {
            prop_assert!(graph.edge_weight(&pair[0], &pair[1]).is_some());
            prop_assert!(seen.insert((pair[0].clone(), pair[1].clone())));
        }
    }

    #[test]
    fn test_bridges_are_two_hop_links(tokens in token_stream()) {
        let graph = WordGraph::from_tokens(&tokens);
        let first = &tokens[0];
        let last = &tokens[tokens.len() - 1];

        let outcome = BridgeAnalyzer::new(&graph).bridge_words(first, last);
        for bridge in outcome.bridges() {
            prop_assert!(graph.edge_weight(first, bridge).is_some());
            prop_assert!(graph.edge_weight(bridge, last).is_some());
        }
    }
}
