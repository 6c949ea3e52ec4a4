//! Random connected graphs for the graph simulators.
//!
//! Nodes sit evenly on a circle; a ring of edges guarantees connectivity and
//! a handful of random chords make the algorithms interesting.

use std::f64::consts::PI;

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{EngineError, Result};
use crate::model::{Graph, GraphEdge, GraphNode};

pub const MIN_GRAPH_NODES: usize = 3;
pub const MAX_GRAPH_NODES: usize = 10;
/// Circle radius, in percent of the canvas.
pub const GRAPH_RADIUS: f64 = 35.0;
/// Circle center on both axes, in percent of the canvas.
pub const GRAPH_CENTER: f64 = 50.0;
pub const MIN_EDGE_WEIGHT: u32 = 1;
pub const MAX_EDGE_WEIGHT: u32 = 9;
/// Redraws of a chord endpoint before the chord is dropped.
const CHORD_RETRIES: usize = 10;

/// Clamps an input length to a valid node count.
pub fn clamp_node_count(len: usize) -> usize {
    len.clamp(MIN_GRAPH_NODES, MAX_GRAPH_NODES)
}

pub fn node_id(index: usize) -> String {
    format!("node-{index}")
}

/// `A`, `B`, `C`, ... for node 0, 1, 2, ...
pub fn node_label(index: usize) -> String {
    char::from(b'A' + (index % 26) as u8).to_string()
}

/// Number of chords attempted for `n` nodes: `max(2, floor(n / 1.5))`.
pub fn chord_attempts(n: usize) -> usize {
    (n * 2 / 3).max(2)
}

fn is_ring_neighbor(u: usize, v: usize, n: usize) -> bool {
    u.abs_diff(v) == 1 || (u == 0 && v == n - 1) || (u == n - 1 && v == 0)
}

/// Builds a connected graph with `node_count` nodes.
///
/// The ring contributes `node_count` edges; up to [`chord_attempts`] more are
/// drawn at random. A chord whose endpoints stay degenerate after
/// [`CHORD_RETRIES`] redraws, or that duplicates an existing pair, is
/// skipped, so the final edge count may fall short.
pub fn generate_graph<R: Rng + ?Sized>(node_count: usize, rng: &mut R) -> Result<Graph> {
    if !(MIN_GRAPH_NODES..=MAX_GRAPH_NODES).contains(&node_count) {
        return Err(EngineError::NodeCountOutOfRange {
            count: node_count,
            min: MIN_GRAPH_NODES,
            max: MAX_GRAPH_NODES,
        });
    }
    let n = node_count;

    let nodes = (0..n)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / n as f64;
            GraphNode::new(
                node_id(i),
                node_label(i),
                GRAPH_CENTER + GRAPH_RADIUS * angle.cos(),
                GRAPH_CENTER + GRAPH_RADIUS * angle.sin(),
            )
        })
        .collect();

    let mut edges: Vec<GraphEdge> = (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            let weight = rng.gen_range(MIN_EDGE_WEIGHT..=MAX_EDGE_WEIGHT);
            GraphEdge::new(format!("edge-{i}-{j}"), node_id(i), node_id(j), weight)
        })
        .collect();

    for _ in 0..chord_attempts(n) {
        let u = rng.gen_range(0..n);
        let mut v = rng.gen_range(0..n);
        let mut retries = 0;
        while retries < CHORD_RETRIES && (v == u || is_ring_neighbor(u, v, n)) {
            v = rng.gen_range(0..n);
            retries += 1;
        }

        let (a, b) = (node_id(u), node_id(v));
        if u == v || edges.iter().any(|e| e.connects(&a, &b)) {
            trace!(u, v, "chord skipped");
            continue;
        }
        let weight = rng.gen_range(MIN_EDGE_WEIGHT..=MAX_EDGE_WEIGHT);
        edges.push(GraphEdge::new(format!("edge-{u}-{v}"), a, b, weight));
    }

    debug!(nodes = n, edges = edges.len(), "generated graph");
    Ok(Graph::new(nodes, edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_util::Fuzzer;
    use std::collections::HashSet;

    #[test]
    fn rejects_out_of_range_counts() {
        let mut rng = Fuzzer::from_u64(1);
        assert_eq!(
            generate_graph(2, &mut rng),
            Err(EngineError::NodeCountOutOfRange { count: 2, min: 3, max: 10 })
        );
        assert!(generate_graph(11, &mut rng).is_err());
    }

    #[test]
    fn chord_attempt_counts() {
        assert_eq!(chord_attempts(3), 2);
        assert_eq!(chord_attempts(4), 2);
        assert_eq!(chord_attempts(6), 4);
        assert_eq!(chord_attempts(10), 6);
    }

    #[test]
    fn labels_and_layout() {
        let mut rng = Fuzzer::from_u64(5);
        let graph = generate_graph(4, &mut rng).unwrap();
        let labels: Vec<&str> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C", "D"]);
        assert!((graph.nodes[0].x - 85.0).abs() < 1e-9);
        assert!((graph.nodes[0].y - 50.0).abs() < 1e-9);
        assert!(graph.nodes.iter().all(|n| n.distance.is_infinite()));
    }

    #[test]
    fn structural_invariants_hold_for_every_size_and_many_seeds() {
        for seed in 0..50 {
            let mut rng = Fuzzer::from_u64(seed);
            for n in MIN_GRAPH_NODES..=MAX_GRAPH_NODES {
                let graph = generate_graph(n, &mut rng).unwrap();
                assert_eq!(graph.nodes.len(), n);
                assert!(graph.edges.len() >= n);
                assert!(graph.edges.len() <= n + chord_attempts(n));

                let mut pairs = HashSet::new();
                for e in &graph.edges {
                    assert_ne!(e.source, e.target, "self-loop in {e:?}");
                    assert!((MIN_EDGE_WEIGHT..=MAX_EDGE_WEIGHT).contains(&e.weight));
                    let key = if e.source < e.target {
                        (e.source.clone(), e.target.clone())
                    } else {
                        (e.target.clone(), e.source.clone())
                    };
                    assert!(pairs.insert(key), "duplicate pair {e:?}");
                }

                assert_eq!(graph.reachable_from(0).unwrap().len(), n);
            }
        }
    }

    #[test]
    fn same_seed_same_topology() {
        let a = generate_graph(8, &mut Fuzzer::from_u64(11)).unwrap();
        let b = generate_graph(8, &mut Fuzzer::from_u64(11)).unwrap();
        assert_eq!(a, b);
    }
}
