//! Graph simulators. Each runs over one randomly generated topology; the
//! caller's input only decides the node count.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
mod union_find;

pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use dijkstra::Dijkstra;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use union_find::UnionFind;

use rand::Rng;

use crate::error::{EngineError, Result};
use crate::model::{ElementMarker, Graph, Incidence, Status};
use crate::topology::{clamp_node_count, generate_graph};

/// Generates the topology for a run over `elements`.
///
/// The node count is the input length clamped to the supported range.
pub fn graph_for_input<R: Rng + ?Sized>(elements: &[ElementMarker], rng: &mut R) -> Result<Graph> {
    if elements.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    generate_graph(clamp_node_count(elements.len()), rng)
}

/// Incidence lists for a simulator's working graph.
pub(crate) fn incidence(graph: &Graph) -> Result<Vec<Vec<Incidence>>> {
    if graph.nodes.is_empty() {
        return Err(EngineError::Invariant("graph has no nodes".to_string()));
    }
    graph.incidence()
}

/// Total weight of the edges marked as part of a spanning tree.
pub fn tree_weight(graph: &Graph) -> u32 {
    graph.edges_with(Status::Sorted).map(|e| e.weight).sum()
}


#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_util::Fuzzer;

    use crate::input::elements_from_values;

    #[test]
    fn node_count_follows_input_length() {
        let mut fuzzer = Fuzzer::from_u64(1);
        let short = graph_for_input(&elements_from_values(&[1.0]), &mut fuzzer).unwrap();
        assert_eq!(short.nodes.len(), 3);
        let long = graph_for_input(&elements_from_values(&[1.0; 14]), &mut fuzzer).unwrap();
        assert_eq!(long.nodes.len(), 10);
        assert_eq!(graph_for_input(&[], &mut fuzzer), Err(EngineError::EmptyInput));
    }

    #[test]
    fn empty_graph_is_rejected() {
        assert!(matches!(
            incidence(&Graph::default()),
            Err(EngineError::Invariant(_))
        ));
    }
}
