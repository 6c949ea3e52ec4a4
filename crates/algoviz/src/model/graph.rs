use serde::{Deserialize, Serialize};

use super::Status;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// Shortest-path estimate or MST key; `f64::INFINITY` until reached.
    pub distance: f64,
    pub status: Status,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x,
            y,
            distance: f64::INFINITY,
            status: Status::Default,
        }
    }
}

/// An undirected weighted edge; `source`/`target` order carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub weight: u32,
    pub status: Status,
}

impl GraphEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: u32,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            weight,
            status: Status::Default,
        }
    }

    /// True when the edge joins `a` and `b`, in either order.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// One entry of a node's incidence list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidence {
    pub edge: usize,
    pub neighbor: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node_index(&self, id: &str) -> Result<usize> {
        self.nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| EngineError::Invariant(format!("unknown graph node id `{id}`")))
    }

    /// Per-node incidence lists, each in edge order.
    ///
    /// Fails with [`EngineError::Invariant`] when an edge names a node id
    /// that does not exist.
    pub fn incidence(&self) -> Result<Vec<Vec<Incidence>>> {
        let mut lists = vec![Vec::new(); self.nodes.len()];
        for (edge, e) in self.edges.iter().enumerate() {
            let source = self.node_index(&e.source)?;
            let target = self.node_index(&e.target)?;
            lists[source].push(Incidence {
                edge,
                neighbor: target,
            });
            if source != target {
                lists[target].push(Incidence {
                    edge,
                    neighbor: source,
                });
            }
        }
        Ok(lists)
    }

    /// Clears every node and edge highlight except [`Status::Sorted`].
    pub fn reset_status(&mut self) {
        for node in &mut self.nodes {
            if !node.status.is_sorted() {
                node.status = Status::Default;
            }
        }
        for edge in &mut self.edges {
            if !edge.status.is_sorted() {
                edge.status = Status::Default;
            }
        }
    }

    /// Edges currently carrying `status`.
    pub fn edges_with(&self, status: Status) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |e| e.status == status)
    }

    /// Indices of nodes reachable from `start`, ignoring statuses.
    pub fn reachable_from(&self, start: usize) -> Result<Vec<usize>> {
        let incidence = self.incidence()?;
        let mut seen = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if std::mem::replace(&mut seen[node], true) {
                continue;
            }
            order.push(node);
            stack.extend(incidence[node].iter().map(|inc| inc.neighbor));
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::new(
            vec![
                GraphNode::new("node-0", "A", 0.0, 0.0),
                GraphNode::new("node-1", "B", 0.0, 0.0),
                GraphNode::new("node-2", "C", 0.0, 0.0),
            ],
            vec![
                GraphEdge::new("edge-0-1", "node-0", "node-1", 4),
                GraphEdge::new("edge-1-2", "node-1", "node-2", 2),
                GraphEdge::new("edge-2-0", "node-2", "node-0", 7),
            ],
        )
    }

    #[test]
    fn incidence_lists_both_directions() {
        let graph = triangle();
        let inc = graph.incidence().unwrap();
        assert_eq!(
            inc[0],
            vec![
                Incidence { edge: 0, neighbor: 1 },
                Incidence { edge: 2, neighbor: 2 }
            ]
        );
        assert_eq!(inc[1].len(), 2);
        assert!(graph.edges[2].connects("node-2", "node-0"));
    }

    #[test]
    fn unknown_endpoint_is_an_invariant_fault() {
        let mut graph = triangle();
        graph.edges[1].target = "node-9".to_string();
        assert!(matches!(graph.incidence(), Err(EngineError::Invariant(_))));
    }

    #[test]
    fn reachability() {
        let mut graph = triangle();
        assert_eq!(graph.reachable_from(0).unwrap().len(), 3);
        graph.nodes.push(GraphNode::new("node-3", "D", 0.0, 0.0));
        assert_eq!(graph.reachable_from(0).unwrap().len(), 3);
    }
}
