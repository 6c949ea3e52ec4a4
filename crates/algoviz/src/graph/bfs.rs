use std::collections::VecDeque;

use crate::error::Result;
use crate::model::{Graph, Incidence, Status, Step};
use crate::stream::{Simulate, StepBuffer, Steps};

pub const CODE: &str = "void BFS(int startNode) {
    bool visited[V];
    for(int i = 0; i < V; i++) visited[i] = false;

    list<int> queue;
    visited[startNode] = true;
    queue.push_back(startNode);

    while(!queue.empty()) {
        int s = queue.front();
        queue.pop_front();

        for(auto i = adj[s].begin(); i != adj[s].end(); ++i) {
            if(!visited[*i]) {
                visited[*i] = true;
                queue.push_back(*i);
            }
        }
    }
}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Dequeue,
    Scan { u: usize, k: usize },
}

/// Breadth-first search from the first node.
///
/// Queued nodes show as [`Status::Comparing`]; the edge that discovered a
/// node is marked [`Status::Sorted`] for good.
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch {
    graph: Graph,
    adjacency: Vec<Vec<Incidence>>,
    queue: VecDeque<usize>,
    discovered: Vec<bool>,
    phase: Phase,
}

impl BreadthFirstSearch {
    pub fn new(mut graph: Graph) -> Result<Self> {
        let adjacency = super::incidence(&graph)?;
        graph.reset_status();
        let n = graph.nodes.len();
        Ok(Self {
            graph,
            adjacency,
            queue: VecDeque::new(),
            discovered: vec![false; n],
            phase: Phase::Start,
        })
    }

    pub fn steps(graph: Graph) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(graph)?))
    }

    fn label(&self, node: usize) -> &str {
        &self.graph.nodes[node].label
    }
}

impl Simulate for BreadthFirstSearch {
    const ID: &'static str = "bfs-graph";

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        match self.phase {
            Phase::Start => {
                self.discovered[0] = true;
                self.queue.push_back(0);
                self.graph.nodes[0].status = Status::Comparing;
                let description = format!("Starting BFS from Node {}", self.label(0));
                out.push_back(Step::graph(&self.graph, description).line(7));
                self.phase = Phase::Dequeue;
            }
            Phase::Dequeue => {
                let Some(u) = self.queue.pop_front() else {
                    out.push_back(Step::graph(&self.graph, "BFS Complete").line(20));
                    return false;
                };
                self.graph.nodes[u].status = Status::Active;
                let description = format!("Visiting Node {}", self.label(u));
                out.push_back(Step::graph(&self.graph, description).line(10));
                self.phase = Phase::Scan { u, k: 0 };
            }
            Phase::Scan { u, k } => match self.adjacency[u].get(k).copied() {
                None => {
                    self.graph.nodes[u].status = Status::Visited;
                    self.phase = Phase::Dequeue;
                }
                Some(Incidence { edge, neighbor: v }) => {
                    if !self.discovered[v] {
                        self.discovered[v] = true;
                        self.queue.push_back(v);
                        self.graph.nodes[v].status = Status::Comparing;
                        self.graph.edges[edge].status = Status::Sorted;
                        let description = format!("Enqueuing unvisited neighbor {}", self.label(v));
                        out.push_back(Step::graph(&self.graph, description).line(15));
                    }
                    self.phase = Phase::Scan { u, k: k + 1 };
                }
            },
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::graph;

    #[test]
    fn visits_in_breadth_first_order() {
        // A-B, A-C, B-D, C-D: D is discovered through B.
        let g = graph(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
        let steps: Vec<Step> = BreadthFirstSearch::steps(g).unwrap().collect();
        let visits: Vec<&str> = steps
            .iter()
            .filter(|s| s.code_line == Some(10))
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(
            visits,
            vec!["Visiting Node A", "Visiting Node B", "Visiting Node C", "Visiting Node D"]
        );

        let last = steps.last().unwrap().graph.as_ref().unwrap();
        let tree: Vec<&str> = last.edges_with(Status::Sorted).map(|e| e.id.as_str()).collect();
        assert_eq!(tree, vec!["edge-0-1", "edge-0-2", "edge-1-3"]);
        assert!(last.nodes.iter().all(|n| n.status == Status::Visited));
    }

    #[test]
    fn every_node_is_enqueued_once() {
        let g = graph(5, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 0, 1), (0, 2, 1)]);
        let steps: Vec<Step> = BreadthFirstSearch::steps(g).unwrap().collect();
        let enqueued = steps.iter().filter(|s| s.code_line == Some(15)).count();
        assert_eq!(enqueued, 4);
        assert_eq!(steps[0].description, "Starting BFS from Node A");
        assert_eq!(steps[0].graph.as_ref().unwrap().nodes[0].status, Status::Comparing);
        assert_eq!(steps.last().unwrap().description, "BFS Complete");
    }
}
