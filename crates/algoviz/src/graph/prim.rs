use crate::error::Result;
use crate::model::{Graph, Incidence, Status, Step};
use crate::stream::{Simulate, StepBuffer, Steps};

pub const CODE: &str = "void primMST(int graph[V][V]) {
    int parent[V];
    int key[V];
    bool mstSet[V];

    for (int i = 0; i < V; i++)
        key[i] = INT_MAX, mstSet[i] = false;

    key[0] = 0;
    parent[0] = -1;

    for (int count = 0; count < V - 1; count++) {
        int u = minKey(key, mstSet);
        mstSet[u] = true;

        for (int v = 0; v < V; v++)
            if (graph[u][v] && mstSet[v] == false && graph[u][v] < key[v])
                parent[v] = u, key[v] = graph[u][v];
    }
}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Pick(usize),
    Check { round: usize, u: usize, k: usize },
    Complete,
}

/// Minimum spanning tree grown from the first node.
///
/// Node `distance` holds the key; the next node is found by a linear scan.
/// Tree edges end up [`Status::Sorted`].
#[derive(Debug, Clone)]
pub struct Prim {
    graph: Graph,
    adjacency: Vec<Vec<Incidence>>,
    in_tree: Vec<bool>,
    /// Edge that set each node's current key.
    parent_edge: Vec<Option<usize>>,
    phase: Phase,
}

impl Prim {
    pub fn new(mut graph: Graph) -> Result<Self> {
        let adjacency = super::incidence(&graph)?;
        graph.reset_status();
        let n = graph.nodes.len();
        Ok(Self {
            graph,
            adjacency,
            in_tree: vec![false; n],
            parent_edge: vec![None; n],
            phase: Phase::Start,
        })
    }

    pub fn steps(graph: Graph) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(graph)?))
    }

    fn label(&self, node: usize) -> &str {
        &self.graph.nodes[node].label
    }

    /// The reachable node outside the tree with the smallest key.
    fn min_key(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, node) in self.graph.nodes.iter().enumerate() {
            if self.in_tree[i] || !node.distance.is_finite() {
                continue;
            }
            if best.map_or(true, |b| node.distance < self.graph.nodes[b].distance) {
                best = Some(i);
            }
        }
        best
    }

    fn pick(&mut self, round: usize, out: &mut StepBuffer) {
        let Some(u) = self.min_key().filter(|_| round < self.graph.nodes.len()) else {
            self.phase = Phase::Complete;
            return;
        };
        self.in_tree[u] = true;
        self.graph.nodes[u].status = Status::Active;
        if let Some(edge) = self.parent_edge[u] {
            self.graph.edges[edge].status = Status::Sorted;
        }
        let description = format!("Picked {} into MST.", self.label(u));
        out.push_back(Step::graph(&self.graph, description).line(13));
        self.phase = Phase::Check { round, u, k: 0 };
    }

    fn check(&mut self, round: usize, u: usize, k: usize, out: &mut StepBuffer) {
        let Some(Incidence { edge, neighbor: v }) = self.adjacency[u].get(k).copied() else {
            self.graph.nodes[u].status = Status::Visited;
            self.phase = Phase::Pick(round + 1);
            return;
        };
        self.phase = Phase::Check { round, u, k: k + 1 };
        if self.in_tree[v] {
            return;
        }

        let weight = self.graph.edges[edge].weight;
        self.graph.edges[edge].status = Status::Comparing;
        let description = format!(
            "Checking edge {}-{} weight {weight}",
            self.label(u),
            self.label(v)
        );
        out.push_back(Step::graph(&self.graph, description).line(17));

        if f64::from(weight) < self.graph.nodes[v].distance {
            self.graph.nodes[v].distance = f64::from(weight);
            self.parent_edge[v] = Some(edge);
            let description = format!("Updated key for {} to {weight}", self.label(v));
            out.push_back(Step::graph(&self.graph, description).line(18));
        }
        self.graph.edges[edge].status = Status::Default;
    }
}

impl Simulate for Prim {
    const ID: &'static str = "prims";

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        match self.phase {
            Phase::Start => {
                for node in &mut self.graph.nodes {
                    node.distance = f64::INFINITY;
                }
                self.graph.nodes[0].distance = 0.0;
                out.push_back(
                    Step::graph(&self.graph, "Initialized. Starting Prim's Algorithm.").line(9),
                );
                self.phase = Phase::Pick(0);
            }
            Phase::Pick(round) => self.pick(round, out),
            Phase::Check { round, u, k } => self.check(round, u, k, out),
            Phase::Complete => {
                out.push_back(
                    Step::graph(&self.graph, "Prim's MST Complete. Green edges form the Tree.")
                        .line(20),
                );
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::graph;
    use crate::graph::tree_weight;

    #[test]
    fn picks_cheapest_edges() {
        // Square A-B-C-D with weights 1, 2, 3, 4 and a diagonal A-C of 5.
        let g = graph(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 5)]);
        let steps: Vec<Step> = Prim::steps(g).unwrap().collect();
        let picks: Vec<&str> = steps
            .iter()
            .filter(|s| s.code_line == Some(13))
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(
            picks,
            vec!["Picked A into MST.", "Picked B into MST.", "Picked C into MST.", "Picked D into MST."]
        );

        let last = steps.last().unwrap().graph.as_ref().unwrap();
        assert_eq!(last.edges_with(Status::Sorted).count(), 3);
        assert_eq!(tree_weight(last), 6);
        assert!(last.nodes.iter().all(|n| n.status == Status::Visited));
    }

    #[test]
    fn keys_only_improve() {
        let g = graph(3, &[(0, 1, 5), (1, 2, 1), (2, 0, 2)]);
        let steps: Vec<Step> = Prim::steps(g).unwrap().collect();
        let updates: Vec<&str> = steps
            .iter()
            .filter(|s| s.code_line == Some(18))
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(
            updates,
            vec!["Updated key for B to 5", "Updated key for C to 2", "Updated key for B to 1"]
        );
        assert_eq!(tree_weight(steps.last().unwrap().graph.as_ref().unwrap()), 3);
    }
}
