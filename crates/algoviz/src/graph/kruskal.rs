use super::UnionFind;
use crate::error::Result;
use crate::model::{Graph, Status, Step};
use crate::stream::{Simulate, StepBuffer, Steps};

pub const CODE: &str = "void KruskalMST(Graph* graph) {
    int V = graph->V;
    vector<Edge> result;
    int e = 0;
    int i = 0;

    qsort(graph->edge, graph->E, sizeof(graph->edge[0]), myComp);

    subset *subsets = new subset[V];
    for (int v = 0; v < V; ++v) {
        subsets[v].parent = v;
    }

    while (e < V - 1 && i < graph->E) {
        Edge next_edge = graph->edge[i++];
        int x = find(subsets, next_edge.src);
        int y = find(subsets, next_edge.dest);

        if (x != y) {
            result.push_back(next_edge);
            Union(subsets, x, y);
            e++;
        }
    }
}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Next,
    Complete,
}

/// Minimum spanning tree from edges taken in ascending weight order.
///
/// Accepted edges end up [`Status::Sorted`], edges that would close a cycle
/// [`Status::Visited`].
#[derive(Debug, Clone)]
pub struct Kruskal {
    graph: Graph,
    /// Edge indices sorted by weight; ties keep graph order.
    order: Vec<usize>,
    /// Endpoint node indices per edge.
    endpoints: Vec<(usize, usize)>,
    sets: UnionFind,
    position: usize,
    accepted: usize,
    phase: Phase,
}

impl Kruskal {
    pub fn new(mut graph: Graph) -> Result<Self> {
        super::incidence(&graph)?;
        let endpoints = graph
            .edges
            .iter()
            .map(|e| -> Result<(usize, usize)> {
                Ok((graph.node_index(&e.source)?, graph.node_index(&e.target)?))
            })
            .collect::<Result<Vec<_>>>()?;
        let mut order: Vec<usize> = (0..graph.edges.len()).collect();
        order.sort_by_key(|&e| graph.edges[e].weight);
        graph.reset_status();
        let sets = UnionFind::new(graph.nodes.len());
        Ok(Self {
            graph,
            order,
            endpoints,
            sets,
            position: 0,
            accepted: 0,
            phase: Phase::Start,
        })
    }

    pub fn steps(graph: Graph) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(graph)?))
    }

    /// The disjoint sets after the run so far.
    pub fn sets(&self) -> &UnionFind {
        &self.sets
    }

    fn spanning(&self) -> bool {
        self.accepted + 1 >= self.graph.nodes.len()
    }
}

impl Simulate for Kruskal {
    const ID: &'static str = "kruskal";

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        match self.phase {
            Phase::Start => {
                out.push_back(
                    Step::graph(&self.graph, "Edges sorted by weight. Processing...").line(7),
                );
                self.phase = Phase::Next;
            }
            Phase::Next => {
                let Some(&edge) = self.order.get(self.position).filter(|_| !self.spanning()) else {
                    self.phase = Phase::Complete;
                    return true;
                };
                self.position += 1;
                let (a, b) = self.endpoints[edge];

                self.graph.edges[edge].status = Status::Comparing;
                let description = format!(
                    "Checking Edge {} connecting {}-{}",
                    self.graph.edges[edge].weight, self.graph.nodes[a].label, self.graph.nodes[b].label
                );
                out.push_back(Step::graph(&self.graph, description).line(15));

                if self.sets.union(a, b) {
                    self.accepted += 1;
                    self.graph.edges[edge].status = Status::Sorted;
                    out.push_back(
                        Step::graph(&self.graph, "No cycle formed. Added edge to MST.").line(21),
                    );
                } else {
                    self.graph.edges[edge].status = Status::Visited;
                    out.push_back(
                        Step::graph(&self.graph, "Cycle detected! Discarding edge.").line(19),
                    );
                }
            }
            Phase::Complete => {
                out.push_back(Step::graph(&self.graph, "Kruskal's MST Complete.").line(25));
                return false;
            }
        }
        true
    }
}
