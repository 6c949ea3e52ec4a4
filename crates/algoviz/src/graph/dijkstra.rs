use crate::error::Result;
use crate::model::{ElementMarker, Graph, Incidence, Status, Step};
use crate::stream::{Simulate, StepBuffer, Steps};

pub const CODE: &str = "void dijkstra(int graph[V][V], int src) {
    int dist[V];
    bool visited[V];

    // Initialize all distances as INFINITE and visited[] as false
    for (int i = 0; i < V; i++) {
        dist[i] = INT_MAX;
        visited[i] = false;
    }

    // Distance of source vertex from itself is always 0
    dist[src] = 0;

    // Find shortest path for all vertices
    for (int count = 0; count < V - 1; count++) {
        // Pick the minimum distance vertex not yet processed
        int u = minDistance(dist, visited);

        // Mark the picked vertex as processed
        visited[u] = true;

        // Update dist value of the adjacent vertices of the picked vertex
        for (int v = 0; v < V; v++) {
            if (visited[v] || !graph[u][v] || dist[u] == INT_MAX)
                continue;

            if (dist[u] + graph[u][v] < dist[v])
                dist[v] = dist[u] + graph[u][v];
        }
    }
}";

const SOURCE: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Sort,
    Pop,
    Relax { u: usize, k: usize },
    Finish(usize),
    Complete,
}

/// Frontier entry: node index and its tentative distance.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    node: usize,
    distance: f64,
}

/// Shortest paths from the first node.
///
/// The frontier is a plain list, re-sorted by distance before every pop.
/// It is shown in each step's `array` as one bar per entry.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    graph: Graph,
    adjacency: Vec<Vec<Incidence>>,
    frontier: Vec<Entry>,
    visited: Vec<bool>,
    /// Predecessor node and connecting edge on the best known path.
    parent: Vec<Option<(usize, usize)>>,
    phase: Phase,
}

impl Dijkstra {
    pub fn new(mut graph: Graph) -> Result<Self> {
        let adjacency = super::incidence(&graph)?;
        let n = graph.nodes.len();
        graph.reset_status();
        for node in &mut graph.nodes {
            node.distance = f64::INFINITY;
        }
        Ok(Self {
            graph,
            adjacency,
            frontier: Vec::new(),
            visited: vec![false; n],
            parent: vec![None; n],
            phase: Phase::Start,
        })
    }

    pub fn steps(graph: Graph) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(graph)?))
    }

    fn label(&self, node: usize) -> &str {
        &self.graph.nodes[node].label
    }

    fn entry_text(&self, entry: &Entry) -> String {
        format!("{}:{}", self.label(entry.node), entry.distance)
    }

    /// The frontier as bars: height grows with distance, capped at 100.
    fn frontier_bars(&self) -> Vec<ElementMarker> {
        self.frontier
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                ElementMarker::new(format!("pq-{i}"), ((entry.distance + 5.0) * 5.0).min(100.0))
                    .with_label(self.entry_text(entry))
            })
            .collect()
    }

    fn step(&self, description: impl Into<String>, line: u32) -> Step {
        Step::graph(&self.graph, description)
            .with_array(self.frontier_bars())
            .line(line)
    }

    fn relax(&mut self, u: usize, k: usize, out: &mut StepBuffer) {
        let Some(&Incidence { edge, neighbor: v }) = self.adjacency[u].get(k) else {
            self.phase = Phase::Finish(u);
            return;
        };
        self.phase = Phase::Relax { u, k: k + 1 };
        if self.visited[v] {
            return;
        }

        let weight = self.graph.edges[edge].weight;
        self.graph.edges[edge].status = Status::Comparing;
        self.graph.nodes[v].status = Status::Comparing;
        out.push_back(self.step(
            format!("Checking neighbor {} (edge weight {weight})", self.label(v)),
            27,
        ));

        let candidate = self.graph.nodes[u].distance + f64::from(weight);
        if candidate < self.graph.nodes[v].distance {
            self.graph.nodes[v].distance = candidate;
            self.parent[v] = Some((u, edge));
            match self.frontier.iter_mut().find(|e| e.node == v) {
                Some(entry) => entry.distance = candidate,
                None => self.frontier.push(Entry {
                    node: v,
                    distance: candidate,
                }),
            }
            out.push_back(self.step(
                format!("New shorter path for {}! Dist: {candidate}", self.label(v)),
                28,
            ));
        }

        self.graph.edges[edge].status = Status::Default;
        self.graph.nodes[v].status = Status::Default;
    }
}

impl Simulate for Dijkstra {
    const ID: &'static str = "dijkstra";

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        match self.phase {
            Phase::Start => {
                let source = &mut self.graph.nodes[SOURCE];
                source.distance = 0.0;
                source.status = Status::Active;
                self.frontier.push(Entry {
                    node: SOURCE,
                    distance: 0.0,
                });
                let description = format!(
                    "Initialized graph with {} nodes. Source: {}",
                    self.graph.nodes.len(),
                    self.label(SOURCE)
                );
                out.push_back(self.step(description, 12));
                self.phase = Phase::Sort;
            }
            Phase::Sort if self.frontier.is_empty() => self.phase = Phase::Complete,
            Phase::Sort => {
                self.frontier.sort_by(|a, b| a.distance.total_cmp(&b.distance));
                let listing: Vec<String> = self.frontier.iter().map(|e| self.entry_text(e)).collect();
                out.push_back(self.step(
                    format!("Priority Queue sorted: [{}]", listing.join(", ")),
                    17,
                ));
                self.phase = Phase::Pop;
            }
            Phase::Pop => {
                let Entry { node: u, distance } = self.frontier.remove(0);
                self.graph.nodes[u].status = Status::Active;
                self.visited[u] = true;
                out.push_back(self.step(
                    format!("Visiting Node {} (Min Dist: {distance})", self.label(u)),
                    20,
                ));
                self.phase = Phase::Relax { u, k: 0 };
            }
            Phase::Relax { u, k } => self.relax(u, k, out),
            Phase::Finish(u) => {
                self.graph.nodes[u].status = Status::Visited;
                out.push_back(self.step(
                    format!("Finished processing Node {}", self.label(u)),
                    15,
                ));
                self.phase = Phase::Sort;
            }
            Phase::Complete => {
                for v in 0..self.parent.len() {
                    if let Some((_, edge)) = self.parent[v] {
                        self.graph.edges[edge].status = Status::Sorted;
                        self.graph.nodes[v].status = Status::Sorted;
                    }
                }
                self.graph.nodes[SOURCE].status = Status::Sorted;
                out.push_back(self.step("Dijkstra's Algorithm Complete.", 31));
                return false;
            }
        }
        true
    }
}
