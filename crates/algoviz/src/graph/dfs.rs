use crate::error::Result;
use crate::model::{Graph, Incidence, Status, Step};
use crate::stream::{Simulate, StepBuffer, Steps};

pub const CODE: &str = "void DFS(int v, bool visited[]) {
    visited[v] = true;
    cout << v << \" \";

    list<int>::iterator i;
    for (i = adj[v].begin(); i != adj[v].end(); ++i)
        if (!visited[*i])
            DFS(*i, visited);
}";

/// One pending piece of the recursive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Enter(usize),
    /// Look at the `k`-th incident edge of `u`.
    Scan { u: usize, k: usize },
    /// Returned from a child call into `u`.
    Backtrack(usize),
}

/// Recursive depth-first search from the first node, with an explicit
/// backtracking step after every child call returns.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    graph: Graph,
    adjacency: Vec<Vec<Incidence>>,
    visited: Vec<bool>,
    frames: Vec<Frame>,
    started: bool,
}

impl DepthFirstSearch {
    pub fn new(mut graph: Graph) -> Result<Self> {
        let adjacency = super::incidence(&graph)?;
        graph.reset_status();
        let n = graph.nodes.len();
        Ok(Self {
            graph,
            adjacency,
            visited: vec![false; n],
            frames: vec![Frame::Enter(0)],
            started: false,
        })
    }

    pub fn steps(graph: Graph) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(graph)?))
    }

    fn label(&self, node: usize) -> &str {
        &self.graph.nodes[node].label
    }
}

impl Simulate for DepthFirstSearch {
    const ID: &'static str = "dfs-graph";

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        if !self.started {
            self.started = true;
            let description = format!("Starting DFS from Node {}", self.label(0));
            out.push_back(Step::graph(&self.graph, description).line(1));
            return true;
        }
        match self.frames.pop() {
            Some(Frame::Enter(u)) => {
                self.visited[u] = true;
                self.graph.nodes[u].status = Status::Active;
                let description = format!("Visiting Node {}", self.label(u));
                out.push_back(Step::graph(&self.graph, description).line(2));
                self.frames.push(Frame::Scan { u, k: 0 });
            }
            Some(Frame::Scan { u, k }) => match self.adjacency[u].get(k).copied() {
                None => self.graph.nodes[u].status = Status::Visited,
                Some(Incidence { edge, neighbor: v }) => {
                    self.frames.push(Frame::Scan { u, k: k + 1 });
                    if !self.visited[v] {
                        self.graph.edges[edge].status = Status::Sorted;
                        self.frames.push(Frame::Backtrack(u));
                        self.frames.push(Frame::Enter(v));
                    }
                }
            },
            Some(Frame::Backtrack(u)) => {
                self.graph.nodes[u].status = Status::Active;
                let description = format!("Backtracking to {}", self.label(u));
                out.push_back(Step::graph(&self.graph, description).line(8));
            }
            None => {
                out.push_back(Step::graph(&self.graph, "DFS Complete").line(9));
                return false;
            }
        }
        true
    }
}
