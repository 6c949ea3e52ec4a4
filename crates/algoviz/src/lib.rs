//! Step-generation engine for algorithm visualizations.
//!
//! Every algorithm is a simulator that turns an initial input into a lazy,
//! finite sequence of [`Step`] snapshots: the full array, tree or graph
//! state, visual status tags and a one-line narration.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`model`] | [`ElementMarker`], [`Tree`], [`Graph`], [`Step`], [`Status`] |
//! | [`stream`] | [`Simulate`] trait and the [`Steps`] iterator |
//! | [`sorting`] | bubble, insertion, selection, merge and quick sort |
//! | [`tree`] | BST construction and the four traversals |
//! | [`graph`] | Dijkstra, BFS, DFS, Prim and Kruskal |
//! | [`topology`] | random connected graph generator |
//! | [`registry`] | [`ALGORITHMS`] catalogue and lookup |
//! | [`input`] | building and validating initial markers |
//! | [`config`] | [`EngineConfig`] size limits and seed |
//! | [`logging`] | `tracing` subscriber setup for the binary |
//! | [`cli`] | argument parsing and output for `algoviz-steps` |

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod input;
pub mod logging;
pub mod model;
pub mod registry;
pub mod sorting;
pub mod state;
pub mod stream;
pub mod topology;
pub mod tree;

pub use config::EngineConfig;
pub use error::{ConfigError, EngineError, Result};
pub use model::{ElementMarker, Graph, GraphEdge, GraphNode, Status, Step, Tree, TreeNode};
pub use registry::{algorithm_by_id, AlgorithmDefinition, Category, ALGORITHMS};
pub use stream::{Simulate, StepStream, Steps};
