//! Shared data shapes: status tags, element markers, trees, graphs and the
//! [`Step`] snapshot every simulator emits.

mod element;
mod graph;
mod status;
mod step;
mod tree;

pub use element::ElementMarker;
pub use graph::{Graph, GraphEdge, GraphNode, Incidence};
pub use status::Status;
pub use step::Step;
pub use tree::{NodeRef, Side, Tree, TreeNode};
