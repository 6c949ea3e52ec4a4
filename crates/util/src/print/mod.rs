//! Text outline rendering for hierarchical dumps.

mod print_tree;

pub use print_tree::{print_tree, PrintChild};
