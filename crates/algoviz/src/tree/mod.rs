//! Tree simulators: incremental BST construction and the four traversals
//! over a tree built up front by [`build_bst`].

pub mod bst;
mod builder;
pub mod level_order;
pub mod traversal;

pub use bst::BinarySearchTree;
pub use builder::build_bst;
pub use level_order::LevelOrderTraversal;
pub use traversal::{
    DepthFirstTraversal, Inorder, InorderTraversal, Postorder, PostorderTraversal, Preorder,
    PreorderTraversal, TraversalOrder,
};

use crate::error::Result;
use crate::model::{ElementMarker, Tree};

/// Validates `elements` and builds the tree the traversals walk.
pub(crate) fn tree_from_elements(elements: &[ElementMarker]) -> Result<Tree> {
    crate::input::validate(elements)?;
    let values: Vec<f64> = elements.iter().map(|e| e.value).collect();
    Ok(build_bst(&values))
}

/// Checks the search-tree ordering: smaller values left, ties and larger right.
pub fn is_search_tree(tree: &Tree) -> bool {
    tree.nodes().all(|node| {
        tree.subtree_values(node.left).iter().all(|&v| v < node.value)
            && tree.subtree_values(node.right).iter().all(|&v| v >= node.value)
    })
}
