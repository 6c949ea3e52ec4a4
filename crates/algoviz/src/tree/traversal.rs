//! Preorder, inorder and postorder walks.
//!
//! The recursion is unrolled onto a frame stack: `Enter` schedules a node's
//! subtrees and its visit in the order the traversal wants, `Visit` emits
//! the node's step.

use std::marker::PhantomData;

use crate::error::Result;
use crate::model::{ElementMarker, NodeRef, Status, Step, Tree};
use crate::stream::{Simulate, StepBuffer, Steps};

/// Where a node's own visit falls relative to its subtrees.
pub trait TraversalOrder {
    const ID: &'static str;
    const CODE: &'static str;
    const START: &'static str;
    const VISIT_LINE: u32;
    const DONE_LINE: u32;

    /// Frames for `node`, in the order they run.
    fn schedule(node: NodeRef, left: Option<NodeRef>, right: Option<NodeRef>) -> [Option<Frame>; 3];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Enter(NodeRef),
    Visit(NodeRef),
}

#[derive(Debug, Clone, Copy)]
pub struct Preorder;

#[derive(Debug, Clone, Copy)]
pub struct Inorder;

#[derive(Debug, Clone, Copy)]
pub struct Postorder;

impl TraversalOrder for Preorder {
    const ID: &'static str = "preorder-traversal";
    const CODE: &'static str = "void printPreorder(struct Node* node) {
    if (node == NULL)
        return;

    // First print data of node
    printf(\"%d \", node->data);

    // Then recur on left subtree
    printPreorder(node->left);

    // Now recur on right subtree
    printPreorder(node->right);
}";
    const START: &'static str = "Tree Constructed. Starting Preorder Traversal (Root, Left, Right).";
    const VISIT_LINE: u32 = 6;
    const DONE_LINE: u32 = 13;

    fn schedule(node: NodeRef, left: Option<NodeRef>, right: Option<NodeRef>) -> [Option<Frame>; 3] {
        [
            Some(Frame::Visit(node)),
            left.map(Frame::Enter),
            right.map(Frame::Enter),
        ]
    }
}

impl TraversalOrder for Inorder {
    const ID: &'static str = "inorder-traversal";
    const CODE: &'static str = "void printInorder(struct Node* node) {
    if (node == NULL)
        return;

    // First recur on left child
    printInorder(node->left);

    // Then print the data of node
    printf(\"%d \", node->data);

    // Now recur on right child
    printInorder(node->right);
}";
    const START: &'static str = "Tree Constructed. Starting Inorder Traversal (Left, Root, Right).";
    const VISIT_LINE: u32 = 9;
    const DONE_LINE: u32 = 13;

    fn schedule(node: NodeRef, left: Option<NodeRef>, right: Option<NodeRef>) -> [Option<Frame>; 3] {
        [
            left.map(Frame::Enter),
            Some(Frame::Visit(node)),
            right.map(Frame::Enter),
        ]
    }
}

impl TraversalOrder for Postorder {
    const ID: &'static str = "postorder-traversal";
    const CODE: &'static str = "void printPostorder(struct Node* node) {
    if (node == NULL)
        return;

    // First recur on left subtree
    printPostorder(node->left);

    // Then recur on right subtree
    printPostorder(node->right);

    // Now deal with the node
    printf(\"%d \", node->data);
}";
    const START: &'static str = "Tree Constructed. Starting Postorder Traversal (Left, Right, Root).";
    const VISIT_LINE: u32 = 12;
    const DONE_LINE: u32 = 13;

    fn schedule(node: NodeRef, left: Option<NodeRef>, right: Option<NodeRef>) -> [Option<Frame>; 3] {
        [
            left.map(Frame::Enter),
            right.map(Frame::Enter),
            Some(Frame::Visit(node)),
        ]
    }
}

/// Depth-first walk of a tree built from the input values.
///
/// Visited nodes end as [`Status::Visited`]; the closing step leaves them
/// there and never marks anything [`Status::Sorted`].
#[derive(Debug, Clone)]
pub struct DepthFirstTraversal<O> {
    tree: Tree,
    frames: Vec<Frame>,
    started: bool,
    order: PhantomData<O>,
}

pub type PreorderTraversal = DepthFirstTraversal<Preorder>;
pub type InorderTraversal = DepthFirstTraversal<Inorder>;
pub type PostorderTraversal = DepthFirstTraversal<Postorder>;

impl<O: TraversalOrder> DepthFirstTraversal<O> {
    pub fn new(elements: &[ElementMarker]) -> Result<Self> {
        Ok(Self::over(super::tree_from_elements(elements)?))
    }

    /// Walks an existing tree.
    pub fn over(tree: Tree) -> Self {
        let frames = tree.root().map(Frame::Enter).into_iter().collect();
        Self {
            tree,
            frames,
            started: false,
            order: PhantomData,
        }
    }

    pub fn steps(elements: &[ElementMarker]) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(elements)?))
    }
}

impl<O: TraversalOrder> Simulate for DepthFirstTraversal<O> {
    const ID: &'static str = O::ID;

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        if !self.started {
            self.started = true;
            out.push_back(Step::tree(&self.tree, O::START).line(1));
            return true;
        }
        match self.frames.pop() {
            Some(Frame::Enter(node)) => {
                let n = self.tree.node(node);
                let scheduled = O::schedule(node, n.left, n.right);
                self.frames.extend(scheduled.into_iter().rev().flatten());
            }
            Some(Frame::Visit(node)) => {
                let n = self.tree.node_mut(node);
                n.status = Status::Active;
                let value = n.value;
                out.push_back(
                    Step::tree(&self.tree, format!("Visiting Node {value}")).line(O::VISIT_LINE),
                );
                self.tree.node_mut(node).status = Status::Visited;
            }
            None => {
                out.push_back(Step::tree(&self.tree, "Traversal Complete.").line(O::DONE_LINE));
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::elements_from_values;

    fn visits<O: TraversalOrder>(values: &[f64]) -> Vec<String> {
        DepthFirstTraversal::<O>::steps(&elements_from_values(values))
            .unwrap()
            .filter(|s| s.description.starts_with("Visiting"))
            .map(|s| s.description)
            .collect()
    }

    const VALUES: [f64; 7] = [50.0, 30.0, 70.0, 20.0, 40.0, 60.0, 80.0];

    #[test]
    fn preorder() {
        let expected: Vec<String> = [50, 30, 20, 40, 70, 60, 80]
            .iter()
            .map(|v| format!("Visiting Node {v}"))
            .collect();
        assert_eq!(visits::<Preorder>(&VALUES), expected);
    }

    #[test]
    fn inorder() {
        let expected: Vec<String> = [20, 30, 40, 50, 60, 70, 80]
            .iter()
            .map(|v| format!("Visiting Node {v}"))
            .collect();
        assert_eq!(visits::<Inorder>(&VALUES), expected);
    }

    #[test]
    fn postorder() {
        let expected: Vec<String> = [20, 40, 30, 60, 80, 70, 50]
            .iter()
            .map(|v| format!("Visiting Node {v}"))
            .collect();
        assert_eq!(visits::<Postorder>(&VALUES), expected);
    }

    #[test]
    fn visited_node_is_active_then_visited() {
        let steps: Vec<Step> = PreorderTraversal::steps(&elements_from_values(&[2.0, 1.0]))
            .unwrap()
            .collect();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].description, Preorder::START);
        let first = steps[1].tree.as_ref().unwrap();
        assert_eq!(first.node(0).status, Status::Active);
        let second = steps[2].tree.as_ref().unwrap();
        assert_eq!(second.node(0).status, Status::Visited);
        assert_eq!(second.node(1).status, Status::Active);
        let last = steps[3].tree.as_ref().unwrap();
        assert!(last.nodes().all(|n| n.status == Status::Visited));
        assert!(steps.iter().all(|s| s.array.is_empty()));
    }
}
