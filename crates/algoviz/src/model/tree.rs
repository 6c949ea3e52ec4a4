//! Arena-backed binary tree used by the tree simulators.
//!
//! Children are `Option<u32>` indices into the tree's own node vector, so a
//! snapshot is a plain `Clone` of the arena and no snapshot can alias the
//! simulator's working tree.

use algoviz_util::{print_tree, PrintChild};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::Status;

/// Index of a node inside its [`Tree`].
pub type NodeRef = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: String,
    pub value: f64,
    /// Horizontal position in percent (0-100).
    pub x: f64,
    /// Vertical position in percent (0-100).
    pub y: f64,
    pub left: Option<NodeRef>,
    pub right: Option<NodeRef>,
    pub status: Status,
}

impl TreeNode {
    pub fn new(id: impl Into<String>, value: f64, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            value,
            x,
            y,
            left: None,
            right: None,
            status: Status::Default,
        }
    }

    pub fn child(&self, side: Side) -> Option<NodeRef> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    root: Option<NodeRef>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeRef> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, node: NodeRef) -> &TreeNode {
        &self.nodes[node as usize]
    }

    pub fn node_mut(&mut self, node: NodeRef) -> &mut TreeNode {
        &mut self.nodes[node as usize]
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    pub fn find_by_id(&self, id: &str) -> Option<NodeRef> {
        self.nodes
            .iter()
            .position(|n| n.id == id)
            .map(|i| i as NodeRef)
    }

    fn push(&mut self, node: TreeNode) -> NodeRef {
        self.nodes.push(node);
        (self.nodes.len() - 1) as NodeRef
    }

    /// Installs `node` as the root of an empty tree.
    ///
    /// # Panics
    ///
    /// Panics if the tree already has a root.
    pub fn set_root(&mut self, node: TreeNode) -> NodeRef {
        assert!(self.root.is_none(), "tree already has a root");
        let idx = self.push(node);
        self.root = Some(idx);
        idx
    }

    /// Attaches `node` as the `side` child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if that child slot is already taken.
    pub fn attach(&mut self, parent: NodeRef, side: Side, node: TreeNode) -> NodeRef {
        assert!(
            self.node(parent).child(side).is_none(),
            "child slot already occupied"
        );
        let idx = self.push(node);
        let parent = self.node_mut(parent);
        match side {
            Side::Left => parent.left = Some(idx),
            Side::Right => parent.right = Some(idx),
        }
        idx
    }

    /// Clears every highlight except the terminal [`Status::Sorted`].
    pub fn reset_status(&mut self) {
        for node in &mut self.nodes {
            if !node.status.is_sorted() {
                node.status = Status::Default;
            }
        }
    }

    pub fn mark_all(&mut self, status: Status) {
        for node in &mut self.nodes {
            node.status = status;
        }
    }

    /// Root, left subtree, right subtree.
    pub fn preorder(&self) -> Vec<NodeRef> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeRef> = self.root.into_iter().collect();
        while let Some(idx) = stack.pop() {
            out.push(idx);
            let node = self.node(idx);
            stack.extend(node.right);
            stack.extend(node.left);
        }
        out
    }

    /// Values in ascending (left, root, right) order.
    pub fn inorder_values(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut curr = self.root;
        while curr.is_some() || !stack.is_empty() {
            while let Some(idx) = curr {
                stack.push(idx);
                curr = self.node(idx).left;
            }
            if let Some(idx) = stack.pop() {
                out.push(self.node(idx).value);
                curr = self.node(idx).right;
            }
        }
        out
    }

    /// All values in the subtree rooted at `node`.
    pub fn subtree_values(&self, node: Option<NodeRef>) -> Vec<f64> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeRef> = node.into_iter().collect();
        while let Some(idx) = stack.pop() {
            let n = self.node(idx);
            out.push(n.value);
            stack.extend(n.left);
            stack.extend(n.right);
        }
        out
    }

    /// Renders the tree as an indented outline, one node per line.
    ///
    /// A node with a single child shows the missing side as `·` so left and
    /// right stay distinguishable.
    pub fn to_text(&self) -> String {
        match self.root {
            Some(root) => self.render(root, ""),
            None => "(empty)".to_string(),
        }
    }

    fn render(&self, idx: NodeRef, tab: &str) -> String {
        let node = self.node(idx);
        let mut out = format!("{}", node.value);
        if node.status != Status::Default {
            out.push_str(&format!(" ({})", node.status));
        }
        if node.left.is_none() && node.right.is_none() {
            return out;
        }

        let placeholder = |_: &str| "·".to_string();
        let left = node.left.map(|l| move |tab: &str| self.render(l, tab));
        let right = node.right.map(|r| move |tab: &str| self.render(r, tab));
        let left_child: &PrintChild<'_> = match &left {
            Some(f) => f,
            None => &placeholder,
        };
        let right_child: &PrintChild<'_> = match &right {
            Some(f) => f,
            None => &placeholder,
        };
        out.push_str(&print_tree(tab, &[Some(left_child), Some(right_child)]));
        out
    }
}

struct NestedNode<'a> {
    tree: &'a Tree,
    idx: NodeRef,
}

impl Serialize for NestedNode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.tree.node(self.idx);
        let tree = self.tree;
        let mut state = serializer.serialize_struct("TreeNode", 7)?;
        state.serialize_field("id", &node.id)?;
        state.serialize_field("value", &node.value)?;
        state.serialize_field("x", &node.x)?;
        state.serialize_field("y", &node.y)?;
        state.serialize_field("left", &node.left.map(|idx| NestedNode { tree, idx }))?;
        state.serialize_field("right", &node.right.map(|idx| NestedNode { tree, idx }))?;
        state.serialize_field("status", &node.status)?;
        state.end()
    }
}

/// Serializes as the nested root node (`null` when empty), the shape a
/// renderer walks.
impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.root {
            Some(idx) => serializer.serialize_some(&NestedNode { tree: self, idx }),
            None => serializer.serialize_none(),
        }
    }
}
