use crate::config::{TREE_LAYER_HEIGHT, TREE_ROOT_Y};
use crate::error::Result;
use crate::model::{ElementMarker, NodeRef, Side, Status, Step, Tree, TreeNode};
use crate::state::mark_all_sorted;
use crate::stream::{Simulate, StepBuffer, Steps};

pub const CODE: &str = "struct Node {
    int data;
    struct Node *left, *right;
};

struct Node* newNode(int item) {
    struct Node* temp = (struct Node*)malloc(sizeof(struct Node));
    temp->data = item;
    temp->left = temp->right = NULL;
    return temp;
}

struct Node* insert(struct Node* node, int data) {
    // If the tree is empty, return a new node
    if (node == NULL)
        return newNode(data);

    // Otherwise, recur down the tree
    if (data < node->data)
        node->left = insert(node->left, data);
    else
        node->right = insert(node->right, data);

    // Return the (unchanged) node pointer
    return node;
}

// In main():
// for (int i = 0; i < n; i++)
//     root = insert(root, values[i]);
";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Start,
    Next(usize),
    InsertRoot(usize),
    /// Comparing value `i` against `node`; new nodes land inside `min_x..max_x`.
    Walk {
        i: usize,
        node: NodeRef,
        min_x: f64,
        max_x: f64,
    },
    Complete,
}

/// Inserts the input values one at a time into an initially empty tree.
///
/// New nodes bisect the horizontal bounds narrowed along their search path,
/// so siblings never overlap.
#[derive(Debug, Clone)]
pub struct BinarySearchTree {
    bars: Vec<ElementMarker>,
    tree: Tree,
    phase: Phase,
}

impl BinarySearchTree {
    pub fn new(elements: &[ElementMarker]) -> Result<Self> {
        Ok(Self {
            bars: crate::input::working_copy(elements)?,
            tree: Tree::new(),
            phase: Phase::Start,
        })
    }

    pub fn steps(elements: &[ElementMarker]) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(elements)?))
    }

    fn step(&self, description: impl Into<String>, line: u32) -> Step {
        Step::tree(&self.tree, description)
            .with_array(self.bars.clone())
            .line(line)
    }

    fn id(i: usize) -> String {
        format!("node-{i}")
    }

    fn walk(&mut self, i: usize, node: NodeRef, min_x: f64, max_x: f64, out: &mut StepBuffer) {
        let value = self.bars[i].value;
        let current = self.tree.node_mut(node);
        current.status = Status::Comparing;
        let (pivot, x, y) = (current.value, current.x, current.y);
        out.push_back(self.step(format!("Comparing {value} with {pivot}"), 19));

        let (side, min_x, max_x, line, relation, direction) = if value < pivot {
            (Side::Left, min_x, x, 20, "<", "left")
        } else {
            (Side::Right, x, max_x, 22, ">=", "right")
        };

        match self.tree.node(node).child(side) {
            Some(child) => {
                self.tree.node_mut(node).status = Status::Visited;
                out.push_back(self.step(
                    format!("{value} {relation} {pivot}, moving {direction}."),
                    line,
                ));
                self.phase = Phase::Walk {
                    i,
                    node: child,
                    min_x,
                    max_x,
                };
            }
            None => {
                let mut leaf = TreeNode::new(Self::id(i), value, (min_x + max_x) / 2.0, y + TREE_LAYER_HEIGHT);
                leaf.status = Status::Active;
                self.tree.attach(node, side, leaf);
                out.push_back(self.step(
                    format!("{value} {relation} {pivot}, inserting to the {direction}."),
                    line,
                ));
                self.phase = Phase::Next(i + 1);
            }
        }
    }
}

impl Simulate for BinarySearchTree {
    const ID: &'static str = "binary-search-tree";

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        match self.phase {
            Phase::Start => {
                out.push_back(self.step("Starting Binary Search Tree construction...", 28));
                self.phase = Phase::Next(0);
            }
            Phase::Next(i) if i < self.bars.len() => {
                self.tree.reset_status();
                for (j, bar) in self.bars.iter_mut().enumerate() {
                    bar.status = if j == i { Status::Active } else { Status::Default };
                }
                let value = self.bars[i].value;
                out.push_back(self.step(format!("Next value to insert: {value}"), 28));
                self.phase = match self.tree.root() {
                    None => Phase::InsertRoot(i),
                    Some(root) => Phase::Walk {
                        i,
                        node: root,
                        min_x: 0.0,
                        max_x: 100.0,
                    },
                };
            }
            Phase::Next(_) => self.phase = Phase::Complete,
            Phase::InsertRoot(i) => {
                let value = self.bars[i].value;
                let mut root = TreeNode::new(Self::id(i), value, 50.0, TREE_ROOT_Y);
                root.status = Status::Active;
                self.tree.set_root(root);
                out.push_back(self.step(format!("Inserting root node {value}"), 16));
                self.phase = Phase::Next(i + 1);
            }
            Phase::Walk {
                i,
                node,
                min_x,
                max_x,
            } => self.walk(i, node, min_x, max_x, out),
            Phase::Complete => {
                self.tree.mark_all(Status::Sorted);
                mark_all_sorted(&mut self.bars);
                out.push_back(self.step("Binary Search Tree construction complete!", 30));
                return false;
            }
        }
        true
    }
}
