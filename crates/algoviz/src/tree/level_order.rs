use std::collections::VecDeque;

use crate::error::Result;
use crate::model::{ElementMarker, NodeRef, Side, Status, Step, Tree};
use crate::stream::{Simulate, StepBuffer, Steps};

pub const CODE: &str = "void printLevelOrder(struct Node* root) {
    if (root == NULL) return;
    Queue q;
    enqueue(&q, root);

    while (!isEmpty(&q)) {
        struct Node* temp_node = dequeue(&q);
        printf(\"%d \", temp_node->data);

        if (temp_node->left != NULL)
            enqueue(&q, temp_node->left);

        if (temp_node->right != NULL)
            enqueue(&q, temp_node->right);
    }
}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Dequeue,
    Enqueue(NodeRef, Side),
}

/// Breadth-first walk with an explicit FIFO queue seeded with the root.
///
/// Queued nodes show as [`Status::Comparing`] until they are dequeued. Like
/// the depth-first walks, the run ends with every node [`Status::Visited`],
/// never [`Status::Sorted`].
#[derive(Debug, Clone)]
pub struct LevelOrderTraversal {
    tree: Tree,
    queue: VecDeque<NodeRef>,
    phase: Phase,
}

impl LevelOrderTraversal {
    pub fn new(elements: &[ElementMarker]) -> Result<Self> {
        Ok(Self::over(super::tree_from_elements(elements)?))
    }

    pub fn over(tree: Tree) -> Self {
        let queue = tree.root().into_iter().collect();
        Self {
            tree,
            queue,
            phase: Phase::Start,
        }
    }

    pub fn steps(elements: &[ElementMarker]) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(elements)?))
    }
}

impl Simulate for LevelOrderTraversal {
    const ID: &'static str = "level-order-traversal";

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        match self.phase {
            Phase::Start => {
                out.push_back(
                    Step::tree(&self.tree, "Tree Constructed. Starting Level Order Traversal (BFS).")
                        .line(4),
                );
                self.phase = Phase::Dequeue;
            }
            Phase::Dequeue => {
                let Some(node) = self.queue.pop_front() else {
                    out.push_back(Step::tree(&self.tree, "Traversal Complete.").line(16));
                    return false;
                };
                let n = self.tree.node_mut(node);
                n.status = Status::Active;
                let value = n.value;
                out.push_back(
                    Step::tree(&self.tree, format!("Dequeued & Visiting Node {value}")).line(8),
                );
                self.tree.node_mut(node).status = Status::Visited;
                self.phase = Phase::Enqueue(node, Side::Left);
            }
            Phase::Enqueue(node, side) => {
                if let Some(child) = self.tree.node(node).child(side) {
                    self.queue.push_back(child);
                    let c = self.tree.node_mut(child);
                    c.status = Status::Comparing;
                    let value = c.value;
                    let (label, line) = match side {
                        Side::Left => ("Left", 11),
                        Side::Right => ("Right", 14),
                    };
                    out.push_back(
                        Step::tree(&self.tree, format!("Enqueuing {label} Child {value}")).line(line),
                    );
                }
                self.phase = match side {
                    Side::Left => Phase::Enqueue(node, Side::Right),
                    Side::Right => Phase::Dequeue,
                };
            }
        }
        true
    }
}
