use crate::config::{TREE_LAYER_HEIGHT, TREE_ROOT_Y};
use crate::model::{Side, Tree, TreeNode};

/// Horizontal offset of the root's children; halves at every level.
const ROOT_OFFSET: f64 = 25.0;

/// Builds a search tree by inserting `values` in order.
///
/// Smaller values go left, ties and larger values right. Node `i` gets the
/// id `node-{i}`. Children sit `dx` left or right of their parent, with `dx`
/// starting at 25 and halving per level.
pub fn build_bst(values: &[f64]) -> Tree {
    let mut tree = Tree::new();
    for (i, &value) in values.iter().enumerate() {
        let id = format!("node-{i}");
        let Some(root) = tree.root() else {
            tree.set_root(TreeNode::new(id, value, 50.0, TREE_ROOT_Y));
            continue;
        };

        let mut current = root;
        let mut dx = ROOT_OFFSET;
        loop {
            let node = tree.node(current);
            let side = if value < node.value { Side::Left } else { Side::Right };
            match node.child(side) {
                Some(child) => {
                    current = child;
                    dx /= 2.0;
                }
                None => {
                    let x = match side {
                        Side::Left => node.x - dx,
                        Side::Right => node.x + dx,
                    };
                    let y = node.y + TREE_LAYER_HEIGHT;
                    tree.attach(current, side, TreeNode::new(id, value, x, y));
                    break;
                }
            }
        }
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::is_search_tree;

    #[test]
    fn empty_input_gives_empty_tree() {
        assert!(build_bst(&[]).is_empty());
    }

    #[test]
    fn halving_layout() {
        let tree = build_bst(&[50.0, 30.0, 70.0, 20.0, 40.0]);
        let pos = |id: &str| {
            let n = tree.node(tree.find_by_id(id).unwrap());
            (n.x, n.y)
        };
        assert_eq!(pos("node-0"), (50.0, 10.0));
        assert_eq!(pos("node-1"), (25.0, 25.0));
        assert_eq!(pos("node-2"), (75.0, 25.0));
        assert_eq!(pos("node-3"), (12.5, 40.0));
        assert_eq!(pos("node-4"), (37.5, 40.0));
    }

    #[test]
    fn ties_go_right() {
        let tree = build_bst(&[5.0, 5.0, 5.0]);
        assert_eq!(tree.to_text(), "5\n├─ ·\n└─ 5\n   ├─ ·\n   └─ 5");
        assert!(is_search_tree(&tree));
    }

    #[test]
    fn inorder_is_sorted() {
        let tree = build_bst(&[8.0, 3.0, 10.0, 1.0, 6.0, 14.0, 4.0, 7.0, 13.0]);
        assert_eq!(
            tree.inorder_values(),
            vec![1.0, 3.0, 4.0, 6.0, 7.0, 8.0, 10.0, 13.0, 14.0]
        );
        assert!(is_search_tree(&tree));
    }
}
