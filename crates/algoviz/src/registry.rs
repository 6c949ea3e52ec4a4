//! The catalogue of algorithms: metadata, reference source and a step
//! factory per entry.
//!
//! ```
//! use algoviz::input::elements_from_values;
//! use algoviz::registry::algorithm_by_id;
//!
//! let bubble = algorithm_by_id("bubble-sort").unwrap();
//! let steps: Vec<_> = bubble
//!     .generate_steps(&elements_from_values(&[5.0, 3.0, 8.0, 1.0]))
//!     .unwrap()
//!     .collect();
//! assert_eq!(steps.last().unwrap().values(), vec![1.0, 3.0, 5.0, 8.0]);
//! assert!(algorithm_by_id("bogo-sort").is_none());
//! ```

use std::fmt;

use algoviz_util::Fuzzer;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{
    self, graph_for_input, BreadthFirstSearch, DepthFirstSearch, Dijkstra, Kruskal, Prim,
};
use crate::model::ElementMarker;
use crate::sorting::{self, BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort};
use crate::stream::StepStream;
use crate::tree::{
    self, BinarySearchTree, InorderTraversal, LevelOrderTraversal, PostorderTraversal,
    PreorderTraversal, TraversalOrder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sorting,
    Tree,
    Graph,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Sorting, Category::Tree, Category::Graph];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Tree => "tree",
            Category::Graph => "graph",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Starts a run over `elements`; graph entries draw their topology from the
/// fuzzer.
pub type GenerateFn = fn(&[ElementMarker], &mut Fuzzer) -> Result<StepStream>;

#[derive(Clone, Copy)]
pub struct AlgorithmDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// C-like reference source; step `code_line`s index into it, 1-based.
    pub code: &'static str,
    generate: GenerateFn,
}

impl fmt::Debug for AlgorithmDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

impl AlgorithmDefinition {
    /// A fresh run. Graph topologies come from fresh entropy.
    pub fn generate_steps(&self, elements: &[ElementMarker]) -> Result<StepStream> {
        self.generate_steps_with(elements, &mut Fuzzer::new(None))
    }

    /// A fresh run drawing any randomness from `fuzzer`.
    pub fn generate_steps_with(
        &self,
        elements: &[ElementMarker],
        fuzzer: &mut Fuzzer,
    ) -> Result<StepStream> {
        (self.generate)(elements, fuzzer)
    }

    /// Number of lines in the reference source.
    pub fn code_lines(&self) -> usize {
        self.code.lines().count()
    }
}

pub static ALGORITHMS: [AlgorithmDefinition; 15] = [
    AlgorithmDefinition {
        id: "bubble-sort",
        name: "Bubble Sort",
        category: Category::Sorting,
        description: "Bubble Sort is a simple sorting algorithm that repeatedly steps through the input list element by element, comparing the current element with the one after it, swapping their values if needed.",
        code: sorting::bubble::CODE,
        generate: bubble_sort,
    },
    AlgorithmDefinition {
        id: "merge-sort",
        name: "Merge Sort",
        category: Category::Sorting,
        description: "Merge Sort is an efficient, stable, comparison-based sorting algorithm. It works by dividing the unsorted list into n sublists, each containing one element, then repeatedly merging sublists to produce new sorted sublists until there is only one sublist remaining.",
        code: sorting::merge::CODE,
        generate: merge_sort,
    },
    AlgorithmDefinition {
        id: "insertion-sort",
        name: "Insertion Sort",
        category: Category::Sorting,
        description: "Insertion Sort builds the sorted array one item at a time. It is much less efficient on large lists than more advanced algorithms such as quicksort, heapsort, or merge sort.",
        code: sorting::insertion::CODE,
        generate: insertion_sort,
    },
    AlgorithmDefinition {
        id: "selection-sort",
        name: "Selection Sort",
        category: Category::Sorting,
        description: "Selection sort sorts an array by repeatedly finding the minimum element from unsorted part and putting it at the beginning.",
        code: sorting::selection::CODE,
        generate: selection_sort,
    },
    AlgorithmDefinition {
        id: "quick-sort",
        name: "Quick Sort",
        category: Category::Sorting,
        description: "QuickSort is a Divide and Conquer algorithm. It picks an element as a pivot and partitions the given array around the picked pivot.",
        code: sorting::quick::CODE,
        generate: quick_sort,
    },
    AlgorithmDefinition {
        id: "binary-search-tree",
        name: "Binary Search Tree",
        category: Category::Tree,
        description: "A Binary Search Tree (BST) is a node-based binary tree data structure which has the following properties: The left subtree of a node contains only nodes with keys lesser than the node's key. The right subtree of a node contains only nodes with keys greater than or equal to the node's key.",
        code: tree::bst::CODE,
        generate: binary_search_tree,
    },
    AlgorithmDefinition {
        id: "preorder-traversal",
        name: "Preorder Traversal",
        category: Category::Tree,
        description: "Preorder traversal visits the current node first, then the left subtree, and finally the right subtree.",
        code: tree::traversal::Preorder::CODE,
        generate: preorder,
    },
    AlgorithmDefinition {
        id: "inorder-traversal",
        name: "Inorder Traversal",
        category: Category::Tree,
        description: "Inorder traversal visits the left subtree, then the current node, and finally the right subtree. For a BST, this visits nodes in ascending order.",
        code: tree::traversal::Inorder::CODE,
        generate: inorder,
    },
    AlgorithmDefinition {
        id: "postorder-traversal",
        name: "Postorder Traversal",
        category: Category::Tree,
        description: "Postorder traversal visits the left subtree, then the right subtree, and finally the current node.",
        code: tree::traversal::Postorder::CODE,
        generate: postorder,
    },
    AlgorithmDefinition {
        id: "level-order-traversal",
        name: "Level Order Traversal",
        category: Category::Tree,
        description: "Level order traversal visits nodes level by level from left to right, typically using a Queue.",
        code: tree::level_order::CODE,
        generate: level_order,
    },
    AlgorithmDefinition {
        id: "dijkstra",
        name: "Dijkstra Pathfinding",
        category: Category::Graph,
        description: "Finds the shortest paths between nodes in a graph. It works by maintaining a set of visited vertices and always selecting the unvisited vertex with the smallest distance from the source.",
        code: graph::dijkstra::CODE,
        generate: dijkstra,
    },
    AlgorithmDefinition {
        id: "bfs-graph",
        name: "Breadth First Search",
        category: Category::Graph,
        description: "Breadth-First Search (BFS) explores all neighbor nodes at the present depth prior to moving on to the nodes at the next depth level.",
        code: graph::bfs::CODE,
        generate: bfs,
    },
    AlgorithmDefinition {
        id: "dfs-graph",
        name: "Depth First Search",
        category: Category::Graph,
        description: "Depth-First Search (DFS) explores as far as possible along each branch before backtracking.",
        code: graph::dfs::CODE,
        generate: dfs,
    },
    AlgorithmDefinition {
        id: "prims",
        name: "Prim's Algorithm",
        category: Category::Graph,
        description: "Prim's algorithm is a greedy algorithm that finds a minimum spanning tree for a weighted undirected graph.",
        code: graph::prim::CODE,
        generate: prim,
    },
    AlgorithmDefinition {
        id: "kruskal",
        name: "Kruskal's Algorithm",
        category: Category::Graph,
        description: "Kruskal's algorithm finds a minimum spanning forest of an undirected edge-weighted graph by greedily adding the lowest weight edges that don't form a cycle.",
        code: graph::kruskal::CODE,
        generate: kruskal,
    },
];

/// Looks an algorithm up by id; `None` when no entry matches.
pub fn algorithm_by_id(id: &str) -> Option<&'static AlgorithmDefinition> {
    ALGORITHMS.iter().find(|a| a.id == id)
}

pub fn algorithms_in(category: Category) -> impl Iterator<Item = &'static AlgorithmDefinition> {
    ALGORITHMS.iter().filter(move |a| a.category == category)
}

/// The entry a UI selects when switching to `category`.
pub fn first_in(category: Category) -> Option<&'static AlgorithmDefinition> {
    algorithms_in(category).next()
}

fn bubble_sort(elements: &[ElementMarker], _: &mut Fuzzer) -> Result<StepStream> {
    Ok(BubbleSort::steps(elements)?.boxed())
}

fn merge_sort(elements: &[ElementMarker], _: &mut Fuzzer) -> Result<StepStream> {
    Ok(MergeSort::steps(elements)?.boxed())
}

fn insertion_sort(elements: &[ElementMarker], _: &mut Fuzzer) -> Result<StepStream> {
    Ok(InsertionSort::steps(elements)?.boxed())
}

fn selection_sort(elements: &[ElementMarker], _: &mut Fuzzer) -> Result<StepStream> {
    Ok(SelectionSort::steps(elements)?.boxed())
}

fn quick_sort(elements: &[ElementMarker], _: &mut Fuzzer) -> Result<StepStream> {
    Ok(QuickSort::steps(elements)?.boxed())
}

fn binary_search_tree(elements: &[ElementMarker], _: &mut Fuzzer) -> Result<StepStream> {
    Ok(BinarySearchTree::steps(elements)?.boxed())
}

fn preorder(elements: &[ElementMarker], _: &mut Fuzzer) -> Result<StepStream> {
    Ok(PreorderTraversal::steps(elements)?.boxed())
}

fn inorder(elements: &[ElementMarker], _: &mut Fuzzer) -> Result<StepStream> {
    Ok(InorderTraversal::steps(elements)?.boxed())
}

fn postorder(elements: &[ElementMarker], _: &mut Fuzzer) -> Result<StepStream> {
    Ok(PostorderTraversal::steps(elements)?.boxed())
}

fn level_order(elements: &[ElementMarker], _: &mut Fuzzer) -> Result<StepStream> {
    Ok(LevelOrderTraversal::steps(elements)?.boxed())
}

fn dijkstra(elements: &[ElementMarker], fuzzer: &mut Fuzzer) -> Result<StepStream> {
    Ok(Dijkstra::steps(graph_for_input(elements, fuzzer)?)?.boxed())
}

fn bfs(elements: &[ElementMarker], fuzzer: &mut Fuzzer) -> Result<StepStream> {
    Ok(BreadthFirstSearch::steps(graph_for_input(elements, fuzzer)?)?.boxed())
}

fn dfs(elements: &[ElementMarker], fuzzer: &mut Fuzzer) -> Result<StepStream> {
    Ok(DepthFirstSearch::steps(graph_for_input(elements, fuzzer)?)?.boxed())
}

fn prim(elements: &[ElementMarker], fuzzer: &mut Fuzzer) -> Result<StepStream> {
    Ok(Prim::steps(graph_for_input(elements, fuzzer)?)?.boxed())
}

fn kruskal(elements: &[ElementMarker], fuzzer: &mut Fuzzer) -> Result<StepStream> {
    Ok(Kruskal::steps(graph_for_input(elements, fuzzer)?)?.boxed())
}
