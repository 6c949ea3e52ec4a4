use serde::Serialize;

use super::{ElementMarker, Graph, Tree};

/// A self-contained rendering instruction for one moment of a run.
///
/// Depending on the algorithm family, the payload lives in `array`, `tree`
/// or `graph`; the other slots are empty. A step never references simulator
/// state, it owns copies of everything it shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub array: Vec<ElementMarker>,
    #[serde(rename = "treeRoot", skip_serializing_if = "Option::is_none")]
    pub tree: Option<Tree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<Graph>,
    pub compared_indices: Vec<usize>,
    pub swapped_indices: Vec<usize>,
    pub sorted_indices: Vec<usize>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_line: Option<u32>,
}

impl Step {
    /// A step carrying a snapshot of `array`.
    pub fn array(array: &[ElementMarker], description: impl Into<String>) -> Self {
        Self {
            array: array.to_vec(),
            tree: None,
            graph: None,
            compared_indices: Vec::new(),
            swapped_indices: Vec::new(),
            sorted_indices: Vec::new(),
            description: description.into(),
            code_line: None,
        }
    }

    /// A step carrying a snapshot of `tree` (and no array).
    pub fn tree(tree: &Tree, description: impl Into<String>) -> Self {
        Self::array(&[], description).with_tree(tree)
    }

    /// A step carrying a snapshot of `graph` (and no array).
    pub fn graph(graph: &Graph, description: impl Into<String>) -> Self {
        Self::array(&[], description).with_graph(graph)
    }

    pub fn with_tree(mut self, tree: &Tree) -> Self {
        self.tree = Some(tree.clone());
        self
    }

    pub fn with_graph(mut self, graph: &Graph) -> Self {
        self.graph = Some(graph.clone());
        self
    }

    pub fn with_array(mut self, array: Vec<ElementMarker>) -> Self {
        self.array = array;
        self
    }

    pub fn compared(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.compared_indices = indices.into_iter().collect();
        self
    }

    pub fn swapped(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.swapped_indices = indices.into_iter().collect();
        self
    }

    pub fn sorted(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.sorted_indices = indices.into_iter().collect();
        self
    }

    pub fn line(mut self, line: u32) -> Self {
        self.code_line = Some(line);
        self
    }

    /// Values of the array snapshot in index order.
    pub fn values(&self) -> Vec<f64> {
        self.array.iter().map(|e| e.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_json_shape() {
        let array = vec![ElementMarker::new("bar-0", 5.0), ElementMarker::new("bar-1", 3.0)];
        let step = Step::array(&array, "Comparing 5 and 3")
            .compared([0, 1])
            .line(7);
        assert_eq!(step.values(), vec![5.0, 3.0]);

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["comparedIndices"], serde_json::json!([0, 1]));
        assert_eq!(json["codeLine"], 7);
        assert!(json.get("treeRoot").is_none());
        assert!(json.get("graph").is_none());
    }

    #[test]
    fn snapshot_does_not_alias_source() {
        let mut array = vec![ElementMarker::new("bar-0", 5.0)];
        let step = Step::array(&array, "start");
        array[0].value = 1.0;
        assert_eq!(step.array[0].value, 5.0);
    }
}
