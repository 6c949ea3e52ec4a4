//! Sorting simulators: bubble, insertion, selection, merge and quick sort.
//!
//! Each works on its own copy of the input markers and moves whole markers,
//! so a marker's `id` follows its value through the run.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use crate::input::working_copy;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::input::elements_from_values;
    use crate::model::{ElementMarker, Step};

    pub fn bars(values: &[f64]) -> Vec<ElementMarker> {
        elements_from_values(values)
    }

    pub fn final_values(steps: &[Step]) -> Vec<f64> {
        steps.last().map(Step::values).unwrap_or_default()
    }

    pub fn final_ids(steps: &[Step]) -> Vec<String> {
        steps
            .last()
            .map(|s| s.array.iter().map(|e| e.id.clone()).collect())
            .unwrap_or_default()
    }
}
