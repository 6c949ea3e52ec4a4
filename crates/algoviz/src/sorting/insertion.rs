use crate::error::Result;
use crate::model::{ElementMarker, Status, Step};
use crate::state::{all_indices, mark_all_sorted, set_range_status};
use crate::stream::{Simulate, StepBuffer, Steps};

pub const CODE: &str = "void insertionSort(int arr[], int n) {
    int i, key, j;
    for (i = 1; i < n; i++) {
        key = arr[i];
        j = i - 1;

        while (j >= 0 && arr[j] > key) {
            arr[j + 1] = arr[j];
            j = j - 1;
        }
        arr[j + 1] = key;
    }
}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Select(usize),
    /// The key currently sits at `hole`; `arr[hole - 1]` is compared next.
    Scan { i: usize, hole: usize },
    Insert { i: usize, hole: usize },
    Complete,
}

/// Grows a sorted prefix by shifting larger elements right of each key.
///
/// The prefix is shown as [`Status::Visited`] rather than sorted, since its
/// members still move; only the final step marks bars sorted.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    array: Vec<ElementMarker>,
    key: f64,
    phase: Phase,
}

impl InsertionSort {
    pub fn new(elements: &[ElementMarker]) -> Result<Self> {
        Ok(Self {
            array: super::working_copy(elements)?,
            key: 0.0,
            phase: Phase::Start,
        })
    }

    pub fn steps(elements: &[ElementMarker]) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(elements)?))
    }
}

impl Simulate for InsertionSort {
    const ID: &'static str = "insertion-sort";

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        match self.phase {
            Phase::Start => {
                self.array[0].status = Status::Visited;
                out.push_back(
                    Step::array(
                        &self.array,
                        "Starting Insertion Sort. First element is considered sorted.",
                    )
                    .sorted([0])
                    .line(1),
                );
                self.phase = Phase::Select(1);
            }
            Phase::Select(i) if i < self.array.len() => {
                self.key = self.array[i].value;
                self.array[i].status = Status::Active;
                out.push_back(
                    Step::array(&self.array, format!("Selected {} as key to insert.", self.key))
                        .sorted(0..i)
                        .line(4),
                );
                self.phase = Phase::Scan { i, hole: i };
            }
            Phase::Select(_) => self.phase = Phase::Complete,
            Phase::Scan { i, hole: 0 } => self.phase = Phase::Insert { i, hole: 0 },
            Phase::Scan { i, hole } => {
                let j = hole - 1;
                let value = self.array[j].value;
                self.array[j].status = Status::Comparing;
                out.push_back(
                    Step::array(&self.array, format!("Comparing {value} with key {}", self.key))
                        .compared([j, hole])
                        .line(7),
                );

                if value > self.key {
                    self.array.swap(j, hole);
                    self.array[hole].status = Status::Swapping;
                    out.push_back(
                        Step::array(&self.array, format!("Moving {value} to the right."))
                            .swapped([hole])
                            .line(8),
                    );
                    self.array[hole].status = Status::Visited;
                    self.phase = Phase::Scan { i, hole: j };
                } else {
                    self.array[j].status = Status::Visited;
                    self.phase = Phase::Insert { i, hole };
                }
            }
            Phase::Insert { i, hole } => {
                set_range_status(&mut self.array, 0..=i, Status::Visited);
                out.push_back(
                    Step::array(
                        &self.array,
                        format!("Inserted {} at position {hole}.", self.key),
                    )
                    .sorted(0..=i)
                    .line(11),
                );
                self.phase = Phase::Select(i + 1);
            }
            Phase::Complete => {
                mark_all_sorted(&mut self.array);
                out.push_back(
                    Step::array(&self.array, "Insertion Sort complete.")
                        .sorted(all_indices(self.array.len()))
                        .line(13),
                );
                return false;
            }
        }
        true
    }
}
