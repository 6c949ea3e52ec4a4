use crate::error::Result;
use crate::model::{ElementMarker, Status, Step};
use crate::state::{all_indices, mark_all_sorted, reset_status};
use crate::stream::{Simulate, StepBuffer, Steps};

pub const CODE: &str = "void selectionSort(int arr[], int n) {
    int i, j, min_idx;
    for (i = 0; i < n - 1; i++) {
        min_idx = i;
        for (j = i + 1; j < n; j++)
            if (arr[j] < arr[min_idx])
                min_idx = j;
        int min = arr[min_idx];
        memmove(&arr[i + 1], &arr[i], (min_idx - i) * sizeof(int));
        arr[i] = min;
    }
}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Begin(usize),
    Scan { i: usize, j: usize, min: usize },
    Place { i: usize, min: usize },
    Complete,
}

/// Repeatedly moves the minimum of the unsorted suffix to its front.
///
/// The minimum is rotated into place instead of swapped, which keeps equal
/// values in input order.
#[derive(Debug, Clone)]
pub struct SelectionSort {
    array: Vec<ElementMarker>,
    phase: Phase,
}

impl SelectionSort {
    pub fn new(elements: &[ElementMarker]) -> Result<Self> {
        Ok(Self {
            array: super::working_copy(elements)?,
            phase: Phase::Start,
        })
    }

    pub fn steps(elements: &[ElementMarker]) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(elements)?))
    }
}

impl Simulate for SelectionSort {
    const ID: &'static str = "selection-sort";

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        match self.phase {
            Phase::Start => {
                out.push_back(Step::array(&self.array, "Starting Selection Sort.").line(1));
                self.phase = Phase::Begin(0);
            }
            Phase::Begin(i) if i + 1 < self.array.len() => {
                reset_status(&mut self.array);
                self.array[i].status = Status::Active;
                out.push_back(
                    Step::array(&self.array, format!("Finding minimum element for index {i}."))
                        .sorted(0..i)
                        .line(4),
                );
                self.phase = Phase::Scan { i, j: i + 1, min: i };
            }
            Phase::Begin(_) => self.phase = Phase::Complete,
            Phase::Scan { i, j, min } if j < self.array.len() => {
                self.array[j].status = Status::Comparing;
                self.array[min].status = Status::Comparing;
                let (candidate, current) = (self.array[j].value, self.array[min].value);
                out.push_back(
                    Step::array(
                        &self.array,
                        format!("Comparing {candidate} with current min {current}"),
                    )
                    .compared([j, min])
                    .line(6),
                );

                let mut min = min;
                if candidate < current {
                    if min != i {
                        self.array[min].status = Status::Default;
                    }
                    min = j;
                    self.array[min].status = Status::Swapping;
                    out.push_back(
                        Step::array(&self.array, format!("Found new minimum: {candidate}"))
                            .swapped([min])
                            .line(7),
                    );
                } else {
                    self.array[j].status = Status::Default;
                }
                self.phase = Phase::Scan { i, j: j + 1, min };
            }
            Phase::Scan { i, min, .. } => self.phase = Phase::Place { i, min },
            Phase::Place { i, min } => {
                if min != i {
                    self.array[i..=min].rotate_right(1);
                    reset_status(&mut self.array[i..]);
                    self.array[i].status = Status::Swapping;
                    let value = self.array[i].value;
                    out.push_back(
                        Step::array(&self.array, format!("Moved minimum {value} to index {i}."))
                            .swapped([i, min])
                            .line(9),
                    );
                }
                reset_status(&mut self.array[i..]);
                self.array[i].status = Status::Sorted;
                self.phase = Phase::Begin(i + 1);
            }
            Phase::Complete => {
                mark_all_sorted(&mut self.array);
                out.push_back(
                    Step::array(&self.array, "Selection Sort Complete.")
                        .sorted(all_indices(self.array.len()))
                        .line(12),
                );
                return false;
            }
        }
        true
    }
}
