use crate::error::Result;
use crate::model::{ElementMarker, Status, Step};
use crate::state::{all_indices, mark_all_sorted, set_range_status};
use crate::stream::{Simulate, StepBuffer, Steps};

pub const CODE: &str = "int partition(int arr[], int low, int high) {
    int pivot = arr[high];
    int i = (low - 1);

    for (int j = low; j <= high - 1; j++) {
        if (arr[j] < pivot) {
            i++;
            swap(&arr[i], &arr[j]);
        }
    }
    swap(&arr[i + 1], &arr[high]);
    return (i + 1);
}

void quickSort(int arr[], int low, int high) {
    if (low < high) {
        int pi = partition(arr, low, high);
        quickSort(arr, low, pi - 1);
        quickSort(arr, pi + 1, high);
    }
}";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Frame {
    Range { low: usize, high: usize },
    /// Lomuto scan; `store` is the next slot for a value below the pivot.
    Partition {
        low: usize,
        high: usize,
        store: usize,
        j: usize,
        pivot: f64,
    },
}

/// Quick sort with the last element of each range as pivot.
#[derive(Debug, Clone)]
pub struct QuickSort {
    array: Vec<ElementMarker>,
    frames: Vec<Frame>,
    started: bool,
}

impl QuickSort {
    pub fn new(elements: &[ElementMarker]) -> Result<Self> {
        let array = super::working_copy(elements)?;
        let frames = vec![Frame::Range { low: 0, high: array.len() - 1 }];
        Ok(Self {
            array,
            frames,
            started: false,
        })
    }

    pub fn steps(elements: &[ElementMarker]) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(elements)?))
    }

    fn range(&mut self, low: usize, high: usize, out: &mut StepBuffer) {
        if low == high {
            self.array[low].status = Status::Sorted;
            let value = self.array[low].value;
            out.push_back(
                Step::array(&self.array, format!("Element {value} is sorted."))
                    .sorted([low])
                    .line(16),
            );
            return;
        }
        set_range_status(&mut self.array, low..=high, Status::Default);
        let pivot = self.array[high].value;
        self.array[high].status = Status::Active;
        out.push_back(
            Step::array(
                &self.array,
                format!("Partitioning [{low}-{high}]. Pivot: {pivot}"),
            )
            .line(2),
        );
        self.frames.push(Frame::Partition {
            low,
            high,
            store: low,
            j: low,
            pivot,
        });
    }

    fn scan(&mut self, low: usize, high: usize, store: usize, j: usize, pivot: f64, out: &mut StepBuffer) {
        let value = self.array[j].value;
        self.array[j].status = Status::Comparing;
        out.push_back(
            Step::array(&self.array, format!("Comparing {value} < Pivot ({pivot})?"))
                .compared([j, high])
                .line(6),
        );

        let mut store = store;
        if value < pivot {
            self.array.swap(store, j);
            self.array[store].status = Status::Swapping;
            self.array[j].status = Status::Swapping;
            out.push_back(
                Step::array(
                    &self.array,
                    format!("Swapped {} and {}", self.array[store].value, self.array[j].value),
                )
                .swapped([store, j])
                .line(8),
            );
            self.array[store].status = Status::LeftHalf;
            if store != j {
                self.array[j].status = Status::RightHalf;
            }
            store += 1;
        } else {
            self.array[j].status = Status::RightHalf;
        }
        self.frames.push(Frame::Partition {
            low,
            high,
            store,
            j: j + 1,
            pivot,
        });
    }

    fn place_pivot(&mut self, low: usize, high: usize, store: usize, pivot: f64, out: &mut StepBuffer) {
        self.array.swap(store, high);
        if store != high {
            self.array[high].status = Status::RightHalf;
        }
        self.array[store].status = Status::Sorted;
        out.push_back(
            Step::array(&self.array, format!("Placed Pivot {pivot} at index {store}"))
                .swapped([store, high])
                .sorted([store])
                .line(11),
        );

        if store < high {
            self.frames.push(Frame::Range { low: store + 1, high });
        }
        if store > low {
            self.frames.push(Frame::Range { low, high: store - 1 });
        }
    }
}

impl Simulate for QuickSort {
    const ID: &'static str = "quick-sort";

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        if !self.started {
            self.started = true;
            out.push_back(Step::array(&self.array, "Starting Quick Sort.").line(15));
            return true;
        }
        match self.frames.pop() {
            Some(Frame::Range { low, high }) => self.range(low, high, out),
            Some(Frame::Partition {
                low,
                high,
                store,
                j,
                pivot,
            }) => {
                if j < high {
                    self.scan(low, high, store, j, pivot, out);
                } else {
                    self.place_pivot(low, high, store, pivot, out);
                }
            }
            None => {
                mark_all_sorted(&mut self.array);
                out.push_back(
                    Step::array(&self.array, "Quick Sort Complete.")
                        .sorted(all_indices(self.array.len()))
                        .line(21),
                );
                return false;
            }
        }
        true
    }
}
