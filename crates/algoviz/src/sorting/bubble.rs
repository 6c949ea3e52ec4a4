use crate::error::Result;
use crate::model::{ElementMarker, Status, Step};
use crate::state::{all_indices, mark_all_sorted, reset_status};
use crate::stream::{Simulate, StepBuffer, Steps};

pub const CODE: &str = "void bubbleSort(int arr[], int n) {
    int i, j;
    bool swapped;
    for (i = 0; i < n - 1; i++) {
        swapped = false;
        for (j = 0; j < n - i - 1; j++) {
            if (arr[j] > arr[j + 1]) {
                swap(&arr[j], &arr[j + 1]);
                swapped = true;
            }
        }
        if (swapped == false)
            break;
    }
}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    PassStart,
    Compare(usize),
    PassEnd,
    Complete,
}

/// Adjacent-pair passes until a pass performs no swap.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    array: Vec<ElementMarker>,
    sorted_count: usize,
    swapped: bool,
    phase: Phase,
}

impl BubbleSort {
    pub fn new(elements: &[ElementMarker]) -> Result<Self> {
        Ok(Self {
            array: super::working_copy(elements)?,
            sorted_count: 0,
            swapped: false,
            phase: Phase::Start,
        })
    }

    pub fn steps(elements: &[ElementMarker]) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(elements)?))
    }

    /// End of the unsorted prefix (exclusive) for the current pass.
    fn pass_len(&self) -> usize {
        self.array.len() - 1 - self.sorted_count
    }
}

impl Simulate for BubbleSort {
    const ID: &'static str = "bubble-sort";

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        match self.phase {
            Phase::Start => {
                out.push_back(Step::array(&self.array, "Starting Bubble Sort...").line(1));
                self.phase = Phase::PassStart;
            }
            Phase::PassStart => {
                self.swapped = false;
                out.push_back(Step::array(&self.array, "Checking if sorted...").line(5));
                self.phase = Phase::Compare(0);
            }
            Phase::Compare(i) if i < self.pass_len() => {
                reset_status(&mut self.array);
                self.array[i].status = Status::Comparing;
                self.array[i + 1].status = Status::Comparing;
                let (a, b) = (self.array[i].value, self.array[i + 1].value);
                out.push_back(
                    Step::array(&self.array, format!("Comparing {a} and {b}"))
                        .compared([i, i + 1])
                        .line(7),
                );

                if a > b {
                    self.array.swap(i, i + 1);
                    self.array[i].status = Status::Swapping;
                    self.array[i + 1].status = Status::Swapping;
                    self.swapped = true;
                    out.push_back(
                        Step::array(&self.array, format!("Swapped {a} and {b}"))
                            .swapped([i, i + 1])
                            .line(8),
                    );
                }
                self.phase = Phase::Compare(i + 1);
            }
            Phase::Compare(_) => self.phase = Phase::PassEnd,
            Phase::PassEnd => {
                let sorted_index = self.pass_len();
                reset_status(&mut self.array);
                self.array[sorted_index].status = Status::Sorted;
                let value = self.array[sorted_index].value;
                out.push_back(
                    Step::array(&self.array, format!("{value} is sorted."))
                        .sorted([sorted_index])
                        .line(13),
                );
                self.sorted_count += 1;
                self.phase = if self.swapped && self.sorted_count < self.array.len() {
                    Phase::PassStart
                } else {
                    Phase::Complete
                };
            }
            Phase::Complete => {
                mark_all_sorted(&mut self.array);
                out.push_back(
                    Step::array(&self.array, "Sorting complete!")
                        .sorted(all_indices(self.array.len()))
                        .line(15),
                );
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::test_support::{bars, final_values};

    #[test]
    fn walkthrough_of_5_3_8_1() {
        let steps: Vec<Step> = BubbleSort::steps(&bars(&[5.0, 3.0, 8.0, 1.0])).unwrap().collect();

        let compare = steps
            .iter()
            .position(|s| s.compared_indices == vec![0, 1])
            .expect("first comparison");
        assert!(steps[compare].description.contains("5 and 3"));
        assert_eq!(steps[compare + 1].swapped_indices, vec![0, 1]);
        assert_eq!(steps[compare + 1].values()[..2], [3.0, 5.0]);
        assert_eq!(steps[compare + 1].description, "Swapped 5 and 3");

        let last = steps.last().unwrap();
        assert_eq!(last.sorted_indices, vec![0, 1, 2, 3]);
        assert_eq!(last.values(), vec![1.0, 3.0, 5.0, 8.0]);
        assert!(last.array.iter().all(|e| e.status == Status::Sorted));
    }

    #[test]
    fn sorted_input_exits_after_one_pass() {
        let steps: Vec<Step> = BubbleSort::steps(&bars(&[1.0, 2.0, 3.0])).unwrap().collect();
        let passes = steps.iter().filter(|s| s.description == "Checking if sorted...").count();
        assert_eq!(passes, 1);
        assert!(steps.iter().all(|s| s.swapped_indices.is_empty()));
        assert_eq!(final_values(&steps), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn single_element() {
        let steps: Vec<Step> = BubbleSort::steps(&bars(&[4.0])).unwrap().collect();
        assert_eq!(steps.first().unwrap().description, "Starting Bubble Sort...");
        assert_eq!(steps.last().unwrap().description, "Sorting complete!");
        assert_eq!(final_values(&steps), vec![4.0]);
    }
}
