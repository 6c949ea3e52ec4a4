use crate::error::Result;
use crate::model::{ElementMarker, Status, Step};
use crate::state::{all_indices, mark_all_sorted, reset_status, set_range_status};
use crate::stream::{Simulate, StepBuffer, Steps};

pub const CODE: &str = "void merge(int arr[], int start, int mid, int end) {
    int start2 = mid + 1;
    if (arr[mid] <= arr[start2]) return;
    while (start <= mid && start2 <= end) {
        if (arr[start] <= arr[start2]) {
            start++;
        } else {
            int value = arr[start2];
            for (int k = start2; k != start; k--)
                arr[k] = arr[k - 1];
            arr[start] = value;
            start++; mid++; start2++;
        }
    }
}

void mergeSort(int arr[], int l, int r) {
    if (l < r) {
        int m = l + (r - l) / 2;
        mergeSort(arr, l, m);
        mergeSort(arr, m + 1, r);
        merge(arr, l, m, r);
    }
}";

/// Pending work, replacing the recursion of the textbook version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Sort { l: usize, r: usize },
    Merge { l: usize, m: usize, r: usize },
    Merging { start: usize, mid: usize, start2: usize, end: usize },
}

/// Top-down merge sort with an in-place merge.
///
/// A smaller right-half element is shifted into position by moving the
/// run in front of it one slot right, so element identity survives.
#[derive(Debug, Clone)]
pub struct MergeSort {
    array: Vec<ElementMarker>,
    frames: Vec<Frame>,
    started: bool,
}

impl MergeSort {
    pub fn new(elements: &[ElementMarker]) -> Result<Self> {
        let array = super::working_copy(elements)?;
        let frames = vec![Frame::Sort { l: 0, r: array.len() - 1 }];
        Ok(Self {
            array,
            frames,
            started: false,
        })
    }

    pub fn steps(elements: &[ElementMarker]) -> Result<Steps<Self>> {
        Ok(Steps::new(Self::new(elements)?))
    }

    fn paint_halves(&mut self, left: (usize, usize), right: (usize, usize)) {
        reset_status(&mut self.array);
        set_range_status(&mut self.array, left.0..=left.1, Status::LeftHalf);
        set_range_status(&mut self.array, right.0..=right.1, Status::RightHalf);
    }

    /// Moves `array[from]` to `to`, shifting `to..from` right by one.
    ///
    /// Split gaps belong to positions, not values, so they stay put.
    fn shift_into(&mut self, to: usize, from: usize) {
        let gaps: Vec<bool> = self.array[to..=from].iter().map(|e| e.is_split_after).collect();
        self.array[to..=from].rotate_right(1);
        for (bar, gap) in self.array[to..=from].iter_mut().zip(gaps) {
            bar.is_split_after = gap;
        }
    }

    fn sort(&mut self, l: usize, r: usize, out: &mut StepBuffer) {
        if l >= r {
            return;
        }
        let m = l + (r - l) / 2;

        reset_status(&mut self.array);
        set_range_status(&mut self.array, l..=r, Status::Active);
        out.push_back(
            Step::array(&self.array, format!("Processing range [{l} ... {r}]")).line(18),
        );

        self.paint_halves((l, m), (m + 1, r));
        self.array[m].is_split_after = true;
        out.push_back(
            Step::array(
                &self.array,
                format!("Splitting at index {m}. Left: [{l}-{m}], Right: [{}-{r}]", m + 1),
            )
            .line(19),
        );

        self.frames.push(Frame::Merge { l, m, r });
        self.frames.push(Frame::Sort { l: m + 1, r });
        self.frames.push(Frame::Sort { l, r: m });
    }

    fn merge(&mut self, l: usize, m: usize, r: usize, out: &mut StepBuffer) {
        out.push_back(Step::array(&self.array, "Both halves sorted. Merging...").line(22));

        self.array[m].is_split_after = false;
        self.paint_halves((l, m), (m + 1, r));
        out.push_back(
            Step::array(
                &self.array,
                format!("Merging partitions: [{l}-{m}] and [{}-{r}]", m + 1),
            )
            .line(2),
        );

        if self.array[m].value <= self.array[m + 1].value {
            out.push_back(Step::array(&self.array, "Partitions are already in order.").line(3));
            return;
        }
        self.frames.push(Frame::Merging {
            start: l,
            mid: m,
            start2: m + 1,
            end: r,
        });
    }

    fn merge_once(&mut self, start: usize, mid: usize, start2: usize, end: usize, out: &mut StepBuffer) {
        if start > mid || start2 > end {
            return;
        }
        self.paint_halves((start, mid), (start2, end));
        self.array[start].status = Status::Comparing;
        self.array[start2].status = Status::Comparing;
        let (a, b) = (self.array[start].value, self.array[start2].value);
        out.push_back(
            Step::array(&self.array, format!("Comparing {a} vs {b}"))
                .compared([start, start2])
                .line(5),
        );

        if a <= b {
            out.push_back(Step::array(&self.array, format!("{a} is in correct place.")).line(6));
            self.frames.push(Frame::Merging {
                start: start + 1,
                mid,
                start2,
                end,
            });
            return;
        }

        self.shift_into(start, start2);
        self.paint_halves((start + 1, mid + 1), (start2 + 1, end));
        self.array[start].status = Status::Swapping;
        out.push_back(
            Step::array(&self.array, format!("Moving {b} to index {start}."))
                .swapped([start])
                .line(11),
        );
        out.push_back(Step::array(&self.array, "Indices updated.").line(12));
        self.frames.push(Frame::Merging {
            start: start + 1,
            mid: mid + 1,
            start2: start2 + 1,
            end,
        });
    }
}

impl Simulate for MergeSort {
    const ID: &'static str = "merge-sort";

    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        if !self.started {
            self.started = true;
            out.push_back(Step::array(&self.array, "Starting Merge Sort.").line(17));
            return true;
        }
        match self.frames.pop() {
            Some(Frame::Sort { l, r }) => self.sort(l, r, out),
            Some(Frame::Merge { l, m, r }) => self.merge(l, m, r, out),
            Some(Frame::Merging {
                start,
                mid,
                start2,
                end,
            }) => self.merge_once(start, mid, start2, end, out),
            None => {
                mark_all_sorted(&mut self.array);
                out.push_back(
                    Step::array(&self.array, "Merge Sort Complete!")
                        .sorted(all_indices(self.array.len()))
                        .line(24),
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
    use crate::sorting::test_support::{bars, final_ids, final_values};

    #[test]
    fn sorts_with_stable_ids() {
        let steps: Vec<Step> = MergeSort::steps(&bars(&[38.0, 27.0, 43.0, 3.0, 9.0, 82.0, 10.0, 27.0]))
            .unwrap()
            .collect();
        assert_eq!(
            final_values(&steps),
            vec![3.0, 9.0, 10.0, 27.0, 27.0, 38.0, 43.0, 82.0]
        );
        let ids = final_ids(&steps);
        let first_27 = ids.iter().position(|id| id == "bar-1").unwrap();
        let second_27 = ids.iter().position(|id| id == "bar-7").unwrap();
        assert!(first_27 < second_27);
    }

    #[test]
    fn split_flag_marks_the_midpoint() {
        let steps: Vec<Step> = MergeSort::steps(&bars(&[4.0, 3.0, 2.0, 1.0])).unwrap().collect();
        let split = steps
            .iter()
            .find(|s| s.description.starts_with("Splitting at index 1."))
            .unwrap();
        let flagged: Vec<usize> = split
            .array
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_split_after)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(flagged, vec![1]);
        assert_eq!(split.array[0].status, Status::LeftHalf);
        assert_eq!(split.array[3].status, Status::RightHalf);
        assert!(steps.last().unwrap().array.iter().all(|e| !e.is_split_after));
    }

    #[test]
    fn skips_merge_when_halves_are_ordered() {
        let steps: Vec<Step> = MergeSort::steps(&bars(&[1.0, 2.0])).unwrap().collect();
        assert!(steps
            .iter()
            .any(|s| s.description == "Partitions are already in order."));
        assert!(steps.iter().all(|s| s.swapped_indices.is_empty()));
    }

    #[test]
    fn gaps_stay_on_their_positions_while_shifting() {
        // The outer split after index 2 must stay there while [0, 2] is merged.
        let steps: Vec<Step> = MergeSort::steps(&bars(&[1.0, 3.0, 2.0, 9.0, 4.0])).unwrap().collect();
        assert!(steps.iter().any(|s| s.code_line == Some(11)));
        for step in steps.iter().filter(|s| s.code_line == Some(11)) {
            let flagged: Vec<usize> = step
                .array
                .iter()
                .enumerate()
                .filter(|(_, e)| e.is_split_after)
                .map(|(i, _)| i)
                .collect();
            assert!(flagged.iter().all(|&i| i == 2), "{flagged:?}");
        }
    }
}
