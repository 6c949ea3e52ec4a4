mod common;

use std::collections::HashMap;

use algoviz::{Category, Status, Step};
use common::{bars, descriptions, ids_in, run};

const INPUTS: &[&[f64]] = &[
    &[5.0, 3.0, 8.0, 1.0],
    &[1.0, 2.0, 3.0, 4.0, 5.0],
    &[9.0, 7.0, 5.0, 3.0, 1.0],
    &[4.0, 4.0, 2.0, 4.0, 2.0, 1.0],
    &[42.0],
    &[7.0, 7.0],
    &[63.0, 12.0, 88.0, 5.0, 37.0, 37.0, 91.0, 20.0, 54.0, 5.0, 76.0],
];

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

fn ids(step: &Step) -> Vec<&str> {
    step.array.iter().map(|b| b.id.as_str()).collect()
}

#[test]
fn every_sort_ends_sorted_and_complete() {
    for id in ids_in(Category::Sorting) {
        for input in INPUTS {
            let steps = run(id, input);
            let last = steps.last().unwrap();
            assert_eq!(last.values(), sorted_copy(input), "{id} on {input:?}");
            assert_eq!(last.sorted_indices, (0..input.len()).collect::<Vec<_>>(), "{id}");
            assert!(last.array.iter().all(|b| b.status == Status::Sorted), "{id}");
            assert!(last.array.iter().all(|b| !b.is_split_after), "{id}");
        }
    }
}

#[test]
fn every_step_is_a_permutation_of_the_input() {
    for id in ids_in(Category::Sorting) {
        let input = INPUTS[6];
        let mut expected: Vec<String> = bars(input).into_iter().map(|b| b.id).collect();
        expected.sort();
        for step in run(id, input) {
            let mut seen: Vec<String> = step.array.iter().map(|b| b.id.clone()).collect();
            seen.sort();
            assert_eq!(seen, expected, "{id}: {}", step.description);
            assert!(step.tree.is_none() && step.graph.is_none());
        }
    }
}

#[test]
fn values_travel_with_their_ids() {
    for id in ids_in(Category::Sorting) {
        let input = INPUTS[3];
        let original: HashMap<String, f64> = bars(input).into_iter().map(|b| (b.id, b.value)).collect();
        for step in run(id, input) {
            for bar in &step.array {
                assert_eq!(original[&bar.id], bar.value, "{id}");
            }
        }
    }
}

#[test]
fn stable_sorts_keep_equal_keys_in_order() {
    let input = [4.0, 4.0, 2.0, 4.0, 2.0, 1.0];
    for id in ["bubble-sort", "insertion-sort", "selection-sort", "merge-sort"] {
        let steps = run(id, &input);
        assert_eq!(
            ids(steps.last().unwrap()),
            vec!["bar-5", "bar-2", "bar-4", "bar-0", "bar-1", "bar-3"],
            "{id}"
        );
    }
}

#[test]
fn sorted_status_never_reverts() {
    for id in ids_in(Category::Sorting) {
        for input in INPUTS {
            let mut settled: Vec<String> = Vec::new();
            for step in run(id, input) {
                for done in &settled {
                    let bar = step.array.iter().find(|b| &b.id == done).unwrap();
                    assert_eq!(bar.status, Status::Sorted, "{id}: {}", step.description);
                }
                settled = step
                    .array
                    .iter()
                    .filter(|b| b.status == Status::Sorted)
                    .map(|b| b.id.clone())
                    .collect();
            }
        }
    }
}

#[test]
fn highlighted_indices_stay_in_bounds() {
    for id in ids_in(Category::Sorting) {
        let input = INPUTS[6];
        for step in run(id, input) {
            let all = step
                .compared_indices
                .iter()
                .chain(&step.swapped_indices)
                .chain(&step.sorted_indices);
            for &index in all {
                assert!(index < input.len(), "{id}: {}", step.description);
            }
        }
    }
}

#[test]
fn caller_input_is_untouched() {
    let input = bars(&[3.0, 1.0, 2.0]);
    let before = input.clone();
    for id in ids_in(Category::Sorting) {
        let algorithm = algoviz::algorithm_by_id(id).unwrap();
        let _ = algorithm.generate_steps(&input).unwrap().count();
        assert_eq!(input, before, "{id}");
    }
}

#[test]
fn bubble_sort_walkthrough() {
    let steps = run("bubble-sort", &[5.0, 3.0, 8.0, 1.0]);
    let text = descriptions(&steps);
    assert_eq!(text[0], "Starting Bubble Sort...");
    assert_eq!(text[1], "Checking if sorted...");
    assert_eq!(text[2], "Comparing 5 and 3");
    assert_eq!(steps[2].compared_indices, vec![0, 1]);
    assert_eq!(text[3], "Swapped 5 and 3");
    assert_eq!(steps[3].values(), vec![3.0, 5.0, 8.0, 1.0]);
    assert_eq!(steps[3].swapped_indices, vec![0, 1]);
    assert_eq!(steps[4].values(), vec![3.0, 5.0, 8.0, 1.0]);
    assert!(text.contains(&"8 is sorted."));
    assert_eq!(*text.last().unwrap(), "Sorting complete!");
}

#[test]
fn code_lines_point_into_the_listing() {
    for id in ids_in(Category::Sorting) {
        let algorithm = algoviz::algorithm_by_id(id).unwrap();
        let lines = algorithm.code_lines() as u32;
        for step in run(id, INPUTS[6]) {
            if let Some(line) = step.code_line {
                assert!((1..=lines).contains(&line), "{id}: line {line}");
            }
        }
    }
}

#[test]
fn empty_and_non_finite_inputs_are_rejected() {
    for id in ids_in(Category::Sorting) {
        let algorithm = algoviz::algorithm_by_id(id).unwrap();
        assert!(algorithm.generate_steps(&[]).is_err(), "{id}");
        assert!(algorithm.generate_steps(&bars(&[1.0, f64::NAN])).is_err(), "{id}");
    }
}

#[test]
fn earlier_steps_survive_later_ones() {
    for id in ids_in(Category::Sorting) {
        let algorithm = algoviz::algorithm_by_id(id).unwrap();
        let mut stream = algorithm.generate_steps(&bars(INPUTS[6])).unwrap();
        let mut kept: Vec<Step> = Vec::new();
        let mut copies: Vec<Step> = Vec::new();
        for step in stream.by_ref().take(20) {
            copies.push(step.clone());
            kept.push(step);
        }
        for step in kept.iter_mut() {
            step.array.reverse();
        }
        let rest: Vec<Step> = stream.collect();
        assert!(!rest.is_empty(), "{id}");
        for (step, copy) in kept.iter_mut().zip(&copies) {
            step.array.reverse();
            assert_eq!(step, copy, "{id}");
        }
        assert_eq!(rest.last().unwrap().values(), sorted_copy(INPUTS[6]), "{id}");
    }
}
