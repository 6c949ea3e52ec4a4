#![allow(dead_code)]

use algoviz::input::elements_from_values;
use algoviz::{algorithm_by_id, Category, ElementMarker, Status, Step, ALGORITHMS};
use algoviz_util::Fuzzer;

pub fn bars(values: &[f64]) -> Vec<ElementMarker> {
    elements_from_values(values)
}

pub fn run(id: &str, values: &[f64]) -> Vec<Step> {
    let algorithm = algorithm_by_id(id).unwrap_or_else(|| panic!("unknown algorithm {id}"));
    algorithm.generate_steps(&bars(values)).unwrap().collect()
}

pub fn run_seeded(id: &str, values: &[f64], seed: u64) -> Vec<Step> {
    let algorithm = algorithm_by_id(id).unwrap_or_else(|| panic!("unknown algorithm {id}"));
    let mut fuzzer = Fuzzer::from_u64(seed);
    algorithm
        .generate_steps_with(&bars(values), &mut fuzzer)
        .unwrap()
        .collect()
}

pub fn ids_in(category: Category) -> Vec<&'static str> {
    ALGORITHMS
        .iter()
        .filter(|a| a.category == category)
        .map(|a| a.id)
        .collect()
}

pub fn descriptions(steps: &[Step]) -> Vec<&str> {
    steps.iter().map(|s| s.description.as_str()).collect()
}

pub fn is_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Every status-bearing id in a step: bars, tree nodes, graph nodes and edges.
pub fn statuses(step: &Step) -> Vec<(String, Status)> {
    let mut out: Vec<(String, Status)> = step
        .array
        .iter()
        .map(|b| (b.id.clone(), b.status))
        .collect();
    if let Some(tree) = &step.tree {
        out.extend(tree.nodes().map(|n| (n.id.clone(), n.status)));
    }
    if let Some(graph) = &step.graph {
        out.extend(graph.nodes.iter().map(|n| (n.id.clone(), n.status)));
        out.extend(graph.edges.iter().map(|e| (e.id.clone(), e.status)));
    }
    out
}

/// Panics if an id marked `Sorted` in one step is anything else, or missing,
/// in a later step.
pub fn assert_sorted_is_terminal(context: &str, steps: &[Step]) {
    let mut settled: Vec<String> = Vec::new();
    for (i, step) in steps.iter().enumerate() {
        let frame = statuses(step);
        for id in &settled {
            let status = frame.iter().find(|(k, _)| k == id).map(|(_, s)| *s);
            assert_eq!(
                status,
                Some(Status::Sorted),
                "{context}: `{id}` reverted at step {i} ({})",
                step.description
            );
        }
        settled = frame
            .into_iter()
            .filter(|(_, s)| *s == Status::Sorted)
            .map(|(k, _)| k)
            .collect();
    }
}

/// Mutating steps already handed out must not leak into the rest of the run,
/// and steps handed out must not change as the run continues.
pub fn assert_steps_are_snapshots(id: &str, values: &[f64], seed: u64) {
    let reference = run_seeded(id, values, seed);
    assert!(reference.len() > 8, "{id}: run too short");

    let algorithm = algorithm_by_id(id).unwrap();
    let mut fuzzer = Fuzzer::from_u64(seed);
    let mut stream = algorithm
        .generate_steps_with(&bars(values), &mut fuzzer)
        .unwrap();
    let untouched: Vec<Step> = stream.by_ref().take(4).collect();
    let mut scribbled: Vec<Step> = stream.by_ref().take(4).collect();
    for step in scribbled.iter_mut() {
        for bar in step.array.iter_mut() {
            bar.status = Status::Overwriting;
        }
        if let Some(tree) = step.tree.as_mut() {
            tree.mark_all(Status::Overwriting);
        }
        if let Some(graph) = step.graph.as_mut() {
            graph.nodes.iter_mut().for_each(|n| n.status = Status::Overwriting);
            graph.edges.iter_mut().for_each(|e| e.status = Status::Overwriting);
        }
    }
    let rest: Vec<Step> = stream.collect();

    assert_eq!(untouched, reference[..4].to_vec(), "{id}");
    assert_eq!(rest, reference[8..].to_vec(), "{id}");
}
