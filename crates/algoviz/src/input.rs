//! Building and checking the initial element markers handed to simulators.

use algoviz_util::Fuzzer;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::model::{ElementMarker, Status};
use crate::registry::Category;

/// Smallest generated bar value, so every bar stays visible.
pub const MIN_RANDOM_VALUE: i64 = 5;
/// Largest generated bar value (bar heights are percentages).
pub const MAX_RANDOM_VALUE: i64 = 100;

/// Rejects empty input and non-finite values.
pub fn validate(elements: &[ElementMarker]) -> Result<()> {
    if elements.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    match elements.iter().position(|e| !e.value.is_finite()) {
        Some(index) => Err(EngineError::NonFiniteValue { index }),
        None => Ok(()),
    }
}

/// Validates the input and returns a clean working copy for a simulator.
///
/// Statuses and split flags from the caller are dropped.
pub(crate) fn working_copy(elements: &[ElementMarker]) -> Result<Vec<ElementMarker>> {
    validate(elements)?;
    Ok(elements
        .iter()
        .map(|e| ElementMarker {
            status: Status::Default,
            is_split_after: false,
            ..e.clone()
        })
        .collect())
}

/// Markers `bar-0`, `bar-1`, ... carrying `values` in order.
pub fn elements_from_values(values: &[f64]) -> Vec<ElementMarker> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| ElementMarker::new(format!("bar-{i}"), v))
        .collect()
}

/// `size` markers with random integer values, checked against the limits
/// `config` sets for `category`.
pub fn random_elements(
    category: Category,
    size: usize,
    config: &EngineConfig,
    fuzzer: &mut Fuzzer,
) -> Result<Vec<ElementMarker>> {
    let limits = config.limits(category);
    if !limits.contains(size) {
        return Err(EngineError::InputSizeOutOfRange {
            category,
            size,
            min: limits.min,
            max: limits.max,
        });
    }
    let values: Vec<f64> = fuzzer.repeat(size, |f| {
        f.random_int(MIN_RANDOM_VALUE, MAX_RANDOM_VALUE) as f64
    });
    Ok(elements_from_values(&values))
}

/// Random markers of the configured default size for `category`.
pub fn default_elements(
    category: Category,
    config: &EngineConfig,
    fuzzer: &mut Fuzzer,
) -> Result<Vec<ElementMarker>> {
    random_elements(category, config.limits(category).default, config, fuzzer)
}
