use thiserror::Error;

use crate::registry::Category;

pub type Result<T, E = EngineError> = std::result::Result<T, E>;

/// Faults raised when a simulation cannot start.
///
/// Everything except [`EngineError::Invariant`] is a rejected input; an
/// `Invariant` means the engine's own data was inconsistent.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("input must contain at least one element")]
    EmptyInput,
    #[error("element {index} has a non-finite value")]
    NonFiniteValue { index: usize },
    #[error("graph node count {count} is outside {min}..={max}")]
    NodeCountOutOfRange { count: usize, min: usize, max: usize },
    #[error("{category} input size {size} is outside {min}..={max}")]
    InputSizeOutOfRange {
        category: Category,
        size: usize,
        min: usize,
        max: usize,
    },
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

impl EngineError {
    /// True for faults caused by the caller's input.
    pub fn is_rejected_input(&self) -> bool {
        !matches!(self, EngineError::Invariant(_))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
