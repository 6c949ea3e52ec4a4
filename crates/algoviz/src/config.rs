//! Engine configuration: input size limits per algorithm family and an
//! optional fixed seed.
//!
//! Loaded from TOML; every field has a default so partial files work:
//!
//! ```toml
//! seed = 42
//!
//! [sorting]
//! max = 30
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::registry::Category;
use crate::topology::{MAX_GRAPH_NODES, MIN_GRAPH_NODES};

/// Vertical position of a tree root, in percent.
pub const TREE_ROOT_Y: f64 = 10.0;
/// Vertical distance between tree levels, in percent.
pub const TREE_LAYER_HEIGHT: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLimits {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl SizeLimits {
    pub const fn new(min: usize, max: usize, default: usize) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, size: usize) -> bool {
        (self.min..=self.max).contains(&size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub sorting: SizeLimits,
    pub tree: SizeLimits,
    pub graph: SizeLimits,
    /// Fixed seed for input and topology generation; fresh entropy if unset.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sorting: SizeLimits::new(5, 50, 20),
            tree: SizeLimits::new(5, 15, 12),
            graph: SizeLimits::new(MIN_GRAPH_NODES, MAX_GRAPH_NODES, 6),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn limits(&self, category: Category) -> SizeLimits {
        match category {
            Category::Sorting => self.sorting,
            Category::Tree => self.tree,
            Category::Graph => self.graph,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in Category::ALL {
            let limits = self.limits(category);
            if limits.min == 0 {
                return Err(ConfigError::Invalid(format!("{category}.min must be at least 1")));
            }
            if !(limits.min <= limits.default && limits.default <= limits.max) {
                return Err(ConfigError::Invalid(format!(
                    "{category} limits must satisfy min <= default <= max (got {}..={}, default {})",
                    limits.min, limits.max, limits.default
                )));
            }
        }
        if self.graph.min < MIN_GRAPH_NODES || self.graph.max > MAX_GRAPH_NODES {
            return Err(ConfigError::Invalid(format!(
                "graph limits must stay within {MIN_GRAPH_NODES}..={MAX_GRAPH_NODES}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        config.validate().unwrap();
        assert_eq!(config.sorting.default, 20);
        assert_eq!(config.tree.max, 15);
        assert_eq!(config.graph.max, 10);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str("seed = 7\n[sorting]\nmin = 2\nmax = 30\ndefault = 10\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.sorting, SizeLimits::new(2, 30, 10));
        assert_eq!(config.tree, EngineConfig::default().tree);
    }

    #[test]
    fn rejects_inverted_limits() {
        let err = EngineConfig::from_toml_str("[tree]\nmin = 9\nmax = 4\ndefault = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_graph_limits_outside_topology_bounds() {
        let err = EngineConfig::from_toml_str("[graph]\nmin = 3\nmax = 12\ndefault = 6\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EngineConfig::from_toml_str("seed = \"nope\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
