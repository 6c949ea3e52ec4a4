//! algoviz-util - Utility functions shared by the algoviz crates.
//!
//! - [`fuzzer`]: seeded xoshiro256** randomness used for input and graph
//!   topology generation.
//! - [`print`]: `├─`/`└─` outline rendering used by tree dumps.

pub mod fuzzer;
pub mod print;

pub use fuzzer::Fuzzer;
pub use print::{print_tree, PrintChild};
