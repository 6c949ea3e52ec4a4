//! Core of the `algoviz-steps` binary: argument parsing and step output.
//!
//! ```text
//! algoviz-steps --list
//! algoviz-steps <algorithm-id> [--seed N] [--size N] [--config PATH] [--text] [VALUES...]
//! ```
//!
//! Steps are printed one JSON object per line, or as narration (plus a tree
//! outline for tree steps) with `--text`.

use std::io::{self, Write};
use std::path::PathBuf;

use algoviz_util::Fuzzer;
use thiserror::Error;
use tracing::info;

use crate::config::EngineConfig;
use crate::error::{ConfigError, EngineError};
use crate::input::{elements_from_values, random_elements};
use crate::model::Step;
use crate::registry::{algorithm_by_id, ALGORITHMS};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("unknown algorithm `{0}` (try --list)")]
    UnknownAlgorithm(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Run(RunOptions),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOptions {
    pub algorithm: String,
    pub seed: Option<u64>,
    pub size: Option<usize>,
    pub config: Option<PathBuf>,
    pub text: bool,
    /// Explicit input values; random input is generated when empty.
    pub values: Vec<f64>,
}

fn flag_value<'a>(args: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a String, CliError> {
    args.next()
        .ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
}

fn parse_number<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("invalid value `{raw}` for {flag}")))
}

/// Parses the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut options = RunOptions::default();
    let mut algorithm = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list" => return Ok(Command::List),
            "--text" => options.text = true,
            "--seed" => options.seed = Some(parse_number(flag_value(&mut iter, arg)?, arg)?),
            "--size" => options.size = Some(parse_number(flag_value(&mut iter, arg)?, arg)?),
            "--config" => options.config = Some(PathBuf::from(flag_value(&mut iter, arg)?)),
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown flag {flag}")));
            }
            _ if algorithm.is_none() => algorithm = Some(arg.clone()),
            value => options.values.push(parse_number(value, "VALUES")?),
        }
    }
    options.algorithm = algorithm.ok_or_else(|| {
        CliError::Usage("usage: algoviz-steps --list | <algorithm-id> [options] [VALUES...]".to_string())
    })?;
    Ok(Command::Run(options))
}

pub fn run(command: &Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::List => {
            for algorithm in ALGORITHMS.iter() {
                writeln!(out, "{}\t{}\t{}", algorithm.id, algorithm.category, algorithm.name)?;
            }
            Ok(())
        }
        Command::Run(options) => run_algorithm(options, out),
    }
}

fn run_algorithm(options: &RunOptions, out: &mut impl Write) -> Result<(), CliError> {
    let config = match &options.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let algorithm = algorithm_by_id(&options.algorithm)
        .ok_or_else(|| CliError::UnknownAlgorithm(options.algorithm.clone()))?;

    let mut fuzzer = Fuzzer::from_optional(options.seed.or(config.seed));
    let elements = if options.values.is_empty() {
        let size = options
            .size
            .unwrap_or(config.limits(algorithm.category).default);
        random_elements(algorithm.category, size, &config, &mut fuzzer)?
    } else {
        elements_from_values(&options.values)
    };
    info!(algorithm = algorithm.id, elements = elements.len(), "generating steps");

    for (index, step) in algorithm.generate_steps_with(&elements, &mut fuzzer)?.enumerate() {
        if options.text {
            write_text(out, index, &step)?;
        } else {
            serde_json::to_writer(&mut *out, &step)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text(out: &mut impl Write, index: usize, step: &Step) -> io::Result<()> {
    match step.code_line {
        Some(line) => writeln!(out, "{index:>4} [{line:>2}] {}", step.description)?,
        None => writeln!(out, "{index:>4}      {}", step.description)?,
    }
    if let Some(tree) = &step.tree {
        for line in tree.to_text().lines() {
            writeln!(out, "           {line}")?;
        }
    }
    Ok(())
}
