//! `algoviz-steps`: print the steps of an algorithm run.
//!
//! Usage:
//!   algoviz-steps --list
//!   algoviz-steps <algorithm-id> [--seed N] [--size N] [--config PATH] [--text] [VALUES...]
//!
//! Set `ALGOVIZ_LOG` (e.g. `algoviz=debug`) for diagnostics on stderr.

use std::io::{self, Write};

use algoviz::cli::{parse_args, run};
use algoviz::logging::init_tracing;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = parse_args(&args).and_then(|command| {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        run(&command, &mut out)?;
        out.flush()?;
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
