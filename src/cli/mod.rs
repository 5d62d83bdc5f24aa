//! Command-line interface module.

mod args;
pub mod ops;

pub use args::{BatchArgs, BatchOp, Cli, Commands, HighlightArgs};
pub use ops::{Op, Outcome};

use crate::{
    config::{SiteConfig, cfg},
    debug,
    utils::highlight::{HighlightOptions, highlight},
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::Value as JsonValue;
use std::{
    fs,
    io::{self, BufRead, Read, Write},
    path::Path,
};

/// Run the parsed command against the global config.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cfg();
    match &cli.command {
        Commands::Batch { args } => run_batch(args, &config, cli.json),
        Commands::Highlight { args } => run_highlight(args, &config),
        command => {
            let (op, input) = Op::from_command(command, &config)
                .context("command is not a path operation")?;
            debug!("op"; "{:?} on {:?}", op, input);
            print_outcome(&op.apply(input), cli.json)
        }
    }
}

fn print_outcome(outcome: &Outcome, json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string(&outcome.to_json())?)?;
    } else {
        writeln!(stdout, "{}", outcome.to_plain())?;
    }
    Ok(())
}

/// Apply one operation to every stdin line, in parallel.
///
/// Output keeps input order, one result per line (empty lines included).
fn run_batch(args: &BatchArgs, config: &SiteConfig, json: bool) -> Result<()> {
    let lines = io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read stdin")?;

    let op = Op::from_batch(args, config);
    debug!("batch"; "{:?} on {} lines", op, lines.len());

    let outcomes = apply_all(&op, &lines);
    let mut stdout = io::stdout().lock();
    if json {
        let values: Vec<JsonValue> = outcomes.iter().map(Outcome::to_json).collect();
        writeln!(stdout, "{}", serde_json::to_string(&values)?)?;
    } else {
        for outcome in &outcomes {
            writeln!(stdout, "{}", outcome.to_plain())?;
        }
    }
    Ok(())
}

/// Apply `op` to each input in parallel, preserving order.
pub fn apply_all<S: AsRef<str> + Sync>(op: &Op, inputs: &[S]) -> Vec<Outcome> {
    inputs.par_iter().map(|input| op.apply(input.as_ref())).collect()
}

fn run_highlight(args: &HighlightArgs, config: &SiteConfig) -> Result<()> {
    let code = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read stdin")?;
            code
        }
    };

    let options = highlight_options(args, &config.highlight);
    print!("{}", highlight(&code, &options));
    io::stdout().flush()?;
    Ok(())
}

/// Merge CLI overrides into the configured highlight options.
fn highlight_options(args: &HighlightArgs, base: &HighlightOptions) -> HighlightOptions {
    HighlightOptions {
        lexer: args.lexer.clone().unwrap_or_else(|| base.lexer.clone()),
        style: args.style.clone().unwrap_or_else(|| base.style.clone()),
        line_numbers: args.line_numbers.unwrap_or(base.line_numbers),
    }
}
