//! # Sort Subcommand
//!
//! Prints the arguments in ascending numeric order, right-aligned in fixed
//! width columns.

use std::io::Write;

use anyhow::Context;
use casrn_core::CasNumber;
use clap::Args;

use crate::input::parse_arg;
use crate::output::OutputFormat;

/// Arguments for the sort subcommand.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// CAS Registry Numbers, as integers (58082) or in notation (58-08-2).
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Minimum field width of each number in text output.
    #[arg(long, default_value_t = 9)]
    pub width: usize,

    /// Numbers per line in text output.
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: u16,

    /// Collapse numbers with equal value.
    #[arg(long)]
    pub dedup: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Parse all inputs and sort them ascending. Fails on the first invalid input.
pub fn sorted_numbers(inputs: &[String], dedup: bool) -> anyhow::Result<Vec<CasNumber>> {
    let mut numbers = inputs
        .iter()
        .map(|input| parse_arg(input).with_context(|| format!("cannot sort {input:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    numbers.sort();
    if dedup {
        numbers.dedup();
    }
    tracing::debug!(count = numbers.len(), "sorted");
    Ok(numbers)
}

/// Lay numbers out in rows of `columns`, each right-aligned to `width`.
pub fn render_columns(numbers: &[CasNumber], width: usize, columns: usize) -> String {
    numbers
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|cas| format!("{cas:>width$}"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Run the sort subcommand.
pub fn run(args: &SortArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let numbers = sorted_numbers(&args.inputs, args.dedup)?;
    match args.format {
        OutputFormat::Json => serde_json::to_writer_pretty(&mut *out, &numbers)?,
        OutputFormat::Text => {
            write!(out, "{}", render_columns(&numbers, args.width, usize::from(args.columns)))?
        }
    }
    writeln!(out)?;
    Ok(())
}
