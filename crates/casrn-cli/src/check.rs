//! # Check Subcommand
//!
//! Validates each argument independently and reports the canonical form,
//! numeric value and check digit, or the reason it was rejected.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use crate::input::parse_arg;
use crate::output::OutputFormat;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// CAS Registry Numbers, as integers (58082) or in notation (58-08-2).
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Outcome for a single argument.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// The argument as given.
    pub input: String,
    /// Canonical notation, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cas: Option<String>,
    /// Digits without separators, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    /// Trailing check digit, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_digit: Option<u8>,
    /// Failure class, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    /// Error message, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Validate every input and return one report per argument, in order.
pub fn check_inputs(inputs: &[String]) -> Vec<CheckReport> {
    inputs
        .iter()
        .map(|input| match parse_arg(input) {
            Ok(cas) => {
                tracing::debug!(input = %input, cas = %cas, "accepted");
                CheckReport {
                    input: input.clone(),
                    cas: Some(cas.as_str().to_string()),
                    value: Some(cas.value()),
                    check_digit: Some(cas.check_digit()),
                    kind: None,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(input = %input, kind = %e.kind(), "rejected: {e}");
                CheckReport {
                    input: input.clone(),
                    cas: None,
                    value: None,
                    check_digit: None,
                    kind: Some(e.kind().as_str()),
                    error: Some(e.to_string()),
                }
            }
        })
        .collect()
}

/// Run the check subcommand. Returns the number of invalid inputs.
pub fn run(args: &CheckArgs, out: &mut impl Write) -> anyhow::Result<usize> {
    let reports = check_inputs(&args.inputs);
    let invalid = reports.iter().filter(|r| !r.is_valid()).count();

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for report in &reports {
                match (&report.cas, &report.error) {
                    (Some(cas), _) => writeln!(
                        out,
                        "{cas}\tvalue={}\tcheck_digit={}",
                        report.value.unwrap_or_default(),
                        report.check_digit.unwrap_or_default()
                    )?,
                    (None, Some(error)) => writeln!(out, "{}\tINVALID\t{error}", report.input)?,
                    (None, None) => {}
                }
            }
        }
    }

    Ok(invalid)
}
