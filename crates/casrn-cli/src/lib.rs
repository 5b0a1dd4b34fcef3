//! # casrn-cli — CAS Registry Number Command-Line Interface
//!
//! A thin front end over `casrn-core`. Arguments are the only input; the
//! CLI reads no files and keeps no state.
//!
//! ## Subcommands
//!
//! - `check` — validate each argument and report its canonical form
//! - `sort` — print the arguments in ascending numeric order
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers write to any `io::Write` so they can be exercised in tests.
//! - Validation logic lives in `casrn-core`, never here.

pub mod check;
pub mod input;
pub mod output;
pub mod sort;
