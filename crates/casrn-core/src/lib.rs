//! # casrn-core — CAS Registry Numbers
//!
//! A CAS Registry Number identifies a chemical substance. It is written as
//! three hyphen-separated digit groups, `D{2,7}-DD-D`, where the last digit
//! is a checksum over the others (caffeine is `58-08-2`).
//!
//! This crate provides [`CasNumber`], a value type that can only hold valid
//! numbers, and the checksum routine it is built on.
//!
//! ## Key Design Principles
//!
//! 1. **Validate once, at construction.** Notation, range and check digit are
//!    checked by the constructors. There are no setters, so every live
//!    `CasNumber` is valid.
//!
//! 2. **Rigid notation.** String input must match `^\d{2,7}-\d{2}-\d$`
//!    exactly. No trimming, no alternative separators.
//!
//! 3. **Numeric identity.** Equality, ordering and hashing use the numeric
//!    value, so `111-65-9` sorts before `1067-08-9`.
//!
//! 4. **Distinct failure kinds.** [`CasError`] has one variant per reason a
//!    number is rejected, and [`CasErrorKind`] for branching on it.
//!
//! ## Crate Policy
//!
//! - No I/O, no logging, no global state.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod cas;
pub mod checksum;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use cas::{CasNumber, MAX_VALUE, MIN_VALUE};
pub use checksum::check_digit_for;
pub use error::{CasError, CasErrorKind};
