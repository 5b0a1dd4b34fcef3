//! # Error Types
//!
//! Every way a CAS Registry Number can be rejected, one variant per failure
//! kind. All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Each variant carries the offending input and what was expected, so a
//!   caller can report the problem without re-deriving it.
//! - [`CasError::kind()`] gives a fieldless discriminant for callers that only
//!   need to branch on the failure class.

use thiserror::Error;

use crate::cas::{MAX_VALUE, MIN_VALUE};

/// Errors raised while constructing or comparing a [`CasNumber`](crate::CasNumber).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CasError {
    /// Input is neither an integer nor a string.
    #[error("invalid CAS Registry Number input {input} (expected an integer or a string, but found {found})")]
    UnsupportedType {
        /// Rendering of the rejected input.
        input: String,
        /// Kind of value that was supplied.
        found: &'static str,
    },

    /// Right-hand side of a comparison is not a CAS Registry Number.
    #[error("comparisons can only be made between CAS Registry Numbers (found {found})")]
    Incomparable {
        /// Type name of the right-hand operand.
        found: &'static str,
    },

    /// String input does not follow the hyphenated notation.
    #[error("invalid CAS Registry Number format for '{input}' (must follow the notation _____00-00-0)")]
    Format {
        /// The string that failed to parse.
        input: String,
    },

    /// Numeric value lies outside the representable range.
    #[error("invalid CAS Registry Number '{value}' (must be an integer between {} and {})", MIN_VALUE, MAX_VALUE)]
    Range {
        /// The offending value. Signed and wide so negative inputs are reported verbatim.
        value: i128,
    },

    /// Check digit does not match the checksum of the preceding digits.
    #[error("invalid CAS Registry Number '{cas}' (found check digit '{found}', but expected '{expected}')")]
    Checksum {
        /// String form of the rejected number.
        cas: String,
        /// Check digit carried by the input.
        found: u8,
        /// Check digit computed from the body digits.
        expected: u8,
    },
}

/// Fieldless discriminant of [`CasError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CasErrorKind {
    /// See [`CasError::UnsupportedType`].
    UnsupportedType,
    /// See [`CasError::Incomparable`].
    Incomparable,
    /// See [`CasError::Format`].
    Format,
    /// See [`CasError::Range`].
    Range,
    /// See [`CasError::Checksum`].
    Checksum,
}

impl CasError {
    /// Returns the failure class of this error.
    pub fn kind(&self) -> CasErrorKind {
        match self {
            Self::UnsupportedType { .. } => CasErrorKind::UnsupportedType,
            Self::Incomparable { .. } => CasErrorKind::Incomparable,
            Self::Format { .. } => CasErrorKind::Format,
            Self::Range { .. } => CasErrorKind::Range,
            Self::Checksum { .. } => CasErrorKind::Checksum,
        }
    }

    /// True for the kinds that report a type mismatch rather than bad content.
    pub fn is_type_error(&self) -> bool {
        matches!(
            self.kind(),
            CasErrorKind::UnsupportedType | CasErrorKind::Incomparable
        )
    }
}

impl CasErrorKind {
    /// Short snake_case label, used in structured log fields and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedType => "unsupported_type",
            Self::Incomparable => "incomparable",
            Self::Format => "format",
            Self::Range => "range",
            Self::Checksum => "checksum",
        }
    }
}

impl std::fmt::Display for CasErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
