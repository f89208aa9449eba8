//! Error types for field path expansion
//!
//! Malformed input never produces an error: unbalanced markers and stray
//! delimiters degrade to literal text. Errors only come from an invalid marker
//! configuration or from a caller-chosen expansion bound.

use super::markers::MarkerRole;
use thiserror::Error;

/// Invalid marker configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("the {role} marker must not be empty")]
    Empty { role: MarkerRole },

    #[error("the {first} and {second} markers overlap ({first_value:?} / {second_value:?})")]
    Overlap {
        first: MarkerRole,
        first_value: String,
        second: MarkerRole,
        second_value: String,
    },
}

/// Errors raised while expanding an input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expansion exceeded {limit} bytes (reached {reached} after pass {pass})")]
    ExpansionLimit {
        limit: usize,
        reached: usize,
        pass: usize,
    },
}
