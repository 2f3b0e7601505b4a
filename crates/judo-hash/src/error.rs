//! Error types for hasher configuration.

use std::fmt;

/// Errors reading [`HasherConfig`](crate::HasherConfig) from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashConfigError {
    /// A boolean switch held something other than a recognised flag.
    InvalidFlag {
        /// The variable that was read.
        var: &'static str,
        /// The raw value found.
        value: String,
    },
    /// The seed was not an unsigned 64-bit integer.
    InvalidSeed {
        /// The variable that was read.
        var: &'static str,
        /// The raw value found.
        value: String,
    },
}

impl fmt::Display for HashConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFlag { var, value } => write!(
                f,
                "{var}={value:?} is not a flag (expected 1/0, true/false, yes/no, on/off)"
            ),
            Self::InvalidSeed { var, value } => {
                write!(f, "{var}={value:?} is not an unsigned 64-bit seed")
            }
        }
    }
}

impl std::error::Error for HashConfigError {}
