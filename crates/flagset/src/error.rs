use crate::value::FlagType;
use std::fmt;

/// A flag as it was written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagName {
    Long(String),
    Short(char),
}

impl fmt::Display for FlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long(name) => write!(f, "--{name}"),
            Self::Short(c) => write!(f, "-{c}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownFlag,
    InvalidType,
    MissingRequired,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A long or short flag that was never defined.
    #[error("unknown option: {0}")]
    UnknownFlag(FlagName),

    /// A value that failed its flag's type coercion.
    #[error("option --{name} expected type: \"{expected}\"")]
    InvalidType { name: String, expected: FlagType },

    /// A flag defined without a default that received no value.
    #[error("expected option --{0} missing")]
    MissingRequired(String),
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownFlag(_) => ErrorKind::UnknownFlag,
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::MissingRequired(_) => ErrorKind::MissingRequired,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
