use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 10,
    ChecksumMismatch = 11,
    IoError = 12,
    UnsupportedFormat = 13,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthConstraint {
    AtLeast(usize),
    Lines(usize),
}

impl std::fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthConstraint::AtLeast(n) => write!(f, "at least {}", n),
            LengthConstraint::Lines(n) => write!(f, "{} lines", n),
        }
    }
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid length: expected {expected}, got {actual}{}", if !.message.is_empty() { format!(" ({})", .message) } else { String::new() })]
    InvalidLength {
        expected: LengthConstraint,
        actual: usize,
        message: String,
    },

    #[error("unsupported format: {message}")]
    UnsupportedFormat { message: String },

    #[error("invalid {field}: {message}")]
    InvalidField { field: &'static str, message: String },

    #[error("invalid date '{input}': {message}")]
    InvalidDate { input: String, message: String },

    #[error("check digit mismatch")]
    ChecksumMismatch,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CodecError::InvalidLength { .. }
            | CodecError::InvalidField { .. }
            | CodecError::InvalidDate { .. } => ExitCode::InvalidInput,
            CodecError::ChecksumMismatch => ExitCode::ChecksumMismatch,
            CodecError::Io(_) => ExitCode::IoError,
            CodecError::UnsupportedFormat { .. } => ExitCode::UnsupportedFormat,
        }
    }

    // Helper constructors for common error patterns
    pub fn invalid_length(expected: LengthConstraint, actual: usize, message: impl Into<String>) -> Self {
        Self::InvalidLength {
            expected,
            actual,
            message: message.into(),
        }
    }

    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
        }
    }

    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    pub fn invalid_date(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
