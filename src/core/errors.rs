/*!
 * Error Types
 * Centralized error handling with thiserror
 */

use thiserror::Error;

/// Errors raised while parsing the process input file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    /// A provided token could not be parsed as a number. Fatal: the
    /// simulation does not start on malformed input.
    #[error("line {line}: invalid {field} value '{token}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        token: String,
    },
}

/// Errors raised while validating scheduler configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}
