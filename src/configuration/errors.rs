/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for configuration parsing and validation

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Errors raised while expanding, parsing or validating a configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No syntactically valid orbital token was found
    #[error("configuration contains no valid orbital")]
    EmptyConfiguration,

    /// Angular momentum exceeds what the shell allows (l >= n)
    #[error("there is no orbital with n={n} and l={l}")]
    ImpossibleOrbital { n: u32, l: usize },

    /// More electrons than the sub-shell can hold (4l + 2)
    #[error("sub-shell n={n}, l={l} cannot hold {electrons} electrons")]
    OverfullOrbital { n: u32, l: usize, electrons: u32 },

    /// The reference table refers back to a symbol already being expanded
    #[error("cyclic noble-gas reference through [{0}]")]
    CyclicExpansion(String),
}
