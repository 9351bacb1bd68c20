/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for Slater energy calculations

use crate::configuration::ConfigurationError;
use thiserror::Error;

/// Result type for Slater calculations
pub type Result<T> = std::result::Result<T, SlaterError>;

/// Error type for the Slater pipeline; the first failing stage wins
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlaterError {
    /// Expansion, parsing or validation of the configuration failed
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A group is screened by more than the nuclear charge
    #[error("unstable anion: group {group} has effective charge {charge:.2}")]
    UnstableAnion { group: usize, charge: f64 },

    /// No effective principal quantum number is tabulated for this shell
    #[error("unsupported shell n={0}, n must be < 7")]
    UnsupportedShell(u32),

    /// Per-group input (screening matrix or charges) does not fit the configuration
    #[error("expected values for {expected} groups, found {found}")]
    GroupCountMismatch { expected: usize, found: usize },
}

impl SlaterError {
    /// Short status message for display next to an unavailable energy
    pub fn advisory(&self) -> &'static str {
        match self {
            SlaterError::Configuration(ConfigurationError::EmptyConfiguration) => "enter structure",
            SlaterError::Configuration(ConfigurationError::ImpossibleOrbital { .. }) => {
                "there is no such orbital"
            }
            SlaterError::Configuration(ConfigurationError::OverfullOrbital { .. }) => {
                "this orbital has too many electrons"
            }
            SlaterError::Configuration(ConfigurationError::CyclicExpansion(_)) => {
                "cyclic noble-gas core"
            }
            SlaterError::UnstableAnion { .. } => "unstable anion",
            SlaterError::UnsupportedShell(_) => "n must be < 7",
            SlaterError::GroupCountMismatch { .. } => "inconsistent group data",
        }
    }
}
