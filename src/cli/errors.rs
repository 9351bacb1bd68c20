/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the command-line front end

use crate::atoms::AtomError;
use crate::slater::SlaterError;
use std::io;
use thiserror::Error;

/// Errors that stop the command-line program (calculation failures are reported, not raised)
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid report configuration: {0}")]
    ConfigError(#[from] serde_json::Error),

    #[error("Invalid element: {0}")]
    AtomError(#[from] AtomError),

    #[error("Ground state unavailable: {0}")]
    GroundStateError(#[from] SlaterError),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
