/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Report configuration
//!
//! Settings can be read from a JSON file such as
//! `{"format": "json", "precision": 3, "unit": "hartree"}`; missing keys take
//! their default values and command-line flags override the file.

use super::errors::Result;
use crate::utils::EnergyUnit;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Output format of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How results are presented
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format
    pub format: OutputFormat,
    /// Decimal places of charges and energies in text output
    pub precision: usize,
    /// Energy unit of reported energies
    pub unit: EnergyUnit,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 2,
            unit: EnergyUnit::Ev,
        }
    }
}

impl ReportConfig {
    /// Read a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Replace settings that were given explicitly
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        precision: Option<usize>,
        unit: Option<EnergyUnit>,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(precision) = precision {
            self.precision = precision;
        }
        if let Some(unit) = unit {
            self.unit = unit;
        }
        self
    }
}
