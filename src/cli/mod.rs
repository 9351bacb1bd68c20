/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! This module provides the `slater-rs` command: evaluate one configuration
//! of an element, or two side by side with their energy difference.

pub mod config;
mod errors;
pub mod report;

pub use config::{OutputFormat, ReportConfig};
pub use errors::{CliError, Result};
pub use report::{Report, StructureReport, UNAVAILABLE};

use crate::atoms::Atom;
use crate::slater::SlaterCalculator;
use crate::utils::EnergyUnit;
use clap::{ArgAction, Parser};
use log::info;
use std::path::PathBuf;

/// Orbital energies from Slater's rules
#[derive(Parser, Debug, Clone)]
#[command(name = "slater-rs", version, about)]
pub struct Cli {
    /// Element symbol or atomic number, e.g. "Fe" or "26"
    pub element: String,

    /// Electron configuration, e.g. "[Ne] 3s2 3p1" (defaults to the ground state)
    pub configuration: Option<String>,

    /// Second configuration; prints the energy difference E2 - E1
    #[arg(long, value_name = "CONFIGURATION")]
    pub compare: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places in text output
    #[arg(long)]
    pub precision: Option<usize>,

    /// Energy unit: ev, hartree or rydberg
    #[arg(long)]
    pub unit: Option<EnergyUnit>,

    /// JSON file with report settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Report settings from the optional file, overridden by explicit flags
    pub fn report_config(&self) -> Result<ReportConfig> {
        let base = match &self.config {
            Some(path) => ReportConfig::from_file(path)?,
            None => ReportConfig::default(),
        };
        Ok(base.with_overrides(self.format, self.precision, self.unit))
    }
}

/// Evaluate the requested configurations and render the report
pub fn run(cli: &Cli) -> Result<String> {
    let config = cli.report_config()?;
    let atom: Atom = cli.element.parse()?;
    let calculator = SlaterCalculator::new();

    let first = match &cli.configuration {
        Some(configuration) => configuration.clone(),
        None => calculator.ground_state(&atom)?,
    };
    info!("Evaluating {} with '{}'", atom, first);

    let mut report = Report::new(&atom, config.unit);
    match &cli.compare {
        Some(second) => {
            let comparison = calculator.compare(atom.atomic_number(), &first, second);
            report.push(StructureReport::new(&first, &comparison.first, config.unit));
            report.push(StructureReport::new(second, &comparison.second, config.unit));
            report.difference = Some(
                comparison
                    .difference()
                    .map_or(UNAVAILABLE, |d| config.unit.from_ev(d)),
            );
        }
        None => {
            let outcome = calculator.calculate(atom.atomic_number(), &first);
            report.push(StructureReport::new(&first, &outcome, config.unit));
        }
    }

    Ok(report.render(&config))
}
