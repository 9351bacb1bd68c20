/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Text and JSON rendering of Slater results

use super::config::{OutputFormat, ReportConfig};
use crate::atoms::Atom;
use crate::slater::{EnergyResult, Result as SlaterResult};
use crate::utils::EnergyUnit;
use serde::Serialize;
use std::fmt::{self, Write};

/// Energy reported for a configuration that could not be evaluated
pub const UNAVAILABLE: f64 = -1.0;

/// Result of one configuration, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureReport {
    /// Configuration as entered
    pub input: String,
    /// Expanded canonical configuration, empty when unavailable
    pub expanded: String,
    /// Slater group labels
    pub groups: Vec<String>,
    /// Effective nuclear charge per group
    pub effective_charges: Vec<f64>,
    /// Energy of one electron of each group (magnitude)
    pub orbital_energies: Vec<f64>,
    /// Total energy magnitude, or [`UNAVAILABLE`]
    pub total_energy: f64,
    /// Advisory message when the calculation failed
    pub error: Option<String>,
}

impl StructureReport {
    /// Summarize a calculation outcome, converting energies to `unit`
    pub fn new(input: &str, outcome: &SlaterResult<EnergyResult>, unit: EnergyUnit) -> Self {
        match outcome {
            Ok(result) => Self {
                input: input.to_string(),
                expanded: result.configuration.to_string(),
                groups: result.labels(),
                effective_charges: result.effective_charges.clone(),
                orbital_energies: result
                    .energy_per_electron()
                    .into_iter()
                    .map(|e| unit.from_ev(e))
                    .collect(),
                total_energy: unit.from_ev(result.total_energy),
                error: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                expanded: String::new(),
                groups: Vec::new(),
                effective_charges: Vec::new(),
                orbital_energies: Vec::new(),
                total_energy: UNAVAILABLE,
                error: Some(err.advisory().to_string()),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        self.error.is_none()
    }
}

/// Complete report for one element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub element: String,
    pub atomic_number: u32,
    pub unit: EnergyUnit,
    pub structures: Vec<StructureReport>,
    /// Binding energy difference E2 − E1 when two structures were given,
    /// [`UNAVAILABLE`] when either of them failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,
}

impl Report {
    pub fn new(atom: &Atom, unit: EnergyUnit) -> Self {
        Self {
            element: atom.symbol().to_string(),
            atomic_number: atom.atomic_number(),
            unit,
            structures: Vec::new(),
            difference: None,
        }
    }

    pub fn push(&mut self, structure: StructureReport) {
        self.structures.push(structure);
    }

    /// Render the report in the configured format
    pub fn render(&self, config: &ReportConfig) -> String {
        // Formatting into a String does not fail
        match config.format {
            OutputFormat::Text => self.render_text(config.precision).unwrap_or_default(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
        }
    }

    fn render_text(&self, precision: usize) -> Result<String, fmt::Error> {
        let unit = self.unit.symbol();
        let mut out = String::new();
        writeln!(out, "element      {} (Z={})", self.element, self.atomic_number)?;

        for (i, structure) in self.structures.iter().enumerate() {
            let rank = i + 1;
            writeln!(out)?;
            writeln!(out, "electronic structure {}", rank)?;
            writeln!(out, "  {}", structure.input)?;

            if let Some(error) = &structure.error {
                writeln!(out, "  {}", error)?;
                writeln!(
                    out,
                    "  E{} total  {:.*} {}",
                    rank, precision, structure.total_energy, unit
                )?;
                continue;
            }

            if structure.expanded != structure.input.trim() {
                writeln!(out, "  = {}", structure.expanded)?;
            }

            let charges: Vec<String> = structure
                .effective_charges
                .iter()
                .map(|z| format!("{:.*}", precision, z))
                .collect();
            let energies: Vec<String> = structure
                .orbital_energies
                .iter()
                .map(|e| format!("{:.*}", precision, e))
                .collect();
            let widths: Vec<usize> = (0..structure.groups.len())
                .map(|g| {
                    structure.groups[g]
                        .len()
                        .max(charges[g].len())
                        .max(energies[g].len())
                        + 2
                })
                .collect();

            writeln!(out, "  {:<10}{}", "", columns(&structure.groups, &widths))?;
            writeln!(out, "  {:<10}{}", "Zeff (i)", columns(&charges, &widths))?;
            writeln!(out, "  {:<10}{}{}", "-E (i)", columns(&energies, &widths), unit)?;
            writeln!(
                out,
                "  E{} total  -{:.*} {}",
                rank, precision, structure.total_energy, unit
            )?;
        }

        if let Some(difference) = self.difference {
            writeln!(out)?;
            writeln!(
                out,
                "difference (E2 - E1)  {:.*} {}",
                precision, difference, unit
            )?;
        }

        Ok(out)
    }
}

fn columns(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slater::SlaterCalculator;

    fn lithium_report() -> Report {
        let calculator = SlaterCalculator::new();
        let atom = Atom::new(3).unwrap();
        let mut report = Report::new(&atom, EnergyUnit::Ev);
        let comparison = calculator.compare(3, "[He] 2s1", "1s2");
        report.push(StructureReport::new("[He] 2s1", &comparison.first, EnergyUnit::Ev));
        report.push(StructureReport::new("1s2", &comparison.second, EnergyUnit::Ev));
        report.difference = comparison.difference().or(Some(UNAVAILABLE));
        report
    }

    #[test]
    fn test_structure_report() {
        let report = lithium_report();
        let first = &report.structures[0];
        assert!(first.is_available());
        assert_eq!(first.expanded, "1s2 2s1");
        assert_eq!(first.groups, vec!["1s", "2s2p"]);
        assert!((first.orbital_energies[1] - 5.746).abs() < 0.01);
    }

    #[test]
    fn test_failed_structure() {
        let calculator = SlaterCalculator::new();
        let outcome = calculator.calculate(1, "1s3");
        let report = StructureReport::new("1s3", &outcome, EnergyUnit::Ev);
        assert!(!report.is_available());
        assert_eq!(report.total_energy, UNAVAILABLE);
        assert_eq!(report.error.as_deref(), Some("this orbital has too many electrons"));
    }

    #[test]
    fn test_text_rendering() {
        let text = lithium_report().render(&ReportConfig::default());
        assert!(text.contains("element      Li (Z=3)"));
        assert!(text.contains("  = 1s2 2s1"));
        assert!(text.contains("E1 total  -204.03 eV"));
        assert!(text.contains("E2 total  -198.29 eV"));
        assert!(text.contains("difference (E2 - E1)  5.75 eV"));
    }

    #[test]
    fn test_failed_comparison_prints_sentinel() {
        let calculator = SlaterCalculator::new();
        let atom = Atom::new(1).unwrap();
        let comparison = calculator.compare(1, "1s1", "1s3");
        let mut report = Report::new(&atom, EnergyUnit::Ev);
        report.push(StructureReport::new("1s1", &comparison.first, EnergyUnit::Ev));
        report.push(StructureReport::new("1s3", &comparison.second, EnergyUnit::Ev));
        report.difference = comparison.difference().or(Some(UNAVAILABLE));

        let text = report.render(&ReportConfig::default());
        assert!(text.contains("E1 total  -13.60 eV"));
        assert!(text.contains("E2 total  -1.00 eV"));
        assert!(text.contains("difference (E2 - E1)  -1.00 eV"));

        let config = ReportConfig {
            format: OutputFormat::Json,
            ..ReportConfig::default()
        };
        let json: serde_json::Value = serde_json::from_str(&report.render(&config)).unwrap();
        assert_eq!(json["structures"][1]["total_energy"], -1.0);
        assert_eq!(json["difference"], -1.0);
    }

    #[test]
    fn test_single_structure_has_no_difference() {
        let calculator = SlaterCalculator::new();
        let atom = Atom::new(1).unwrap();
        let mut report = Report::new(&atom, EnergyUnit::Ev);
        report.push(StructureReport::new("1s1", &calculator.calculate(1, "1s1"), EnergyUnit::Ev));

        assert!(!report.render(&ReportConfig::default()).contains("difference"));
    }

    #[test]
    fn test_json_rendering() {
        let config = ReportConfig {
            format: OutputFormat::Json,
            ..ReportConfig::default()
        };
        let json: serde_json::Value =
            serde_json::from_str(&lithium_report().render(&config)).unwrap();
        assert_eq!(json["element"], "Li");
        assert_eq!(json["unit"], "ev");
        assert_eq!(json["structures"][0]["groups"][1], "2s2p");
        assert!((json["difference"].as_f64().unwrap() - 5.746).abs() < 0.01);
    }
}
