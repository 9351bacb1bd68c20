/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Full Slater pipeline: expansion, grouping, screening, charges and energies

use super::charge::effective_charges;
use super::energy::energies;
use super::errors::Result;
use super::screening::{build_matrix, ScreeningMatrix};
use crate::atoms::Atom;
use crate::configuration::{self, Configuration, GroundStateTable, ReferenceTable};
use log::debug;
use serde::Serialize;

/// Outcome of a successful Slater calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyResult {
    /// Nuclear charge used for the calculation
    pub atomic_number: u32,
    /// Expanded and grouped configuration
    pub configuration: Configuration,
    /// Screening coefficients between groups
    pub screening: ScreeningMatrix,
    /// Effective nuclear charge per group
    pub effective_charges: Vec<f64>,
    /// Energy magnitude per group in eV (all electrons of the group)
    pub energies: Vec<f64>,
    /// Sum of the group energies in eV
    pub total_energy: f64,
}

impl EnergyResult {
    /// Total binding energy, the negative of [`Self::total_energy`]
    pub fn binding_energy(&self) -> f64 {
        -self.total_energy
    }

    /// Energy magnitude of a single electron in each group
    ///
    /// Groups without electrons report 0.
    pub fn energy_per_electron(&self) -> Vec<f64> {
        self.configuration
            .groups()
            .iter()
            .zip(&self.energies)
            .map(|(group, &energy)| match group.electrons {
                0 => 0.0,
                n => energy / f64::from(n),
            })
            .collect()
    }

    /// Slater labels of the groups
    pub fn labels(&self) -> Vec<String> {
        self.configuration.labels()
    }
}

/// Two configurations of the same element evaluated side by side
#[derive(Debug, Clone)]
pub struct Comparison {
    pub first: Result<EnergyResult>,
    pub second: Result<EnergyResult>,
}

impl Comparison {
    /// Binding energy difference E2 − E1 in eV, when both sides are available
    pub fn difference(&self) -> Option<f64> {
        match (&self.first, &self.second) {
            (Ok(first), Ok(second)) => Some(second.binding_energy() - first.binding_energy()),
            _ => None,
        }
    }
}

/// Slater energy calculator over a table of reference configurations
#[derive(Debug, Clone, Default)]
pub struct SlaterCalculator<T: ReferenceTable = GroundStateTable> {
    references: T,
}

impl SlaterCalculator {
    /// Calculator using the built-in ground-state table
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: ReferenceTable> SlaterCalculator<T> {
    /// Calculator using a custom reference table for shorthand expansion
    pub fn with_references(references: T) -> Self {
        Self { references }
    }

    /// Expand noble-gas shorthand in a raw configuration
    pub fn expand(&self, raw: &str) -> Result<String> {
        Ok(configuration::expand(raw, &self.references)?)
    }

    /// Expand, parse and group a configuration
    pub fn analyze(&self, raw: &str) -> Result<Configuration> {
        let expanded = self.expand(raw)?;
        Ok(configuration::analyze(&expanded)?)
    }

    /// Fully expanded ground-state configuration of an element
    pub fn ground_state(&self, atom: &Atom) -> Result<String> {
        self.expand(&format!("[{}]", atom.symbol()))
    }

    /// Run the whole pipeline for one configuration
    pub fn calculate(&self, atomic_number: u32, raw: &str) -> Result<EnergyResult> {
        let configuration = self.analyze(raw)?;
        let screening = build_matrix(&configuration);
        let effective_charges = effective_charges(atomic_number, &configuration, &screening)?;
        let (energies, total_energy) = energies(&configuration, &effective_charges)?;

        debug!(
            "Z={} '{}': {} groups, total energy {:.4} eV",
            atomic_number,
            configuration,
            configuration.len(),
            total_energy
        );

        Ok(EnergyResult {
            atomic_number,
            configuration,
            screening,
            effective_charges,
            energies,
            total_energy,
        })
    }

    /// Evaluate two configurations of the same element
    pub fn compare(&self, atomic_number: u32, first: &str, second: &str) -> Comparison {
        Comparison {
            first: self.calculate(atomic_number, first),
            second: self.calculate(atomic_number, second),
        }
    }
}
