/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Energy unit conversion utilities

use super::constants;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Convert energy from eV to Hartree
pub fn ev_to_hartree(ev: f64) -> f64 {
    ev * constants::EV_TO_HARTREE
}

/// Convert energy from Hartree to eV
pub fn hartree_to_ev(hartree: f64) -> f64 {
    hartree * constants::HARTREE_TO_EV
}

/// Convert energy from eV to Rydberg
pub fn ev_to_rydberg(ev: f64) -> f64 {
    ev / constants::RYDBERG
}

/// Unit used when reporting energies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    #[default]
    Ev,
    Hartree,
    Rydberg,
}

impl EnergyUnit {
    /// Convert an energy given in eV into this unit
    pub fn from_ev(self, ev: f64) -> f64 {
        match self {
            EnergyUnit::Ev => ev,
            EnergyUnit::Hartree => ev_to_hartree(ev),
            EnergyUnit::Rydberg => ev_to_rydberg(ev),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Ev => "eV",
            EnergyUnit::Hartree => "Ha",
            EnergyUnit::Rydberg => "Ry",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for EnergyUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ev" => Ok(EnergyUnit::Ev),
            "ha" | "hartree" => Ok(EnergyUnit::Hartree),
            "ry" | "rydberg" => Ok(EnergyUnit::Rydberg),
            _ => Err(format!("unknown energy unit '{}'", s)),
        }
    }
}
