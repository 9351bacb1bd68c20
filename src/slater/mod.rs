/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Slater's rules energy engine
//!
//! Given a grouped [`Configuration`](crate::configuration::Configuration),
//! this module builds the screening matrix, derives the effective nuclear
//! charge of every group and sums the orbital energies
//! E0 · N · (Z_eff / n*)². [`SlaterCalculator`] chains all stages, starting
//! from raw configuration text.

pub mod calculator;
pub mod charge;
pub mod energy;
mod errors;
pub mod screening;

pub use calculator::{Comparison, EnergyResult, SlaterCalculator};
pub use charge::{effective_charges, screening_constants};
pub use energy::{effective_principal_number, energies};
pub use errors::{Result, SlaterError};
pub use screening::{build_matrix, ScreeningMatrix};
