/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Constants of Slater's screening rules

/// Energy unit of the orbital energy formula: hydrogen ionization energy in eV
pub const E0: f64 = 13.6;

/// Rydberg energy in eV
pub const RYDBERG: f64 = 13.6057;

/// Conversion from eV to Hartree
pub const EV_TO_HARTREE: f64 = 1.0 / (2.0 * RYDBERG);

/// Conversion from Hartree to eV
pub const HARTREE_TO_EV: f64 = 2.0 * RYDBERG;

/// Self-screening of electrons within the same group
pub const SAME_GROUP_SCREENING: f64 = 0.35;

/// Self-screening within the 1s group
pub const SAME_GROUP_SCREENING_1S: f64 = 0.30;

/// Screening of s/p electrons by the shell directly below
pub const INNER_SHELL_SCREENING: f64 = 0.85;

/// Screening by any other inner group
pub const FULL_SCREENING: f64 = 1.0;

/// How many groups back the reduced inner-shell screening is looked for
pub const INNER_SHELL_REACH: usize = 3;

/// Effective principal quantum numbers n* for n = 1..=6
pub const EFFECTIVE_PRINCIPAL_NUMBERS: [f64; 6] = [1.0, 2.0, 3.0, 3.7, 4.0, 4.2];
