/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # slater-rs
//!
//! Orbital binding energies from electron configurations using Slater's
//! screening rules.
//!
//! A configuration such as `"[Ne] 3s2 3p1"` is expanded, parsed and grouped
//! into Slater screening groups; a screening matrix then gives the effective
//! nuclear charge of each group and the orbital energies
//! E0 · N · (Z_eff / n*)². The rules are empirical: the numbers are meant for
//! teaching, not for comparison with spectroscopic data.
//!
//! ```
//! use slater_rs::SlaterCalculator;
//!
//! let result = SlaterCalculator::new().calculate(3, "[He] 2s1").unwrap();
//! assert_eq!(result.labels(), vec!["1s", "2s2p"]);
//! assert!((result.binding_energy() + 204.03).abs() < 0.01);
//! ```

pub mod atoms;
pub mod cli;
pub mod configuration;
pub mod slater;
pub mod utils;

pub use atoms::Atom;
pub use configuration::{analyze, expand, Configuration, ConfigurationError};
pub use slater::{EnergyResult, SlaterCalculator, SlaterError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
