/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Electron configuration module
//!
//! This module turns configuration text such as `"[Ne] 3s2 3p1"` into a
//! validated [`Configuration`] of Slater screening groups:
//!
//! 1. noble-gas shorthand is expanded ([`expand`]),
//! 2. orbital tokens are parsed and sorted ([`parse_terms`]),
//! 3. repeated sub-shells are merged and checked, then ns/np sub-shells are
//!    grouped ([`analyze`]).

mod errors;
pub mod expansion;
pub mod merge;
pub mod model;
pub mod parser;

pub use errors::{ConfigurationError, Result};
pub use expansion::{expand, GroundStateTable, ReferenceTable};
pub use merge::analyze;
pub use model::{Configuration, Group, OrbitalTerm, Subshell, ORBITAL_LETTERS};
pub use parser::{parse_orbital, parse_terms};
