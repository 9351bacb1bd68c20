/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic data module
//!
//! This module provides element lookup and the reference ground-state
//! configurations consumed by the configuration expander.

pub mod atom;
pub mod database;
pub mod errors;

pub use atom::Atom;
pub use database::{atomic_number, element_symbol, ground_state_configuration};
pub use errors::{AtomError, Result};
