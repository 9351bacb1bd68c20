/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility constants and conversions shared by the Slater engine

pub mod constants;
pub mod conversions;

pub use conversions::{ev_to_hartree, ev_to_rydberg, hartree_to_ev, EnergyUnit};
