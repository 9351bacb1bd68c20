/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atom representation for Slater calculations

use super::database;
use super::errors::{AtomError, Result};
use std::fmt;
use std::str::FromStr;

/// An element identified by its atomic number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atom {
    /// Atomic number (Z) of the element
    atomic_number: u32,
    /// Element symbol from the database
    symbol: &'static str,
}

impl Atom {
    /// Create a new atom with the given atomic number
    pub fn new(atomic_number: u32) -> Result<Self> {
        let symbol = database::element_symbol(atomic_number)
            .ok_or(AtomError::InvalidAtomicNumber(atomic_number))?;

        Ok(Self {
            atomic_number,
            symbol,
        })
    }

    /// Create an atom from its element symbol
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        let atomic_number = database::atomic_number(symbol)
            .ok_or_else(|| AtomError::UnknownSymbol(symbol.to_string()))?;
        Self::new(atomic_number)
    }

    /// Get the atomic number
    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Get the element symbol
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Ground-state configuration of this element, in noble-gas shorthand
    pub fn ground_state(&self) -> &'static str {
        database::GROUND_STATES[self.atomic_number as usize]
    }
}

/// Accepts either an atomic number ("26") or an element symbol ("Fe")
impl FromStr for Atom {
    type Err = AtomError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.parse::<u32>() {
            Ok(z) => Self::new(z),
            Err(_) => Self::from_symbol(s),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Z={})", self.symbol, self.atomic_number)
    }
}
