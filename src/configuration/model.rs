/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Data model for parsed electron configurations

use serde::Serialize;
use std::fmt;

/// Sub-shell letters in order of angular momentum (no "j", per spectroscopic notation)
pub const ORBITAL_LETTERS: [char; 21] = [
    's', 'p', 'd', 'f', 'g', 'h', 'i', 'k', 'l', 'm', 'n', 'o', 'q', 'r', 't', 'u', 'v', 'w',
    'x', 'y', 'z',
];

/// Letter for an angular momentum quantum number, '?' when outside the table
pub fn orbital_letter(l: usize) -> char {
    ORBITAL_LETTERS.get(l).copied().unwrap_or('?')
}

/// Angular momentum quantum number for a sub-shell letter
pub fn angular_momentum(letter: char) -> Option<usize> {
    ORBITAL_LETTERS.iter().position(|&c| c == letter)
}

/// Maximum occupancy of a single sub-shell, 2(2l + 1)
pub fn subshell_capacity(l: usize) -> u32 {
    4 * l as u32 + 2
}

/// One orbital token of the input, e.g. "2p6"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrbitalTerm {
    // Field order gives the derived ordering (n, l, electrons, position)
    pub n: u32,
    pub l: usize,
    pub electrons: u32,
    /// Index of the token in the whitespace-split input
    pub position: usize,
}

/// All electrons of one (n, l) sub-shell after merging repeated tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subshell {
    pub n: u32,
    pub l: usize,
    pub electrons: u32,
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.n, orbital_letter(self.l), self.electrons)
    }
}

/// A Slater screening group
///
/// The ns and np sub-shells of a shell share one group; such a group keeps the
/// angular momentum of its first member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Group {
    pub n: u32,
    pub l: usize,
    pub electrons: u32,
}

impl Group {
    /// Whether this is an s/p group
    pub fn is_sp(&self) -> bool {
        self.l < 2
    }

    /// Slater label of the group: "1s", "2s2p", "3d", "4f"
    pub fn label(&self) -> String {
        match (self.n, self.is_sp()) {
            (1, true) => "1s".to_string(),
            (n, true) => format!("{n}s{n}p"),
            (n, false) => format!("{}{}", n, orbital_letter(self.l)),
        }
    }
}

impl From<Subshell> for Group {
    fn from(subshell: Subshell) -> Self {
        Self {
            n: subshell.n,
            l: subshell.l,
            electrons: subshell.electrons,
        }
    }
}

/// A validated configuration, ordered by ascending (n, l)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    subshells: Vec<Subshell>,
    groups: Vec<Group>,
}

impl Configuration {
    pub(crate) fn new(subshells: Vec<Subshell>, groups: Vec<Group>) -> Self {
        Self { subshells, groups }
    }

    /// Occupied sub-shells, before s/p grouping
    pub fn subshells(&self) -> &[Subshell] {
        &self.subshells
    }

    /// Slater screening groups
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of screening groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of electrons
    pub fn electron_count(&self) -> u64 {
        self.groups.iter().map(|g| u64::from(g.electrons)).sum()
    }

    /// Labels of all groups, in order
    pub fn labels(&self) -> Vec<String> {
        self.groups.iter().map(Group::label).collect()
    }
}

/// Renders the canonical token string, e.g. "1s2 2s2 2p6"
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, subshell) in self.subshells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{subshell}")?;
        }
        Ok(())
    }
}
