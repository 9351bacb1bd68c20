/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic database for element data
//!
//! This module provides the element symbols indexed by atomic number and the
//! reference ground-state electron configurations used to expand noble-gas
//! shorthand.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Highest atomic number present in the tables
pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// Element symbols indexed by atomic number (index 0 is a placeholder)
pub static SYMBOLS: [&str; 119] = [
    " ", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P",
    "S", "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh",
    "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re",
    "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db",
    "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Ground-state configurations indexed by atomic number, in noble-gas shorthand
pub static GROUND_STATES: [&str; 119] = [
    "", // 0 -
    "1s1", // 1 H
    "1s2", // 2 He
    "[He] 2s1", // 3 Li
    "[He] 2s2", // 4 Be
    "[He] 2s2 2p1", // 5 B
    "[He] 2s2 2p2", // 6 C
    "[He] 2s2 2p3", // 7 N
    "[He] 2s2 2p4", // 8 O
    "[He] 2s2 2p5", // 9 F
    "[He] 2s2 2p6", // 10 Ne
    "[Ne] 3s1", // 11 Na
    "[Ne] 3s2", // 12 Mg
    "[Ne] 3s2 3p1", // 13 Al
    "[Ne] 3s2 3p2", // 14 Si
    "[Ne] 3s2 3p3", // 15 P
    "[Ne] 3s2 3p4", // 16 S
    "[Ne] 3s2 3p5", // 17 Cl
    "[Ne] 3s2 3p6", // 18 Ar
    "[Ar] 4s1", // 19 K
    "[Ar] 4s2", // 20 Ca
    "[Ar] 3d1 4s2", // 21 Sc
    "[Ar] 3d2 4s2", // 22 Ti
    "[Ar] 3d3 4s2", // 23 V
    "[Ar] 3d5 4s1", // 24 Cr
    "[Ar] 3d5 4s2", // 25 Mn
    "[Ar] 3d6 4s2", // 26 Fe
    "[Ar] 3d7 4s2", // 27 Co
    "[Ar] 3d8 4s2", // 28 Ni
    "[Ar] 3d10 4s1", // 29 Cu
    "[Ar] 3d10 4s2", // 30 Zn
    "[Ar] 3d10 4s2 4p1", // 31 Ga
    "[Ar] 3d10 4s2 4p2", // 32 Ge
    "[Ar] 3d10 4s2 4p3", // 33 As
    "[Ar] 3d10 4s2 4p4", // 34 Se
    "[Ar] 3d10 4s2 4p5", // 35 Br
    "[Ar] 3d10 4s2 4p6", // 36 Kr
    "[Kr] 5s1", // 37 Rb
    "[Kr] 5s2", // 38 Sr
    "[Kr] 4d1 5s2", // 39 Y
    "[Kr] 4d2 5s2", // 40 Zr
    "[Kr] 4d4 5s1", // 41 Nb
    "[Kr] 4d5 5s1", // 42 Mo
    "[Kr] 4d5 5s2", // 43 Tc
    "[Kr] 4d7 5s1", // 44 Ru
    "[Kr] 4d8 5s1", // 45 Rh
    "[Kr] 4d10", // 46 Pd
    "[Kr] 4d10 5s1", // 47 Ag
    "[Kr] 4d10 5s2", // 48 Cd
    "[Kr] 4d10 5s2 5p1", // 49 In
    "[Kr] 4d10 5s2 5p2", // 50 Sn
    "[Kr] 4d10 5s2 5p3", // 51 Sb
    "[Kr] 4d10 5s2 5p4", // 52 Te
    "[Kr] 4d10 5s2 5p5", // 53 I
    "[Kr] 4d10 5s2 5p6", // 54 Xe
    "[Xe] 6s1", // 55 Cs
    "[Xe] 6s2", // 56 Ba
    "[Xe] 5d1 6s2", // 57 La
    "[Xe] 4f1 5d1 6s2", // 58 Ce
    "[Xe] 4f3 6s2", // 59 Pr
    "[Xe] 4f4 6s2", // 60 Nd
    "[Xe] 4f5 6s2", // 61 Pm
    "[Xe] 4f6 6s2", // 62 Sm
    "[Xe] 4f7 6s2", // 63 Eu
    "[Xe] 4f7 5d1 6s2", // 64 Gd
    "[Xe] 4f9 6s2", // 65 Tb
    "[Xe] 4f10 6s2", // 66 Dy
    "[Xe] 4f11 6s2", // 67 Ho
    "[Xe] 4f12 6s2", // 68 Er
    "[Xe] 4f13 6s2", // 69 Tm
    "[Xe] 4f14 6s2", // 70 Yb
    "[Xe] 4f14 5d1 6s2", // 71 Lu
    "[Xe] 4f14 5d2 6s2", // 72 Hf
    "[Xe] 4f14 5d3 6s2", // 73 Ta
    "[Xe] 4f14 5d4 6s2", // 74 W
    "[Xe] 4f14 5d5 6s2", // 75 Re
    "[Xe] 4f14 5d6 6s2", // 76 Os
    "[Xe] 4f14 5d7 6s2", // 77 Ir
    "[Xe] 4f14 5d9 6s1", // 78 Pt
    "[Xe] 4f14 5d10 6s1", // 79 Au
    "[Xe] 4f14 5d10 6s2", // 80 Hg
    "[Xe] 4f14 5d10 6s2 6p1", // 81 Tl
    "[Xe] 4f14 5d10 6s2 6p2", // 82 Pb
    "[Xe] 4f14 5d10 6s2 6p3", // 83 Bi
    "[Xe] 4f14 5d10 6s2 6p4", // 84 Po
    "[Xe] 4f14 5d10 6s2 6p5", // 85 At
    "[Xe] 4f14 5d10 6s2 6p6", // 86 Rn
    "[Rn] 7s1", // 87 Fr
    "[Rn] 7s2", // 88 Ra
    "[Rn] 6d1 7s2", // 89 Ac
    "[Rn] 6d2 7s2", // 90 Th
    "[Rn] 5f2 6d1 7s2", // 91 Pa
    "[Rn] 5f3 6d1 7s2", // 92 U
    "[Rn] 5f4 6d1 7s2", // 93 Np
    "[Rn] 5f6 7s2", // 94 Pu
    "[Rn] 5f7 7s2", // 95 Am
    "[Rn] 5f7 6d1 7s2", // 96 Cm
    "[Rn] 5f9 7s2", // 97 Bk
    "[Rn] 5f10 7s2", // 98 Cf
    "[Rn] 5f11 7s2", // 99 Es
    "[Rn] 5f12 7s2", // 100 Fm
    "[Rn] 5f13 7s2", // 101 Md
    "[Rn] 5f14 7s2", // 102 No
    "[Rn] 5f14 7s2 7p1", // 103 Lr
    "[Rn] 5f14 6d2 7s2", // 104 Rf
    "[Rn] 5f14 6d3 7s2", // 105 Db
    "[Rn] 5f14 6d4 7s2", // 106 Sg
    "[Rn] 5f14 6d5 7s2", // 107 Bh
    "[Rn] 5f14 6d6 7s2", // 108 Hs
    "[Rn] 5f14 6d7 7s2", // 109 Mt
    "[Rn] 5f14 6d8 7s2", // 110 Ds
    "[Rn] 5f14 6d9 7s2", // 111 Rg
    "[Rn] 5f14 6d10 7s2", // 112 Cn
    "[Rn] 5f14 6d10 7s2 7p1", // 113 Nh
    "[Rn] 5f14 6d10 7s2 7p2", // 114 Fl
    "[Rn] 5f14 6d10 7s2 7p3", // 115 Mc
    "[Rn] 5f14 6d10 7s2 7p4", // 116 Lv
    "[Rn] 5f14 6d10 7s2 7p5", // 117 Ts
    "[Rn] 5f14 6d10 7s2 7p6", // 118 Og
];

static SYMBOL_INDEX: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    SYMBOLS
        .iter()
        .enumerate()
        .skip(1)
        .map(|(z, symbol)| (*symbol, z as u32))
        .collect()
});

/// Provides the element symbol for an atomic number
pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    match atomic_number {
        1..=MAX_ATOMIC_NUMBER => Some(SYMBOLS[atomic_number as usize]),
        _ => None,
    }
}

/// Looks up the atomic number of an element symbol (case-sensitive)
pub fn atomic_number(symbol: &str) -> Option<u32> {
    SYMBOL_INDEX.get(symbol).copied()
}

/// Returns the ground-state configuration of an element in noble-gas shorthand
pub fn ground_state_configuration(atomic_number: u32) -> Option<&'static str> {
    match atomic_number {
        1..=MAX_ATOMIC_NUMBER => Some(GROUND_STATES[atomic_number as usize]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(element_symbol(1), Some("H"));
        assert_eq!(element_symbol(26), Some("Fe"));
        assert_eq!(element_symbol(118), Some("Og"));
        assert_eq!(element_symbol(0), None);
        assert_eq!(element_symbol(119), None);
    }

    #[test]
    fn test_atomic_number_lookup() {
        assert_eq!(atomic_number("He"), Some(2));
        assert_eq!(atomic_number("Xe"), Some(54));
        assert_eq!(atomic_number("Og"), Some(118));
        assert_eq!(atomic_number("he"), None);
        assert_eq!(atomic_number(" "), None);
        assert_eq!(atomic_number(""), None);
    }

    #[test]
    fn test_symbol_round_trip() {
        for z in 1..=MAX_ATOMIC_NUMBER {
            let symbol = element_symbol(z).unwrap();
            assert_eq!(atomic_number(symbol), Some(z));
        }
    }

    #[test]
    fn test_ground_states() {
        assert_eq!(ground_state_configuration(1), Some("1s1"));
        assert_eq!(ground_state_configuration(10), Some("[He] 2s2 2p6"));
        assert_eq!(ground_state_configuration(46), Some("[Kr] 4d10"));
        assert_eq!(ground_state_configuration(0), None);

        // Shorthand only ever refers to a lighter element
        for z in 1..=MAX_ATOMIC_NUMBER {
            let config = ground_state_configuration(z).unwrap();
            if let Some(rest) = config.strip_prefix('[') {
                let symbol = &rest[..rest.find(']').unwrap()];
                assert!(atomic_number(symbol).unwrap() < z);
            }
        }
    }
}
