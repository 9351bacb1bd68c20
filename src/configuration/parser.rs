/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Tokenizer for the configuration mini-language
//!
//! A configuration is a whitespace-separated list of orbital tokens of the
//! form `<n><letter><electrons>`, e.g. `"1s2 2s2 2p3"`. Tokens that do not
//! follow this grammar are dropped without error.

use super::model::{angular_momentum, OrbitalTerm};
use log::trace;

/// Parse a single orbital token
///
/// Returns `None` for anything that is not exactly: ASCII digits, one letter
/// from the orbital alphabet, ASCII digits.
pub fn parse_orbital(token: &str, position: usize) -> Option<OrbitalTerm> {
    let letter_index = token.find(|c: char| !c.is_ascii_digit())?;
    let (n_digits, rest) = token.split_at(letter_index);

    let mut chars = rest.chars();
    let letter = chars.next()?;
    let count_digits = chars.as_str();

    if n_digits.is_empty()
        || count_digits.is_empty()
        || !count_digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    Some(OrbitalTerm {
        n: n_digits.parse().ok()?,
        l: angular_momentum(letter)?,
        electrons: count_digits.parse().ok()?,
        position,
    })
}

/// Parse every valid orbital token of a configuration string
///
/// The returned terms are sorted by (n, l, electrons, position). Positions
/// count every whitespace token, including the discarded ones.
pub fn parse_terms(configuration: &str) -> Vec<OrbitalTerm> {
    let mut terms: Vec<OrbitalTerm> = configuration
        .split_whitespace()
        .enumerate()
        .filter_map(|(position, token)| {
            let term = parse_orbital(token, position);
            if term.is_none() {
                trace!("Skipping malformed orbital token '{}'", token);
            }
            term
        })
        .collect();

    terms.sort_unstable();
    terms
}
