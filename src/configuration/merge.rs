/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Validation and Slater grouping of parsed orbital terms

use super::errors::{ConfigurationError, Result};
use super::model::{subshell_capacity, Configuration, Group, OrbitalTerm, Subshell};
use super::parser::parse_terms;
use log::debug;

/// Parse, validate and group an expanded configuration string
///
/// Noble-gas shorthand must already be expanded (see [`super::expand`]);
/// bracketed tokens are treated as malformed and dropped.
pub fn analyze(configuration: &str) -> Result<Configuration> {
    let terms = parse_terms(configuration);
    if terms.is_empty() {
        return Err(ConfigurationError::EmptyConfiguration);
    }

    let subshells = merge_subshells(&terms)?;
    let groups = merge_groups(&subshells)?;
    debug!(
        "Analyzed '{}': {} terms, {} sub-shells, {} groups",
        configuration,
        terms.len(),
        subshells.len(),
        groups.len()
    );

    Ok(Configuration::new(subshells, groups))
}

/// Merge terms with identical (n, l), rejecting orbitals with l >= n
///
/// `terms` must be sorted.
pub fn merge_subshells(terms: &[OrbitalTerm]) -> Result<Vec<Subshell>> {
    let mut subshells: Vec<Subshell> = Vec::with_capacity(terms.len());

    for term in terms {
        if term.l as u64 + 1 > u64::from(term.n) {
            return Err(ConfigurationError::ImpossibleOrbital {
                n: term.n,
                l: term.l,
            });
        }

        match subshells.last_mut() {
            Some(last) if last.n == term.n && last.l == term.l => {
                last.electrons = last.electrons.saturating_add(term.electrons);
            }
            _ => subshells.push(Subshell {
                n: term.n,
                l: term.l,
                electrons: term.electrons,
            }),
        }
    }

    Ok(subshells)
}

/// Check sub-shell occupancy and merge ns with np into one screening group
///
/// Only individual sub-shells are bounded; a merged s/p group may hold up to
/// the sum of both capacities without a separate check.
pub fn merge_groups(subshells: &[Subshell]) -> Result<Vec<Group>> {
    let mut groups: Vec<Group> = Vec::with_capacity(subshells.len());

    for subshell in subshells {
        if subshell.electrons > subshell_capacity(subshell.l) {
            return Err(ConfigurationError::OverfullOrbital {
                n: subshell.n,
                l: subshell.l,
                electrons: subshell.electrons,
            });
        }

        match groups.last_mut() {
            Some(last) if last.n == subshell.n && last.l + subshell.l == 1 => {
                last.electrons += subshell.electrons;
            }
            _ => groups.push(Group::from(*subshell)),
        }
    }

    Ok(groups)
}
