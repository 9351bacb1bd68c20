/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Expansion of noble-gas shorthand such as `"[Ne] 3s2 3p1"`

use super::errors::{ConfigurationError, Result};
use crate::atoms::database;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Lookup of reference configurations by element symbol
pub trait ReferenceTable {
    /// Reference configuration of `symbol`, or `None` for an unknown symbol
    fn reference(&self, symbol: &str) -> Option<&str>;
}

/// The built-in ground-state configurations of elements 1 to 118
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundStateTable;

impl ReferenceTable for GroundStateTable {
    fn reference(&self, symbol: &str) -> Option<&str> {
        database::atomic_number(symbol).and_then(database::ground_state_configuration)
    }
}

impl ReferenceTable for HashMap<String, String> {
    fn reference(&self, symbol: &str) -> Option<&str> {
        self.get(symbol).map(String::as_str)
    }
}

impl<T: ReferenceTable + ?Sized> ReferenceTable for &T {
    fn reference(&self, symbol: &str) -> Option<&str> {
        (**self).reference(symbol)
    }
}

/// Symbol inside a leading `[Symbol]` token
fn bracketed_symbol(token: &str) -> Option<&str> {
    token.strip_prefix('[')?.strip_suffix(']')
}

/// Replace a leading bracketed element with its reference configuration
///
/// Expansion repeats until the first token is no longer a known bracketed
/// symbol. An unknown symbol is left in place. Tokens are re-joined with
/// single spaces whenever an expansion happens.
pub fn expand<T: ReferenceTable + ?Sized>(configuration: &str, table: &T) -> Result<String> {
    let mut tokens: Vec<String> = configuration
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let mut visited: HashSet<String> = HashSet::new();
    let mut expanded = false;

    loop {
        let Some(first) = tokens.first() else {
            break;
        };
        let Some(symbol) = bracketed_symbol(first) else {
            break;
        };
        let Some(reference) = table.reference(symbol) else {
            debug!("Leaving unknown core [{}] unexpanded", symbol);
            break;
        };

        if !visited.insert(symbol.to_string()) {
            return Err(ConfigurationError::CyclicExpansion(symbol.to_string()));
        }

        let replacement: Vec<String> = reference.split_whitespace().map(str::to_string).collect();
        tokens.splice(0..1, replacement);
        expanded = true;
    }

    if expanded {
        Ok(tokens.join(" "))
    } else {
        Ok(configuration.to_string())
    }
}
