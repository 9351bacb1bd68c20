/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Effective nuclear charge per Slater group

use super::errors::{Result, SlaterError};
use super::screening::ScreeningMatrix;
use crate::configuration::Configuration;

/// Screening constant σ of every group
///
/// σᵢ = Σ_{j<i} s(i,j)·Nⱼ + s(i,i)·(Nᵢ − 1): an electron is screened by all
/// inner electrons and by the other electrons of its own group.
///
/// The matrix must have one row per group, otherwise
/// [`SlaterError::GroupCountMismatch`] is returned.
pub fn screening_constants(
    configuration: &Configuration,
    matrix: &ScreeningMatrix,
) -> Result<Vec<f64>> {
    let groups = configuration.groups();
    if groups.len() != matrix.size() {
        return Err(SlaterError::GroupCountMismatch {
            expected: groups.len(),
            found: matrix.size(),
        });
    }

    Ok((0..groups.len())
        .map(|i| {
            let inner: f64 = (0..i)
                .map(|j| matrix.get(i, j) * f64::from(groups[j].electrons))
                .sum();
            inner + matrix.get(i, i) * (f64::from(groups[i].electrons) - 1.0)
        })
        .collect())
}

/// Effective nuclear charge Z − σ of every group
///
/// Fails with [`SlaterError::UnstableAnion`] when any charge is negative, and
/// with [`SlaterError::GroupCountMismatch`] when the matrix was built for a
/// different configuration.
pub fn effective_charges(
    atomic_number: u32,
    configuration: &Configuration,
    matrix: &ScreeningMatrix,
) -> Result<Vec<f64>> {
    let z = f64::from(atomic_number);
    let charges: Vec<f64> = screening_constants(configuration, matrix)?
        .into_iter()
        .map(|sigma| z - sigma)
        .collect();

    if let Some((group, &charge)) = charges.iter().enumerate().find(|&(_, &c)| c < 0.0) {
        return Err(SlaterError::UnstableAnion { group, charge });
    }

    Ok(charges)
}
