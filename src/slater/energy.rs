/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Orbital energies from effective nuclear charges

use super::errors::{Result, SlaterError};
use crate::configuration::Configuration;
use crate::utils::constants::{E0, EFFECTIVE_PRINCIPAL_NUMBERS};

/// Effective principal quantum number n*, tabulated for n = 1..=6
pub fn effective_principal_number(n: u32) -> Option<f64> {
    let index = usize::try_from(n).ok()?.checked_sub(1)?;
    EFFECTIVE_PRINCIPAL_NUMBERS.get(index).copied()
}

/// Energy magnitude of every group and their sum, in eV
///
/// Each group contributes E0 · N · (Z_eff / n*)². The binding energy of the
/// configuration is the negative of the returned total. `charges` must hold
/// one effective charge per group.
pub fn energies(configuration: &Configuration, charges: &[f64]) -> Result<(Vec<f64>, f64)> {
    let groups = configuration.groups();
    if groups.len() != charges.len() {
        return Err(SlaterError::GroupCountMismatch {
            expected: groups.len(),
            found: charges.len(),
        });
    }

    let n_star = groups
        .iter()
        .map(|g| effective_principal_number(g.n).ok_or(SlaterError::UnsupportedShell(g.n)))
        .collect::<Result<Vec<f64>>>()?;

    let energies: Vec<f64> = groups
        .iter()
        .zip(charges)
        .zip(&n_star)
        .map(|((group, &charge), &nstar)| {
            E0 * f64::from(group.electrons) * (charge / nstar).powi(2)
        })
        .collect();
    let total = energies.iter().sum();

    Ok((energies, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::analyze;
    use approx::assert_relative_eq;

    #[test]
    fn test_effective_principal_numbers() {
        assert_eq!(effective_principal_number(1), Some(1.0));
        assert_eq!(effective_principal_number(4), Some(3.7));
        assert_eq!(effective_principal_number(6), Some(4.2));
        assert_eq!(effective_principal_number(0), None);
        assert_eq!(effective_principal_number(7), None);
    }

    #[test]
    fn test_hydrogen_energy() {
        let config = analyze("1s1").unwrap();
        let (energies, total) = energies(&config, &[1.0]).unwrap();
        assert_relative_eq!(energies[0], 13.6);
        assert_relative_eq!(total, 13.6);
    }

    #[test]
    fn test_total_is_sum() {
        let config = analyze("1s2 2s1").unwrap();
        let (energies, total) = energies(&config, &[2.7, 1.3]).unwrap();
        assert_relative_eq!(energies[0], 13.6 * 2.0 * 2.7 * 2.7, epsilon = 1e-10);
        assert_relative_eq!(energies[1], 13.6 * 0.65 * 0.65, epsilon = 1e-10);
        assert_relative_eq!(total, energies[0] + energies[1]);
    }

    #[test]
    fn test_n_star_for_outer_shells() {
        let config = analyze("5s1").unwrap();
        let (energies, _) = energies(&config, &[4.0]).unwrap();
        assert_relative_eq!(energies[0], 13.6, epsilon = 1e-12);
    }

    #[test]
    fn test_charges_must_cover_every_group() {
        let config = analyze("1s2 2s1").unwrap();
        assert_eq!(
            energies(&config, &[2.7]),
            Err(SlaterError::GroupCountMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            energies(&config, &[2.7, 1.3, 1.0]),
            Err(SlaterError::GroupCountMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_unsupported_shell() {
        let config = analyze("1s2 7s1").unwrap();
        assert_eq!(
            energies(&config, &[1.0, 1.0]),
            Err(SlaterError::UnsupportedShell(7))
        );
    }
}
