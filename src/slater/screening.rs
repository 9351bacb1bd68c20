/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Screening coefficient matrix between Slater groups
//!
//! Row `i` holds the coefficients with which the electrons of each group `j`
//! screen an electron of group `i`. Outer groups never screen inner ones, so
//! the matrix is lower-triangular.

use crate::configuration::Configuration;
use crate::utils::constants::{
    FULL_SCREENING, INNER_SHELL_REACH, INNER_SHELL_SCREENING, SAME_GROUP_SCREENING,
    SAME_GROUP_SCREENING_1S,
};
use log::trace;
use ndarray::Array2;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Lower-triangular matrix of screening coefficients
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningMatrix {
    coefficients: Array2<f64>,
}

impl ScreeningMatrix {
    /// Number of groups (rows and columns)
    pub fn size(&self) -> usize {
        self.coefficients.nrows()
    }

    /// Coefficient with which group `j` screens group `i`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.coefficients[[i, j]]
    }

    /// Rows as nested vectors
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.coefficients
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Serialize for ScreeningMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for row in self.coefficients.rows() {
            seq.serialize_element(&row.to_vec())?;
        }
        seq.end()
    }
}

/// Build the screening matrix for a grouped configuration
///
/// * diagonal: 0.35, or 0.30 when the first group is 1s
/// * below the diagonal: 1.00, except 0.85 where an s/p group is screened by
///   a group of the shell directly below it at most three groups back
/// * above the diagonal: 0.00
pub fn build_matrix(configuration: &Configuration) -> ScreeningMatrix {
    let groups = configuration.groups();
    let size = groups.len();

    let mut coefficients =
        Array2::from_shape_fn((size, size), |(i, j)| if j <= i { FULL_SCREENING } else { 0.0 });

    for i in 0..size {
        coefficients[[i, i]] = SAME_GROUP_SCREENING;
    }
    if let Some(first) = groups.first() {
        if first.n == 1 && first.l == 0 {
            coefficients[[0, 0]] = SAME_GROUP_SCREENING_1S;
        }
    }

    for distance in 1..=INNER_SHELL_REACH {
        for i in distance..size {
            let (inner, outer) = (&groups[i - distance], &groups[i]);
            if outer.is_sp() && inner.n + 1 == outer.n {
                coefficients[[i, i - distance]] = INNER_SHELL_SCREENING;
            }
        }
    }

    trace!("Screening matrix:\n{:?}", coefficients);
    ScreeningMatrix { coefficients }
}
