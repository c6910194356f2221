use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};

/// Two-column numeric table produced by the upstream data loader.
///
/// Column 0 is the independent variable (`r`), column 1 the dependent
/// variable (`gr`). Only these two columns exist; the loader contract
/// guarantees every row has both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairTable {
    rows: Vec<(f64, f64)>,
}

impl PairTable {
    /// Build a table from `(r, gr)` row pairs.
    pub fn from_rows(rows: Vec<(f64, f64)>) -> Self {
        Self { rows }
    }

    /// Build a table from two parallel column slices.
    ///
    /// Fails with [`TypeError::ColumnLengthMismatch`] if the slices differ
    /// in length.
    pub fn from_columns(r: &[f64], gr: &[f64]) -> Result<Self> {
        if r.len() != gr.len() {
            return Err(TypeError::ColumnLengthMismatch {
                r_len: r.len(),
                gr_len: gr.len(),
            });
        }
        Ok(Self {
            rows: r.iter().copied().zip(gr.iter().copied()).collect(),
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows as `(r, gr)` pairs.
    pub fn rows(&self) -> &[(f64, f64)] {
        &self.rows
    }

    /// Column 0: the independent variable.
    pub fn r(&self) -> Vec<f64> {
        self.rows.iter().map(|&(r, _)| r).collect()
    }

    /// Column 1: the dependent variable.
    pub fn gr(&self) -> Vec<f64> {
        self.rows.iter().map(|&(_, gr)| gr).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_exposes_columns() {
        let table = PairTable::from_rows(vec![(0.0, 1.5), (0.1, -2.0), (0.2, 0.25)]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.r(), vec![0.0, 0.1, 0.2]);
        assert_eq!(table.gr(), vec![1.5, -2.0, 0.25]);
    }

    #[test]
    fn from_columns_zips_rows() {
        let table = PairTable::from_columns(&[1.0, 2.0], &[10.0, 20.0]).unwrap();
        assert_eq!(table.rows(), &[(1.0, 10.0), (2.0, 20.0)]);
    }

    #[test]
    fn from_columns_rejects_length_mismatch() {
        let err = PairTable::from_columns(&[1.0, 2.0], &[10.0]).unwrap_err();
        assert!(matches!(
            err,
            TypeError::ColumnLengthMismatch { r_len: 2, gr_len: 1 }
        ));
    }

    #[test]
    fn empty_table() {
        let table = PairTable::from_rows(vec![]);
        assert!(table.is_empty());
        assert!(table.r().is_empty());
        assert!(table.gr().is_empty());
    }
}
