//! Header-labeled numeric tables.
//!
//! A [`Table`] is the in-memory form of one measurement CSV after transposing:
//! column 0 is the independent axis (time index or normalised frequency) and
//! columns 1.. are dependent series, one per labeled trial or configuration.

use crate::error::AnalysisError;

/// A header-labeled 2-D numeric array: one axis column plus trial columns.
///
/// Stored column-major relative to the source file, i.e. each labeled column
/// is a contiguous `Vec<f64>` of samples. All columns have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    labels: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    /// Build a table from parallel labels and columns.
    ///
    /// Columns must be non-empty as a set (the axis must exist) and all the
    /// same length. Label uniqueness is a property of well-formed input files
    /// and is enforced by the CSV reader, not here: derived tables (nearest
    /// selection with repeated targets) may legitimately repeat labels.
    pub fn new(labels: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self, AnalysisError> {
        if labels.is_empty() || columns.is_empty() {
            return Err(AnalysisError::EmptyTable);
        }
        if labels.len() != columns.len() {
            return Err(AnalysisError::LabelCountMismatch {
                labels: labels.len(),
                rows: columns.len(),
            });
        }
        let expected = columns[0].len();
        for (label, column) in labels.iter().zip(&columns) {
            if column.len() != expected {
                return Err(AnalysisError::RaggedRow {
                    label: label.clone(),
                    len: column.len(),
                    expected,
                });
            }
        }
        Ok(Table { labels, columns })
    }

    /// Column labels, axis label first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Total number of columns, including the axis.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of trial columns (everything except the axis).
    pub fn trial_count(&self) -> usize {
        self.columns.len() - 1
    }

    /// Number of samples per column.
    pub fn bin_count(&self) -> usize {
        self.columns[0].len()
    }

    /// The independent-variable column.
    pub fn axis(&self) -> &[f64] {
        &self.columns[0]
    }

    /// A column by index (0 is the axis).
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Iterate over the trial columns (indices 1..).
    pub fn trials(&self) -> impl Iterator<Item = &[f64]> {
        self.columns.iter().skip(1).map(Vec::as_slice)
    }

    /// A new table keeping the axis plus the given columns, in the given order.
    ///
    /// Indices refer to this table's columns; repeats are allowed. Used both
    /// by nearest selection and to carve statistic rows out of a wider table.
    pub fn restricted(&self, indices: &[usize]) -> Result<Table, AnalysisError> {
        let mut labels = Vec::with_capacity(indices.len() + 1);
        let mut columns = Vec::with_capacity(indices.len() + 1);
        labels.push(self.labels[0].clone());
        columns.push(self.columns[0].clone());
        for &index in indices {
            let column = self.column(index).ok_or(AnalysisError::ColumnOutOfRange {
                index,
                available: self.column_count(),
            })?;
            labels.push(self.labels[index].clone());
            columns.push(column.to_vec());
        }
        Ok(Table { labels, columns })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn new_accepts_equal_length_columns() {
        let table = Table::new(
            labels(&["freq", "0.1", "0.2"]),
            vec![vec![0.0, 0.5], vec![1.0, 2.0], vec![3.0, 4.0]],
        )
        .unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.trial_count(), 2);
        assert_eq!(table.bin_count(), 2);
        assert_eq!(table.axis(), &[0.0, 0.5]);
    }

    #[test]
    fn new_rejects_ragged_columns() {
        let err = Table::new(
            labels(&["freq", "0.1"]),
            vec![vec![0.0, 0.5], vec![1.0]],
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::RaggedRow { ref label, len: 1, expected: 2 } if label == "0.1"));
    }

    #[test]
    fn new_rejects_label_count_mismatch() {
        let err = Table::new(labels(&["freq"]), vec![vec![0.0], vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::LabelCountMismatch { labels: 1, rows: 2 }
        ));
    }

    #[test]
    fn new_rejects_empty_table() {
        let err = Table::new(Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyTable));
    }

    #[test]
    fn restricted_keeps_axis_and_requested_order() {
        let table = Table::new(
            labels(&["freq", "a", "b", "c"]),
            vec![
                vec![0.0, 1.0],
                vec![10.0, 11.0],
                vec![20.0, 21.0],
                vec![30.0, 31.0],
            ],
        )
        .unwrap();

        let narrow = table.restricted(&[3, 1, 3]).unwrap();
        assert_eq!(narrow.labels(), &["freq", "c", "a", "c"]);
        assert_eq!(narrow.column(1).unwrap(), &[30.0, 31.0]);
        assert_eq!(narrow.column(2).unwrap(), &[10.0, 11.0]);
    }

    #[test]
    fn restricted_rejects_out_of_range_index() {
        let table = Table::new(
            labels(&["freq", "a"]),
            vec![vec![0.0], vec![1.0]],
        )
        .unwrap();
        assert!(table.restricted(&[2]).is_err());
    }

    #[test]
    fn trials_skips_the_axis() {
        let table = Table::new(
            labels(&["t", "x", "y"]),
            vec![vec![0.0], vec![1.0], vec![2.0]],
        )
        .unwrap();
        let trials: Vec<&[f64]> = table.trials().collect();
        assert_eq!(trials, vec![&[1.0][..], &[2.0][..]]);
    }
}
