//! CSV measurement tables.
//!
//! A measurement file has a header row of column labels followed by numeric
//! records, one sample per column. Reading transposes into a [`Table`]:
//! each labeled file column becomes a contiguous series.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use trazo_analysis::Table;

use crate::error::IoError;

/// Read one measurement CSV into a [`Table`].
///
/// Fails on unreadable files, CSV-level malformation (uneven record
/// lengths), non-numeric data fields, duplicate labels and files with no
/// header record.
pub fn read_table(path: impl AsRef<Path>) -> Result<Table, IoError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IoError::read_file(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record.map_err(|source| IoError::Csv {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            return Err(IoError::Empty {
                path: path.to_path_buf(),
            });
        }
    };

    let labels: Vec<String> = header.iter().map(str::to_string).collect();
    let mut seen = HashSet::new();
    for label in &labels {
        if !seen.insert(label.as_str()) {
            return Err(IoError::DuplicateLabel {
                path: path.to_path_buf(),
                label: label.clone(),
            });
        }
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); labels.len()];
    for (index, record) in records.enumerate() {
        let record = record.map_err(|source| IoError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        for (field, text) in record.iter().enumerate() {
            let value: f64 = text.parse().map_err(|_| IoError::NumericField {
                path: path.to_path_buf(),
                record: index + 1,
                field,
                text: text.to_string(),
            })?;
            columns[field].push(value);
        }
    }

    tracing::debug!(
        path = %path.display(),
        columns = labels.len(),
        "read measurement table"
    );

    Table::new(labels, columns).map_err(|source| IoError::Shape {
        path: path.to_path_buf(),
        source,
    })
}
