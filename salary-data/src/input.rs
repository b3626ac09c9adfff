//! CSV loader for gross salary input.
//!
//! ## CSV Format
//!
//! | Column | Required | Type | Notes |
//! |----------------|----------|---------|-----------------------------------|
//! | `gross_salary` | yes | decimal | Non-negative, e.g. `1500000.00` |
//! | `label` | no | string | Free text carried into the output |
//!
//! ```csv
//! label,gross_salary
//! junior,850000
//! senior,3200000.50
//! ```

use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    label: Option<String>,
    gross_salary: Decimal,
}

/// One gross salary to calculate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryInput {
    pub label: Option<String>,
    pub gross_salary: Decimal,
}

/// Errors that can occur while loading salary input rows.
#[derive(Debug, Error)]
pub enum SalaryInputError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, the header is row 0.
    #[error("negative gross salary {gross_salary} on row {row}")]
    NegativeGrossSalary { gross_salary: Decimal, row: usize },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<SalaryInput, SalaryInputError> {
    if row.gross_salary < Decimal::ZERO {
        return Err(SalaryInputError::NegativeGrossSalary {
            gross_salary: row.gross_salary,
            row: row_number,
        });
    }

    Ok(SalaryInput {
        label: row.label.filter(|l| !l.is_empty()),
        gross_salary: row.gross_salary,
    })
}

/// Parse salary rows from a CSV reader, in file order.
///
/// # Errors
///
/// * [`SalaryInputError::Parse`] if the CSV is structurally invalid or a
///   gross salary cannot be read as a decimal.
/// * [`SalaryInputError::NegativeGrossSalary`] if any row is negative.
pub fn load_salaries<R: Read>(reader: R) -> Result<Vec<SalaryInput>, SalaryInputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}
