//! CSV input and output for salary calculations.
//!
//! - [`ScheduleLoader`] reads and writes income tax bracket tables.
//! - [`input`] reads gross salaries for batch calculation.
//! - [`report`] writes calculated breakdowns and sampled salary curves.

pub mod input;
pub mod report;
pub mod schedule;

use salary_core::IncomeTaxError;
use thiserror::Error;

pub use input::{SalaryInput, SalaryInputError, load_salaries};
pub use report::{write_breakdowns, write_curve};
pub use schedule::{ScheduleLoader, ScheduleRecord};

/// Errors that can occur when reading or writing salary data.
#[derive(Debug, Error)]
pub enum SalaryDataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected tax year {expected}, found {found}")]
    UnexpectedTaxYear { expected: i32, found: i32 },

    #[error("invalid schedule: {0}")]
    Schedule(#[from] IncomeTaxError),
}
