//! Net monthly salary engine for Argentina, tax year 2024.
//!
//! Maps a gross monthly salary to the payroll withholdings (pension, health
//! insurance, PAMI), the progressive income tax and the resulting net salary.
//! Every function is pure; the schedule and constants are read-only statics.

pub mod calculations;
pub mod curve;
pub mod models;
pub mod schedule;

use rust_decimal::Decimal;

pub use calculations::{IncomeTaxError, IncomeTaxSchedule, NetSalaryCalculator, NetSalaryError};
pub use models::*;

/// Income tax owed on `taxable_income` under the 2024 schedule.
///
/// # Errors
///
/// Returns [`IncomeTaxError::NegativeIncome`] for negative input.
pub fn progressive_income_tax(taxable_income: Decimal) -> Result<Decimal, IncomeTaxError> {
    IncomeTaxSchedule::year_2024().progressive_income_tax(taxable_income)
}

/// Net salary breakdown for `gross_salary` under the 2024 rules.
///
/// # Errors
///
/// Returns [`NetSalaryError::NegativeGrossSalary`] for negative input.
pub fn net_salary(gross_salary: Decimal) -> Result<SalaryBreakdown, NetSalaryError> {
    NetSalaryCalculator::year_2024().calculate(gross_salary)
}
