//! Net-vs-gross salary curve sampling.
//!
//! Produces the series a chart of net salary against gross salary is drawn
//! from, plus the handful of points such a chart labels.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::{NetSalaryCalculator, NetSalaryError};

/// Gross salaries labelled on the default chart.
pub const ANNOTATED_GROSS_SALARIES: [Decimal; 5] = [
    dec!(300000),
    dec!(5000000),
    dec!(10000000),
    dec!(15000000),
    dec!(20000000),
];

/// Errors that can occur while sampling a salary curve.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    #[error("curve start must be non-negative, got {0}")]
    NegativeStart(Decimal),

    #[error("curve end {end} is below start {start}")]
    EndBeforeStart { start: Decimal, end: Decimal },

    #[error("curve needs at least one point")]
    NoPoints,

    #[error(transparent)]
    NetSalary(#[from] NetSalaryError),
}

/// Range and resolution of a sampled curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub start: Decimal,
    pub end: Decimal,
    pub points: usize,
}

impl CurveSpec {
    /// 500 points between 300,000 and 20,000,000 ARS.
    pub const DEFAULT: CurveSpec = CurveSpec {
        start: dec!(300000),
        end: dec!(20000000),
        points: 500,
    };

    /// # Errors
    ///
    /// Returns [`CurveError`] if `start` is negative, `end` is below `start`,
    /// or `points` is zero.
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.start < Decimal::ZERO {
            return Err(CurveError::NegativeStart(self.start));
        }
        if self.end < self.start {
            return Err(CurveError::EndBeforeStart {
                start: self.start,
                end: self.end,
            });
        }
        if self.points == 0 {
            return Err(CurveError::NoPoints);
        }
        Ok(())
    }
}

impl Default for CurveSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One sample of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub gross_salary: Decimal,
    pub net_salary: Decimal,
}

/// Returns `points` evenly spaced values from `start` to `end`, both included.
///
/// A single point yields `[start]`; zero points yield an empty vector.
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::curve::linspace;
///
/// assert_eq!(linspace(dec!(0), dec!(10), 3), vec![dec!(0), dec!(5), dec!(10)]);
/// ```
pub fn linspace(
    start: Decimal,
    end: Decimal,
    points: usize,
) -> Vec<Decimal> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let intervals = Decimal::from(points - 1);
            let step = (end - start) / intervals;
            (0..points)
                .map(|i| {
                    if i == points - 1 {
                        end
                    } else {
                        start + step * Decimal::from(i)
                    }
                })
                .collect()
        }
    }
}

/// Samples net salary over the range described by `spec`.
///
/// # Errors
///
/// Returns [`CurveError`] if `spec` is invalid or a calculation fails.
pub fn sample_curve(
    calculator: &NetSalaryCalculator<'_>,
    spec: &CurveSpec,
) -> Result<Vec<CurvePoint>, CurveError> {
    spec.validate()?;
    debug!(start = %spec.start, end = %spec.end, points = spec.points, "sampling salary curve");

    linspace(spec.start, spec.end, spec.points)
        .into_iter()
        .map(|gross_salary| point(calculator, gross_salary))
        .collect()
}

/// Net salary at each of [`ANNOTATED_GROSS_SALARIES`].
///
/// # Errors
///
/// Returns [`CurveError::NetSalary`] if a calculation fails.
pub fn annotate(calculator: &NetSalaryCalculator<'_>) -> Result<Vec<CurvePoint>, CurveError> {
    ANNOTATED_GROSS_SALARIES
        .iter()
        .map(|&gross_salary| point(calculator, gross_salary))
        .collect()
}

fn point(
    calculator: &NetSalaryCalculator<'_>,
    gross_salary: Decimal,
) -> Result<CurvePoint, CurveError> {
    let breakdown = calculator.calculate(gross_salary)?;
    Ok(CurvePoint {
        gross_salary,
        net_salary: breakdown.net_salary,
    })
}
