//! Progressive income tax ("Impuesto a las Ganancias") lookup.
//!
//! The schedule is a table of contiguous brackets, each carrying the tax
//! already accumulated below it, so the tax on any income is a single
//! bracket lookup followed by one multiply-add:
//!
//! ```text
//! tax = (income - bracket.lower_bound) * bracket.rate + bracket.base_tax
//! ```
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::calculations::IncomeTaxSchedule;
//!
//! let schedule = IncomeTaxSchedule::year_2024();
//!
//! assert_eq!(schedule.progressive_income_tax(dec!(0)).unwrap(), dec!(0));
//! assert_eq!(schedule.progressive_income_tax(dec!(469379.25)).unwrap(), dec!(25474));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::trace;

use crate::TaxBracket;
use crate::calculations::common::round_to_unit;
use crate::schedule::SCHEDULE_2024;

/// Largest gap tolerated between a bracket's published base tax and the tax
/// accumulated by the bracket below it. The published table is rounded to
/// cents at every step.
const BASE_TAX_TOLERANCE: Decimal = dec!(0.01);

/// Errors that can occur while building or evaluating an income tax schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncomeTaxError {
    /// No tax brackets were provided.
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    /// The first bracket must start at zero.
    #[error("first bracket must start at 0, got {0}")]
    FirstBracketNotAtZero(Decimal),

    /// A bracket does not start where the previous one ends.
    #[error("bracket {index} starts at {lower_bound} but the previous bracket ends at {previous_upper}")]
    NonContiguousBrackets {
        index: usize,
        lower_bound: Decimal,
        previous_upper: Decimal,
    },

    /// A bracket other than the last one has no upper bound.
    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeLast(usize),

    /// The last bracket must be unbounded.
    #[error("last bracket must be unbounded")]
    LastBracketBounded,

    /// A bracket's upper bound is not above its lower bound.
    #[error("bracket {0} has an upper bound not above its lower bound")]
    EmptyBracket(usize),

    /// A marginal rate lies outside `[0, 1]`.
    #[error("bracket {index} has rate {rate}, expected a value between 0 and 1")]
    InvalidRate { index: usize, rate: Decimal },

    /// A bracket's base tax disagrees with the tax accumulated below it.
    #[error("bracket {index} has base tax {base_tax}, expected {expected}")]
    BaseTaxMismatch {
        index: usize,
        base_tax: Decimal,
        expected: Decimal,
    },

    /// Taxable income was negative.
    #[error("taxable income must be non-negative, got {0}")]
    NegativeIncome(Decimal),

    /// No bracket matched the given taxable income.
    #[error("no tax bracket found for taxable income {0}")]
    NoMatchingBracket(Decimal),
}

/// A validated, ordered progressive tax schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeTaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl IncomeTaxSchedule {
    /// Builds a schedule from brackets ordered by `lower_bound`.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeTaxError`] if the table is empty, does not start at 0,
    /// has gaps or overlaps, is not open-ended at the top, carries a rate
    /// outside `[0, 1]`, or has a base tax that is not the integral of the
    /// brackets below it.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, IncomeTaxError> {
        let first = brackets.first().ok_or(IncomeTaxError::NoTaxBrackets)?;
        if first.lower_bound != Decimal::ZERO {
            return Err(IncomeTaxError::FirstBracketNotAtZero(first.lower_bound));
        }

        let last_index = brackets.len() - 1;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(IncomeTaxError::InvalidRate {
                    index,
                    rate: bracket.rate,
                });
            }

            match bracket.upper_bound {
                None if index != last_index => {
                    return Err(IncomeTaxError::UnboundedBeforeLast(index));
                }
                Some(_) if index == last_index => {
                    return Err(IncomeTaxError::LastBracketBounded);
                }
                Some(upper) if upper <= bracket.lower_bound => {
                    return Err(IncomeTaxError::EmptyBracket(index));
                }
                _ => {}
            }

            if index == 0 {
                if bracket.base_tax != Decimal::ZERO {
                    return Err(IncomeTaxError::BaseTaxMismatch {
                        index,
                        base_tax: bracket.base_tax,
                        expected: Decimal::ZERO,
                    });
                }
                continue;
            }

            let previous = &brackets[index - 1];
            let (Some(previous_upper), Some(expected)) =
                (previous.upper_bound, previous.tax_at_upper_bound())
            else {
                return Err(IncomeTaxError::UnboundedBeforeLast(index - 1));
            };
            if bracket.lower_bound != previous_upper {
                return Err(IncomeTaxError::NonContiguousBrackets {
                    index,
                    lower_bound: bracket.lower_bound,
                    previous_upper,
                });
            }

            if (bracket.base_tax - expected).abs() > BASE_TAX_TOLERANCE {
                return Err(IncomeTaxError::BaseTaxMismatch {
                    index,
                    base_tax: bracket.base_tax,
                    expected,
                });
            }
        }

        Ok(Self { brackets })
    }

    /// Wraps a bracket table without validating it. Reserved for the
    /// compiled-in schedules, whose validity is covered by tests.
    pub(crate) fn from_trusted(brackets: Vec<TaxBracket>) -> Self {
        Self { brackets }
    }

    /// The validated 2024 schedule, built once per process.
    pub fn year_2024() -> &'static Self {
        &SCHEDULE_2024
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the bracket whose range `(lower_bound, upper_bound]` contains
    /// `income`, or `None` for zero and negative incomes.
    pub fn bracket_for(
        &self,
        income: Decimal,
    ) -> Option<&TaxBracket> {
        self.brackets.iter().find(|b| b.contains(income))
    }

    /// Marginal rate applied to the next unit of `income`.
    ///
    /// Zero income has no bracket and reports a marginal rate of zero.
    pub fn marginal_rate(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.bracket_for(income)
            .map_or(Decimal::ZERO, |bracket| bracket.rate)
    }

    /// Calculates income tax owed on `taxable_income`, rounded to whole units.
    ///
    /// Boundary values are taxed by the bracket that ends at that boundary.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeTaxError::NegativeIncome`] for negative input and
    /// [`IncomeTaxError::NoMatchingBracket`] if no bracket covers the value,
    /// which a validated schedule never produces.
    pub fn progressive_income_tax(
        &self,
        taxable_income: Decimal,
    ) -> Result<Decimal, IncomeTaxError> {
        self.unrounded_tax(taxable_income).map(round_to_unit)
    }

    /// Tax owed on `taxable_income` at full precision. Callers deriving other
    /// figures from the tax must round those from this value.
    pub(crate) fn unrounded_tax(
        &self,
        taxable_income: Decimal,
    ) -> Result<Decimal, IncomeTaxError> {
        if taxable_income < Decimal::ZERO {
            return Err(IncomeTaxError::NegativeIncome(taxable_income));
        }
        if taxable_income.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let bracket = self
            .bracket_for(taxable_income)
            .ok_or(IncomeTaxError::NoMatchingBracket(taxable_income))?;

        let tax = bracket.tax_for(taxable_income);
        trace!(
            %taxable_income,
            lower_bound = %bracket.lower_bound,
            rate = %bracket.rate,
            %tax,
            "matched income tax bracket"
        );

        Ok(tax)
    }
}
