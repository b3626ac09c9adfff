//! Net monthly salary calculation.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Contribution base: gross salary capped at `contribution_base_cap` |
//! | 2    | Pension (11%), health insurance (3%) and PAMI (3%) on the base |
//! | 3    | Net before tax: gross minus the three contributions |
//! | 4    | Taxable income: net before tax minus the non-taxable floor and one twelfth of the special deduction, floored at 0 |
//! | 5    | Income tax from the progressive schedule |
//! | 6    | Net salary: net before tax minus income tax |
//! | 7    | Every output figure rounded to whole units from its own unrounded value |
//!
//! Salary above the cap is exempt from the contributions but not from income
//! tax, which is computed on the uncapped post-withholding amount.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::calculations::NetSalaryCalculator;
//!
//! let calculator = NetSalaryCalculator::year_2024();
//! let result = calculator.calculate(dec!(1000000)).unwrap();
//!
//! assert_eq!(result.pension, dec!(110000));
//! assert_eq!(result.health_insurance, dec!(30000));
//! assert_eq!(result.pensioners_fund, dec!(30000));
//! assert_eq!(result.income_tax, dec!(25474));
//! assert_eq!(result.net_salary, dec!(804526));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::IncomeTaxSchedule;
use crate::calculations::common::{max, min, round_to_unit};
use crate::calculations::income_tax::IncomeTaxError;
use crate::schedule::DEDUCTIONS_2024;
use crate::{DeductionConfigError, DeductionConstants, SalaryBreakdown};

/// Errors that can occur during net salary calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetSalaryError {
    /// Gross salary was negative.
    #[error("gross salary must be non-negative, got {0}")]
    NegativeGrossSalary(Decimal),

    /// The deduction constants failed validation.
    #[error("invalid deduction constants: {0}")]
    InvalidDeductions(#[from] DeductionConfigError),

    /// The income tax step failed.
    #[error("income tax calculation failed: {0}")]
    IncomeTax(#[from] IncomeTaxError),
}

/// Unrounded withholdings on a single gross salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Contributions {
    pension: Decimal,
    health_insurance: Decimal,
    pensioners_fund: Decimal,
}

impl Contributions {
    fn total(&self) -> Decimal {
        self.pension + self.health_insurance + self.pensioners_fund
    }
}

/// Calculator pairing an income tax schedule with deduction constants.
#[derive(Debug, Clone, Copy)]
pub struct NetSalaryCalculator<'a> {
    schedule: &'a IncomeTaxSchedule,
    deductions: &'a DeductionConstants,
}

impl<'a> NetSalaryCalculator<'a> {
    /// Creates a calculator from a schedule and a set of deduction constants.
    ///
    /// # Errors
    ///
    /// Returns [`NetSalaryError::InvalidDeductions`] if the constants fail
    /// [`DeductionConstants::validate`].
    pub fn new(
        schedule: &'a IncomeTaxSchedule,
        deductions: &'a DeductionConstants,
    ) -> Result<Self, NetSalaryError> {
        deductions.validate()?;
        Ok(Self {
            schedule,
            deductions,
        })
    }

    pub fn schedule(&self) -> &'a IncomeTaxSchedule {
        self.schedule
    }

    pub fn deductions(&self) -> &'a DeductionConstants {
        self.deductions
    }

    /// Calculates the net salary and its deductions for `gross_salary`.
    ///
    /// # Errors
    ///
    /// Returns [`NetSalaryError::NegativeGrossSalary`] if `gross_salary` is
    /// negative. Input validation belongs to the caller; the calculator
    /// refuses negatives rather than clamping them.
    pub fn calculate(
        &self,
        gross_salary: Decimal,
    ) -> Result<SalaryBreakdown, NetSalaryError> {
        if gross_salary < Decimal::ZERO {
            return Err(NetSalaryError::NegativeGrossSalary(gross_salary));
        }
        if gross_salary.is_zero() {
            return Ok(SalaryBreakdown::zero());
        }

        let contribution_base = self.contribution_base(gross_salary);
        let contributions = self.contributions(contribution_base);
        let net_before_tax = gross_salary - contributions.total();
        let taxable_income = self.taxable_income(net_before_tax);
        // Net and tax are each rounded from this unrounded tax.
        let income_tax = self.schedule.unrounded_tax(taxable_income)?;
        let net_salary = net_before_tax - income_tax;

        debug!(
            %gross_salary,
            %contribution_base,
            %net_before_tax,
            %taxable_income,
            %income_tax,
            "calculated net salary"
        );

        Ok(SalaryBreakdown {
            gross_salary,
            net_salary: round_to_unit(net_salary),
            pension: round_to_unit(contributions.pension),
            health_insurance: round_to_unit(contributions.health_insurance),
            pensioners_fund: round_to_unit(contributions.pensioners_fund),
            income_tax: round_to_unit(income_tax),
            taxable_income,
        })
    }

    /// Gross salary capped at the contribution base maximum.
    fn contribution_base(
        &self,
        gross_salary: Decimal,
    ) -> Decimal {
        min(gross_salary, self.deductions.contribution_base_cap)
    }

    fn contributions(
        &self,
        contribution_base: Decimal,
    ) -> Contributions {
        Contributions {
            pension: contribution_base * self.deductions.pension_rate,
            health_insurance: contribution_base * self.deductions.health_insurance_rate,
            pensioners_fund: contribution_base * self.deductions.pensioners_fund_rate,
        }
    }

    /// Income subject to the progressive schedule, never below zero.
    fn taxable_income(
        &self,
        net_before_tax: Decimal,
    ) -> Decimal {
        max(
            net_before_tax - self.deductions.monthly_tax_free_amount(),
            Decimal::ZERO,
        )
    }
}

impl NetSalaryCalculator<'static> {
    /// Calculator for the 2024 tax year.
    pub fn year_2024() -> Self {
        Self {
            schedule: IncomeTaxSchedule::year_2024(),
            deductions: &DEDUCTIONS_2024,
        }
    }
}
