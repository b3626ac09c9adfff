use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a net salary calculation.
///
/// Every monetary field except `gross_salary` and `taxable_income` is rounded
/// to whole currency units, each from its own unrounded value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Gross monthly salary as supplied by the caller.
    pub gross_salary: Decimal,

    /// Take-home pay after withholdings and income tax.
    pub net_salary: Decimal,

    /// Retirement contribution.
    pub pension: Decimal,

    /// Health-insurance contribution.
    pub health_insurance: Decimal,

    /// Pensioners' fund (PAMI) contribution.
    pub pensioners_fund: Decimal,

    /// Income tax withheld for the month.
    pub income_tax: Decimal,

    /// Income subject to the progressive schedule, unrounded.
    pub taxable_income: Decimal,
}

impl SalaryBreakdown {
    /// A breakdown where every figure is zero.
    pub fn zero() -> Self {
        Self {
            gross_salary: Decimal::ZERO,
            net_salary: Decimal::ZERO,
            pension: Decimal::ZERO,
            health_insurance: Decimal::ZERO,
            pensioners_fund: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            taxable_income: Decimal::ZERO,
        }
    }

    /// Sum of the three rounded withholdings.
    pub fn total_contributions(&self) -> Decimal {
        self.pension + self.health_insurance + self.pensioners_fund
    }

    /// Withholdings plus income tax.
    pub fn total_deductions(&self) -> Decimal {
        self.total_contributions() + self.income_tax
    }
}
