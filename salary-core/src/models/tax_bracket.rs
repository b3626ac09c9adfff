use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One segment of the progressive income-tax schedule.
///
/// A bracket covers the half-open range `(lower_bound, upper_bound]`. An
/// `upper_bound` of `None` marks the open-ended top bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    /// Tax accumulated by every lower bracket, evaluated at `lower_bound`.
    pub base_tax: Decimal,
}

impl TaxBracket {
    /// Returns `true` when `income` falls in `(lower_bound, upper_bound]`.
    ///
    /// An income exactly on a boundary belongs to the bracket that ends there,
    /// never to the one that starts there.
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        income > self.lower_bound && self.upper_bound.is_none_or(|upper| income <= upper)
    }

    /// Unrounded tax owed on `income` under this bracket's formula.
    pub fn tax_for(
        &self,
        income: Decimal,
    ) -> Decimal {
        (income - self.lower_bound) * self.rate + self.base_tax
    }

    /// Tax accumulated at the top of this bracket, or `None` when unbounded.
    pub fn tax_at_upper_bound(&self) -> Option<Decimal> {
        self.upper_bound.map(|upper| self.tax_for(upper))
    }

    pub fn is_unbounded(&self) -> bool {
        self.upper_bound.is_none()
    }
}
