use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a set of deduction constants is internally inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeductionConfigError {
    #[error("contribution base cap must be positive, got {0}")]
    InvalidContributionBaseCap(Decimal),

    #[error("{name} rate must be between 0 and 1, got {rate}")]
    InvalidRate { name: &'static str, rate: Decimal },

    #[error("combined contribution rate must not exceed 1, got {0}")]
    CombinedRateTooHigh(Decimal),

    #[error("non-taxable floor must be non-negative, got {0}")]
    InvalidNonTaxableFloor(Decimal),

    #[error("special increased deduction must be non-negative, got {0}")]
    InvalidSpecialDeduction(Decimal),
}

/// Payroll withholding rates and income-tax deductions for one tax year.
///
/// The three contribution rates apply to the gross salary capped at
/// `contribution_base_cap`. The floor and the special deduction are
/// subtracted from the post-withholding salary to obtain taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionConstants {
    pub contribution_base_cap: Decimal,
    /// Retirement contribution ("jubilación").
    pub pension_rate: Decimal,
    /// Health-insurance contribution ("obra social").
    pub health_insurance_rate: Decimal,
    /// Pensioners' fund contribution ("PAMI").
    pub pensioners_fund_rate: Decimal,
    /// Monthly non-taxable minimum.
    pub non_taxable_floor: Decimal,
    /// Annual amount; one twelfth is deducted each month.
    pub special_increased_deduction_annual: Decimal,
}

impl DeductionConstants {
    pub fn monthly_special_deduction(&self) -> Decimal {
        self.special_increased_deduction_annual / Decimal::from(12)
    }

    /// Sum of the three withholding rates.
    pub fn total_contribution_rate(&self) -> Decimal {
        self.pension_rate + self.health_insurance_rate + self.pensioners_fund_rate
    }

    /// Total monthly deduction applied before the progressive schedule.
    pub fn monthly_tax_free_amount(&self) -> Decimal {
        self.non_taxable_floor + self.monthly_special_deduction()
    }

    /// Validates the constants.
    ///
    /// # Errors
    ///
    /// Returns [`DeductionConfigError`] if the cap is not positive, any rate
    /// lies outside `[0, 1]`, the rates sum past 1, or either deduction is
    /// negative.
    pub fn validate(&self) -> Result<(), DeductionConfigError> {
        if self.contribution_base_cap <= Decimal::ZERO {
            return Err(DeductionConfigError::InvalidContributionBaseCap(
                self.contribution_base_cap,
            ));
        }

        for (name, rate) in [
            ("pension", self.pension_rate),
            ("health insurance", self.health_insurance_rate),
            ("pensioners' fund", self.pensioners_fund_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(DeductionConfigError::InvalidRate { name, rate });
            }
        }

        let combined = self.total_contribution_rate();
        if combined > Decimal::ONE {
            return Err(DeductionConfigError::CombinedRateTooHigh(combined));
        }
        if self.non_taxable_floor < Decimal::ZERO {
            return Err(DeductionConfigError::InvalidNonTaxableFloor(
                self.non_taxable_floor,
            ));
        }
        if self.special_increased_deduction_annual < Decimal::ZERO {
            return Err(DeductionConfigError::InvalidSpecialDeduction(
                self.special_increased_deduction_annual,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn constants() -> DeductionConstants {
        DeductionConstants {
            contribution_base_cap: dec!(2467787),
            pension_rate: dec!(0.11),
            health_insurance_rate: dec!(0.03),
            pensioners_fund_rate: dec!(0.03),
            non_taxable_floor: dec!(257586.25),
            special_increased_deduction_annual: dec!(1236414),
        }
    }

    #[test]
    fn monthly_special_deduction_is_one_twelfth() {
        assert_eq!(constants().monthly_special_deduction(), dec!(103034.5));
    }

    #[test]
    fn total_contribution_rate_sums_all_three() {
        assert_eq!(constants().total_contribution_rate(), dec!(0.17));
    }

    #[test]
    fn monthly_tax_free_amount_adds_floor_and_special_deduction() {
        assert_eq!(constants().monthly_tax_free_amount(), dec!(360620.75));
    }

    #[test]
    fn validate_accepts_2024_values() {
        assert_eq!(constants().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_cap() {
        let config = DeductionConstants {
            contribution_base_cap: dec!(0),
            ..constants()
        };

        assert_eq!(
            config.validate(),
            Err(DeductionConfigError::InvalidContributionBaseCap(dec!(0)))
        );
    }

    #[test]
    fn validate_rejects_rate_above_one() {
        let config = DeductionConstants {
            health_insurance_rate: dec!(1.5),
            ..constants()
        };

        assert_eq!(
            config.validate(),
            Err(DeductionConfigError::InvalidRate {
                name: "health insurance",
                rate: dec!(1.5),
            })
        );
    }

    #[test]
    fn validate_rejects_combined_rate_above_one() {
        let config = DeductionConstants {
            pension_rate: dec!(0.5),
            health_insurance_rate: dec!(0.4),
            pensioners_fund_rate: dec!(0.3),
            ..constants()
        };

        assert_eq!(
            config.validate(),
            Err(DeductionConfigError::CombinedRateTooHigh(dec!(1.2)))
        );
    }

    #[test]
    fn validate_rejects_negative_floor() {
        let config = DeductionConstants {
            non_taxable_floor: dec!(-1),
            ..constants()
        };

        assert_eq!(
            config.validate(),
            Err(DeductionConfigError::InvalidNonTaxableFloor(dec!(-1)))
        );
    }
}
