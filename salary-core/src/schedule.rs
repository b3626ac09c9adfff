//! Compiled-in 2024 tax schedule and deduction constants.
//!
//! Source: AFIP "Ganancias - Escala art. 94", personas humanas, 2024.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::IncomeTaxSchedule;
use crate::{DeductionConstants, TaxBracket};

/// The only tax year this crate supports.
pub const TAX_YEAR: i32 = 2024;

/// Process-wide 2024 income tax schedule.
pub static SCHEDULE_2024: LazyLock<IncomeTaxSchedule> =
    LazyLock::new(|| IncomeTaxSchedule::from_trusted(brackets_2024()));

/// Process-wide 2024 deduction constants.
pub static DEDUCTIONS_2024: LazyLock<DeductionConstants> = LazyLock::new(deductions_2024);

fn bracket(
    lower_bound: Decimal,
    upper_bound: Option<Decimal>,
    rate: Decimal,
    base_tax: Decimal,
) -> TaxBracket {
    TaxBracket {
        lower_bound,
        upper_bound,
        rate,
        base_tax,
    }
}

/// The nine 2024 monthly brackets, ordered by lower bound.
pub fn brackets_2024() -> Vec<TaxBracket> {
    vec![
        bracket(dec!(0), Some(dec!(419253.95)), dec!(0.05), dec!(0)),
        bracket(dec!(419253.95), Some(dec!(838507.92)), dec!(0.09), dec!(20962.70)),
        bracket(dec!(838507.92), Some(dec!(1257761.87)), dec!(0.12), dec!(58695.55)),
        bracket(dec!(1257761.87), Some(dec!(1677015.87)), dec!(0.15), dec!(109006.03)),
        bracket(dec!(1677015.87), Some(dec!(2515523.74)), dec!(0.19), dec!(171894.13)),
        bracket(dec!(2515523.74), Some(dec!(3354031.63)), dec!(0.23), dec!(331210.62)),
        bracket(dec!(3354031.63), Some(dec!(5031047.45)), dec!(0.27), dec!(524067.44)),
        bracket(dec!(5031047.45), Some(dec!(6708063.39)), dec!(0.31), dec!(976861.71)),
        bracket(dec!(6708063.39), None, dec!(0.35), dec!(1496736.65)),
    ]
}

/// 2024 withholding rates, contribution cap and monthly deductions.
pub fn deductions_2024() -> DeductionConstants {
    DeductionConstants {
        contribution_base_cap: dec!(2467787),
        pension_rate: dec!(0.11),
        health_insurance_rate: dec!(0.03),
        pensioners_fund_rate: dec!(0.03),
        non_taxable_floor: dec!(257586.25),
        special_increased_deduction_annual: dec!(1236414),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn compiled_schedule_passes_validation() {
        let validated = IncomeTaxSchedule::new(brackets_2024()).unwrap();

        assert_eq!(&validated, &*SCHEDULE_2024);
    }

    #[test]
    fn compiled_deductions_pass_validation() {
        assert_eq!(DEDUCTIONS_2024.validate(), Ok(()));
    }

    #[test]
    fn schedule_has_nine_brackets_with_open_top() {
        let brackets = brackets_2024();

        assert_eq!(brackets.len(), 9);
        assert_eq!(brackets[0].lower_bound, dec!(0));
        assert!(brackets[8].is_unbounded());
    }
}
