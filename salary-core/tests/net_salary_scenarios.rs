//! End-to-end scenarios against the public 2024 API.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salary_core::schedule::{DEDUCTIONS_2024, TAX_YEAR};
use salary_core::{IncomeTaxSchedule, NetSalaryError, SalaryBreakdown, net_salary, progressive_income_tax};

#[test]
fn test_zero_gross_salary() {
    let result = net_salary(dec!(0)).unwrap();

    assert_eq!(result.net_salary, dec!(0));
    assert_eq!(result.pension, dec!(0));
    assert_eq!(result.health_insurance, dec!(0));
    assert_eq!(result.pensioners_fund, dec!(0));
    assert_eq!(result.income_tax, dec!(0));
}

#[test]
fn test_one_million_gross_salary() {
    let result = net_salary(dec!(1000000)).unwrap();

    assert_eq!(
        result,
        SalaryBreakdown {
            gross_salary: dec!(1000000),
            net_salary: dec!(804526),
            pension: dec!(110000),
            health_insurance: dec!(30000),
            pensioners_fund: dec!(30000),
            income_tax: dec!(25474),
            taxable_income: dec!(469379.25),
        }
    );
}

#[test]
fn test_net_matches_gross_minus_deductions() {
    for gross in [dec!(750000), dec!(1500000), dec!(3000000), dec!(9000000)] {
        let result = net_salary(gross).unwrap();
        let difference = gross - result.total_deductions() - result.net_salary;

        // Each field is rounded on its own, so the parts may drift by a unit or two.
        assert!(
            difference.abs() <= dec!(2),
            "gross {gross}: components off by {difference}"
        );
    }
}

#[test]
fn test_contributions_are_capped() {
    let cap = DEDUCTIONS_2024.contribution_base_cap;
    // 2467787 * 0.17 = 419523.79, but each rounded part carries its own error.
    let capped_total = dec!(419523.79);

    for gross in [cap + dec!(1), dec!(5000000), dec!(50000000)] {
        let result = net_salary(gross).unwrap();
        let total = result.total_contributions();

        assert!(
            (total - capped_total).abs() <= dec!(2),
            "gross {gross}: contributions {total}"
        );
    }
}

#[test]
fn test_boundary_taxable_income_stays_in_lower_bracket() {
    let schedule = IncomeTaxSchedule::year_2024();

    for bracket in schedule.brackets().iter().filter(|b| !b.is_unbounded()) {
        let upper = bracket.upper_bound.unwrap();
        let expected = bracket.tax_for(upper).round_dp_with_strategy(
            0,
            rust_decimal::RoundingStrategy::MidpointNearestEven,
        );

        assert_eq!(progressive_income_tax(upper).unwrap(), expected);
        assert_eq!(schedule.bracket_for(upper), Some(bracket));
    }
}

#[test]
fn test_negative_gross_salary_rejected() {
    assert_eq!(
        net_salary(dec!(-0.01)),
        Err(NetSalaryError::NegativeGrossSalary(dec!(-0.01)))
    );
}

fn assert_net_never_decreases(
    from: Decimal,
    to: Decimal,
    step: Decimal,
) {
    let mut gross = from;
    let mut previous = net_salary(gross).unwrap().net_salary;

    while gross < to {
        gross += step;
        let net = net_salary(gross).unwrap().net_salary;
        assert!(net >= previous, "net fell from {previous} to {net} at gross {gross}");
        previous = net;
    }
}

#[test]
fn test_net_salary_monotonic_in_unit_steps() {
    // First bracket, where the tax rounds up about every twenty units of gross.
    assert_net_never_decreases(dec!(430000), dec!(450000), dec!(1));
    // Around the contribution cap.
    assert_net_never_decreases(dec!(2460000), dec!(2475000), dec!(1));
}

#[test]
fn test_net_salary_monotonic_across_bracket_boundaries() {
    let deductions = &*DEDUCTIONS_2024;
    let cap = deductions.contribution_base_cap;
    let keep_rate = Decimal::ONE - deductions.total_contribution_rate();

    for bracket in IncomeTaxSchedule::year_2024().brackets() {
        let Some(upper) = bracket.upper_bound else {
            continue;
        };
        // Gross salary whose taxable income lands on the bracket's upper bound.
        let net_before_tax = upper + deductions.monthly_tax_free_amount();
        let gross = if net_before_tax <= cap * keep_rate {
            net_before_tax / keep_rate
        } else {
            net_before_tax + cap * deductions.total_contribution_rate()
        };

        assert_net_never_decreases(gross - dec!(5), gross + dec!(5), dec!(0.01));
    }
}

#[test]
fn test_breakdown_serializes_with_field_names() {
    let result = net_salary(dec!(1000000)).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["net_salary"], serde_json::json!("804526"));
    assert_eq!(json["income_tax"], serde_json::json!("25474"));
}

#[test]
fn test_only_2024_supported() {
    assert_eq!(TAX_YEAR, 2024);
}
