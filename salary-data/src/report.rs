use std::io::Write;

use rust_decimal::Decimal;
use salary_core::SalaryBreakdown;
use salary_core::curve::CurvePoint;
use serde::Serialize;

use crate::SalaryDataError;

/// CSV row for one calculated salary.
#[derive(Debug, Serialize)]
struct BreakdownRecord<'a> {
    label: Option<&'a str>,
    gross_salary: Decimal,
    pension: Decimal,
    health_insurance: Decimal,
    pensioners_fund: Decimal,
    taxable_income: Decimal,
    income_tax: Decimal,
    net_salary: Decimal,
}

impl<'a> BreakdownRecord<'a> {
    fn new(
        label: Option<&'a str>,
        breakdown: &SalaryBreakdown,
    ) -> Self {
        BreakdownRecord {
            label,
            gross_salary: breakdown.gross_salary,
            pension: breakdown.pension,
            health_insurance: breakdown.health_insurance,
            pensioners_fund: breakdown.pensioners_fund,
            taxable_income: breakdown.taxable_income.round_dp(2),
            income_tax: breakdown.income_tax,
            net_salary: breakdown.net_salary,
        }
    }
}

/// Writes one CSV row per breakdown, each with an optional label.
pub fn write_breakdowns<'a, B, W>(
    breakdowns: B,
    writer: W,
) -> Result<(), SalaryDataError>
where
    B: IntoIterator<Item = (Option<&'a str>, &'a SalaryBreakdown)>,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for (label, breakdown) in breakdowns {
        wtr.serialize(BreakdownRecord::new(label, breakdown))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes a sampled net-vs-gross curve as `gross_salary,net_salary` rows.
///
/// Gross salaries are written to two decimal places; the sampled values are
/// generally not whole units.
pub fn write_curve<'a, P, W>(
    points: P,
    writer: W,
) -> Result<usize, SalaryDataError>
where
    P: IntoIterator<Item = &'a CurvePoint>,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    let mut written = 0;
    for point in points {
        wtr.serialize(CurvePoint {
            gross_salary: point.gross_salary.round_dp(2),
            net_salary: point.net_salary,
        })?;
        written += 1;
    }
    wtr.flush()?;
    tracing::debug!(rows = written, "wrote salary curve");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_write_breakdowns_one_row_per_salary() {
        let breakdowns = vec![
            salary_core::net_salary(dec!(0)).unwrap(),
            salary_core::net_salary(dec!(1000000)).unwrap(),
        ];
        let mut out = Vec::new();

        let labels = [Some("none"), None];

        write_breakdowns(labels.into_iter().zip(&breakdowns), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "label,gross_salary,pension,health_insurance,pensioners_fund,taxable_income,income_tax,net_salary"
        );
        assert_eq!(lines[1], "none,0,0,0,0,0,0,0");
        assert_eq!(lines[2], ",1000000,110000,30000,30000,469379.25,25474,804526");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_curve_rounds_gross_to_cents() {
        let points = vec![
            CurvePoint {
                gross_salary: dec!(339478.957915831663),
                net_salary: dec!(281768),
            },
            CurvePoint {
                gross_salary: dec!(20000000),
                net_salary: dec!(13704612),
            },
        ];
        let mut out = Vec::new();

        let written = write_curve(&points, &mut out).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "gross_salary,net_salary\n339478.96,281768\n20000000,13704612\n"
        );
    }
}
