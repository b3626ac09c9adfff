//! Plain-text rendering of calculation results.

use std::io::{self, Write};

use salary_core::{DeductionConstants, IncomeTaxSchedule, SalaryBreakdown};

use crate::utils::{format_amount, format_amount_with_cents, format_rate};

const LABEL_WIDTH: usize = 26;

fn line<W: Write>(
    out: &mut W,
    label: &str,
    value: &str,
) -> io::Result<()> {
    writeln!(out, "  {label:<LABEL_WIDTH$}{value}")
}

/// Writes the breakdown the way the salary form presents it.
pub fn write_breakdown<W: Write>(
    out: &mut W,
    breakdown: &SalaryBreakdown,
    deductions: &DeductionConstants,
    currency: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "Net salary: {}",
        format_amount(breakdown.net_salary, currency)
    )?;
    writeln!(out, "Deductions:")?;
    line(
        out,
        "Gross salary",
        &format_amount_with_cents(breakdown.gross_salary, currency),
    )?;
    line(
        out,
        &format!("Pension ({})", format_rate(deductions.pension_rate)),
        &format_amount(breakdown.pension, currency),
    )?;
    line(
        out,
        &format!(
            "Health insurance ({})",
            format_rate(deductions.health_insurance_rate)
        ),
        &format_amount(breakdown.health_insurance, currency),
    )?;
    line(
        out,
        &format!("PAMI ({})", format_rate(deductions.pensioners_fund_rate)),
        &format_amount(breakdown.pensioners_fund, currency),
    )?;
    line(
        out,
        "Taxable income",
        &format_amount_with_cents(breakdown.taxable_income, currency),
    )?;
    line(
        out,
        "Income tax",
        &format_amount(breakdown.income_tax, currency),
    )?;
    line(
        out,
        "Net salary",
        &format_amount(breakdown.net_salary, currency),
    )
}

/// Writes the bracket table, one bracket per line.
pub fn write_schedule<W: Write>(
    out: &mut W,
    tax_year: i32,
    schedule: &IncomeTaxSchedule,
    currency: &str,
) -> io::Result<()> {
    writeln!(out, "Income tax brackets {tax_year} (monthly, {currency})")?;
    for bracket in schedule.brackets() {
        let upper = bracket
            .upper_bound
            .map_or_else(|| "and above".to_string(), |u| format!("to {}", format_amount_with_cents(u, currency)));
        writeln!(
            out,
            "  over {} {upper}: {} on the excess plus {}",
            format_amount_with_cents(bracket.lower_bound, currency),
            format_rate(bracket.rate),
            format_amount_with_cents(bracket.base_tax, currency),
        )?;
    }
    Ok(())
}
