//! Subcommand bodies. Each writes its result to `out` so tests can capture it.

use std::{
    fs::File,
    io::{BufRead, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;
use salary_core::{
    IncomeTaxSchedule, NetSalaryCalculator,
    curve::{self, CurveSpec},
    schedule::TAX_YEAR,
};
use salary_data::{ScheduleLoader, load_salaries, write_breakdowns, write_curve};
use tracing::{info, warn};

use crate::{
    cli::OutputFormat,
    render::{write_breakdown, write_schedule},
    utils::{format_amount, parse_amount},
};

/// `sueldo net`
pub fn net<W: Write>(
    gross: Decimal,
    format: OutputFormat,
    currency: &str,
    out: &mut W,
) -> Result<()> {
    let calculator = NetSalaryCalculator::year_2024();
    let breakdown = calculator
        .calculate(gross)
        .with_context(|| format!("cannot calculate net salary for {gross}"))?;
    info!(gross = %gross, net = %breakdown.net_salary, "calculated net salary");

    match format {
        OutputFormat::Text => {
            write_breakdown(out, &breakdown, calculator.deductions(), currency)?
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &breakdown)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_breakdowns([(None, &breakdown)], &mut *out)?,
    }
    Ok(())
}

/// `sueldo brackets`
pub fn brackets<W: Write>(
    csv: bool,
    currency: &str,
    out: &mut W,
) -> Result<()> {
    let schedule = IncomeTaxSchedule::year_2024();
    if csv {
        ScheduleLoader::write(TAX_YEAR, schedule, &mut *out)?;
    } else {
        write_schedule(out, TAX_YEAR, schedule, currency)?;
    }
    Ok(())
}

/// `sueldo brackets --verify FILE`
///
/// Fails if the file's table differs from the compiled-in one.
pub fn verify_brackets<W: Write>(
    path: &Path,
    out: &mut W,
) -> Result<()> {
    let file = File::open(path).with_context(|| format!("cannot open '{}'", path.display()))?;
    let records = ScheduleLoader::parse(file)
        .with_context(|| format!("cannot read brackets from '{}'", path.display()))?;
    let loaded = ScheduleLoader::into_schedule(TAX_YEAR, &records)
        .with_context(|| format!("invalid bracket table in '{}'", path.display()))?;

    let differences = ScheduleLoader::differences(IncomeTaxSchedule::year_2024(), &loaded);
    if !differences.is_empty() {
        let rows: Vec<String> = differences.iter().map(|i| (i + 1).to_string()).collect();
        bail!(
            "'{}' differs from the {TAX_YEAR} brackets at bracket {}",
            path.display(),
            rows.join(", ")
        );
    }

    writeln!(
        out,
        "'{}' matches the {TAX_YEAR} brackets ({} brackets)",
        path.display(),
        loaded.brackets().len()
    )?;
    Ok(())
}

/// `sueldo curve`
///
/// CSV goes to `output` if given, else to `out`. The annotated points are
/// logged at info level.
pub fn curve<W: Write>(
    spec: &CurveSpec,
    output: Option<&Path>,
    currency: &str,
    out: &mut W,
) -> Result<()> {
    let calculator = NetSalaryCalculator::year_2024();
    let points = curve::sample_curve(&calculator, spec).context("cannot sample salary curve")?;

    let written = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create '{}'", path.display()))?;
            write_curve(&points, BufWriter::new(file))?
        }
        None => write_curve(&points, &mut *out)?,
    };
    info!(rows = written, destination = ?output, "salary curve written");

    for point in curve::annotate(&calculator)? {
        info!(
            gross = %format_amount(point.gross_salary, currency),
            net = %format_amount(point.net_salary, currency),
            "curve key point"
        );
    }
    Ok(())
}

/// `sueldo batch`
pub fn batch<W: Write>(
    input: &Path,
    output: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let file = File::open(input).with_context(|| format!("cannot open '{}'", input.display()))?;
    let salaries = load_salaries(file)
        .with_context(|| format!("cannot read salaries from '{}'", input.display()))?;
    info!(rows = salaries.len(), "loaded gross salaries");

    let calculator = NetSalaryCalculator::year_2024();
    let breakdowns = salaries
        .iter()
        .map(|s| calculator.calculate(s.gross_salary))
        .collect::<Result<Vec<_>, _>>()?;
    let rows = salaries
        .iter()
        .zip(&breakdowns)
        .map(|(s, b)| (s.label.as_deref(), b));

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create '{}'", path.display()))?;
            write_breakdowns(rows, BufWriter::new(file))?;
        }
        None => write_breakdowns(rows, &mut *out)?,
    }
    Ok(())
}

fn is_quit(line: &str) -> bool {
    matches!(line, "" | "q" | "quit")
}

/// `sueldo interactive`
///
/// Reads one gross salary per line until end of input, an empty line, `q` or
/// `quit`. Invalid lines print an error and prompt again.
pub fn interactive<R: BufRead, W: Write>(
    input: R,
    currency: &str,
    out: &mut W,
) -> Result<()> {
    let calculator = NetSalaryCalculator::year_2024();
    let mut lines = input.lines();

    loop {
        write!(out, "Gross monthly salary ({currency}): ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line.context("cannot read input")?;
        let line = line.trim();
        if is_quit(line) {
            break;
        }

        let gross = match parse_amount(line) {
            Ok(gross) => gross,
            Err(e) => {
                warn!(input = line, error = %e, "rejected input");
                writeln!(out, "Error: {e}")?;
                continue;
            }
        };

        match calculator.calculate(gross) {
            Ok(breakdown) => {
                write_breakdown(out, &breakdown, calculator.deductions(), currency)?;
                writeln!(out)?;
            }
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }
    Ok(())
}
