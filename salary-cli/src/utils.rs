use rust_decimal::Decimal;
use salary_core::calculations::common::round_to_unit;
use thiserror::Error;

/// Error returned when user input cannot be used as a gross salary.
#[derive(Debug, Error, PartialEq)]
pub enum ParseAmountError {
    #[error("no amount entered")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount must be non-negative, got {0}")]
    Negative(Decimal),
}

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// `$` or `ARS` and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed
        .strip_prefix("ARS")
        .or_else(|| trimmed.strip_prefix('$'))
        .unwrap_or(trimmed);
    trimmed.trim().replace(',', "")
}

/// Parses a non-negative amount such as `"1,500,000"` or `"$ 850000.50"`.
///
/// Empty input, text that is not a number, and negative values are errors.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: Decimal = normalized
        .parse()
        .map_err(|source| ParseAmountError::Invalid {
            input: s.trim().to_string(),
            source,
        })?;

    if amount < Decimal::ZERO {
        return Err(ParseAmountError::Negative(amount));
    }
    Ok(amount)
}

/// Inserts `,` between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn format_with_precision(
    amount: Decimal,
    currency: &str,
    precision: usize,
) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.*}", precision, amount.abs());
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    match fraction {
        Some(fraction) => format!("{currency} {sign}{}.{fraction}", group_thousands(whole)),
        None => format!("{currency} {sign}{}", group_thousands(whole)),
    }
}

/// Formats an amount in whole currency units, e.g. `ARS 804,526`.
pub fn format_amount(
    amount: Decimal,
    currency: &str,
) -> String {
    format_with_precision(round_to_unit(amount), currency, 0)
}

/// Formats an amount with cents, e.g. `ARS 1,000,000.00`.
pub fn format_amount_with_cents(
    amount: Decimal,
    currency: &str,
) -> String {
    format_with_precision(amount.round_dp(2), currency, 2)
}

/// Formats a rate as a percentage without trailing zeros, e.g. `11%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
