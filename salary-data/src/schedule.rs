use std::io::{Read, Write};

use rust_decimal::Decimal;
use salary_core::{IncomeTaxSchedule, TaxBracket};
use serde::{Deserialize, Serialize};

use crate::SalaryDataError;

/// A single row of a bracket schedule CSV file.
///
/// - `tax_year`: The tax year (e.g., 2024)
/// - `lower_bound`: Exclusive lower bound of the bracket
/// - `upper_bound`: Inclusive upper bound (empty for unbounded)
/// - `rate`: The marginal tax rate as a decimal (e.g., 0.05 for 5%)
/// - `base_tax`: Tax accumulated by all lower brackets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleRecord {
    pub tax_year: i32,
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub base_tax: Decimal,
}

impl ScheduleRecord {
    pub fn from_bracket(
        tax_year: i32,
        bracket: &TaxBracket,
    ) -> Self {
        Self {
            tax_year,
            lower_bound: bracket.lower_bound,
            upper_bound: bracket.upper_bound,
            rate: bracket.rate,
            base_tax: bracket.base_tax,
        }
    }

    pub fn to_bracket(&self) -> TaxBracket {
        TaxBracket {
            lower_bound: self.lower_bound,
            upper_bound: self.upper_bound,
            rate: self.rate,
            base_tax: self.base_tax,
        }
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Reads and writes bracket schedules as CSV.
///
/// Used to check a published table against the compiled-in schedule and to
/// export the compiled-in schedule for inspection.
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Parse schedule records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ScheduleRecord>, SalaryDataError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: ScheduleRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Builds a validated schedule for `tax_year` from parsed records.
    ///
    /// Records for other years are rejected rather than skipped. Records are
    /// sorted by lower bound before validation.
    pub fn into_schedule(
        tax_year: i32,
        records: &[ScheduleRecord],
    ) -> Result<IncomeTaxSchedule, SalaryDataError> {
        if let Some(other) = records.iter().find(|r| r.tax_year != tax_year) {
            return Err(SalaryDataError::UnexpectedTaxYear {
                expected: tax_year,
                found: other.tax_year,
            });
        }

        let mut brackets: Vec<TaxBracket> = records.iter().map(ScheduleRecord::to_bracket).collect();
        brackets.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));

        Ok(IncomeTaxSchedule::new(brackets)?)
    }

    /// Writes `schedule` as CSV rows tagged with `tax_year`.
    pub fn write<W: Write>(
        tax_year: i32,
        schedule: &IncomeTaxSchedule,
        writer: W,
    ) -> Result<(), SalaryDataError> {
        let mut wtr = csv::Writer::from_writer(writer);
        for bracket in schedule.brackets() {
            wtr.serialize(ScheduleRecord::from_bracket(tax_year, bracket))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Indices of brackets that differ between two schedules.
    ///
    /// A length mismatch reports every index past the shorter schedule.
    pub fn differences(
        expected: &IncomeTaxSchedule,
        actual: &IncomeTaxSchedule,
    ) -> Vec<usize> {
        let expected = expected.brackets();
        let actual = actual.brackets();
        let longest = expected.len().max(actual.len());

        (0..longest)
            .filter(|&i| expected.get(i) != actual.get(i))
            .collect()
    }
}
