//! Header validation and per-row parsing.

use std::fmt;

use csv::StringRecord;

use super::error::HeaderError;
use crate::campaign::ParsedRow;

/// Expected input columns, in order.
pub const INPUT_HEADER: [&str; 6] = [
    "campaign_id",
    "date",
    "impressions",
    "clicks",
    "spend",
    "conversions",
];

const CAMPAIGN_ID: usize = 0;
const IMPRESSIONS: usize = 2;
const CLICKS: usize = 3;
const SPEND: usize = 4;
const CONVERSIONS: usize = 5;

/// Why a data row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The row did not have exactly six fields.
    FieldCount { actual: usize },
    /// A numeric field could not be parsed.
    InvalidField { column: &'static str },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { actual } => {
                write!(f, "expected {} fields, got {}", INPUT_HEADER.len(), actual)
            }
            Self::InvalidField { column } => write!(f, "invalid value in column '{}'", column),
        }
    }
}

/// Checks the header row against [`INPUT_HEADER`]: same count, names and order.
pub fn validate_header(header: &StringRecord) -> Result<(), HeaderError> {
    if header.len() != INPUT_HEADER.len() {
        return Err(HeaderError::ColumnCount {
            expected: INPUT_HEADER.len(),
            actual: header.len(),
        });
    }

    for (index, (expected, actual)) in INPUT_HEADER.iter().zip(header.iter()).enumerate() {
        if *expected != actual {
            return Err(HeaderError::ColumnName {
                index,
                expected: *expected,
                actual: actual.to_string(),
            });
        }
    }

    Ok(())
}

/// Parses the numeric fields of a data row.
///
/// Either every field parses or the whole row is rejected. The date column is
/// never inspected.
pub fn parse_row(record: &StringRecord) -> Result<(&str, ParsedRow), SkipReason> {
    if record.len() != INPUT_HEADER.len() {
        return Err(SkipReason::FieldCount {
            actual: record.len(),
        });
    }

    let row = ParsedRow {
        impressions: parse_count(record, IMPRESSIONS)?,
        clicks: parse_count(record, CLICKS)?,
        spend: parse_spend(record)?,
        conversions: parse_count(record, CONVERSIONS)?,
    };

    Ok((&record[CAMPAIGN_ID], row))
}

fn parse_count(record: &StringRecord, index: usize) -> Result<u64, SkipReason> {
    record[index]
        .parse::<u64>()
        .map_err(|_| SkipReason::InvalidField {
            column: INPUT_HEADER[index],
        })
}

fn parse_spend(record: &StringRecord) -> Result<f64, SkipReason> {
    let invalid = SkipReason::InvalidField {
        column: INPUT_HEADER[SPEND],
    };
    let spend = record[SPEND].parse::<f64>().map_err(|_| invalid)?;
    // Totals must stay finite and never decrease.
    if !spend.is_finite() || spend < 0.0 {
        return Err(invalid);
    }
    Ok(spend)
}
