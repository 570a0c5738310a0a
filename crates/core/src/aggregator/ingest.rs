//! Single-pass streaming aggregation over a CSV source.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, trace};

use super::config::IngestConfig;
use super::error::{AggregateError, HeaderError};
use super::row::{parse_row, validate_header};
use super::types::{Aggregation, IngestStats};
use crate::campaign::CampaignTable;

/// Aggregates the CSV file at `path` by campaign id.
pub fn aggregate_file(path: &Path, config: &IngestConfig) -> Result<Aggregation, AggregateError> {
    let file = File::open(path).map_err(|source| AggregateError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Opened input {:?}", path);
    aggregate_reader(file, config)
}

/// Aggregates CSV rows from any reader.
///
/// Rows are read one at a time into a single reused record, so memory stays
/// bounded by the read buffer plus one entry per distinct campaign.
pub fn aggregate_reader<R: Read>(
    reader: R,
    config: &IngestConfig,
) -> Result<Aggregation, AggregateError> {
    // csv::Reader buffers internally, no BufReader needed.
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .buffer_capacity(config.buffer_capacity)
        .from_reader(reader);

    let mut record = StringRecord::new();

    let has_header = csv_reader
        .read_record(&mut record)
        .map_err(|e| AggregateError::read(error_line(&e, 1), e))?;
    if !has_header {
        return Err(HeaderError::Missing.into());
    }
    validate_header(&record)?;

    let mut campaigns = CampaignTable::new();
    let mut stats = IngestStats::default();

    loop {
        let next_line = csv_reader.position().line();
        match csv_reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(AggregateError::read(error_line(&e, next_line), e)),
        }
        stats.rows_read += 1;

        match parse_row(&record) {
            Ok((campaign_id, row)) => {
                campaigns.entry_for(campaign_id).absorb(&row);
                stats.rows_accepted += 1;
            }
            Err(reason) => {
                trace!(
                    "Skipping line {}: {}",
                    record.position().map_or(next_line, |p| p.line()),
                    reason
                );
                stats.record_skip(reason);
            }
        }
    }

    debug!(
        "Aggregated {} rows into {} campaigns ({} skipped)",
        stats.rows_accepted,
        campaigns.len(),
        stats.rows_skipped()
    );

    Ok(Aggregation { campaigns, stats })
}

/// Line an error occurred on, falling back to the line the read started at.
fn error_line(err: &csv::Error, fallback: u64) -> u64 {
    err.position().map_or(fallback, |p| p.line())
}
