//! CSV serialization of ranked reports.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::{debug, info};

use super::config::OutputConfig;
use super::error::ReportError;
use super::types::{ReportKind, ReportPaths, ReportRow, REPORT_HEADER};
use crate::campaign::{CampaignAggregate, CampaignTable};

/// Serializes `campaigns` as CSV into `writer`.
///
/// The header row is always written, even when there are no campaigns.
pub fn write_report<W: Write>(
    campaigns: &[&CampaignAggregate],
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(REPORT_HEADER)?;
    for campaign in campaigns {
        csv_writer.serialize(ReportRow::from(*campaign))?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Ranks `table` for `kind` and writes the result to `destination`.
///
/// Returns the number of data rows written.
pub fn write_ranked(
    kind: ReportKind,
    table: &CampaignTable,
    destination: &Path,
) -> Result<usize, ReportError> {
    let ranked = kind.rank(table);

    let file = File::create(destination).map_err(|source| ReportError::Create {
        path: destination.to_path_buf(),
        source,
    })?;
    write_report(&ranked, file).map_err(|e| ReportError::write(destination, e))?;

    debug!(
        "Wrote {} report with {} rows to {:?}",
        kind,
        ranked.len(),
        destination
    );
    Ok(ranked.len())
}

/// Writes the highest-CTR campaigns to `destination`.
pub fn write_top_by_ctr(table: &CampaignTable, destination: &Path) -> Result<usize, ReportError> {
    write_ranked(ReportKind::TopCtr, table, destination)
}

/// Writes the lowest-CPA campaigns to `destination`, skipping non-converting ones.
pub fn write_top_by_cpa(table: &CampaignTable, destination: &Path) -> Result<usize, ReportError> {
    write_ranked(ReportKind::TopCpa, table, destination)
}

/// Writes both reports into `output_dir` under the configured file names.
///
/// The directory must already exist.
pub fn write_reports(
    table: &CampaignTable,
    output_dir: &Path,
    config: &OutputConfig,
) -> Result<ReportPaths, ReportError> {
    let ctr_path = output_dir.join(&config.ctr_file);
    info!("Writing top CTR report to {:?}", ctr_path);
    let ctr_rows = write_top_by_ctr(table, &ctr_path)?;

    let cpa_path = output_dir.join(&config.cpa_file);
    info!("Writing top CPA report to {:?}", cpa_path);
    let cpa_rows = write_top_by_cpa(table, &cpa_path)?;

    Ok(ReportPaths {
        ctr_path,
        ctr_rows,
        cpa_path,
        cpa_rows,
    })
}
