//! Types for the aggregator module.

use crate::campaign::CampaignTable;

use super::SkipReason;

/// Row counters collected during one pass over the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Data rows read, excluding the header.
    pub rows_read: u64,
    /// Rows folded into an aggregate.
    pub rows_accepted: u64,
    /// Rows dropped for having the wrong number of fields.
    pub rows_skipped_field_count: u64,
    /// Rows dropped because a numeric field did not parse.
    pub rows_skipped_invalid_field: u64,
}

impl IngestStats {
    pub fn rows_skipped(&self) -> u64 {
        self.rows_skipped_field_count + self.rows_skipped_invalid_field
    }

    pub(crate) fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::FieldCount { .. } => self.rows_skipped_field_count += 1,
            SkipReason::InvalidField { .. } => self.rows_skipped_invalid_field += 1,
        }
    }
}

/// Result of a successful aggregation pass.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub campaigns: CampaignTable,
    pub stats: IngestStats,
}
