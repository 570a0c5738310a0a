//! Types for the report module.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::campaign::{CampaignAggregate, CampaignTable};

use super::ranking::{rank_by_cpa, rank_by_ctr};

/// Output columns, in order.
pub const REPORT_HEADER: [&str; 7] = [
    "campaign_id",
    "total_impressions",
    "total_clicks",
    "total_spend",
    "total_conversions",
    "CTR",
    "CPA",
];

/// Token written in the CPA column when a campaign has no conversions.
pub const MISSING_CPA: &str = "null";

/// The two ranked views produced per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Highest click-through rate first.
    TopCtr,
    /// Lowest cost per acquisition first, converting campaigns only.
    TopCpa,
}

impl ReportKind {
    /// Ranks `table` for this view.
    pub fn rank<'a>(&self, table: &'a CampaignTable) -> Vec<&'a CampaignAggregate> {
        match self {
            Self::TopCtr => rank_by_ctr(table),
            Self::TopCpa => rank_by_cpa(table),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopCtr => write!(f, "top CTR"),
            Self::TopCpa => write!(f, "top CPA"),
        }
    }
}

/// One formatted output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow<'a> {
    pub campaign_id: &'a str,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_spend: String,
    pub total_conversions: u64,
    #[serde(rename = "CTR")]
    pub ctr: String,
    #[serde(rename = "CPA")]
    pub cpa: String,
}

impl<'a> From<&'a CampaignAggregate> for ReportRow<'a> {
    fn from(c: &'a CampaignAggregate) -> Self {
        Self {
            campaign_id: &c.campaign_id,
            total_impressions: c.total_impressions,
            total_clicks: c.total_clicks,
            total_spend: format!("{:.2}", c.total_spend),
            total_conversions: c.total_conversions,
            ctr: format!("{:.4}", c.ctr()),
            cpa: c
                .cpa()
                .map_or_else(|| MISSING_CPA.to_string(), |cpa| format!("{:.2}", cpa)),
        }
    }
}

/// Files written by a run, with their data row counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub ctr_path: PathBuf,
    pub ctr_rows: usize,
    pub cpa_path: PathBuf,
    pub cpa_rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_formatting() {
        let c = CampaignAggregate {
            campaign_id: "CMP001".to_string(),
            total_impressions: 26_000,
            total_clicks: 640,
            total_spend: 93.7,
            total_conversions: 27,
        };
        let row = ReportRow::from(&c);

        assert_eq!(row.campaign_id, "CMP001");
        assert_eq!(row.total_spend, "93.70");
        assert_eq!(row.ctr, "0.0246");
        assert_eq!(row.cpa, "3.47");
    }

    #[test]
    fn test_row_without_conversions_has_null_cpa() {
        let c = CampaignAggregate::new("CMP404");
        let row = ReportRow::from(&c);

        assert_eq!(row.total_spend, "0.00");
        assert_eq!(row.ctr, "0.0000");
        assert_eq!(row.cpa, "null");
    }
}
