//! Report module for ranking campaigns and writing the results as CSV.
//!
//! Two views are produced from one [`CampaignTable`](crate::campaign::CampaignTable):
//!
//! - top CTR: every campaign, highest click-through rate first
//! - top CPA: converting campaigns only, lowest cost per acquisition first
//!
//! Each view holds at most [`TOP_N`] campaigns and is written with the header
//! `campaign_id,total_impressions,total_clicks,total_spend,total_conversions,CTR,CPA`.
//! Spend and CPA use two decimals, CTR four, and a missing CPA is written as
//! `null`.
//!
//! # Example
//!
//! ```ignore
//! use adperf_core::report::{write_reports, OutputConfig};
//!
//! let config = OutputConfig::default();
//! let paths = write_reports(&aggregation.campaigns, &config.dir, &config)?;
//! println!("Wrote {:?} and {:?}", paths.ctr_path, paths.cpa_path);
//! ```

mod config;
mod error;
mod ranking;
mod types;
mod writer;

pub use config::OutputConfig;
pub use error::ReportError;
pub use ranking::{rank_by_cpa, rank_by_ctr, TOP_N};
pub use types::{ReportKind, ReportPaths, ReportRow, MISSING_CPA, REPORT_HEADER};
pub use writer::{write_ranked, write_report, write_reports, write_top_by_cpa, write_top_by_ctr};
