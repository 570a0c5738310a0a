//! Aggregator module for turning an ad-performance log into campaign totals.
//!
//! The input is a CSV file whose header must be exactly
//! `campaign_id,date,impressions,clicks,spend,conversions`. Data rows are
//! streamed one at a time and folded into a [`CampaignTable`](crate::campaign::CampaignTable).
//!
//! Two classes of failure are kept apart:
//!
//! - [`AggregateError`]: fatal. Unopenable input, a bad header, or a reader
//!   error mid-stream (annotated with the line number).
//! - [`SkipReason`]: the row is dropped and the pass continues. Wrong field
//!   count or a numeric field that does not parse.
//!
//! # Example
//!
//! ```ignore
//! use adperf_core::aggregator::{aggregate_file, IngestConfig};
//!
//! let result = aggregate_file(Path::new("ad_data.csv"), &IngestConfig::default())?;
//! println!(
//!     "{} campaigns, {} rows skipped",
//!     result.campaigns.len(),
//!     result.stats.rows_skipped()
//! );
//! ```

mod config;
mod error;
mod ingest;
mod row;
mod types;

pub use config::IngestConfig;
pub use error::{AggregateError, HeaderError};
pub use ingest::{aggregate_file, aggregate_reader};
pub use row::{parse_row, validate_header, SkipReason, INPUT_HEADER};
pub use types::{Aggregation, IngestStats};
