//! Campaign record model.
//!
//! A [`CampaignAggregate`] holds the running totals for one campaign and
//! derives its two efficiency metrics on demand:
//!
//! - CTR (click-through rate): `clicks / impressions`, `0.0` with no impressions
//! - CPA (cost per acquisition): `spend / conversions`, `None` with no conversions
//!
//! [`CampaignTable`] keys aggregates by campaign id and remembers the order in
//! which ids were first seen, which the report rankings use to break ties.

mod table;
mod types;

pub use table::CampaignTable;
pub use types::{CampaignAggregate, ParsedRow};
