//! Ranked, size-bounded views over a campaign table.
//!
//! Both rankings use a stable sort over the table's first-seen order, so exact
//! ties keep the order in which campaigns first appeared in the input.

use std::cmp::Ordering;

use crate::campaign::{CampaignAggregate, CampaignTable};

/// Maximum number of campaigns in each report.
pub const TOP_N: usize = 10;

/// Campaigns by descending CTR, at most [`TOP_N`].
///
/// Every campaign is eligible, including those without impressions (CTR 0).
pub fn rank_by_ctr(table: &CampaignTable) -> Vec<&CampaignAggregate> {
    let mut ranked: Vec<_> = table.iter().collect();
    ranked.sort_by(|a, b| b.ctr().partial_cmp(&a.ctr()).unwrap_or(Ordering::Equal));
    ranked.truncate(TOP_N);
    ranked
}

/// Campaigns by ascending CPA, at most [`TOP_N`].
///
/// Campaigns without conversions have no CPA and are left out entirely.
pub fn rank_by_cpa(table: &CampaignTable) -> Vec<&CampaignAggregate> {
    let mut ranked: Vec<(f64, &CampaignAggregate)> = table
        .iter()
        .filter_map(|c| c.cpa().map(|cpa| (cpa, c)))
        .collect();
    ranked.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    ranked.into_iter().take(TOP_N).map(|(_, c)| c).collect()
}
