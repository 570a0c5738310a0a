/// Accumulated totals for a single campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignAggregate {
    pub campaign_id: String,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_spend: f64,
    pub total_conversions: u64,
}

/// Numeric values of one validated input row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedRow {
    pub impressions: u64,
    pub clicks: u64,
    pub spend: f64,
    pub conversions: u64,
}

impl CampaignAggregate {
    /// Creates an aggregate with all totals at zero.
    pub fn new(campaign_id: impl Into<String>) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            total_impressions: 0,
            total_clicks: 0,
            total_spend: 0.0,
            total_conversions: 0,
        }
    }

    /// Adds one row's values to the running totals.
    ///
    /// Integer counters saturate instead of wrapping so totals never decrease.
    pub fn absorb(&mut self, row: &ParsedRow) {
        self.total_impressions = self.total_impressions.saturating_add(row.impressions);
        self.total_clicks = self.total_clicks.saturating_add(row.clicks);
        self.total_spend += row.spend;
        self.total_conversions = self.total_conversions.saturating_add(row.conversions);
    }

    /// Click-through rate. Zero when the campaign has no impressions.
    pub fn ctr(&self) -> f64 {
        if self.total_impressions == 0 {
            return 0.0;
        }
        self.total_clicks as f64 / self.total_impressions as f64
    }

    /// Cost per acquisition, or `None` when the campaign has no conversions.
    ///
    /// `None` means "undefined", not "free": callers must never read it as `0.0`.
    pub fn cpa(&self) -> Option<f64> {
        if self.total_conversions == 0 {
            return None;
        }
        Some(self.total_spend / self.total_conversions as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(impressions: u64, clicks: u64, spend: f64, conversions: u64) -> CampaignAggregate {
        CampaignAggregate {
            campaign_id: "CMP".to_string(),
            total_impressions: impressions,
            total_clicks: clicks,
            total_spend: spend,
            total_conversions: conversions,
        }
    }

    #[test]
    fn test_ctr_cases() {
        let cases = [
            ("normal case", 10_000, 500, 0.05),
            ("zero impressions", 0, 0, 0.0),
            ("high ctr", 100, 10, 0.1),
            ("low ctr", 1_000_000, 100, 0.0001),
        ];

        for (name, impressions, clicks, expected) in cases {
            let got = aggregate(impressions, clicks, 0.0, 0).ctr();
            assert!(
                (got - expected).abs() < 1e-9,
                "{}: ctr() = {}, want {}",
                name,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_ctr_zero_impressions_is_exactly_zero() {
        // Clicks without impressions still yield zero rather than infinity.
        assert_eq!(aggregate(0, 25, 0.0, 0).ctr(), 0.0);
    }

    #[test]
    fn test_cpa_cases() {
        let cases = [
            ("normal case", 100.0, 10, Some(10.0)),
            ("zero conversions", 100.0, 0, None),
            ("high cpa", 1000.0, 2, Some(500.0)),
        ];

        for (name, spend, conversions, expected) in cases {
            let got = aggregate(0, 0, spend, conversions).cpa();
            match (got, expected) {
                (None, None) => {}
                (Some(g), Some(e)) => {
                    assert!((g - e).abs() < 1e-9, "{}: cpa() = {}, want {}", name, g, e)
                }
                _ => panic!("{}: cpa() = {:?}, want {:?}", name, got, expected),
            }
        }
    }

    #[test]
    fn test_cpa_zero_spend_is_present() {
        assert_eq!(aggregate(0, 0, 0.0, 4).cpa(), Some(0.0));
    }

    #[test]
    fn test_absorb_sums_rows() {
        let mut agg = CampaignAggregate::new("CMP001");
        agg.absorb(&ParsedRow {
            impressions: 12_000,
            clicks: 300,
            spend: 45.50,
            conversions: 12,
        });
        agg.absorb(&ParsedRow {
            impressions: 14_000,
            clicks: 340,
            spend: 48.20,
            conversions: 15,
        });

        assert_eq!(agg.total_impressions, 26_000);
        assert_eq!(agg.total_clicks, 640);
        assert_eq!(agg.total_conversions, 27);
        assert!((agg.total_spend - 93.70).abs() < 1e-9);
        assert!((agg.ctr() - 0.024_615_384_6).abs() < 1e-9);
        assert!((agg.cpa().unwrap() - 3.470_370_370).abs() < 1e-9);
    }

    #[test]
    fn test_absorb_saturates() {
        let mut agg = aggregate(u64::MAX - 1, 0, 0.0, 0);
        agg.absorb(&ParsedRow {
            impressions: 10,
            clicks: 0,
            spend: 0.0,
            conversions: 0,
        });
        assert_eq!(agg.total_impressions, u64::MAX);
    }
}
