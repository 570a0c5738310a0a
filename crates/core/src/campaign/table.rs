use std::collections::HashMap;

use super::CampaignAggregate;

/// Campaign aggregates keyed by campaign id, iterated in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct CampaignTable {
    index: HashMap<String, usize>,
    campaigns: Vec<CampaignAggregate>,
}

impl CampaignTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the aggregate for `campaign_id`, creating an empty one on first use.
    pub fn entry_for(&mut self, campaign_id: &str) -> &mut CampaignAggregate {
        let slot = match self.index.get(campaign_id) {
            Some(&slot) => slot,
            None => {
                let slot = self.campaigns.len();
                self.campaigns.push(CampaignAggregate::new(campaign_id));
                self.index.insert(campaign_id.to_string(), slot);
                slot
            }
        };
        &mut self.campaigns[slot]
    }

    pub fn get(&self, campaign_id: &str) -> Option<&CampaignAggregate> {
        self.index.get(campaign_id).map(|&slot| &self.campaigns[slot])
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    /// Iterates aggregates in the order their ids were first inserted.
    pub fn iter(&self) -> impl Iterator<Item = &CampaignAggregate> {
        self.campaigns.iter()
    }
}

impl<'a> IntoIterator for &'a CampaignTable {
    type Item = &'a CampaignAggregate;
    type IntoIter = std::slice::Iter<'a, CampaignAggregate>;

    fn into_iter(self) -> Self::IntoIter {
        self.campaigns.iter()
    }
}
