//! Static site provider

use serde::{Deserialize, Serialize};
use stats_view_domain::StatsSiteProvider;

/// Site provider backed by a fixed id and name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticSiteProvider {
    pub site_id: u64,
    pub site_name: String,
}

impl StaticSiteProvider {
    pub fn new(site_id: u64, site_name: impl Into<String>) -> Self {
        Self {
            site_id,
            site_name: site_name.into(),
        }
    }
}

impl StatsSiteProvider for StaticSiteProvider {
    fn site_id(&self) -> u64 {
        self.site_id
    }

    fn site_name(&self) -> &str {
        &self.site_name
    }
}
