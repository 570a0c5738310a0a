use serde::{Deserialize, Serialize};

use crate::aggregator::IngestConfig;
use crate::report::OutputConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
