//! Configuration for the report module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and under which names the reports are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, created by the caller if absent.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// File name of the highest-CTR report.
    #[serde(default = "default_ctr_file")]
    pub ctr_file: String,

    /// File name of the lowest-CPA report.
    #[serde(default = "default_cpa_file")]
    pub cpa_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            ctr_file: default_ctr_file(),
            cpa_file: default_cpa_file(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_ctr_file() -> String {
    "top10_ctr.csv".to_string()
}

fn default_cpa_file() -> String {
    "top10_cpa.csv".to_string()
}
