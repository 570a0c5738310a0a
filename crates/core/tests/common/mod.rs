//! Common test utilities for end-to-end aggregation runs.
//!
//! Provides a fixture owning a temporary directory with an input file and an
//! output directory, so tests can run the full ingest-then-report flow against
//! real files.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const INPUT_HEADER: &str = "campaign_id,date,impressions,clicks,spend,conversions";

pub const REPORT_HEADER: &str =
    "campaign_id,total_impressions,total_clicks,total_spend,total_conversions,CTR,CPA";

/// Sample log with repeated campaigns across days.
pub const SAMPLE_ROWS: &str = "\
CMP001,2025-01-01,12000,300,45.50,12
CMP002,2025-01-01,8000,120,28.00,4
CMP001,2025-01-02,14000,340,48.20,15
CMP003,2025-01-01,5000,60,15.00,3
CMP002,2025-01-02,8500,150,31.00,5
";

/// Temporary input file plus output directory.
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
}

impl TestFixture {
    /// Creates a fixture whose input is the standard header followed by `rows`.
    pub fn with_rows(rows: &str) -> Self {
        Self::with_contents(&format!("{}\n{}", INPUT_HEADER, rows))
    }

    /// Creates a fixture whose input is exactly `contents`.
    pub fn with_contents(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input_path = temp_dir.path().join("ad_data.csv");
        fs::write(&input_path, contents).expect("Failed to write input file");

        let output_dir = temp_dir.path().join("results");
        fs::create_dir_all(&output_dir).expect("Failed to create output dir");

        Self {
            temp_dir,
            input_path,
            output_dir,
        }
    }

    /// Reads a report from the output directory as lines.
    pub fn read_report(&self, file_name: &str) -> Vec<String> {
        read_lines(&self.output_dir.join(file_name))
    }
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read report")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Builds `count` distinct campaigns with strictly increasing CTR and CPA.
pub fn many_campaigns(count: u64) -> String {
    (1..=count)
        .map(|i| format!("CMP{:03},2025-01-01,1000,{},{}.00,1\n", i, i, i))
        .collect()
}
