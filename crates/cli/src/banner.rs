use std::path::Path;
use std::time::Duration;

use adperf_core::{IngestStats, ReportPaths};

const RULE_HEAVY: &str = "=================================================";
const RULE_LIGHT: &str = "-------------------------------------------------";

pub fn print_header(input: &Path, output_dir: &Path) {
    println!("{}", RULE_HEAVY);
    println!("  Ad Performance Aggregator");
    println!("{}", RULE_HEAVY);
    println!("Input file:  {}", input.display());
    println!("Output dir:  {}", output_dir.display());
    println!("{}", RULE_LIGHT);
}

pub fn print_ingest(campaigns: usize, stats: &IngestStats, elapsed: Duration) {
    println!("Processed {} unique campaigns in {:?}", campaigns, elapsed);
    println!(
        "Rows read: {} (accepted {}, skipped {})",
        stats.rows_read,
        stats.rows_accepted,
        stats.rows_skipped()
    );
}

pub fn print_summary(paths: &ReportPaths, total: Duration) {
    println!("{}", RULE_LIGHT);
    println!("Processing complete!");
    println!("{}", RULE_LIGHT);
    println!("Total processing time: {:?}", total);
    println!("{}", RULE_LIGHT);
    println!("Output files:");
    println!("  - {} ({} rows)", paths.ctr_path.display(), paths.ctr_rows);
    println!("  - {} ({} rows)", paths.cpa_path.display(), paths.cpa_rows);
    println!("{}", RULE_HEAVY);
}
