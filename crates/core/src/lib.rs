pub mod aggregator;
pub mod campaign;
pub mod config;
pub mod report;

pub use aggregator::{
    aggregate_file, aggregate_reader, AggregateError, Aggregation, HeaderError, IngestConfig,
    IngestStats, SkipReason,
};
pub use campaign::{CampaignAggregate, CampaignTable, ParsedRow};
pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, Config, ConfigError,
};
pub use report::{
    rank_by_cpa, rank_by_ctr, write_reports, write_top_by_cpa, write_top_by_ctr, OutputConfig,
    ReportError, ReportKind, ReportPaths, TOP_N,
};
