use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Read buffer capacity is not 0
/// - Report file names are non-empty, distinct, and plain file names
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.ingest.buffer_capacity == 0 {
        return Err(ConfigError::ValidationError(
            "ingest.buffer_capacity cannot be 0".to_string(),
        ));
    }

    for (key, name) in [
        ("output.ctr_file", &config.output.ctr_file),
        ("output.cpa_file", &config.output.cpa_file),
    ] {
        if name.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                key
            )));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(ConfigError::ValidationError(format!(
                "{} must be a file name, not a path: {}",
                key, name
            )));
        }
    }

    if config.output.ctr_file == config.output.cpa_file {
        return Err(ConfigError::ValidationError(format!(
            "output.ctr_file and output.cpa_file must differ (both are {})",
            config.output.ctr_file
        )));
    }

    Ok(())
}
