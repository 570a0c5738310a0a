//! Configuration for the aggregator module.

use serde::{Deserialize, Serialize};

/// Input-side settings for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Read buffer size in bytes. Bounds the input window held in memory.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

fn default_buffer_capacity() -> usize {
    64 * 1024 // 64 KB
}
