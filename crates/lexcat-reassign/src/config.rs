//! Job configuration.

use serde::{Deserialize, Serialize};

use crate::error::ReassignError;

/// Settings for one [`ReassignJob`](crate::ReassignJob).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassignConfig {
    /// Records classified and updated per batch. Bounds the number of
    /// in-flight storage writes.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl ReassignConfig {
    /// Default batch size.
    pub const DEFAULT_BATCH_SIZE: usize = 200;

    /// Reject settings the job cannot run with.
    pub fn validate(&self) -> Result<(), ReassignError> {
        if self.batch_size == 0 {
            return Err(ReassignError::InvalidBatchSize);
        }
        Ok(())
    }
}

fn default_batch_size() -> usize {
    ReassignConfig::DEFAULT_BATCH_SIZE
}

impl Default for ReassignConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}
