use crate::error::ConfigError;

/// Tunable parameters for a [`crate::WeightedPathfinder`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Number of superseded frontier entries tolerated before the frontier is
    /// compacted. Superseded entries appear whenever a cheaper path to an
    /// already queued node is found.
    pub stale_compaction_threshold: usize,
}

impl SearchConfig {
    /// Superseded entries tolerated before compaction when no threshold is given.
    pub const DEFAULT_STALE_COMPACTION_THRESHOLD: usize = 1024;

    /// Creates a configuration with every tunable at its default.
    pub fn new() -> Self {
        Self {
            stale_compaction_threshold: Self::DEFAULT_STALE_COMPACTION_THRESHOLD,
        }
    }

    /// Creates a configuration with a custom compaction threshold.
    pub fn with_stale_compaction_threshold(stale_compaction_threshold: usize) -> Self {
        Self {
            stale_compaction_threshold,
        }
    }

    /// Checks that every tunable is within its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stale_compaction_threshold == 0 {
            return Err(ConfigError::ZeroCompactionThreshold);
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
