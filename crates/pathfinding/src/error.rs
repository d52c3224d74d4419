//! Error types for pathfinder construction.
//!
//! Searching itself never fails: unreachable goals and spent budgets are
//! reported through [`crate::SearchOutcome`]. Only configuration can be
//! rejected up front.

/// Invalid [`crate::SearchConfig`] values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("stale compaction threshold must be greater than zero")]
    ZeroCompactionThreshold,
}
