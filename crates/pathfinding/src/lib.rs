//! Resumable weighted-graph search for simulated agents.
//!
//! This crate provides a uniform-cost (Dijkstra) pathfinder that keeps its
//! search state between calls. A search can be started once and then advanced
//! in bounded slices of graph cost, which lets turn-based agents spread path
//! planning across several ticks.
//!
//! - **Caller-owned graphs**: The graph is supplied through [`WeightedGraph`];
//!   the engine never builds or validates it
//! - **Multi-goal**: Goals are found one at a time, cheapest first
//! - **Resumable**: [`WeightedPathfinder::continue_search`] never discards state
//! - **Coverage**: Goal-less searches enumerate everything within a cost budget
//!
//! # Architecture
//!
//! - [`WeightedPathfinder`]: The search engine and its session state
//! - [`WeightedGraph`]: Collaborator trait for neighbors and edge costs
//! - [`SearchOutcome`]: Found, Exhausted, or BudgetExceeded
//! - [`SearchConfig`]: Tunables for frontier housekeeping

pub mod config;
pub mod error;
mod frontier;
pub mod graph;
pub mod outcome;
pub mod path;
pub mod weighted;

// Re-export core types for ergonomic API
pub use config::SearchConfig;
pub use error::ConfigError;
pub use graph::{Cost, PathCost, UNBOUNDED, WeightedGraph};
pub use outcome::SearchOutcome;
pub use path::reconstruct_path;
pub use weighted::WeightedPathfinder;
