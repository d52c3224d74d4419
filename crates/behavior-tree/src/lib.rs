//! Minimal behavior tree primitives for simulated agents.
//!
//! This crate provides the leaf-level contract that agent trees are built on.
//! Composite and decorator nodes live with the game that uses them; what is
//! shared here is the status model and the closure-backed leaves.
//!
//! - **Tri-state**: Nodes succeed, fail, or keep running across ticks
//! - **Closure leaves**: Any `Fn(&mut C) -> Status` becomes a node
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Conditional`]: Marker for nodes that only check the context
//! - [`Status`]: Success, Failure, or Running
//! - Leaf nodes: [`ExecuteAction`], [`ActionConditional`]

pub mod action;
pub mod behavior;
pub mod status;

// Re-export core types for ergonomic API
pub use action::{ActionConditional, ExecuteAction};
pub use behavior::{Behavior, Conditional};
pub use status::Status;
