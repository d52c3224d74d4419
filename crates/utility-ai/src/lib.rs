//! Utility-based action selection.
//!
//! A [`Reasoner`] owns a list of [`Consideration`]s, each pairing an
//! [`Appraisal`] (how desirable is this right now?) with the action to take.
//! Selecting is a single pass: score the considerations against the context,
//! then pick one according to the reasoner's rule.
//!
//! Appraisals are supplied by the game. This crate ships no scoring curves.

pub mod appraisal;
pub mod consideration;
pub mod reasoner;

pub use appraisal::Appraisal;
pub use consideration::Consideration;
pub use reasoner::{FirstScoreReasoner, HighestScoreReasoner, Reasoner};
