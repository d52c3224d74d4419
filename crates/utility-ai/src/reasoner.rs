//! Selection rules over a list of considerations.
//!
//! Both reasoners evaluate considerations in insertion order and never mutate
//! the context, so the same context always yields the same action.

use crate::Consideration;

/// Picks an action for the current context.
pub trait Reasoner<C, A> {
    /// Returns the chosen action, or `None` if no consideration qualifies.
    fn select(&self, ctx: &C) -> Option<&A>;
}

/// Takes the first consideration whose score reaches the threshold.
///
/// Later considerations are not scored once one qualifies, so cheap or
/// high-priority appraisals belong at the front.
pub struct FirstScoreReasoner<C, A> {
    threshold: f32,
    considerations: Vec<Consideration<C, A>>,
}

impl<C, A> FirstScoreReasoner<C, A> {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            considerations: Vec::new(),
        }
    }

    pub fn with_consideration(mut self, consideration: Consideration<C, A>) -> Self {
        self.considerations.push(consideration);
        self
    }

    pub fn add(&mut self, consideration: Consideration<C, A>) {
        self.considerations.push(consideration);
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl<C, A> Reasoner<C, A> for FirstScoreReasoner<C, A> {
    fn select(&self, ctx: &C) -> Option<&A> {
        for (index, consideration) in self.considerations.iter().enumerate() {
            let score = consideration.score(ctx);
            if score >= self.threshold {
                tracing::debug!(
                    "FirstScoreReasoner: consideration {} qualified (score={}, threshold={})",
                    index,
                    score,
                    self.threshold
                );
                return Some(consideration.action());
            }
        }

        tracing::debug!(
            "FirstScoreReasoner: none of {} considerations reached {}",
            self.considerations.len(),
            self.threshold
        );
        None
    }
}

/// Scores every consideration and takes the highest.
///
/// In case of a tie the earliest consideration wins. NaN scores never win.
pub struct HighestScoreReasoner<C, A> {
    considerations: Vec<Consideration<C, A>>,
}

impl<C, A> HighestScoreReasoner<C, A> {
    pub fn new() -> Self {
        Self {
            considerations: Vec::new(),
        }
    }

    pub fn with_consideration(mut self, consideration: Consideration<C, A>) -> Self {
        self.considerations.push(consideration);
        self
    }

    pub fn add(&mut self, consideration: Consideration<C, A>) {
        self.considerations.push(consideration);
    }
}

impl<C, A> Default for HighestScoreReasoner<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> Reasoner<C, A> for HighestScoreReasoner<C, A> {
    fn select(&self, ctx: &C) -> Option<&A> {
        let mut best: Option<(usize, f32)> = None;

        for (index, consideration) in self.considerations.iter().enumerate() {
            let score = consideration.score(ctx);
            tracing::debug!("  consideration {}: score={}", index, score);

            if score.is_nan() {
                continue;
            }
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let (index, score) = best?;
        tracing::debug!(
            "HighestScoreReasoner: best consideration = {} (score={})",
            index,
            score
        );
        Some(self.considerations[index].action())
    }
}
