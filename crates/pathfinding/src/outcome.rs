//! Result of advancing a search.

/// How a call to [`crate::WeightedPathfinder::continue_search`] ended.
///
/// `Exhausted` and `BudgetExceeded` are deliberately distinct: the first means
/// no remaining goal can ever be reached, the second means the search stopped
/// early and may be continued with a fresh budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome<T> {
    /// A pending goal was reached. It has been removed from the pending set.
    Found(T),

    /// The frontier ran dry. No pending goal is reachable from the start.
    Exhausted,

    /// The cost budget was spent while the frontier still had entries.
    BudgetExceeded,
}

impl<T> SearchOutcome<T> {
    /// Returns `true` if a goal was reached.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Returns `true` if further calls can still make progress.
    #[inline]
    pub fn is_resumable(&self) -> bool {
        matches!(self, SearchOutcome::BudgetExceeded)
    }

    /// The reached goal, if any.
    #[inline]
    pub fn found(self) -> Option<T> {
        match self {
            SearchOutcome::Found(goal) => Some(goal),
            _ => None,
        }
    }

    /// The reached goal by reference, if any.
    #[inline]
    pub fn as_found(&self) -> Option<&T> {
        match self {
            SearchOutcome::Found(goal) => Some(goal),
            _ => None,
        }
    }
}
