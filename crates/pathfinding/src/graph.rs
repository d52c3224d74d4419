//! Graph collaborator trait.
//!
//! The pathfinder does not own a graph representation. Callers expose their
//! world (tile maps, navigation meshes, state spaces) through
//! [`WeightedGraph`], and the engine only ever asks two questions: where can I
//! go from here, and what does that step cost.

use std::rc::Rc;
use std::sync::Arc;

/// Cost of a single edge, and the unit of search budgets.
///
/// Costs are unsigned, so the non-negative edge requirement of uniform-cost
/// search holds by construction.
pub type Cost = u32;

/// Cumulative cost of a path.
///
/// Wider than [`Cost`] so that summing edges never collides with the
/// [`UNBOUNDED`] budget or wraps on long, expensive paths.
pub type PathCost = u64;

/// Budget value that places no limit on how far a search may advance.
///
/// It is a sentinel, not a cost: a search given this budget has no cutoff.
pub const UNBOUNDED: Cost = Cost::MAX;

/// A weighted directed graph queried by the pathfinder.
///
/// # Contract
///
/// - `neighbors` may return an empty list. Its order only affects which of
///   several equally cheap paths is reported.
/// - `cost` is only called with pairs returned by `neighbors`. What it returns
///   for other pairs is never observed.
/// - Both methods should be deterministic for the duration of a search.
///   Inconsistent answers yield wrong paths, never a panic in the engine.
pub trait WeightedGraph<T> {
    /// Nodes reachable from `node` by following a single edge.
    fn neighbors(&self, node: &T) -> Vec<T>;

    /// Cost of the edge `from -> to`.
    fn cost(&self, from: &T, to: &T) -> Cost;
}

impl<T, G: WeightedGraph<T> + ?Sized> WeightedGraph<T> for &G {
    #[inline]
    fn neighbors(&self, node: &T) -> Vec<T> {
        (**self).neighbors(node)
    }

    #[inline]
    fn cost(&self, from: &T, to: &T) -> Cost {
        (**self).cost(from, to)
    }
}

impl<T, G: WeightedGraph<T> + ?Sized> WeightedGraph<T> for Box<G> {
    #[inline]
    fn neighbors(&self, node: &T) -> Vec<T> {
        (**self).neighbors(node)
    }

    #[inline]
    fn cost(&self, from: &T, to: &T) -> Cost {
        (**self).cost(from, to)
    }
}

impl<T, G: WeightedGraph<T> + ?Sized> WeightedGraph<T> for Rc<G> {
    #[inline]
    fn neighbors(&self, node: &T) -> Vec<T> {
        (**self).neighbors(node)
    }

    #[inline]
    fn cost(&self, from: &T, to: &T) -> Cost {
        (**self).cost(from, to)
    }
}

/// Shared graphs let several engines search the same world independently.
impl<T, G: WeightedGraph<T> + ?Sized> WeightedGraph<T> for Arc<G> {
    #[inline]
    fn neighbors(&self, node: &T) -> Vec<T> {
        (**self).neighbors(node)
    }

    #[inline]
    fn cost(&self, from: &T, to: &T) -> Cost {
        (**self).cost(from, to)
    }
}
