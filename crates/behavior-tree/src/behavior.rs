//! Core behavior trait.
//!
//! [`Behavior`] is the seam between a tree and the agent it drives. It is
//! generic over a context type `C`, usually a blackboard holding the agent's
//! view of the world and any long-lived helpers such as a pathfinder.

use crate::Status;

/// A behavior tree node that can be ticked against a context.
pub trait Behavior<C>: Send + Sync {
    /// Tick this node once.
    ///
    /// `ctx` is mutable so nodes can keep intermediate results (a planned
    /// path, a chosen target) on the blackboard between ticks.
    fn tick(&self, ctx: &mut C) -> Status;
}

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

/// A behavior that only inspects the context and answers yes or no.
///
/// Conditionals are expected to return `Success` or `Failure`; the trait is a
/// marker so trees can require a check where an action would be wrong.
pub trait Conditional<C>: Behavior<C> {}

impl<C> Behavior<C> for Box<dyn Conditional<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

impl<C> Conditional<C> for Box<dyn Conditional<C>> {}
