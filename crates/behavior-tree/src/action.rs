//! Leaf nodes backed by closures.

use crate::behavior::Conditional;
use crate::{Behavior, Status};

type ActionFn<C> = Box<dyn Fn(&mut C) -> Status + Send + Sync>;

/// Runs a closure on every tick and returns its status.
///
/// # Example
///
/// ```rust,ignore
/// use behavior_tree::{ExecuteAction, Status};
///
/// let rest = ExecuteAction::new(|npc: &mut Npc| {
///     npc.stamina += 1;
///     Status::Success
/// });
/// ```
pub struct ExecuteAction<C> {
    action: ActionFn<C>,
}

impl<C> ExecuteAction<C> {
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(&mut C) -> Status + Send + Sync + 'static,
    {
        Self {
            action: Box::new(action),
        }
    }
}

impl<C> Behavior<C> for ExecuteAction<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.action)(ctx)
    }
}

/// Wraps an [`ExecuteAction`] so it can stand in for a [`Conditional`].
///
/// Useful when a check is only expressible as a closure, e.g. "is there a
/// path to the exit", and the tree slot demands a conditional.
pub struct ActionConditional<C> {
    inner: ExecuteAction<C>,
}

impl<C> ActionConditional<C> {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&mut C) -> Status + Send + Sync + 'static,
    {
        Self {
            inner: ExecuteAction::new(check),
        }
    }
}

impl<C> From<ExecuteAction<C>> for ActionConditional<C> {
    fn from(inner: ExecuteAction<C>) -> Self {
        Self { inner }
    }
}

impl<C> Behavior<C> for ActionConditional<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        self.inner.tick(ctx)
    }
}

impl<C> Conditional<C> for ActionConditional<C> {}
