/// Scores how desirable an option is in the given context.
///
/// Any `Fn(&C) -> f32` closure is an appraisal.
pub trait Appraisal<C>: Send + Sync {
    fn score(&self, ctx: &C) -> f32;
}

impl<C, F> Appraisal<C> for F
where
    F: Fn(&C) -> f32 + Send + Sync,
{
    #[inline]
    fn score(&self, ctx: &C) -> f32 {
        self(ctx)
    }
}
