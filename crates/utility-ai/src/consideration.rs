use crate::Appraisal;

/// An action paired with the appraisal that decides when it is worth taking.
pub struct Consideration<C, A> {
    appraisal: Box<dyn Appraisal<C>>,
    action: A,
}

impl<C, A> Consideration<C, A> {
    pub fn new(appraisal: impl Appraisal<C> + 'static, action: A) -> Self {
        Self {
            appraisal: Box::new(appraisal),
            action,
        }
    }

    #[inline]
    pub fn score(&self, ctx: &C) -> f32 {
        self.appraisal.score(ctx)
    }

    #[inline]
    pub fn action(&self) -> &A {
        &self.action
    }
}
