use std::fmt;

use tracing::trace;

use crate::directive::Directive;
use crate::message::NetworkMessage;

/// An ordered list of directives assembled at runtime.
///
/// Use it when the steps are only known while the program runs, e.g. a header set
/// read from a route table. Steps apply in the order they were pushed. A pipeline
/// is a directive itself, so pipelines nest.
pub struct Pipeline<M> {
    steps: Vec<Box<dyn Directive<M>>>,
}

impl<M: NetworkMessage> Pipeline<M> {
    pub fn new() -> Self {
        Self { steps: vec![] }
    }

    /// Appends a step to the end of the pipeline
    pub fn push<D: Directive<M> + 'static>(&mut self, directive: D) -> &mut Self {
        self.steps.push(Box::new(directive));
        self
    }

    /// Appends a step, builder style
    #[must_use]
    pub fn then<D: Directive<M> + 'static>(mut self, directive: D) -> Self {
        self.push(directive);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<M: NetworkMessage> Default for Pipeline<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: NetworkMessage> Directive<M> for Pipeline<M> {
    fn apply(&self, message: &mut M) {
        trace!(steps = self.steps.len(), "apply directive pipeline");
        for step in &self.steps {
            step.apply(message);
        }
    }
}

impl<M> fmt::Debug for Pipeline<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline").field("steps", &self.steps.len()).finish()
    }
}

impl<M: NetworkMessage, D: Directive<M> + 'static> Extend<D> for Pipeline<M> {
    fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
        for directive in iter {
            self.push(directive);
        }
    }
}
