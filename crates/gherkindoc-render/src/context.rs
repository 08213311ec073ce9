use crate::glossary::StepGlossary;
use crate::tags::TagRegistry;

/// State accumulated across all features of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub glossary: StepGlossary,
    pub tags: TagRegistry,
}

impl RenderContext {
    /// Fold another context (for example one filled by a separate worker) into this one.
    pub fn merge(&mut self, other: RenderContext) {
        self.glossary.merge(other.glossary);
        self.tags.merge(other.tags);
    }
}
