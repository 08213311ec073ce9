use std::collections::BTreeSet;

use gherkindoc_markup::Document;

/// Every tag seen during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRegistry {
    tags: BTreeSet<String>,
}

impl TagRegistry {
    pub fn register(&mut self, tag: &str) {
        if !self.tags.contains(tag) {
            self.tags.insert(tag.to_owned());
        }
    }

    pub fn merge(&mut self, other: TagRegistry) {
        self.tags.extend(other.tags);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Build the tag list document, or `None` when no tag was registered.
    #[must_use]
    pub fn render(&self, project: &str) -> Option<Document> {
        if self.tags.is_empty() {
            return None;
        }
        let mut doc = Document::new();
        doc.create_section(1, &format!("{project} Tag List"));
        for tag in &self.tags {
            doc.add(&format!("* {tag}"));
            doc.blank_line();
        }
        Some(doc)
    }
}
