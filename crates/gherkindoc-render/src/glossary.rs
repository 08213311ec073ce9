//! Step glossary: every distinct step phrase and where it is used.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use gherkindoc_markup::{Document, INDENT_DEPTH, escape_with_slashes};

/// Step types that lead a grouped glossary, in this order.
const MAIN_STEP_TYPES: [&str; 3] = ["Given", "When", "Then"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct GlossaryEntry {
    /// Spellings that normalize to this entry.
    names: BTreeSet<String>,
    /// Type of the first step recorded under this entry.
    step_type: String,
    locations: BTreeMap<PathBuf, BTreeSet<usize>>,
}

impl GlossaryEntry {
    fn usage(&self) -> (usize, usize) {
        let references = self.locations.values().map(BTreeSet::len).sum();
        (self.locations.len(), references)
    }

    /// Most used first, then by spelling.
    fn display_order(&self, other: &Self) -> Ordering {
        other
            .usage()
            .cmp(&self.usage())
            .then_with(|| self.names.cmp(&other.names))
    }

    fn merge(&mut self, other: GlossaryEntry) {
        if self.step_type.is_empty() {
            self.step_type = other.step_type;
        }
        self.names.extend(other.names);
        for (location, lines) in other.locations {
            self.locations.entry(location).or_default().extend(lines);
        }
    }
}

/// Case-insensitive index of step names to their source locations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepGlossary {
    entries: BTreeMap<String, GlossaryEntry>,
}

impl StepGlossary {
    /// Record one use of `step_name` at `location:line`.
    ///
    /// Recording the same reference twice has no effect.
    pub fn add_reference(&mut self, step_name: &str, step_type: &str, location: &Path, line: usize) {
        let entry = self.entries.entry(step_name.to_lowercase()).or_default();
        if entry.step_type.is_empty() {
            step_type.clone_into(&mut entry.step_type);
        }
        entry.names.insert(step_name.to_owned());
        entry
            .locations
            .entry(location.to_path_buf())
            .or_default()
            .insert(line);
    }

    pub fn merge(&mut self, other: StepGlossary) {
        for (key, entry) in other.entries {
            self.entries.entry(key).or_default().merge(entry);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct (case-normalized) steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Build the glossary document, or `None` when no step was recorded.
    ///
    /// With `group_by_type` the glossary gets one section per step type,
    /// `Given`, `When` and `Then` first.
    #[must_use]
    pub fn render(&self, project: &str, group_by_type: bool) -> Option<Document> {
        if self.entries.is_empty() {
            return None;
        }
        let mut doc = Document::new();
        doc.create_section(1, &format!("{project} Glossary"));

        if group_by_type {
            let mut groups: BTreeMap<&str, Vec<&GlossaryEntry>> = BTreeMap::new();
            for entry in self.entries.values() {
                groups.entry(entry.step_type.as_str()).or_default().push(entry);
            }
            for step_type in MAIN_STEP_TYPES {
                if let Some(entries) = groups.remove(step_type) {
                    doc.create_section(2, step_type);
                    render_entries(&mut doc, entries);
                }
            }
            for (step_type, entries) in groups {
                doc.create_section(2, step_type);
                render_entries(&mut doc, entries);
            }
        } else {
            render_entries(&mut doc, self.entries.values().collect());
        }
        Some(doc)
    }
}

fn render_entries(doc: &mut Document, mut entries: Vec<&GlossaryEntry>) {
    let terms: BTreeSet<&str> = entries
        .iter()
        .flat_map(|entry| entry.names.iter().map(String::as_str))
        .collect();
    for term in terms {
        doc.add(&format!("- :term:`{}`", escape_with_slashes(term)));
    }
    doc.blank_line();

    doc.add(".. glossary::");
    entries.sort_by(|a, b| a.display_order(b));
    for entry in entries {
        for term in &entry.names {
            doc.add_output(&escape_with_slashes(term), 1, INDENT_DEPTH);
        }
        for (location, lines) in &entry.locations {
            let lines: Vec<String> = lines.iter().map(ToString::to_string).collect();
            doc.add_output(
                &format!("| {}: {}", location.display(), lines.join(", ")),
                1,
                INDENT_DEPTH * 2,
            );
        }
        doc.blank_line();
    }
}
