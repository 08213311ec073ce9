//! Parser-independent feature document model.

use std::path::PathBuf;

/// Common accessors shared by features, scenarios, backgrounds and examples.
pub trait Statement {
    /// Gherkin keyword as written in the source (`Feature`, `Scenario Outline`, ...).
    fn keyword(&self) -> &str;

    fn name(&self) -> &str;

    /// Tags without the leading `@`.
    fn tags(&self) -> &[String] {
        &[]
    }

    /// Description lines, trimmed, without blank lines.
    fn description(&self) -> Option<&[String]> {
        None
    }
}

/// A data table attached to a step or used as an examples table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headings: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Split raw rows into a heading row and data rows.
    ///
    /// Returns `None` for a table without any row.
    #[must_use]
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        let headings = rows.remove(0);
        Some(Self { headings, rows })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub keyword: String,
    /// Resolved step type (`Given`, `When` or `Then`); `And`/`But` take the
    /// type of the step before them.
    pub step_type: String,
    pub name: String,
    pub table: Option<Table>,
    /// Doc string lines.
    pub text: Option<Vec<String>>,
    /// Path of the feature file the step was read from.
    pub filename: PathBuf,
    /// 1-based source line.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Examples {
    pub keyword: String,
    pub name: String,
    pub tags: Vec<String>,
    pub table: Option<Table>,
}

impl Statement for Examples {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    pub keyword: String,
    pub name: String,
    pub steps: Vec<Step>,
}

impl Statement for Background {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub keyword: String,
    pub name: String,
    pub description: Option<Vec<String>>,
    pub tags: Vec<String>,
    pub steps: Vec<Step>,
    pub examples: Vec<Examples>,
}

impl Statement for Scenario {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn description(&self) -> Option<&[String]> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub keyword: String,
    pub name: String,
    pub description: Option<Vec<String>>,
    pub tags: Vec<String>,
    pub background: Option<Background>,
    pub scenarios: Vec<Scenario>,
    /// Feature-level examples. Only some dialects have them.
    pub examples: Vec<Examples>,
    pub filename: PathBuf,
}

impl Statement for Feature {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn description(&self) -> Option<&[String]> {
        self.description.as_deref()
    }
}

/// Split free text into trimmed, non-empty lines.
pub(crate) fn description_lines(text: Option<&str>) -> Option<Vec<String>> {
    let lines: Vec<String> = text?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    (!lines.is_empty()).then_some(lines)
}
