//! Feature to rST rendering.

use std::path::PathBuf;
use std::sync::{Arc, LazyLock};

use gherkindoc_feature::{Examples, Feature, Scenario, Statement, Step, Table, TagFilter};
use gherkindoc_markup::{Document, INDENT_DEPTH, TABLE_QUOTE, escape, hyperlink};
use regex::Regex;

use crate::context::RenderContext;
use crate::decoration::StepDecoration;
use crate::resolver::UrlResolver;

/// Escaped scenario outline placeholder, e.g. `\<name\>`.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\\<.*?>)").unwrap());

/// Rendering options shared by every feature of a run.
#[derive(Clone)]
pub struct RendererConfig {
    /// Step locations in the glossary are made relative to this directory.
    pub root_path: PathBuf,
    /// Fold background steps into each scenario instead of a separate section.
    pub integrate_background: bool,
    /// Decoration for folded background steps.
    pub background_step: StepDecoration,
    /// Emit descriptions without escaping.
    pub raw_descriptions: bool,
    /// Cell delimiter for `csv-table` directives.
    pub quote: char,
    pub tag_filter: TagFilter,
    pub tag_url: Option<Arc<dyn UrlResolver>>,
    pub step_url: Option<Arc<dyn UrlResolver>>,
}

impl RendererConfig {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            integrate_background: false,
            background_step: StepDecoration::Plain,
            raw_descriptions: false,
            quote: TABLE_QUOTE,
            tag_filter: TagFilter::default(),
            tag_url: None,
            step_url: None,
        }
    }
}

/// Renders parsed features into rST documents.
#[derive(Clone)]
pub struct FeatureRenderer {
    config: RendererConfig,
}

impl FeatureRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Render `feature`, recording its steps and tags in `context`.
    ///
    /// Returns `None` when no scenario survives tag filtering; nothing is
    /// recorded in that case.
    pub fn render(&self, feature: &Feature, context: &mut RenderContext) -> Option<Document> {
        let scenarios = self.config.tag_filter.filter_scenarios(feature);
        if scenarios.is_empty() {
            tracing::debug!(path = %feature.filename.display(), "No scenarios to document");
            return None;
        }

        let mut writer = FeatureWriter {
            config: &self.config,
            context,
            doc: Document::new(),
        };
        writer.feature(feature, &scenarios);
        Some(writer.doc)
    }
}

struct FeatureWriter<'a> {
    config: &'a RendererConfig,
    context: &'a mut RenderContext,
    doc: Document,
}

impl FeatureWriter<'_> {
    fn feature(&mut self, feature: &Feature, scenarios: &[Scenario]) {
        self.register_tags(&feature.tags);
        self.section(1, feature);
        self.description(feature);

        for examples in &feature.examples {
            self.examples(examples, &[]);
        }

        let background = feature.background.as_ref();
        if let Some(background) = background
            && !self.config.integrate_background
        {
            self.section(2, background);
            self.steps(&background.steps, &StepDecoration::Plain);
            self.doc.blank_line();
        }

        for scenario in scenarios {
            self.register_tags(&scenario.tags);
            self.section(2, scenario);
            self.tags(&scenario.tags, &[feature]);
            self.description(scenario);
            if let Some(background) = background
                && self.config.integrate_background
            {
                let config = self.config;
                self.steps(&background.steps, &config.background_step);
            }
            self.steps(&scenario.steps, &StepDecoration::Plain);
            self.doc.blank_line();
            for examples in &scenario.examples {
                self.examples(examples, &[scenario, feature]);
            }
        }
    }

    fn register_tags(&mut self, tags: &[String]) {
        for tag in tags {
            self.context.tags.register(tag);
        }
    }

    fn section(&mut self, level: usize, statement: &dyn Statement) {
        let title = if statement.name().is_empty() {
            statement.keyword().to_owned()
        } else {
            format!("{}: {}", statement.keyword(), escape(statement.name()))
        };
        self.doc.create_section(level, &title);
    }

    /// Description lines, with a paragraph break after sentences and at the end.
    fn description(&mut self, statement: &dyn Statement) {
        let Some(lines) = statement.description() else {
            return;
        };
        for (index, line) in lines.iter().enumerate() {
            if self.config.raw_descriptions {
                self.doc.add_output(line, 1, INDENT_DEPTH);
            } else {
                self.doc.add_output(&escape(line), 1, INDENT_DEPTH);
            }
            if line.ends_with('.') || index + 1 == lines.len() {
                self.doc.blank_line();
            }
        }
    }

    fn tags(&mut self, tags: &[String], parents: &[&dyn Statement]) {
        let tagged_parents: Vec<&&dyn Statement> =
            parents.iter().filter(|parent| !parent.tags().is_empty()).collect();
        if tags.is_empty() && tagged_parents.is_empty() {
            return;
        }

        let mut tag_text = self.tag_list(tags);
        for parent in tagged_parents {
            tag_text.push_str(&format!(
                " (Inherited from {}: {} )",
                parent.keyword(),
                self.tag_list(parent.tags())
            ));
        }
        self.doc.add_output(".. pull-quote::", 2, 0);
        self.doc
            .add_output(&format!("Tagged: {}", tag_text.trim()), 2, INDENT_DEPTH);
    }

    fn tag_list(&self, tags: &[String]) -> String {
        tags.iter()
            .map(|tag| match resolve_url(self.config.tag_url.as_deref(), tag) {
                Some(url) => hyperlink(tag, &url),
                None => escape(tag),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn steps(&mut self, steps: &[Step], decoration: &StepDecoration) {
        for step in steps {
            let location = step
                .filename
                .strip_prefix(&self.config.root_path)
                .unwrap_or(&step.filename);
            self.context
                .glossary
                .add_reference(&step.name, &step.step_type, location, step.line);

            let formatted = decoration.apply(&self.format_step(step));
            self.doc.add(&format!("- {formatted}"));
            if let Some(table) = &step.table {
                self.doc.blank_line();
                self.table(table, true);
                self.doc.blank_line();
            }
            if let Some(text) = &step.text {
                self.text(text);
            }
        }
    }

    /// Keyword and escaped name, placeholders in bold, or a link when the
    /// step resolves to a URL.
    fn format_step(&self, step: &Step) -> String {
        let name = escape(&step.name);
        if let Some(url) = resolve_url(self.config.step_url.as_deref(), &step.name) {
            return hyperlink(&format!("{} {name}", step.keyword), &url);
        }
        let name = PLACEHOLDER_RE.replace_all(&name, "**$1**");
        format!("{} {name}", step.keyword)
    }

    fn text(&mut self, text: &[String]) {
        self.doc.blank_line();
        self.doc.add_output("::", 2, 0);
        for line in text.iter().flat_map(|chunk| chunk.lines()) {
            self.doc.add_output(&escape(line), 2, INDENT_DEPTH);
        }
    }

    fn examples(&mut self, examples: &Examples, parents: &[&dyn Statement]) {
        self.register_tags(&examples.tags);
        self.section(3, examples);
        self.tags(&examples.tags, parents);
        if let Some(table) = &examples.table {
            self.table(table, false);
        }
        self.doc.blank_line();
    }

    fn table(&mut self, table: &Table, inline: bool) {
        let quote = self.config.quote;
        let mut indent = if inline { INDENT_DEPTH } else { 0 };
        self.doc.add_output(".. csv-table::", 1, indent);
        indent += INDENT_DEPTH;
        self.doc.add_output(
            &format!(":header: {}", quoted_row(&table.headings, quote)),
            1,
            indent,
        );
        self.doc.add_output(&format!(":quote: {quote}"), 2, indent);
        for row in &table.rows {
            self.doc.add_output(&quoted_row(row, quote), 1, indent);
        }
    }
}

fn resolve_url(resolver: Option<&dyn UrlResolver>, text: &str) -> Option<String> {
    resolver?.resolve(text).filter(|url| !url.is_empty())
}

/// Escape each cell and wrap it in `quote`, separated by `, `.
fn quoted_row(cells: &[String], quote: char) -> String {
    let separator = format!("{quote}, {quote}");
    let cells: Vec<String> = cells.iter().map(|cell| escape(cell)).collect();
    format!("{quote}{}{quote}", cells.join(&separator))
}
