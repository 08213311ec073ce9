//! Parser adapters built on the `gherkin` crate.

use std::path::Path;

use gherkin::{GherkinEnv, StepType};

use crate::model::{Background, Examples, Feature, Scenario, Step, Table, description_lines};
use crate::parser::{FeatureParser, ParseError};

/// Standard Gherkin.
#[derive(Debug, Clone, Copy, Default)]
pub struct GherkinParser;

impl GherkinParser {
    pub const NAME: &'static str = "gherkin";
}

impl FeatureParser for GherkinParser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(&self, source: &Path) -> Result<Feature, ParseError> {
        parse_with(source, Dialect::Gherkin)
    }
}

/// Gherkin as pytest-bdd reads it.
///
/// Differences from [`GherkinParser`]:
/// - a `Scenario` with examples is reported as `Scenario Outline`
/// - examples tables never carry tags
/// - step names stop at their first line
/// - doc string lines are trimmed and quote-only lines dropped
#[derive(Debug, Clone, Copy, Default)]
pub struct PytestBddParser;

impl PytestBddParser {
    pub const NAME: &'static str = "pytest-bdd";
}

impl FeatureParser for PytestBddParser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(&self, source: &Path) -> Result<Feature, ParseError> {
        parse_with(source, Dialect::PytestBdd)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    Gherkin,
    PytestBdd,
}

fn parse_with(source: &Path, dialect: Dialect) -> Result<Feature, ParseError> {
    let parsed = gherkin::Feature::parse_path(source, GherkinEnv::default()).map_err(|e| {
        ParseError::Invalid {
            path: source.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    let feature = Converter {
        filename: source,
        dialect,
    }
    .feature(parsed);
    tracing::debug!(
        path = %source.display(),
        scenarios = feature.scenarios.len(),
        "Parsed feature"
    );
    Ok(feature)
}

struct Converter<'a> {
    filename: &'a Path,
    dialect: Dialect,
}

impl Converter<'_> {
    fn feature(&self, feature: gherkin::Feature) -> Feature {
        let mut scenarios: Vec<(usize, Scenario)> = feature
            .scenarios
            .into_iter()
            .map(|scenario| (scenario.position.line, self.scenario(scenario, &[])))
            .collect();
        for rule in feature.rules {
            let rule_tags = strip_tags(rule.tags);
            for scenario in rule.scenarios {
                scenarios.push((scenario.position.line, self.scenario(scenario, &rule_tags)));
            }
        }
        scenarios.sort_by_key(|(line, _)| *line);

        Feature {
            keyword: feature.keyword.trim().to_owned(),
            name: feature.name.trim().to_owned(),
            description: description_lines(feature.description.as_deref()),
            tags: strip_tags(feature.tags),
            background: feature.background.map(|bg| self.background(bg)),
            scenarios: scenarios.into_iter().map(|(_, scenario)| scenario).collect(),
            examples: Vec::new(),
            filename: self.filename.to_path_buf(),
        }
    }

    fn background(&self, background: gherkin::Background) -> Background {
        Background {
            keyword: background.keyword.trim().to_owned(),
            name: String::new(),
            steps: background.steps.into_iter().map(|s| self.step(s)).collect(),
        }
    }

    fn scenario(&self, scenario: gherkin::Scenario, rule_tags: &[String]) -> Scenario {
        let examples: Vec<Examples> = scenario
            .examples
            .into_iter()
            .map(|ex| self.examples(ex))
            .collect();

        let keyword = match self.dialect {
            Dialect::Gherkin => scenario.keyword.trim().to_owned(),
            Dialect::PytestBdd => {
                let has_examples = examples
                    .iter()
                    .any(|ex| ex.table.as_ref().is_some_and(|t| !t.rows.is_empty()));
                outline_keyword(scenario.keyword.trim(), has_examples)
            }
        };

        let mut tags = rule_tags.to_vec();
        for tag in strip_tags(scenario.tags) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Scenario {
            keyword,
            name: scenario.name.trim().to_owned(),
            description: description_lines(scenario.description.as_deref()),
            tags,
            steps: scenario.steps.into_iter().map(|s| self.step(s)).collect(),
            examples,
        }
    }

    fn examples(&self, examples: gherkin::Examples) -> Examples {
        let tags = match self.dialect {
            Dialect::Gherkin => strip_tags(examples.tags),
            Dialect::PytestBdd => Vec::new(),
        };
        Examples {
            keyword: examples.keyword.trim().to_owned(),
            name: examples.name.as_deref().unwrap_or_default().trim().to_owned(),
            tags,
            table: examples.table.and_then(|t| Table::from_rows(t.rows)),
        }
    }

    fn step(&self, step: gherkin::Step) -> Step {
        let step_type = match step.ty {
            StepType::Given => "Given",
            StepType::When => "When",
            StepType::Then => "Then",
        };
        let name = match self.dialect {
            Dialect::Gherkin => step.value.trim(),
            Dialect::PytestBdd => step.value.lines().next().unwrap_or_default().trim(),
        };
        Step {
            keyword: step.keyword.trim().to_owned(),
            step_type: step_type.to_owned(),
            name: name.to_owned(),
            table: step.table.and_then(|t| Table::from_rows(t.rows)),
            text: step.docstring.as_deref().and_then(|d| self.text_lines(d)),
            filename: self.filename.to_path_buf(),
            line: step.position.line,
        }
    }

    fn text_lines(&self, docstring: &str) -> Option<Vec<String>> {
        let lines: Vec<String> = match self.dialect {
            Dialect::Gherkin => docstring.lines().map(str::to_owned).collect(),
            Dialect::PytestBdd => docstring
                .lines()
                .filter(|line| !line.chars().all(|c| matches!(c, '\'' | '"' | ' ')))
                .map(|line| line.trim().to_owned())
                .collect(),
        };
        (!lines.is_empty()).then_some(lines)
    }
}

/// pytest-bdd names a plain `Scenario` with examples `Scenario Outline`.
fn outline_keyword(keyword: &str, has_examples: bool) -> String {
    if keyword == "Scenario" && has_examples {
        "Scenario Outline".to_owned()
    } else {
        keyword.to_owned()
    }
}

fn strip_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| match tag.strip_prefix('@') {
            Some(bare) => bare.to_owned(),
            None => tag,
        })
        .collect()
}
