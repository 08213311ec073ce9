//! Configuration management for gherkindoc.
//!
//! Parses `gherkindoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings are applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `output.project`
//! - `resolvers.<name>.url`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "gherkindoc.toml";

const DEFAULT_TOC_NAME: &str = "gherkin";
const DEFAULT_MAX_TOC_DEPTH: usize = 4;
const DEFAULT_PARSER: &str = "gherkin";
const DEFAULT_QUOTE: &str = "\u{201C}";
const DEFAULT_BACKGROUND_STEP_FORMAT: &str = "{}";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub source_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub exclude: Option<Vec<String>>,
    pub include_private: Option<bool>,
    pub parser: Option<String>,
    pub toc_name: Option<String>,
    pub max_toc_depth: Option<usize>,
    pub project: Option<String>,
    pub glossary_name: Option<String>,
    pub group_glossary: Option<bool>,
    pub tag_list_name: Option<String>,
    pub integrate_background: Option<bool>,
    pub background_step_format: Option<String>,
    pub raw_descriptions: Option<bool>,
    pub include_tags: Option<Vec<String>>,
    pub exclude_tags: Option<Vec<String>>,
    pub tag_url: Option<String>,
    pub step_url: Option<String>,
    pub display_name: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Source tree configuration (paths are relative strings from TOML).
    source: SourceConfigRaw,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Rendering options.
    pub render: RenderConfig,
    /// Named URL resolvers, referenced by `render.tag_url` and `render.step_url`.
    pub resolvers: BTreeMap<String, ResolverConfig>,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SourceConfigRaw {
    dir: Option<String>,
    exclude: Vec<String>,
    include_private: bool,
    parser: Option<String>,
}

/// Resolved source tree configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Root of the feature tree. Required before building.
    pub dir: Option<PathBuf>,
    /// Shell-style patterns for directories (full path) and files (name).
    pub exclude: Vec<String>,
    /// Also descend into `_`-prefixed directories.
    pub include_private: bool,
    /// Name of the feature parser.
    pub parser: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: None,
            exclude: Vec::new(),
            include_private: false,
            parser: DEFAULT_PARSER.to_owned(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OutputConfigRaw {
    dir: Option<String>,
    toc_name: Option<String>,
    max_toc_depth: Option<usize>,
    project: Option<String>,
    glossary_name: Option<String>,
    group_glossary: bool,
    tag_list_name: Option<String>,
}

/// Resolved output configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory receiving the generated documents. Required before building.
    pub dir: Option<PathBuf>,
    pub toc_name: String,
    pub max_toc_depth: usize,
    /// Project name for glossary and tag list headings; the source
    /// directory name when unset.
    pub project: Option<String>,
    pub glossary_name: Option<String>,
    pub group_glossary: bool,
    pub tag_list_name: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            toc_name: DEFAULT_TOC_NAME.to_owned(),
            max_toc_depth: DEFAULT_MAX_TOC_DEPTH,
            project: None,
            glossary_name: None,
            group_glossary: false,
            tag_list_name: None,
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Fold background steps into every scenario.
    pub integrate_background: bool,
    /// Decoration for integrated background steps; one `{}` placeholder.
    pub background_step_format: String,
    /// Emit descriptions as raw rST.
    pub raw_descriptions: bool,
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    /// Quote character delimiting every header and data cell of a table.
    pub quote: String,
    /// Resolver turning tags into links.
    pub tag_url: Option<String>,
    /// Resolver turning steps into links.
    pub step_url: Option<String>,
    /// Directory display-name converter.
    pub display_name: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            integrate_background: false,
            background_step_format: DEFAULT_BACKGROUND_STEP_FORMAT.to_owned(),
            raw_descriptions: false,
            include_tags: Vec::new(),
            exclude_tags: Vec::new(),
            quote: DEFAULT_QUOTE.to_owned(),
            tag_url: None,
            step_url: None,
            display_name: None,
        }
    }
}

/// A named URL resolver: a regex matched against the tag or step text and
/// a URL template using its capture groups (`$1`, `${name}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    pub pattern: String,
    pub url: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.project`").
        field: String,
        /// Error message (e.g., "${`PROJECT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a named resolver to be declared.
fn require_resolver(
    resolvers: &BTreeMap<String, ResolverConfig>,
    name: Option<&str>,
    field: &str,
) -> Result<(), ConfigError> {
    match name {
        Some(name) if !resolvers.contains_key(name) => Err(ConfigError::Validation(format!(
            "{field} names unknown resolver '{name}'"
        ))),
        _ => Ok(()),
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `gherkindoc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The merged
    /// result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        let source = &mut self.source_resolved;
        if let Some(dir) = &settings.source_dir {
            source.dir = Some(dir.clone());
        }
        if let Some(exclude) = &settings.exclude {
            source.exclude.clone_from(exclude);
        }
        if let Some(include_private) = settings.include_private {
            source.include_private = include_private;
        }
        if let Some(parser) = &settings.parser {
            source.parser.clone_from(parser);
        }

        let output = &mut self.output_resolved;
        if let Some(dir) = &settings.output_dir {
            output.dir = Some(dir.clone());
        }
        if let Some(toc_name) = &settings.toc_name {
            output.toc_name.clone_from(toc_name);
        }
        if let Some(max_toc_depth) = settings.max_toc_depth {
            output.max_toc_depth = max_toc_depth;
        }
        if let Some(project) = &settings.project {
            output.project = Some(project.clone());
        }
        if let Some(glossary_name) = &settings.glossary_name {
            output.glossary_name = Some(glossary_name.clone());
        }
        if let Some(group_glossary) = settings.group_glossary {
            output.group_glossary = group_glossary;
        }
        if let Some(tag_list_name) = &settings.tag_list_name {
            output.tag_list_name = Some(tag_list_name.clone());
        }

        let render = &mut self.render;
        if let Some(integrate_background) = settings.integrate_background {
            render.integrate_background = integrate_background;
        }
        if let Some(format) = &settings.background_step_format {
            render.background_step_format.clone_from(format);
        }
        if let Some(raw_descriptions) = settings.raw_descriptions {
            render.raw_descriptions = raw_descriptions;
        }
        if let Some(include_tags) = &settings.include_tags {
            render.include_tags.clone_from(include_tags);
        }
        if let Some(exclude_tags) = &settings.exclude_tags {
            render.exclude_tags.clone_from(exclude_tags);
        }
        if let Some(tag_url) = &settings.tag_url {
            render.tag_url = Some(tag_url.clone());
        }
        if let Some(step_url) = &settings.step_url {
            render.step_url = Some(step_url.clone());
        }
        if let Some(display_name) = &settings.display_name {
            render.display_name = Some(display_name.clone());
        }
    }

    /// Get the source directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if neither the config file nor the
    /// command line named one.
    pub fn require_source_dir(&self) -> Result<&Path, ConfigError> {
        self.source_resolved.dir.as_deref().ok_or_else(|| {
            ConfigError::Validation("source directory required (source.dir)".to_owned())
        })
    }

    /// Get the output directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if neither the config file nor the
    /// command line named one.
    pub fn require_output_dir(&self) -> Result<&Path, ConfigError> {
        self.output_resolved.dir.as_deref().ok_or_else(|| {
            ConfigError::Validation("output directory required (output.dir)".to_owned())
        })
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`] after CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_output()?;
        self.validate_render()?;
        self.validate_resolvers()?;
        Ok(())
    }

    fn validate_output(&self) -> Result<(), ConfigError> {
        let output = &self.output_resolved;
        require_non_empty(&output.toc_name, "output.toc_name")?;
        if output.max_toc_depth == 0 {
            return Err(ConfigError::Validation(
                "output.max_toc_depth must be greater than 0".to_owned(),
            ));
        }
        if let Some(name) = &output.glossary_name {
            require_non_empty(name, "output.glossary_name")?;
        }
        if let Some(name) = &output.tag_list_name {
            require_non_empty(name, "output.tag_list_name")?;
        }
        Ok(())
    }

    fn validate_render(&self) -> Result<(), ConfigError> {
        let render = &self.render;
        if render.quote.chars().count() != 1 {
            return Err(ConfigError::Validation(format!(
                "render.quote must be a single character, got '{}'",
                render.quote
            )));
        }
        let placeholders = render.background_step_format.matches("{}").count();
        if placeholders != 1 {
            return Err(ConfigError::Validation(format!(
                "render.background_step_format must contain exactly one {{}}, found {placeholders}"
            )));
        }
        require_resolver(&self.resolvers, render.tag_url.as_deref(), "render.tag_url")?;
        require_resolver(&self.resolvers, render.step_url.as_deref(), "render.step_url")?;
        Ok(())
    }

    fn validate_resolvers(&self) -> Result<(), ConfigError> {
        for (name, resolver) in &self.resolvers {
            require_non_empty(&resolver.pattern, &format!("resolvers.{name}.pattern"))?;
            require_non_empty(&resolver.url, &format!("resolvers.{name}.url"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref project) = self.output.project {
            self.output.project = Some(expand::expand_env(project, "output.project")?);
        }
        for (name, resolver) in &mut self.resolvers {
            resolver.url = expand::expand_env(&resolver.url, &format!("resolvers.{name}.url"))?;
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory and fill in defaults.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>| path.map(|p| config_dir.join(p));

        self.source_resolved = SourceConfig {
            dir: resolve(self.source.dir.as_deref()),
            exclude: self.source.exclude.clone(),
            include_private: self.source.include_private,
            parser: self
                .source
                .parser
                .clone()
                .unwrap_or_else(|| DEFAULT_PARSER.to_owned()),
        };

        let output = &self.output;
        self.output_resolved = OutputConfig {
            dir: resolve(output.dir.as_deref()),
            toc_name: output
                .toc_name
                .clone()
                .unwrap_or_else(|| DEFAULT_TOC_NAME.to_owned()),
            max_toc_depth: output.max_toc_depth.unwrap_or(DEFAULT_MAX_TOC_DEPTH),
            project: output.project.clone(),
            glossary_name: output.glossary_name.clone(),
            group_glossary: output.group_glossary,
            tag_list_name: output.tag_list_name.clone(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn parse(toml: &str) -> Config {
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_resolved.dir, None);
        assert_eq!(config.source_resolved.parser, "gherkin");
        assert_eq!(config.output_resolved.toc_name, "gherkin");
        assert_eq!(config.output_resolved.max_toc_depth, 4);
        assert_eq!(config.render.quote, "\u{201C}");
        assert_eq!(config.render.background_step_format, "{}");
        assert!(config.resolvers.is_empty());
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = parse("");
        assert_eq!(config.output_resolved, OutputConfig::default());
        assert_eq!(config.source_resolved, SourceConfig::default());
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            r#"
[source]
dir = "features"
exclude = ["*/vendor", "draft_*.feature"]
include_private = true
parser = "pytest-bdd"

[output]
dir = "docs/gherkin"
toc_name = "specs"
max_toc_depth = 2
project = "Shop"
glossary_name = "glossary"
group_glossary = true
tag_list_name = "tags"

[render]
integrate_background = true
background_step_format = "*{}*"
raw_descriptions = true
include_tags = ["smoke"]
exclude_tags = ["wip"]
quote = "'"
tag_url = "jira"
display_name = "title-case"

[resolvers.jira]
pattern = "^(SHOP-\\d+)$"
url = "https://jira.example.com/browse/$1"
"#,
        );

        assert_eq!(
            config.source_resolved,
            SourceConfig {
                dir: Some(PathBuf::from("/project/features")),
                exclude: vec!["*/vendor".to_owned(), "draft_*.feature".to_owned()],
                include_private: true,
                parser: "pytest-bdd".to_owned(),
            }
        );
        assert_eq!(
            config.output_resolved,
            OutputConfig {
                dir: Some(PathBuf::from("/project/docs/gherkin")),
                toc_name: "specs".to_owned(),
                max_toc_depth: 2,
                project: Some("Shop".to_owned()),
                glossary_name: Some("glossary".to_owned()),
                group_glossary: true,
                tag_list_name: Some("tags".to_owned()),
            }
        );
        assert!(config.render.integrate_background);
        assert_eq!(config.render.background_step_format, "*{}*");
        assert_eq!(config.render.include_tags, ["smoke"]);
        assert_eq!(config.render.exclude_tags, ["wip"]);
        assert_eq!(config.render.tag_url.as_deref(), Some("jira"));
        assert_eq!(config.render.display_name.as_deref(), Some("title-case"));
        assert_eq!(
            config.resolvers["jira"],
            ResolverConfig {
                pattern: r"^(SHOP-\d+)$".to_owned(),
                url: "https://jira.example.com/browse/$1".to_owned(),
            }
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[output]\ntoc = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_absolute_paths_kept() {
        let config = parse("[source]\ndir = \"/srv/features\"\n");
        assert_eq!(config.source_resolved.dir, Some(PathBuf::from("/srv/features")));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = parse("[output]\ndir = \"out\"\nmax_toc_depth = 2\nproject = \"Shop\"\n");
        let settings = CliSettings {
            source_dir: Some(PathBuf::from("/cli/features")),
            max_toc_depth: Some(6),
            exclude_tags: Some(vec!["wip".to_owned()]),
            integrate_background: Some(true),
            ..CliSettings::default()
        };

        config.apply_cli_settings(&settings);

        assert_eq!(config.source_resolved.dir, Some(PathBuf::from("/cli/features")));
        assert_eq!(config.output_resolved.max_toc_depth, 6);
        assert_eq!(config.render.exclude_tags, ["wip"]);
        assert!(config.render.integrate_background);
        // Unchanged
        assert_eq!(config.output_resolved.dir, Some(PathBuf::from("/project/out")));
        assert_eq!(config.output_resolved.project.as_deref(), Some("Shop"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = parse("[output]\ntoc_name = \"specs\"\n");
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.output_resolved.toc_name, "specs");
    }

    #[test]
    fn test_require_dirs() {
        let config = Config::default();
        assert!(matches!(config.require_source_dir(), Err(ConfigError::Validation(_))));
        assert!(matches!(config.require_output_dir(), Err(ConfigError::Validation(_))));

        let config = parse("[source]\ndir = \"features\"\n[output]\ndir = \"out\"\n");
        assert_eq!(config.require_source_dir().unwrap(), Path::new("/project/features"));
        assert_eq!(config.require_output_dir().unwrap(), Path::new("/project/out"));
    }

    #[test]
    fn test_validate_max_toc_depth_zero() {
        let config = parse("[output]\nmax_toc_depth = 0\n");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_toc_depth"));
    }

    #[test]
    fn test_validate_quote_single_char() {
        for quote in ["", "''"] {
            let mut config = Config::default();
            config.render.quote = quote.to_owned();
            assert!(
                matches!(config.validate(), Err(ConfigError::Validation(_))),
                "{quote:?}"
            );
        }
    }

    #[test]
    fn test_validate_background_step_format() {
        for format in ["no placeholder", "{} and {}"] {
            let mut config = Config::default();
            config.render.background_step_format = format.to_owned();
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("background_step_format"), "{format}");
        }
    }

    #[test]
    fn test_validate_unknown_resolver() {
        let mut config = Config::default();
        config.render.step_url = Some("docs".to_owned());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("render.step_url"));
        assert!(err.to_string().contains("docs"));
    }

    #[test]
    fn test_validate_empty_resolver_fields() {
        let config = parse("[resolvers.jira]\npattern = \"\"\nurl = \"https://x\"\n");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("resolvers.jira.pattern"));
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("GHERKINDOC_TEST_JIRA", "jira.test.com");
        }
        let mut config: Config = toml::from_str(
            r#"
[output]
project = "${GHERKINDOC_TEST_PROJECT_UNSET:-Shop}"

[resolvers.jira]
pattern = "^(SHOP-\\d+)$"
url = "https://${GHERKINDOC_TEST_JIRA}/browse/$1"
"#,
        )
        .unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.output.project.as_deref(), Some("Shop"));
        assert_eq!(config.resolvers["jira"].url, "https://jira.test.com/browse/$1");
        unsafe {
            std::env::remove_var("GHERKINDOC_TEST_JIRA");
        }
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gherkindoc.toml");
        std::fs::write(&path, "[source]\ndir = \"features\"\n[output]\nglossary_name = \"steps\"\n")
            .unwrap();

        let settings = CliSettings {
            toc_name: Some("index".to_owned()),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.source_resolved.dir, Some(temp_dir.path().join("features")));
        assert_eq!(config.output_resolved.glossary_name.as_deref(), Some("steps"));
        assert_eq!(config.output_resolved.toc_name, "index");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(Some(&temp_dir.path().join("nope.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_validates_cli_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gherkindoc.toml");
        std::fs::write(&path, "").unwrap();
        let settings = CliSettings {
            tag_url: Some("missing".to_owned()),
            ..CliSettings::default()
        };
        let result = Config::load(Some(&path), Some(&settings));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
