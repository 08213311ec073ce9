//! `gherkindoc build` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use gherkindoc_config::{CliSettings, Config};
use gherkindoc_feature::{TagFilter, parser_by_name};
use gherkindoc_markup::TABLE_QUOTE;
use gherkindoc_render::{
    FeatureRenderer, RendererConfig, ResolverRegistry, StepDecoration, TemplateResolver,
};
use gherkindoc_tree::{
    BuildConfig, BuildReport, CONVERTER_NAMES, DisplayNameConverter, ExcludePatterns,
    GlossaryOutcome, Scanner, TreeBuilder, prepare_output_dir,
};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct BuildArgs {
    /// Directory to search for Gherkin files (overrides config).
    pub(crate) gherkin_path: Option<PathBuf>,

    /// Directory to place all output (overrides config).
    pub(crate) output_path: Option<PathBuf>,

    /// Shell-style patterns to exclude: directories by full path, files by name.
    pub(crate) exclude_patterns: Vec<String>,

    /// Maximum depth of the tables of contents.
    #[arg(short = 'd', long = "maxtocdepth")]
    pub(crate) max_toc_depth: Option<usize>,

    /// Walk, parse and render without writing anything.
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,

    /// Include `_private` directories.
    #[arg(short = 'P', long)]
    pub(crate) private: bool,

    /// File name of the top-level table of contents (default: gherkin).
    #[arg(short = 'N', long)]
    pub(crate) toc_name: Option<String>,

    /// Project name for the glossary and tag list (default: source directory name).
    #[arg(short = 'H', long)]
    pub(crate) doc_project: Option<String>,

    /// Suppress status output.
    #[arg(short, long)]
    pub(crate) quiet: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Write a step glossary under this name.
    #[arg(short = 'G', long)]
    pub(crate) step_glossary_name: Option<String>,

    /// Group the step glossary by step type.
    #[arg(short = 'T', long)]
    pub(crate) group_step_glossary: bool,

    /// Write a tag list under this name.
    #[arg(long)]
    pub(crate) tag_list_name: Option<String>,

    /// Fold background steps into each scenario.
    #[arg(long)]
    pub(crate) integrate_background: bool,

    /// Format for integrated background steps, with a single `{}`.
    #[arg(long)]
    pub(crate) background_step_format: Option<String>,

    /// Feature parser (gherkin, pytest-bdd).
    #[arg(long)]
    pub(crate) parser: Option<String>,

    /// Resolver (declared in the config file) building URLs from tags.
    #[arg(long)]
    pub(crate) url_from_tag: Option<String>,

    /// Resolver (declared in the config file) building URLs from steps.
    #[arg(long)]
    pub(crate) url_from_step: Option<String>,

    /// Directory display-name converter (verbatim, title-case, sentence-case).
    #[arg(long)]
    pub(crate) display_name_from_dir: Option<String>,

    /// Treat feature and scenario descriptions as raw rST.
    #[arg(long)]
    pub(crate) raw_descriptions: bool,

    /// Leave out scenarios carrying any of these tags.
    #[arg(long, num_args = 1..)]
    pub(crate) exclude_tags: Vec<String>,

    /// Keep only scenarios carrying one of these tags.
    #[arg(long, num_args = 1..)]
    pub(crate) include_tags: Vec<String>,

    /// Path to configuration file (default: auto-discover gherkindoc.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,
}

impl BuildArgs {
    fn cli_settings(&self) -> CliSettings {
        let non_empty = |values: &[String]| (!values.is_empty()).then(|| values.to_vec());
        CliSettings {
            source_dir: self.gherkin_path.clone(),
            output_dir: self.output_path.clone(),
            exclude: non_empty(&self.exclude_patterns),
            include_private: self.private.then_some(true),
            parser: self.parser.clone(),
            toc_name: self.toc_name.clone(),
            max_toc_depth: self.max_toc_depth,
            project: self.doc_project.clone(),
            glossary_name: self.step_glossary_name.clone(),
            group_glossary: self.group_step_glossary.then_some(true),
            tag_list_name: self.tag_list_name.clone(),
            integrate_background: self.integrate_background.then_some(true),
            background_step_format: self.background_step_format.clone(),
            raw_descriptions: self.raw_descriptions.then_some(true),
            include_tags: non_empty(&self.include_tags),
            exclude_tags: non_empty(&self.exclude_tags),
            tag_url: self.url_from_tag.clone(),
            step_url: self.url_from_step.clone(),
            display_name: self.display_name_from_dir.clone(),
        }
    }

    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, the source tree cannot
    /// be scanned, a feature fails to parse or an output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new(self.quiet);

        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        let source_dir = config.require_source_dir()?;
        let output_dir = config.require_output_dir()?.to_path_buf();
        tracing::debug!(
            source = %source_dir.display(),
            output = %output_dir.display(),
            parser = %config.source_resolved.parser,
            "Resolved configuration"
        );

        output.info(&format!("Source: {}", source_dir.display()));
        output.info(&format!("Output: {}", output_dir.display()));

        prepare_output_dir(&output_dir, self.dry_run)?;

        let source = &config.source_resolved;
        let scanner = Scanner::new(source.include_private, ExcludePatterns::new(&source.exclude)?);
        let work = scanner.scan(source_dir)?;
        let parser = parser_by_name(&source.parser)?;

        let mut resolvers = ResolverRegistry::default();
        for (name, resolver) in &config.resolvers {
            let template = TemplateResolver::new(name, &resolver.pattern, &resolver.url)?;
            resolvers.register(name, Arc::new(template));
        }

        let render = &config.render;
        let mut renderer_config = RendererConfig::new(work.root_path());
        renderer_config.integrate_background = render.integrate_background;
        renderer_config.background_step =
            StepDecoration::from_template(&render.background_step_format)?;
        renderer_config.raw_descriptions = render.raw_descriptions;
        renderer_config.quote = render.quote.chars().next().unwrap_or(TABLE_QUOTE);
        renderer_config.tag_filter =
            TagFilter::new(render.include_tags.clone(), render.exclude_tags.clone());
        renderer_config.tag_url = render
            .tag_url
            .as_deref()
            .map(|name| resolvers.get(name))
            .transpose()?;
        renderer_config.step_url = render
            .step_url
            .as_deref()
            .map(|name| resolvers.get(name))
            .transpose()?;

        let display_name = render
            .display_name
            .as_deref()
            .map(|name| {
                DisplayNameConverter::by_name(name).ok_or_else(|| {
                    CliError::Validation(format!(
                        "Unknown display name converter '{name}' (available: {})",
                        CONVERTER_NAMES.join(", ")
                    ))
                })
            })
            .transpose()?;

        let project_name = config.output_resolved.project.clone().unwrap_or_else(|| {
            work.entries()
                .first()
                .and_then(|root| root.path_list.first())
                .cloned()
                .unwrap_or_default()
        });

        let out = &config.output_resolved;
        let build_config = BuildConfig {
            output_dir: output_dir.clone(),
            toc_name: out.toc_name.clone(),
            max_toc_depth: out.max_toc_depth,
            project_name,
            glossary_name: out.glossary_name.clone(),
            group_glossary: out.group_glossary,
            tag_list_name: out.tag_list_name.clone(),
            display_name,
            dry_run: self.dry_run,
        };

        let builder = TreeBuilder::new(
            parser,
            FeatureRenderer::new(renderer_config),
            build_config,
        );
        let report = builder.build(work)?;

        print_report(&output, &report);
        if self.dry_run {
            output.success("Dry run complete, nothing written");
        } else {
            output.success(&format!("Documentation written to {}", output_dir.display()));
        }
        Ok(())
    }
}

fn print_report(output: &Output, report: &BuildReport) {
    output.highlight("Summary");
    output.info(&format!("  Tables of contents: {}", report.tocs));
    output.info(&format!("  Features rendered:  {}", report.features_rendered));
    if report.features_skipped > 0 {
        output.info(&format!("  Features skipped:   {}", report.features_skipped));
    }
    output.info(&format!("  Files copied:       {}", report.files_copied));
    if report.unchanged > 0 {
        output.info(&format!("  Unchanged:          {}", report.unchanged));
    }
    print_outcome(output, "Step glossary", &report.glossary, "no steps recorded");
    print_outcome(output, "Tag list", &report.tag_list, "no tags recorded");
}

fn print_outcome(output: &Output, label: &str, outcome: &GlossaryOutcome, empty_reason: &str) {
    match outcome {
        GlossaryOutcome::Written(path) => {
            output.info(&format!("  {label}: {}", path.display()));
        }
        GlossaryOutcome::Empty => output.warning(&format!("  {label} skipped: {empty_reason}")),
        GlossaryOutcome::DryRun => output.info(&format!("  {label}: not generated (dry run)")),
        GlossaryOutcome::NotRequested => {}
    }
}
