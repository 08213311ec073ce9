//! Bottom-up assembly of the output tree.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use gherkindoc_feature::FeatureParser;
use gherkindoc_markup::{Document, WriteOutcome};
use gherkindoc_render::{FeatureRenderer, RenderContext};

use crate::error::BuildError;
use crate::files::{is_feature_file, is_rst_file};
use crate::naming::{OUTPUT_EXTENSION, flat_name};
use crate::scanner::WorkList;
use crate::toc::{DisplayNameConverter, TocBuilder};

/// Output settings for one build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub output_dir: PathBuf,
    /// Base name of the top-level table of contents.
    pub toc_name: String,
    pub max_toc_depth: usize,
    /// Used in the glossary and tag list headings.
    pub project_name: String,
    /// Base name of the step glossary; `None` skips it.
    pub glossary_name: Option<String>,
    pub group_glossary: bool,
    /// Base name of the tag list; `None` skips it.
    pub tag_list_name: Option<String>,
    pub display_name: Option<DisplayNameConverter>,
    /// Walk, parse and render everything but write nothing.
    pub dry_run: bool,
}

/// What happened to an end-of-run document (glossary or tag list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlossaryOutcome {
    Written(PathBuf),
    /// Requested, but nothing was recorded to put in it.
    Empty,
    NotRequested,
    DryRun,
}

/// Summary of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub tocs: usize,
    pub features_rendered: usize,
    /// Features without any scenario left after tag filtering.
    pub features_skipped: usize,
    pub files_copied: usize,
    /// Documents whose file already held identical content.
    pub unchanged: usize,
    pub steps: usize,
    pub tags: usize,
    pub glossary: GlossaryOutcome,
    pub tag_list: GlossaryOutcome,
}

impl Default for BuildReport {
    fn default() -> Self {
        Self {
            tocs: 0,
            features_rendered: 0,
            features_skipped: 0,
            files_copied: 0,
            unchanged: 0,
            steps: 0,
            tags: 0,
            glossary: GlossaryOutcome::NotRequested,
            tag_list: GlossaryOutcome::NotRequested,
        }
    }
}

/// Turns a scanned source tree into a flat directory of rST documents.
pub struct TreeBuilder {
    parser: Box<dyn FeatureParser>,
    renderer: FeatureRenderer,
    config: BuildConfig,
}

/// Create `output_dir` unless this is a dry run.
///
/// Call before scanning so an unusable output path aborts before any
/// source is read.
pub fn prepare_output_dir(output_dir: &Path, dry_run: bool) -> Result<(), BuildError> {
    if dry_run || output_dir.is_dir() {
        return Ok(());
    }
    tracing::info!(path = %output_dir.display(), "Creating output directory");
    fs::create_dir_all(output_dir).map_err(|source| BuildError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })
}

impl TreeBuilder {
    pub fn new(parser: Box<dyn FeatureParser>, renderer: FeatureRenderer, config: BuildConfig) -> Self {
        Self {
            parser,
            renderer,
            config,
        }
    }

    /// Process `work` bottom-up and write all documents.
    ///
    /// The output directory is created if [`prepare_output_dir`] has not
    /// done so already. Any parse or I/O error aborts the build, leaving
    /// files written so far in place.
    pub fn build(&self, mut work: WorkList) -> Result<BuildReport, BuildError> {
        prepare_output_dir(&self.config.output_dir, self.config.dry_run)?;
        let output_dir = &self.config.output_dir;

        let root_path = work.root_path().to_path_buf();
        let toc_builder = TocBuilder::new(
            &root_path,
            self.config.max_toc_depth,
            self.config.display_name.clone(),
        );
        let mut context = RenderContext::default();
        let mut report = BuildReport::default();
        let mut non_empty_dirs: HashSet<PathBuf> = HashSet::new();

        while let Some(current) = work.pop() {
            let new_subdirs: Vec<String> = current
                .sub_directories
                .iter()
                .filter(|sub| non_empty_dirs.contains(&current.absolute_path.join(sub)))
                .cloned()
                .collect();
            if current.files.is_empty() && new_subdirs.is_empty() {
                tracing::debug!(path = %current.absolute_path.display(), "Pruning empty directory");
                continue;
            }
            non_empty_dirs.insert(current.absolute_path.clone());

            let mut toc_files = Vec::with_capacity(current.files.len());
            for file in &current.files {
                let source = current.absolute_path.join(file);
                let mut file_list = current.path_list.clone();
                file_list.push(file.clone());

                if is_feature_file(file) {
                    let feature = self.parser.parse(&source)?;
                    let Some(doc) = self.renderer.render(&feature, &mut context) else {
                        tracing::info!(path = %source.display(), "Skipping feature with nothing to document");
                        report.features_skipped += 1;
                        continue;
                    };
                    let dest = output_dir.join(flat_name(&file_list, None, false, Some(OUTPUT_EXTENSION)));
                    self.write(&doc, &dest, &mut report)?;
                    report.features_rendered += 1;
                } else if !is_rst_file(file) {
                    let dest = output_dir.join(flat_name(&file_list, None, false, None));
                    self.copy(&source, &dest)?;
                    report.files_copied += 1;
                }
                toc_files.push(file.clone());
            }

            let toc = toc_builder.build(&current.path_list, &new_subdirs, &toc_files)?;
            // The root is always popped last and gets the requested name.
            let toc_path = if work.is_empty() {
                output_dir.join(format!("{}{OUTPUT_EXTENSION}", self.config.toc_name))
            } else {
                output_dir.join(flat_name(&current.path_list, None, true, Some(OUTPUT_EXTENSION)))
            };
            self.write(&toc, &toc_path, &mut report)?;
            report.tocs += 1;
        }

        report.steps = context.glossary.len();
        report.tags = context.tags.len();
        report.glossary = self.finish(
            self.config.glossary_name.as_deref(),
            context
                .glossary
                .render(&self.config.project_name, self.config.group_glossary),
            &mut report,
        )?;
        report.tag_list = self.finish(
            self.config.tag_list_name.as_deref(),
            context.tags.render(&self.config.project_name),
            &mut report,
        )?;
        Ok(report)
    }

    fn finish(
        &self,
        name: Option<&str>,
        doc: Option<Document>,
        report: &mut BuildReport,
    ) -> Result<GlossaryOutcome, BuildError> {
        let Some(name) = name else {
            return Ok(GlossaryOutcome::NotRequested);
        };
        if self.config.dry_run {
            tracing::info!(dry_run = true, name, "Not generating {name}");
            return Ok(GlossaryOutcome::DryRun);
        }
        let Some(doc) = doc else {
            return Ok(GlossaryOutcome::Empty);
        };
        let path = self.config.output_dir.join(format!("{name}{OUTPUT_EXTENSION}"));
        self.write(&doc, &path, report)?;
        Ok(GlossaryOutcome::Written(path))
    }

    fn write(&self, doc: &Document, path: &Path, report: &mut BuildReport) -> Result<(), BuildError> {
        if self.config.dry_run {
            tracing::info!(dry_run = true, path = %path.display(), "Writing");
            return Ok(());
        }
        let outcome = doc.write_to_file(path).map_err(|source| BuildError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        match outcome {
            WriteOutcome::Written => tracing::info!(path = %path.display(), "Writing"),
            WriteOutcome::Unchanged => {
                tracing::debug!(path = %path.display(), "Unchanged");
                report.unchanged += 1;
            }
        }
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<(), BuildError> {
        tracing::info!(dry_run = self.config.dry_run, from = %from.display(), to = %to.display(), "Copying");
        if self.config.dry_run {
            return Ok(());
        }
        fs::copy(from, to).map_err(|source| BuildError::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}
