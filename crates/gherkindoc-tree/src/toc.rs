//! Per-directory table of contents.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use gherkindoc_markup::{Document, INDENT_DEPTH};

use crate::error::BuildError;
use crate::files::{is_markdown_file, is_rst_file};
use crate::naming::flat_name;

/// Marker file whose first line names its directory.
pub const DISPLAY_NAME_FILE: &str = "display_name.txt";

/// Names accepted by [`DisplayNameConverter::by_name`].
pub const CONVERTER_NAMES: [&str; 3] = ["verbatim", "title-case", "sentence-case"];

/// Strategy turning a directory name into a heading.
#[derive(Clone)]
pub enum DisplayNameConverter {
    /// The directory name as is.
    Verbatim,
    /// `user_accounts` becomes `User Accounts`.
    TitleCase,
    /// `user_accounts` becomes `User accounts`.
    SentenceCase,
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl DisplayNameConverter {
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "verbatim" => Some(Self::Verbatim),
            "title-case" => Some(Self::TitleCase),
            "sentence-case" => Some(Self::SentenceCase),
            _ => None,
        }
    }

    pub fn convert(&self, dir_name: &str) -> String {
        match self {
            Self::Verbatim => dir_name.to_owned(),
            Self::TitleCase => capwords(&dir_name.replace(['_', '-'], " ")),
            Self::SentenceCase => {
                let words = dir_name.replace(['_', '-'], " ").to_lowercase();
                let words: Vec<&str> = words.split_whitespace().collect();
                capitalize(&words.join(" "))
            }
            Self::Custom(convert) => convert(dir_name),
        }
    }
}

impl fmt::Debug for DisplayNameConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verbatim => f.write_str("Verbatim"),
            Self::TitleCase => f.write_str("TitleCase"),
            Self::SentenceCase => f.write_str("SentenceCase"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Human readable name of a directory.
///
/// Uses, in order: the converter, the first line of [`DISPLAY_NAME_FILE`],
/// the directory name title-cased with `_` read as a space.
pub fn display_name(dir: &Path, converter: Option<&DisplayNameConverter>) -> io::Result<String> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if let Some(converter) = converter {
        return Ok(converter.convert(&name));
    }

    let marker = dir.join(DISPLAY_NAME_FILE);
    if marker.is_file() {
        let content = fs::read_to_string(&marker)?;
        return Ok(content.lines().next().unwrap_or_default().to_owned());
    }
    Ok(capwords(&name.replace('_', " ")))
}

/// Split on whitespace, capitalize each word, join with single spaces.
fn capwords(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Builds the navigation document for one directory level.
pub struct TocBuilder {
    root_path: PathBuf,
    max_toc_depth: usize,
    converter: Option<DisplayNameConverter>,
}

impl TocBuilder {
    pub fn new(
        root_path: impl Into<PathBuf>,
        max_toc_depth: usize,
        converter: Option<DisplayNameConverter>,
    ) -> Self {
        Self {
            root_path: root_path.into(),
            max_toc_depth,
            converter,
        }
    }

    /// Build the table of contents for the directory at `path_list`.
    ///
    /// rST files are inlined in name order and replace the generated
    /// heading. Other files and the retained `subdirs` are listed in a
    /// `toctree` directive by their flattened names.
    pub fn build(
        &self,
        path_list: &[String],
        subdirs: &[String],
        files: &[String],
    ) -> Result<Document, BuildError> {
        let dir = path_list
            .iter()
            .fold(self.root_path.clone(), |path, segment| path.join(segment));

        let mut files: Vec<&String> = files.iter().collect();
        files.sort();
        let mut subdirs: Vec<&String> = subdirs.iter().collect();
        subdirs.sort();

        let mut doc = Document::new();
        let mut listed = Vec::new();
        let mut inlined = false;
        for file in files {
            if !is_rst_file(file) {
                listed.push(file);
                continue;
            }
            let source = dir.join(file);
            tracing::debug!(path = %source.display(), "Inlining prose into table of contents");
            let content = fs::read_to_string(&source).map_err(|source_err| BuildError::Read {
                path: source.clone(),
                source: source_err,
            })?;
            doc.add_output(&content, 2, 0);
            inlined = true;
        }

        if !inlined {
            let title = display_name(&dir, self.converter.as_ref()).map_err(|source| {
                BuildError::Read {
                    path: dir.join(DISPLAY_NAME_FILE),
                    source,
                }
            })?;
            doc.create_section(1, &title);
        }

        doc.add(".. toctree::");
        doc.add_output(&format!(":maxdepth: {}", self.max_toc_depth), 2, INDENT_DEPTH);
        for file in listed {
            // Markdown keeps its extension so Sphinx picks the right parser.
            let ext = if is_markdown_file(file) { None } else { Some("") };
            doc.add_output(&flat_name(path_list, Some(file), false, ext), 1, INDENT_DEPTH);
        }
        for subdir in subdirs {
            doc.add_output(&flat_name(path_list, Some(subdir), true, Some("")), 1, INDENT_DEPTH);
        }
        Ok(doc)
    }
}
