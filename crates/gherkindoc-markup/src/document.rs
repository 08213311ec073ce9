//! Ordered line buffer for generated rST documents.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Spaces per indentation step.
pub const INDENT_DEPTH: usize = 4;

/// Section underline characters indexed by level.
///
/// Level 0 has no underline. Levels past the end reuse the last entry.
pub const SECTION_UNDERLINES: [&str; 11] = ["", "=", "-", "~", ".", "*", "+", "_", "<", ">", "/"];

/// Result of [`Document::write_to_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or its contents replaced.
    Written,
    /// The file already held identical contents and was left alone.
    Unchanged,
}

/// An rST document under construction.
///
/// Each stored entry is a complete output fragment including its trailing
/// line breaks, so `lines().concat()` is the final text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` followed by a single line break.
    pub fn add(&mut self, line: &str) {
        self.add_output(line, 1, 0);
    }

    /// Append `line` indented by `indent_by` spaces and followed by
    /// `line_breaks` newlines.
    pub fn add_output(&mut self, line: &str, line_breaks: usize, indent_by: usize) {
        let mut entry = String::with_capacity(indent_by + line.len() + line_breaks);
        entry.push_str(&" ".repeat(indent_by));
        entry.push_str(line);
        entry.push_str(&"\n".repeat(line_breaks));
        self.lines.push(entry);
    }

    /// Append an empty line.
    pub fn blank_line(&mut self) {
        self.add("");
    }

    /// Append a section title and its underline.
    ///
    /// The underline is as long as the title without trailing whitespace,
    /// counted in characters.
    pub fn create_section(&mut self, level: usize, title: &str) {
        let underline = SECTION_UNDERLINES
            .get(level)
            .or(SECTION_UNDERLINES.last())
            .copied()
            .unwrap_or_default();
        let width = title.trim_end().chars().count();
        self.add(title);
        self.add_output(&underline.repeat(width), 2, 0);
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write the document to `path` unless the file already holds the same text.
    pub fn write_to_file(&self, path: &Path) -> io::Result<WriteOutcome> {
        let content = self.to_string();
        if fs::read_to_string(path).is_ok_and(|existing| existing == content) {
            return Ok(WriteOutcome::Unchanged);
        }
        fs::write(path, content)?;
        Ok(WriteOutcome::Written)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}
