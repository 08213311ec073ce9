//! Document tree assembly for gherkindoc.
//!
//! Building happens in two phases:
//!
//! 1. [`Scanner`] walks the source tree top-down and records every directory
//!    worth looking at in a [`WorkList`]. Excluded directories are never
//!    descended into.
//! 2. [`TreeBuilder`] pops the list from the end, which visits children
//!    before parents without a second walk. Directories whose files and
//!    children turned out empty are pruned, every other directory gets a
//!    table of contents, and feature files are rendered next to it.
//!
//! All output lands in one flat directory; the source hierarchy is encoded
//! in the file names (see [`flat_name`]).

mod builder;
mod error;
mod files;
mod naming;
mod scanner;
mod toc;

pub use builder::{BuildConfig, BuildReport, GlossaryOutcome, TreeBuilder, prepare_output_dir};
pub use error::{BuildError, ScanError};
pub use files::{ExcludePatterns, is_feature_file, is_markdown_file, is_rst_file, is_source_file};
pub use naming::{OUTPUT_EXTENSION, flat_name};
pub use scanner::{DirEntry, Scanner, WorkList};
pub use toc::{CONVERTER_NAMES, DISPLAY_NAME_FILE, DisplayNameConverter, TocBuilder, display_name};
