//! Extract Markdown links with line provenance.
//!
//! Two syntaxes are recognized: inline links `[text](target)`, with image
//! syntax `![alt](target)` excluded, and reference-style uses
//! `[text][name]` resolved against document-wide `[name]: target`
//! definitions. Fenced code blocks are never scanned. [`parse`] works on
//! in-memory text; [`check_file`] and [`check_directory`] read from disk
//! and recover per-file failures into their results instead of aborting.

pub mod config;
pub mod error;
pub mod parser;
pub mod reftable;
pub mod types;
pub mod walker;

pub use error::Error;
pub use parser::{parse, parse_with_unresolved};
pub use types::{FileReport, FileResult, LinkOccurrence, ParseReport, UnresolvedReference};
pub use walker::{check_directory, check_file, discover_markdown_files, report_directory, report_file};
