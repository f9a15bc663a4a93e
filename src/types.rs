/// Core domain types for extracted links and per-file results.
use std::path::{Path, PathBuf};

/// Everything `check` needs to know about one file: the plain result plus
/// the reference uses that resolved to nothing.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FileReport {
    /// The file's occurrence listing, as produced by `check_file`.
    pub result: FileResult,
    /// Reference uses whose name had no definition, in document order.
    pub unresolved: Vec<UnresolvedReference>,
}

/// Outcome of checking a single file. `total_links` and `links` always
/// agree by construction; `error` is set instead of links when the file
/// could not be read.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FileResult {
    /// Why the file produced no links, when it could not be read at all.
    /// `File not found` for a missing path, `Unreadable: <cause>` otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Path that was checked, as given by the caller.
    pub file: PathBuf,
    /// Every extracted link, ordered by line and within-line scan order.
    pub links: Vec<LinkOccurrence>,
    /// Number of entries in `links`.
    pub total_links: usize,
}

impl FileResult {
    /// Marker stored in `error` when the checked path does not exist.
    pub const NOT_FOUND: &str = "File not found";

    /// A successfully parsed file with its extracted links.
    pub fn new(file: &Path, links: Vec<LinkOccurrence>) -> Self {
        let total_links = links.len();
        return Self {
            error: None,
            file: file.to_path_buf(),
            links,
            total_links,
        };
    }

    /// The result for a path that does not exist on disk.
    pub fn not_found(file: &Path) -> Self {
        return Self {
            error: Some(Self::NOT_FOUND.to_string()),
            file: file.to_path_buf(),
            links: Vec::new(),
            total_links: 0,
        };
    }

    /// The result for a file that exists but could not be read or decoded.
    pub fn unreadable(file: &Path, cause: &std::io::Error) -> Self {
        return Self {
            error: Some(format!("Unreadable: {cause}")),
            file: file.to_path_buf(),
            links: Vec::new(),
            total_links: 0,
        };
    }
}

/// One extracted link. For an inline link the target comes from the
/// parentheses; for a reference use it is the defined target the name
/// resolved to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LinkOccurrence {
    /// One-based line number of the use in the document.
    pub line: u32,
    /// Link destination, whitespace-trimmed for reference-style links.
    pub target: String,
    /// Display text between the square brackets.
    pub text: String,
}

/// Output of one parse: the occurrences plus the uses that were dropped.
/// `parse` discards the second list; `parse_with_unresolved` keeps it.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ParseReport {
    /// Every resolved occurrence, in document order.
    pub links: Vec<LinkOccurrence>,
    /// Reference uses with no matching definition, in document order.
    pub unresolved: Vec<UnresolvedReference>,
}

/// A reference-style use whose name has no definition in the document.
/// Never part of the occurrence list; surfaced only on request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnresolvedReference {
    /// One-based line number of the use in the document.
    pub line: u32,
    /// Reference name as written, before lowercase normalization.
    pub name: String,
    /// Display text between the first pair of square brackets.
    pub text: String,
}
