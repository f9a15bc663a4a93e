use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::parser;
use crate::types::{FileReport, FileResult};

/// Check every Markdown file under `root`. One [`FileResult`] per file, in
/// discovery order; non-Markdown files contribute nothing. A file that
/// fails to read produces a result with its error marker set, never an
/// abort of the whole scan.
pub fn check_directory(root: &Path) -> Vec<FileResult> {
    discover_markdown_files(root)
        .iter()
        .map(|path| check_file(path))
        .collect()
}

/// Check a single file and keep only the occurrence listing.
///
/// A missing path yields the `File not found` marker; a file that exists
/// but cannot be read or decoded as UTF-8 yields an `Unreadable` marker.
/// Neither case panics or returns an error.
pub fn check_file(path: &Path) -> FileResult {
    report_file(path).result
}

/// Every Markdown file under `root`, depth-first with siblings sorted by
/// file name, so the order is stable across platforms and filesystems.
/// Only regular files with the exact extension `md` qualify.
pub fn discover_markdown_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Like [`check_directory`], keeping unresolved reference uses per file.
pub fn report_directory(root: &Path) -> Vec<FileReport> {
    discover_markdown_files(root)
        .iter()
        .map(|path| report_file(path))
        .collect()
}

/// Check a single file, keeping both the occurrence listing and the
/// reference uses that resolved to nothing.
pub fn report_file(path: &Path) -> FileReport {
    if !path.exists() {
        return FileReport {
            result: FileResult::not_found(path),
            unresolved: Vec::new(),
        };
    }

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let parsed = parser::parse_with_unresolved(&content);
            FileReport {
                result: FileResult::new(path, parsed.links),
                unresolved: parsed.unresolved,
            }
        }
        Err(cause) => FileReport {
            result: FileResult::unreadable(path, &cause),
            unresolved: Vec::new(),
        },
    }
}
