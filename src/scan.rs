//! Recursive PDF discovery.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension matched by [`discover_pdfs`], compared case-insensitively.
pub const PDF_EXTENSION: &str = "pdf";

/// Find every regular file under `root` whose extension is `pdf` in any
/// letter case.
///
/// Directories are never returned, even when their name ends in `.pdf`.
/// Symlinked directories are not descended into; symlinks to files are
/// kept.
/// The result is sorted by path so repeated runs over the same tree list
/// documents in the same order.
pub fn discover_pdfs(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut pdfs = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if is_file && is_pdf(entry.path()) {
            pdfs.push(entry.into_path());
        }
    }

    // Plain string order, not component order: "a-b.pdf" sorts before "a/b.pdf".
    pdfs.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    log::info!("Found {} PDF files under {}", pdfs.len(), root.display());
    Ok(pdfs)
}

/// True when `path` has the PDF extension, ignoring case.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION))
}
