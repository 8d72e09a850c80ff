// src/discovery.rs
use crate::error::{ReportError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the sales files directly inside `dir` whose extension is `extension`,
/// sorted by file name.
///
/// Subdirectories are not descended into. An empty `extension` accepts every file.
///
/// # Errors
/// Returns error if `dir` does not exist or cannot be listed.
pub fn sales_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ReportError::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "sales directory not found"),
            dir,
        ));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            paths.push(entry.into_path());
        }
    }

    tracing::debug!(dir = %dir.display(), count = paths.len(), "discovered sales files");
    Ok(paths)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    if extension.is_empty() {
        return true;
    }
    let wanted = extension.trim_start_matches('.');
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == wanted)
}
