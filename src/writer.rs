// src/writer.rs
//! Persists rendered reports.
//!
//! All reports are first staged into temporary files next to their targets and
//! only then renamed into place, so a failed run never leaves a truncated report.

use crate::error::{ReportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One report to persist: target file name and its lines.
#[derive(Debug, Clone, Copy)]
pub struct ReportFile<'a> {
    pub name: &'a str,
    pub lines: &'a [String],
}

/// Joins lines with `\n`, terminating the last one too.
#[must_use]
pub fn render(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Writes every report into `dir`, creating it if absent.
///
/// # Errors
/// Returns error if the directory cannot be created or any report cannot be
/// staged or moved into place. Staged temporaries are removed on failure.
pub fn write_reports(dir: &Path, reports: &[ReportFile<'_>]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| ReportError::io(e, dir))?;

    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(reports.len());
    for report in reports {
        let target = dir.join(report.name);
        let temp = temp_path(dir, report.name);
        if let Err(e) = fs::write(&temp, render(report.lines)) {
            discard(&staged);
            let _ = fs::remove_file(&temp);
            return Err(ReportError::io(e, temp));
        }
        staged.push((temp, target));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (idx, (temp, target)) in staged.iter().enumerate() {
        if let Err(e) = fs::rename(temp, target) {
            discard(&staged[idx..]);
            return Err(ReportError::io(e, target));
        }
        tracing::info!(path = %target.display(), "wrote report");
        written.push(target.clone());
    }

    Ok(written)
}

fn temp_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!(".{name}.tmp"))
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (temp, _) in staged {
        if let Err(e) = fs::remove_file(temp) {
            tracing::warn!(path = %temp.display(), error = %e, "failed to remove staged report");
        }
    }
}
