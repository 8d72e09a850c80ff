// src/error.rs
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of input record a line was expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Product,
    Salesman,
    SalesHeader,
    SalesBody,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Product => "product",
            Self::Salesman => "salesman",
            Self::SalesHeader => "sales header",
            Self::SalesBody => "sales body",
        };
        f.write_str(name)
    }
}

/// The reference map a report row failed to resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Product,
    Salesman,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product => f.write_str("product"),
            Self::Salesman => f.write_str("salesman"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Malformed {kind} record {line:?}: {reason}")]
    MalformedRecord {
        kind: RecordKind,
        line: String,
        reason: String,
    },

    #[error("No {kind} found for key {key:?}")]
    MissingReference { kind: ReferenceKind, key: String },

    #[error("{total} total for {key:?} overflowed")]
    Overflow { total: &'static str, key: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{path}:{row}: {source}")]
    AtLine {
        path: PathBuf,
        row: usize,
        #[source]
        source: Box<ReportError>,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    pub(crate) fn malformed(kind: RecordKind, line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            kind,
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// Attaches the file and 1-based line number the error came from.
    #[must_use]
    pub fn at_line(self, path: impl Into<PathBuf>, row: usize) -> Self {
        Self::AtLine {
            path: path.into(),
            row,
            source: Box::new(self),
        }
    }

    /// Strips any location wrappers and returns the underlying error.
    #[must_use]
    pub fn root(&self) -> &ReportError {
        match self {
            Self::AtLine { source, .. } => source.root(),
            other => other,
        }
    }
}

// Allow `?` on std::io::Error by converting to ReportError::Io with unknown path.
impl From<std::io::Error> for ReportError {
    fn from(source: std::io::Error) -> Self {
        ReportError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for ReportError {
    fn from(e: walkdir::Error) -> Self {
        let path = e
            .path()
            .map_or_else(|| PathBuf::from("<unknown>"), std::path::Path::to_path_buf);
        let source = e
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed"));
        ReportError::Io { source, path }
    }
}
