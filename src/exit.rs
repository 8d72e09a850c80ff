// src/exit.rs
//! Process exit codes for `salesreport`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::ReportError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ReportExit {
    /// Both reports were written.
    Success = 0,
    /// Generic error (I/O, configuration).
    Error = 1,
    /// An input line did not match its record format, or its totals overflowed.
    MalformedInput = 2,
    /// A sales total refers to a salesman or product that was never loaded.
    MissingReference = 3,
}

impl ReportExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ReportError>().map(ReportError::root) {
            Some(ReportError::MalformedRecord { .. } | ReportError::Overflow { .. }) => {
                Self::MalformedInput
            }
            Some(ReportError::MissingReference { .. }) => Self::MissingReference,
            _ => Self::Error,
        }
    }
}

impl Termination for ReportExit {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn report(self) -> std::process::ExitCode {
        std::process::ExitCode::from(self.code() as u8)
    }
}
