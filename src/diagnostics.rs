//! Reporting of suspicious run header usage
//!
//! Nothing in this crate writes warnings to the console directly. Instead,
//! they are handed to a [`DiagnosticSink`], which by default forwards them to
//! `tracing`. Tests and embedding applications can plug their own sink, and
//! any `Fn(&Diagnostic)` closure is a valid sink.

use crate::error::RunError;
use std::fmt::{self, Display};

/// Something worth warning about while building a run header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The zero/empty run header was built. Its contents are meaningless.
    UnsetRunHeader,

    /// A run header was rejected
    Rejected(RunError),
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsetRunHeader => {
                f.write_str("Default constructor of the run header should not be used!")
            }
            Self::Rejected(error) => write!(f, "{error}"),
        }
    }
}

impl From<RunError> for Diagnostic {
    fn from(error: RunError) -> Self {
        Self::Rejected(error)
    }
}

/// Destination of diagnostics
pub trait DiagnosticSink {
    /// Report a diagnostic
    fn report(&self, diagnostic: &Diagnostic);
}

impl<F: Fn(&Diagnostic)> DiagnosticSink for F {
    fn report(&self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Default sink, which emits diagnostics as `tracing` warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::warn!("{diagnostic}");
    }
}
