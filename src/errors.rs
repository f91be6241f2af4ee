//! Error types with diagnostics using miette
//!
//! Skipped lines carry the offending source line so callers can render them
//! with miette's fancy handler. Store and I/O errors are plain values.

use std::io;
use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::shapes::ShapeKind;

// ============================================================================
// Skip Reasons
// ============================================================================

/// Why a recognized shape line produced no shape
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SkipReason {
    #[error("{kind} needs {expected} attribute values, found {found}")]
    #[diagnostic(
        code(svgshapes::parse::wrong_attribute_count),
        help("attributes are read by position, so every quoted value on the line counts")
    )]
    WrongAttributeCount {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },

    #[error("{kind} attribute `{attribute}` is not a number: {value:?}")]
    #[diagnostic(code(svgshapes::parse::invalid_number))]
    InvalidNumber {
        kind: ShapeKind,
        attribute: &'static str,
        value: String,
    },

    #[error("{kind} is missing attribute `{attribute}`")]
    #[diagnostic(code(svgshapes::parse::missing_attribute))]
    MissingAttribute {
        kind: ShapeKind,
        attribute: &'static str,
    },
}

/// A recognized shape line that was skipped, with its location
#[derive(Error, Diagnostic, Debug)]
#[error("line {line}: {reason}")]
#[diagnostic(code(svgshapes::parse::skipped_line))]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line: usize,
    #[diagnostic_source]
    pub reason: SkipReason,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("no shape built from this line")]
    pub span: SourceSpan,
}

impl SkippedLine {
    pub(crate) fn new(source_name: &str, line: usize, text: &str, reason: SkipReason) -> Self {
        let trimmed = text.trim_start();
        let offset = text.len() - trimmed.len();
        let len = trimmed.trim_end().len();
        Self {
            line,
            reason,
            src: NamedSource::new(format!("{source_name}:{line}"), text.to_string()),
            span: (offset, len).into(),
        }
    }
}

// ============================================================================
// Store Errors
// ============================================================================

/// Errors from index-addressed store mutation
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("index {index} is out of range for a store of {len} shapes")]
    #[diagnostic(code(svgshapes::store::index_out_of_range))]
    IndexOutOfRange { index: usize, len: usize },
}

// ============================================================================
// I/O Errors
// ============================================================================

/// File access failures; fatal for the operation that hit them
#[derive(Error, Diagnostic, Debug)]
pub enum IoError {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(svgshapes::io::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    #[diagnostic(code(svgshapes::io::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IoError {
    /// The path the failed operation was working on
    pub fn path(&self) -> &std::path::Path {
        match self {
            IoError::Read { path, .. } | IoError::Write { path, .. } => path,
        }
    }
}
