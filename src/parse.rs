//! Line-by-line parsing of shape markup into a store

use crate::build::{build, build_named};
use crate::errors::{SkipReason, SkippedLine};
use crate::extract::{named_values, quoted_values};
use crate::log::{debug, trace};
use crate::shapes::{Shape, ShapeKind};
use crate::store::ShapeStore;

/// How attribute values are matched to shape fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractMode {
    /// Values are assigned by position, ignoring attribute names
    #[default]
    Positional,
    /// Values are looked up by attribute name; order does not matter
    Named,
}

/// What happens to recognized shape lines that produce no shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipPolicy {
    /// Drop them (they are still logged at debug level)
    #[default]
    Silent,
    /// Record each one in [`Parsed::skipped`]
    Collect,
}

/// Parser settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub mode: ExtractMode,
    pub skips: SkipPolicy,
    /// Name used for the input in diagnostics
    pub source_name: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: ExtractMode::default(),
            skips: SkipPolicy::default(),
            source_name: "<input>".to_string(),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: ExtractMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_skips(mut self, skips: SkipPolicy) -> Self {
        self.skips = skips;
        self
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }
}

/// Result of a parse: the shapes plus any collected skips
#[derive(Debug, Default)]
pub struct Parsed {
    pub store: ShapeStore,
    /// Empty unless parsing ran with [`SkipPolicy::Collect`]
    pub skipped: Vec<SkippedLine>,
}

/// Parse one line.
///
/// `None` means the line is not a shape line at all. `Some(Err(_))` means it
/// was recognized but could not be built.
pub fn parse_line(line: &str, mode: ExtractMode) -> Option<Result<Shape, SkipReason>> {
    let kind = ShapeKind::detect(line)?;
    let built = match mode {
        ExtractMode::Positional => build(kind, &quoted_values(line)),
        ExtractMode::Named => build_named(kind, &named_values(line)),
    };
    Some(built)
}

/// Parse text with default options, silently skipping malformed lines
pub fn parse(source: &str) -> ShapeStore {
    parse_with(source, &ParseOptions::default()).store
}

/// Parse text with explicit options
pub fn parse_with(source: &str, options: &ParseOptions) -> Parsed {
    let mut parser = LineParser::new(options);
    for line in source.lines() {
        parser.feed(line);
    }
    parser.finish()
}

/// Incremental parser fed one line at a time.
///
/// Used directly by file loading so lines can be consumed as they are read.
pub(crate) struct LineParser<'a> {
    options: &'a ParseOptions,
    line_no: usize,
    parsed: Parsed,
}

impl<'a> LineParser<'a> {
    pub(crate) fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            line_no: 0,
            parsed: Parsed::default(),
        }
    }

    pub(crate) fn feed(&mut self, line: &str) {
        self.line_no += 1;
        match parse_line(line, self.options.mode) {
            None => {}
            Some(Ok(shape)) => {
                trace!(line = self.line_no, %shape, "built shape");
                self.parsed.store.push(shape);
            }
            Some(Err(reason)) => {
                debug!(line = self.line_no, %reason, "skipping shape line");
                if self.options.skips == SkipPolicy::Collect {
                    self.parsed.skipped.push(SkippedLine::new(
                        &self.options.source_name,
                        self.line_no,
                        line,
                        reason,
                    ));
                }
            }
        }
    }

    pub(crate) fn finish(self) -> Parsed {
        debug!(
            lines = self.line_no,
            shapes = self.parsed.store.len(),
            skipped = self.parsed.skipped.len(),
            "parse finished"
        );
        self.parsed
    }
}
