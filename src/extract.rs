//! Quoted attribute extraction from a single tag line
//!
//! There is no tokenizer. A line is scanned for pairs of `"` characters and
//! whatever sits between each pair is an attribute value. Names are ignored
//! unless the caller asks for [`named_values`].

use std::ops::Range;

const QUOTE: char = '"';

/// Iterator over the byte ranges of quoted segments in a line.
///
/// Each range covers the text between an opening quote and the next quote.
/// The search for the following pair resumes right after the closing quote,
/// so segments never overlap. A trailing unmatched quote yields nothing.
#[derive(Debug, Clone)]
pub struct QuotedSpans<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> QuotedSpans<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }
}

impl Iterator for QuotedSpans<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let rest = self.line.get(self.pos..)?;
        let open = self.pos + rest.find(QUOTE)? + 1;
        let close = open + self.line[open..].find(QUOTE)?;
        self.pos = close + 1;
        Some(open..close)
    }
}

/// Quoted values of a line, left to right.
///
/// `<rect x="1" y="2" width="3" height="4"/>` gives `["1", "2", "3", "4"]`.
/// Empty quotes give an empty entry.
pub fn quoted_values(line: &str) -> Vec<&str> {
    QuotedSpans::new(line).map(|span| &line[span]).collect()
}

/// `(name, value)` pairs for every `name="value"` on a line.
///
/// The name is the run of name characters right before `=`, allowing
/// whitespace around the `=`. Quoted text not introduced by `name=` is
/// skipped.
pub fn named_values(line: &str) -> Vec<(&str, &str)> {
    QuotedSpans::new(line)
        .filter_map(|span| {
            let before = line[..span.start - 1].trim_end().strip_suffix('=')?;
            let before = before.trim_end();
            let name = &before[before.trim_end_matches(is_name_char).len()..];
            (!name.is_empty()).then(|| (name, &line[span]))
        })
        .collect()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')
}
