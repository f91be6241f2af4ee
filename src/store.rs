//! The shape store: an ordered, index-addressed list of shapes
//!
//! Insertion order is document order. Indices are the only addressing
//! scheme and duplicates are allowed.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::errors::{IoError, StoreError};
use crate::log::{debug, warn};
use crate::parse::{self, LineParser, ParseOptions, Parsed};
use crate::render;
use crate::shapes::Shape;

/// Ordered shapes of one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Append a shape at the end
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Remove and return the shape at `index`.
    ///
    /// Out-of-range indices leave the store untouched.
    pub fn remove(&mut self, index: usize) -> Result<Shape, StoreError> {
        self.check_index(index)?;
        Ok(self.shapes.remove(index))
    }

    /// Overwrite the shape at `index`, returning the previous one
    pub fn replace(&mut self, index: usize, shape: impl Into<Shape>) -> Result<Shape, StoreError> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.shapes[index], shape.into()))
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.shapes.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.shapes.len(),
            })
        }
    }

    /// Parse more markup and append its shapes; returns how many were added
    pub fn extend_from_str(&mut self, source: &str) -> usize {
        let parsed = parse::parse(source);
        let added = parsed.len();
        self.extend(parsed);
        added
    }

    /// The complete SVG document for this store
    pub fn to_svg(&self) -> String {
        render::render_document(&self.shapes)
    }

    /// Stream the document to a writer
    pub fn write_to<W: Write>(&self, writer: W) -> io::Result<()> {
        render::write_document(&self.shapes, writer)
    }

    /// Read a file, silently skipping malformed shape lines
    pub fn load(path: impl AsRef<Path>) -> Result<ShapeStore, IoError> {
        Ok(Self::load_with(path, &ParseOptions::default())?.store)
    }

    /// Read a file with explicit options.
    ///
    /// The path replaces `options.source_name` in diagnostics. Lines that are
    /// not valid UTF-8 are decoded lossily rather than failing the read.
    pub fn load_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Parsed, IoError> {
        let path = path.as_ref();
        let read_err = |source| IoError::Read {
            path: path.to_path_buf(),
            source,
        };

        debug!(path = %path.display(), "loading shapes");
        let file = File::open(path).map_err(read_err)?;
        let options = options.clone().with_source_name(path.display().to_string());
        let mut parser = LineParser::new(&options);
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(read_err)? == 0 {
                break;
            }
            let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
            // A bad byte only affects its own line
            match std::str::from_utf8(bytes) {
                Ok(line) => parser.feed(line),
                Err(_) => {
                    warn!(path = %path.display(), "line is not valid UTF-8, decoding lossily");
                    parser.feed(&String::from_utf8_lossy(bytes));
                }
            }
        }
        Ok(parser.finish())
    }

    /// Write the document to a file, creating or truncating it
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let path = path.as_ref();
        let write_err = |source| IoError::Write {
            path: path.to_path_buf(),
            source,
        };

        debug!(path = %path.display(), shapes = self.len(), "saving shapes");
        let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
        self.write_to(&mut writer).map_err(write_err)?;
        writer.flush().map_err(write_err)
    }
}

impl fmt::Display for ShapeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}

impl FromIterator<Shape> for ShapeStore {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Shape> for ShapeStore {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        self.shapes.extend(iter);
    }
}

impl IntoIterator for ShapeStore {
    type Item = Shape;
    type IntoIter = std::vec::IntoIter<Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShapeStore {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl std::ops::Index<usize> for ShapeStore {
    type Output = Shape;

    /// # Panics
    ///
    /// Panics if `index >= len()`; use [`ShapeStore::get`] for a checked lookup.
    fn index(&self, index: usize) -> &Shape {
        &self.shapes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Line, Rectangle, ShapeKind, ToSvg};

    fn sample() -> ShapeStore {
        [
            Shape::from(Circle::new(1.0, 1.0, 1.0)),
            Shape::from(Rectangle::new(0.0, 0.0, 2.0, 2.0)),
            Shape::from(Line::new(0.0, 0.0, 3.0, 3.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn push_grows_by_one() {
        let mut store = ShapeStore::new();
        store.push(Circle::new(0.0, 0.0, 1.0));
        assert_eq!(store.len(), 1);
        // Duplicates are fine
        store.push(Circle::new(0.0, 0.0, 1.0));
        assert_eq!(store.len(), 2);
        assert_eq!(store[0], store[1]);
    }

    #[test]
    fn remove_returns_shape_and_shifts() {
        let mut store = sample();
        let removed = store.remove(1).unwrap();
        assert_eq!(removed, Shape::from(Rectangle::new(0.0, 0.0, 2.0, 2.0)));
        assert_eq!(store.len(), 2);
        assert_eq!(store[1], Shape::from(Line::new(0.0, 0.0, 3.0, 3.0)));
    }

    #[test]
    fn replace_returns_previous() {
        let mut store = sample();
        let old = store.replace(0, Line::new(9.0, 9.0, 8.0, 8.0)).unwrap();
        assert_eq!(old, Shape::from(Circle::new(1.0, 1.0, 1.0)));
        assert_eq!(store[0], Shape::from(Line::new(9.0, 9.0, 8.0, 8.0)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn out_of_range_leaves_store_unchanged() {
        let mut store = sample();
        let before = store.clone();

        assert_eq!(
            store.remove(3),
            Err(StoreError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            store.replace(7, Circle::new(0.0, 0.0, 0.0)),
            Err(StoreError::IndexOutOfRange { index: 7, len: 3 })
        );
        assert_eq!(store, before);

        let mut empty = ShapeStore::new();
        assert!(empty.remove(0).is_err());
        assert!(empty.replace(0, Circle::new(0.0, 0.0, 0.0)).is_err());
    }

    #[test]
    fn extend_from_str_appends() {
        let mut store = sample();
        let added = store.extend_from_str(
            "<circle cx=\"5\" cy=\"5\" r=\"5\"/>\n<circle cx=\"5\"/>\n<rect x=\"1\" y=\"1\" width=\"1\" height=\"1\"/>\n",
        );
        assert_eq!(added, 2);
        assert_eq!(store.len(), 5);
        assert_eq!(store[3], Shape::from(Circle::new(5.0, 5.0, 5.0)));
    }

    #[test]
    fn display_is_document() {
        let store = sample();
        assert_eq!(store.to_string(), store.to_svg());
        assert!(store.to_svg().starts_with(render::XML_PROLOG));
    }

    #[test]
    fn iterates_in_order() {
        let store = sample();
        let kinds: Vec<ShapeKind> = store.iter().map(ToSvg::kind).collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Line]
        );
        assert_eq!((&store).into_iter().count(), 3);
        assert_eq!(store.into_iter().count(), 3);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = ShapeStore::load("/definitely/not/here.svg").unwrap_err();
        assert!(matches!(err, IoError::Read { .. }));
        assert_eq!(err.path(), Path::new("/definitely/not/here.svg"));
    }

    #[test]
    #[should_panic]
    fn index_past_end_panics() {
        let store = sample();
        let _ = &store[3];
    }
}
