//! Shape types
//!
//! The three supported elements form a closed set. Each variant knows how to
//! serialize itself as a single self-closing SVG tag; `Shape` forwards to the
//! variant through `enum_dispatch`.

use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

/// Serialize a shape as one SVG element tag
#[enum_dispatch]
pub trait ToSvg {
    /// The shape's element, e.g. `<circle cx="1" cy="2" r="3" />`
    fn to_svg(&self) -> String;

    /// Which kind of element this is
    fn kind(&self) -> ShapeKind;
}

/// Any supported shape
#[enum_dispatch(ToSvg)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Line(Line),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}

// ============================================================================
// Shape Kinds
// ============================================================================

/// The element kinds recognized on an input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Line,
}

impl ShapeKind {
    /// Kinds in dispatch priority order
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Line];

    /// Pick the kind for a line by substring match on the tag opener.
    ///
    /// `<circle` wins over `<rect`, which wins over `<line`. Lines with none
    /// of the markers (prolog, `<svg>`, comments, closing tags) give `None`.
    pub fn detect(line: &str) -> Option<ShapeKind> {
        Self::ALL.into_iter().find(|kind| line.contains(kind.marker()))
    }

    /// SVG element name
    pub fn element(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rect",
            ShapeKind::Line => "line",
        }
    }

    /// The tag opener searched for on input lines
    pub fn marker(self) -> &'static str {
        match self {
            ShapeKind::Circle => "<circle",
            ShapeKind::Rectangle => "<rect",
            ShapeKind::Line => "<line",
        }
    }

    /// Attribute names in the order their values are assigned
    pub fn attribute_names(self) -> &'static [&'static str] {
        match self {
            ShapeKind::Circle => &["cx", "cy", "r"],
            ShapeKind::Rectangle => &["x", "y", "width", "height"],
            ShapeKind::Line => &["x1", "y1", "x2", "y2"],
        }
    }

    /// Number of quoted values a line of this kind must carry
    pub fn expected_count(self) -> usize {
        self.attribute_names().len()
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element())
    }
}

// ============================================================================
// Shape Types
// ============================================================================

/// A circle given by center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub r: f64,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            center: dvec2(cx, cy),
            r,
        }
    }

    pub fn cx(&self) -> f64 {
        self.center.x
    }

    pub fn cy(&self) -> f64 {
        self.center.y
    }

    /// `(name, value)` pairs in serialization order
    pub fn attributes(&self) -> [(&'static str, f64); 3] {
        [("cx", self.center.x), ("cy", self.center.y), ("r", self.r)]
    }
}

impl ToSvg for Circle {
    fn to_svg(&self) -> String {
        element_tag(ShapeKind::Circle, &self.attributes())
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: dvec2(x, y),
            size: dvec2(width, height),
        }
    }

    pub fn x(&self) -> f64 {
        self.origin.x
    }

    pub fn y(&self) -> f64 {
        self.origin.y
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn attributes(&self) -> [(&'static str, f64); 4] {
        [
            ("x", self.origin.x),
            ("y", self.origin.y),
            ("width", self.size.x),
            ("height", self.size.y),
        ]
    }
}

impl ToSvg for Rectangle {
    fn to_svg(&self) -> String {
        element_tag(ShapeKind::Rectangle, &self.attributes())
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
}

/// A straight segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: DVec2,
    pub end: DVec2,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: dvec2(x1, y1),
            end: dvec2(x2, y2),
        }
    }

    pub fn attributes(&self) -> [(&'static str, f64); 4] {
        [
            ("x1", self.start.x),
            ("y1", self.start.y),
            ("x2", self.end.x),
            ("y2", self.end.y),
        ]
    }
}

impl ToSvg for Line {
    fn to_svg(&self) -> String {
        element_tag(ShapeKind::Line, &self.attributes())
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Format `<name a="1" b="2" />`.
///
/// `f64`'s `Display` is the shortest text that parses back to the same value,
/// so serialized shapes re-read exactly.
fn element_tag(kind: ShapeKind, attributes: &[(&str, f64)]) -> String {
    let mut tag = String::with_capacity(16 + attributes.len() * 12);
    tag.push('<');
    tag.push_str(kind.element());
    for (name, value) in attributes {
        tag.push_str(&format!(" {name}=\"{value}\""));
    }
    tag.push_str(" />");
    tag
}

// ============================================================================
// Tests
// ============================================================================
