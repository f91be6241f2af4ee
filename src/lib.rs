//! Read `circle`, `rect` and `line` elements from line-oriented SVG, edit
//! them as an ordered list, and write a minimal SVG document back out.
//!
//! Each input line holding `<circle`, `<rect` or `<line` is scanned for
//! quoted values, which are assigned to the shape's fields by position.
//! Everything else on the input is ignored.
//!
//! ```
//! use svgshapes::Circle;
//!
//! let mut store = svgshapes::parse(r#"<rect x="1" y="2" width="3" height="4"/>"#);
//! store.push(Circle::new(10.0, 10.0, 5.0));
//! store.remove(0).unwrap();
//!
//! assert_eq!(
//!     store.to_svg(),
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
//!      <svg xmlns=\"http://www.w3.org/2000/svg\">\n\
//!      <circle cx=\"10\" cy=\"10\" r=\"5\" />\n\
//!      </svg>\n"
//! );
//! ```

pub mod build;
pub mod errors;
pub mod extract;
pub mod log;
pub mod parse;
pub mod render;
pub mod shapes;
pub mod store;

pub use errors::{IoError, SkipReason, SkippedLine, StoreError};
pub use parse::{ExtractMode, ParseOptions, Parsed, SkipPolicy, parse, parse_line, parse_with};
pub use shapes::{Circle, Line, Rectangle, Shape, ShapeKind, ToSvg};
pub use store::ShapeStore;
