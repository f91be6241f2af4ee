//! SVG document generation

use std::io;

use crate::shapes::{Shape, ToSvg};

/// First line of every written document
pub const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render shapes as a complete document, one element per line
pub fn render_document(shapes: &[Shape]) -> String {
    let mut out = String::with_capacity(128 + shapes.len() * 48);
    out.push_str(XML_PROLOG);
    out.push('\n');
    out.push_str(&format!("<svg xmlns=\"{SVG_NS}\">\n"));
    for shape in shapes {
        out.push_str(&shape.to_svg());
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

/// Write the rendered document to `writer`
pub fn write_document<W: io::Write>(shapes: &[Shape], mut writer: W) -> io::Result<()> {
    writer.write_all(render_document(shapes).as_bytes())
}
