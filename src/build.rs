//! Shape builders
//!
//! A builder takes the values extracted from one line and either produces a
//! shape or says why it could not.

use crate::errors::SkipReason;
use crate::shapes::{Circle, Line, Rectangle, Shape, ShapeKind};

/// Build a shape from positional values.
///
/// The value count must match the kind exactly and every value must parse
/// as `f64` (surrounding whitespace is ignored).
pub fn build(kind: ShapeKind, values: &[&str]) -> Result<Shape, SkipReason> {
    let shape: Shape = match kind {
        ShapeKind::Circle => {
            let [cx, cy, r] = numbers::<3>(kind, values)?;
            Circle::new(cx, cy, r).into()
        }
        ShapeKind::Rectangle => {
            let [x, y, width, height] = numbers::<4>(kind, values)?;
            Rectangle::new(x, y, width, height).into()
        }
        ShapeKind::Line => {
            let [x1, y1, x2, y2] = numbers::<4>(kind, values)?;
            Line::new(x1, y1, x2, y2).into()
        }
    };
    Ok(shape)
}

/// Build a shape from `(name, value)` pairs, looking attributes up by name.
///
/// The first occurrence of a name wins. Attributes the kind does not use
/// are ignored.
pub fn build_named(kind: ShapeKind, pairs: &[(&str, &str)]) -> Result<Shape, SkipReason> {
    let values = kind
        .attribute_names()
        .iter()
        .map(|&attribute| {
            pairs
                .iter()
                .find(|(name, _)| *name == attribute)
                .map(|&(_, value)| value)
                .ok_or(SkipReason::MissingAttribute { kind, attribute })
        })
        .collect::<Result<Vec<_>, _>>()?;
    build(kind, &values)
}

fn numbers<const N: usize>(kind: ShapeKind, values: &[&str]) -> Result<[f64; N], SkipReason> {
    if values.len() != N {
        return Err(SkipReason::WrongAttributeCount {
            kind,
            expected: N,
            found: values.len(),
        });
    }

    let mut out = [0.0; N];
    for ((slot, raw), &attribute) in out.iter_mut().zip(values).zip(kind.attribute_names()) {
        *slot = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| SkipReason::InvalidNumber {
                kind,
                attribute,
                value: (*raw).to_string(),
            })?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ToSvg;

    #[test]
    fn circle_from_three_values() {
        let shape = build(ShapeKind::Circle, &["1", "2.5", "3"]).unwrap();
        assert_eq!(shape, Shape::from(Circle::new(1.0, 2.5, 3.0)));
    }

    #[test]
    fn rectangle_and_line_from_four_values() {
        assert_eq!(
            build(ShapeKind::Rectangle, &["0", "0", "10", "20"]).unwrap(),
            Shape::from(Rectangle::new(0.0, 0.0, 10.0, 20.0))
        );
        assert_eq!(
            build(ShapeKind::Line, &["-1", "1e2", ".5", "7."]).unwrap(),
            Shape::from(Line::new(-1.0, 100.0, 0.5, 7.0))
        );
    }

    #[test]
    fn wrong_count_is_rejected() {
        assert_eq!(
            build(ShapeKind::Circle, &["1", "2"]),
            Err(SkipReason::WrongAttributeCount {
                kind: ShapeKind::Circle,
                expected: 3,
                found: 2,
            })
        );
        assert!(build(ShapeKind::Rectangle, &["1", "2", "3", "4", "5"]).is_err());
        assert!(build(ShapeKind::Line, &[]).is_err());
    }

    #[test]
    fn non_numeric_value_names_attribute() {
        assert_eq!(
            build(ShapeKind::Rectangle, &["1", "2", "wide", "4"]),
            Err(SkipReason::InvalidNumber {
                kind: ShapeKind::Rectangle,
                attribute: "width",
                value: "wide".to_string(),
            })
        );
    }

    #[test]
    fn empty_value_is_not_a_number() {
        assert!(matches!(
            build(ShapeKind::Circle, &["", "2", "3"]),
            Err(SkipReason::InvalidNumber { attribute: "cx", .. })
        ));
    }

    #[test]
    fn whitespace_around_numbers_is_ignored() {
        assert_eq!(
            build(ShapeKind::Circle, &[" 1", "2 ", "\t3"]).unwrap(),
            Shape::from(Circle::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn no_geometric_validation() {
        assert_eq!(
            build(ShapeKind::Circle, &["0", "0", "-5"]).unwrap(),
            Shape::from(Circle::new(0.0, 0.0, -5.0))
        );
    }

    #[test]
    fn non_finite_spellings() {
        // Rust float syntax: case-insensitive `inf`/`infinity`/`nan`
        let shape = build(ShapeKind::Circle, &["inf", "-Infinity", "NaN"]).unwrap();
        let Shape::Circle(circle) = shape else {
            panic!("expected a circle, got {shape:?}");
        };
        assert_eq!(circle.cx(), f64::INFINITY);
        assert_eq!(circle.cy(), f64::NEG_INFINITY);
        assert!(circle.r.is_nan());

        // Serialized spellings parse back to the same values
        assert_eq!(circle.to_svg(), r#"<circle cx="inf" cy="-inf" r="NaN" />"#);

        // Other languages' spellings are not numbers here
        assert!(build(ShapeKind::Circle, &["0", "0", "1d"]).is_err());
        assert!(build(ShapeKind::Circle, &["0", "0", "0x10"]).is_err());
    }

    #[test]
    fn named_lookup_ignores_order_and_extras() {
        let pairs = [("fill", "red"), ("r", "3"), ("cy", "2"), ("cx", "1")];
        assert_eq!(
            build_named(ShapeKind::Circle, &pairs).unwrap(),
            Shape::from(Circle::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn named_lookup_reports_missing() {
        let pairs = [("x1", "0"), ("y1", "0"), ("x2", "1")];
        assert_eq!(
            build_named(ShapeKind::Line, &pairs),
            Err(SkipReason::MissingAttribute {
                kind: ShapeKind::Line,
                attribute: "y2",
            })
        );
    }
}
