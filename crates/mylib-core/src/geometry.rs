//! Plane geometry: the two `area` overloads and the `Point` value type.

use std::fmt;
use std::ops::Add;

use crate::constants::PI;
use crate::error::{Error, Result};

fn check_dimension(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid(name, "must be finite"));
    }
    if value < 0.0 {
        return Err(Error::invalid(name, "must not be negative"));
    }
    Ok(value)
}

/// Area of a circle of radius `r`.
pub fn circle_area(r: f64) -> Result<f64> {
    let r = check_dimension("r", r)?;
    Ok(PI * r * r)
}

/// Area of a `w` by `h` rectangle.
pub fn rectangle_area(w: f64, h: f64) -> Result<f64> {
    Ok(check_dimension("w", w)? * check_dimension("h", h)?)
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The point `(0, 0)`.
    pub fn origin() -> Self {
        Point::default()
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Move the point in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Shortest round-trip text for a coordinate, spelled the way Python's
/// `repr(float)` spells it (`1e+21`, `1e-07`, `nan`) but with a whole
/// number's `.0` dropped, so `4.0` prints as `4`.
fn format_coordinate(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    // Debug switches to exponent form outside 1e-4 <= |v| < 1e16, as repr does.
    let shortest = format!("{value:?}");
    if let Some((mantissa, exponent)) = shortest.split_once('e') {
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return format!("{mantissa}e{sign}{digits:0>2}");
    }
    if let Some(whole) = shortest.strip_suffix(".0") {
        return whole.to_string();
    }
    shortest
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point({}, {})",
            format_coordinate(self.x),
            format_coordinate(self.y)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_circle_area() {
        let area = circle_area(3.0).unwrap();
        assert!((area - 28.274333882308138).abs() < 1e-12);
        assert_eq!(circle_area(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_rectangle_area() {
        assert_eq!(rectangle_area(4.0, 2.0).unwrap(), 8.0);
    }

    #[test]
    fn test_area_rejects_bad_dimensions() {
        assert!(matches!(
            circle_area(-1.0),
            Err(Error::InvalidArgument { name: "r", .. })
        ));
        assert!(matches!(
            rectangle_area(1.0, f64::NAN),
            Err(Error::InvalidArgument { name: "h", .. })
        ));
    }

    #[test]
    fn test_point_distance() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.distance_to(&Point::origin()), 5.0);
        assert_eq!(Point::origin().distance_to(&p), 5.0);
    }

    #[test]
    fn test_point_translate_and_add() {
        let mut p = Point::new(3.0, 4.0);
        p.translate(1.0, -2.0);
        assert_eq!(p, Point::new(4.0, 2.0));
        assert_eq!(p + Point::new(1.0, 1.0), Point::new(5.0, 3.0));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(4.0, 2.0).to_string(), "Point(4, 2)");
        assert_eq!(Point::origin().to_string(), "Point(0, 0)");
        assert_eq!(Point::new(1.5, -2.0).to_string(), "Point(1.5, -2)");
    }

    #[test]
    fn test_point_display_extreme_coordinates() {
        assert_eq!(Point::new(1e21, 1e-7).to_string(), "Point(1e+21, 1e-07)");
        assert_eq!(Point::new(f64::NAN, -0.0).to_string(), "Point(nan, -0)");
        assert_eq!(
            Point::new(f64::INFINITY, f64::NEG_INFINITY).to_string(),
            "Point(inf, -inf)"
        );
        assert_eq!(Point::new(0.1, 1e16).to_string(), "Point(0.1, 1e+16)");
        assert_eq!(
            Point::new(123456.789, 0.0001).to_string(),
            "Point(123456.789, 0.0001)"
        );
        assert_eq!(
            Point::new(2.5e-5, -1.5e300).to_string(),
            "Point(2.5e-05, -1.5e+300)"
        );
    }
}
