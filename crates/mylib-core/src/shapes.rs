//! Shape hierarchy with dynamic dispatch.
//!
//! [`Shape`] is the dispatch table the aggregation functions work against.
//! Native shapes implement it directly; foreign implementations (for
//! instance subclasses defined in Python) implement it through a
//! trampoline that forwards each call and reports failures as
//! [`Error::Dispatch`].

use std::fmt;

use tracing::{instrument, trace};

use crate::constants::PI;
use crate::error::{Error, Result};

/// A shape with an area and a display name.
pub trait Shape {
    /// Area of the shape
    fn area(&self) -> Result<f64>;

    /// Human-readable name of the shape
    fn name(&self) -> Result<String>;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn area(&self) -> Result<f64> {
        (**self).area()
    }

    fn name(&self) -> Result<String> {
        (**self).name()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn area(&self) -> Result<f64> {
        (**self).area()
    }

    fn name(&self) -> Result<String> {
        (**self).name()
    }
}

impl<S: Shape + ?Sized> Shape for std::sync::Arc<S> {
    fn area(&self) -> Result<f64> {
        (**self).area()
    }

    fn name(&self) -> Result<String> {
        (**self).name()
    }
}

fn check_extent(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid(name, "must be a finite, non-negative number"))
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Rectangle {
            width: check_extent("width", width)?,
            height: check_extent("height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> Result<f64> {
        Ok(self.width * self.height)
    }

    fn name(&self) -> Result<String> {
        Ok("Rectangle".to_string())
    }
}

/// Circle given by its radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Circle {
            radius: check_extent("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> Result<f64> {
        Ok(PI * self.radius * self.radius)
    }

    fn name(&self) -> Result<String> {
        Ok("Circle".to_string())
    }
}

/// Sum of the areas of `shapes`, stopping at the first failing dispatch.
#[instrument(level = "debug", skip_all)]
pub fn total_area<I>(shapes: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Shape,
{
    let mut total = 0.0;
    for (index, shape) in shapes.into_iter().enumerate() {
        let area = shape.area()?;
        trace!(index, area, "dispatched area()");
        total += area;
    }
    Ok(total)
}

/// One-line description, `"<name> with area <area>"`.
pub fn describe<S: Shape + ?Sized>(shape: &S) -> Result<String> {
    Ok(format!("{} with area {}", shape.name()?, shape.area()?))
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle({}, {})", self.width, self.height)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({})", self.radius)
    }
}
