//! The `Point` value class.

use pyo3::prelude::*;

use mylib_core::Point;

/// A point in the plane with mutable `x` and `y`.
#[pyclass(name = "Point", eq)]
#[derive(Debug, Clone, PartialEq)]
pub struct PyPoint {
    inner: Point,
}

impl From<Point> for PyPoint {
    fn from(inner: Point) -> Self {
        PyPoint { inner }
    }
}

#[pymethods]
impl PyPoint {
    #[new]
    #[pyo3(signature = (x=0.0, y=0.0))]
    fn new(x: f64, y: f64) -> Self {
        Point::new(x, y).into()
    }

    /// The point `(0, 0)`.
    #[staticmethod]
    fn origin() -> Self {
        Point::origin().into()
    }

    #[getter]
    fn x(&self) -> f64 {
        self.inner.x
    }

    #[setter]
    fn set_x(&mut self, x: f64) {
        self.inner.x = x;
    }

    #[getter]
    fn y(&self) -> f64 {
        self.inner.y
    }

    #[setter]
    fn set_y(&mut self, y: f64) {
        self.inner.y = y;
    }

    /// Euclidean distance to `other`.
    fn distance_to(&self, other: PyRef<'_, PyPoint>) -> f64 {
        self.inner.distance_to(&other.inner)
    }

    /// Move this point in place by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64) {
        self.inner.translate(dx, dy);
    }

    fn __add__(&self, other: PyRef<'_, PyPoint>) -> PyPoint {
        (self.inner + other.inner).into()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPoint>()?;
    Ok(())
}
