//! Shape class hierarchy with dispatch into Python overrides.
//!
//! `Shape` is the abstract base. `Rectangle` and `Circle` are native
//! subclasses that carry a core shape in the base's slot. Python code may
//! subclass any of them; the aggregation functions never call the native
//! slot directly but go through [`PyShapeHandle`], which looks the method up
//! on the Python object so the most-derived override always wins.

use std::sync::Arc;

use pyo3::exceptions::PyNotImplementedError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};

use mylib_core::{shapes, Circle, Error, Rectangle, Shape};

use crate::error::to_py_err;

/// Native implementation stored in the base class slot
type NativeShape = Arc<dyn Shape + Send + Sync>;

/// Abstract base class; subclasses must override `area()` and `name()`.
#[pyclass(name = "Shape", subclass)]
pub struct PyShape {
    native: Option<NativeShape>,
}

impl PyShape {
    fn with_native<S>(shape: S) -> Self
    where
        S: Shape + Send + Sync + 'static,
    {
        PyShape {
            native: Some(Arc::new(shape)),
        }
    }

    fn native(&self, method: &str) -> PyResult<&NativeShape> {
        self.native.as_ref().ok_or_else(|| {
            PyNotImplementedError::new_err(format!("Shape.{method}() must be overridden by a subclass"))
        })
    }
}

#[pymethods]
impl PyShape {
    // Arguments are accepted and ignored so Python subclasses can define
    // their own __init__ signature.
    #[new]
    #[pyo3(signature = (*_args, **_kwargs))]
    fn new(_args: &Bound<'_, PyTuple>, _kwargs: Option<&Bound<'_, PyDict>>) -> Self {
        PyShape { native: None }
    }

    /// Area of the shape.
    fn area(&self) -> PyResult<f64> {
        self.native("area")?.area().map_err(to_py_err)
    }

    /// Name of the shape.
    fn name(&self) -> PyResult<String> {
        self.native("name")?.name().map_err(to_py_err)
    }
}

/// Rectangle with read-only `width` and `height`.
#[pyclass(name = "Rectangle", extends = PyShape, subclass)]
pub struct PyRectangle {
    shape: Rectangle,
}

#[pymethods]
impl PyRectangle {
    #[new]
    fn new(width: f64, height: f64) -> PyResult<(Self, PyShape)> {
        let shape = Rectangle::new(width, height).map_err(to_py_err)?;
        Ok((PyRectangle { shape }, PyShape::with_native(shape)))
    }

    #[getter]
    fn width(&self) -> f64 {
        self.shape.width()
    }

    #[getter]
    fn height(&self) -> f64 {
        self.shape.height()
    }

    fn __repr__(&self) -> String {
        self.shape.to_string()
    }
}

/// Circle with a read-only `radius`.
#[pyclass(name = "Circle", extends = PyShape, subclass)]
pub struct PyCircle {
    shape: Circle,
}

#[pymethods]
impl PyCircle {
    #[new]
    fn new(radius: f64) -> PyResult<(Self, PyShape)> {
        let shape = Circle::new(radius).map_err(to_py_err)?;
        Ok((PyCircle { shape }, PyShape::with_native(shape)))
    }

    #[getter]
    fn radius(&self) -> f64 {
        self.shape.radius()
    }

    fn __repr__(&self) -> String {
        self.shape.to_string()
    }
}

// ============================================================================
// Trampoline
// ============================================================================

/// Implements [`Shape`] by calling the methods on a Python object.
///
/// A Python exception raised by an override is carried through the core as
/// [`Error::Dispatch`] and re-raised unchanged by [`to_py_err`].
pub struct PyShapeHandle<'a, 'py> {
    obj: &'a Bound<'py, PyAny>,
}

impl<'a, 'py> PyShapeHandle<'a, 'py> {
    pub fn new(obj: &'a Bound<'py, PyAny>) -> Self {
        PyShapeHandle { obj }
    }
}

impl Shape for PyShapeHandle<'_, '_> {
    fn area(&self) -> mylib_core::Result<f64> {
        self.obj
            .call_method0("area")
            .and_then(|value| value.extract::<f64>())
            .map_err(|err| Error::dispatch("area", err))
    }

    fn name(&self) -> mylib_core::Result<String> {
        self.obj
            .call_method0("name")
            .and_then(|value| value.extract::<String>())
            .map_err(|err| Error::dispatch("name", err))
    }
}

/// Sum of `shape.area()` over `shapes`, dispatched through Python.
///
/// # Raises
/// * `TypeError` - If an element is not a `Shape`
/// * Any exception raised by an `area()` override, unchanged
#[pyfunction]
pub fn total_area(shapes: Vec<Bound<'_, PyShape>>) -> PyResult<f64> {
    let handles: Vec<PyShapeHandle<'_, '_>> = shapes
        .iter()
        .map(|shape| PyShapeHandle::new(shape.as_any()))
        .collect();
    shapes::total_area(&handles).map_err(to_py_err)
}

/// `"<name> with area <area>"` for any shape, including Python subclasses.
#[pyfunction]
pub fn describe(shape: &Bound<'_, PyShape>) -> PyResult<String> {
    shapes::describe(&PyShapeHandle::new(shape.as_any())).map_err(to_py_err)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyShape>()?;
    m.add_class::<PyRectangle>()?;
    m.add_class::<PyCircle>()?;
    m.add_function(wrap_pyfunction!(total_area, m)?)?;
    m.add_function(wrap_pyfunction!(describe, m)?)?;
    Ok(())
}
