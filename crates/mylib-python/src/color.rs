//! The `Color` enumeration and the module constants.

use pyo3::prelude::*;

use mylib_core::{Color, APP_NAME, PI};

/// Primary colours with stable integer values: Red = 1, Green = 2, Blue = 3.
#[pyclass(name = "Color", eq, eq_int)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PyColor {
    Red = 1,
    Green = 2,
    Blue = 3,
}

impl From<PyColor> for Color {
    fn from(color: PyColor) -> Self {
        match color {
            PyColor::Red => Color::Red,
            PyColor::Green => Color::Green,
            PyColor::Blue => Color::Blue,
        }
    }
}

impl From<Color> for PyColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => PyColor::Red,
            Color::Green => PyColor::Green,
            Color::Blue => PyColor::Blue,
        }
    }
}

#[pymethods]
impl PyColor {
    /// Member name without the enum prefix.
    #[getter]
    fn name(&self) -> &'static str {
        Color::from(*self).name()
    }

    /// Integer value of the member.
    #[getter]
    fn value(&self) -> i64 {
        Color::from(*self).ordinal()
    }

    /// Member with the given integer value.
    #[staticmethod]
    fn from_value(value: i64) -> Option<PyColor> {
        Color::from_ordinal(value).map(PyColor::from)
    }

    fn __str__(&self) -> String {
        Color::from(*self).to_string()
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("APP_NAME", APP_NAME)?;
    m.add("PI", PI)?;
    m.add_class::<PyColor>()?;
    Ok(())
}
