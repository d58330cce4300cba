//! Exception translation.
//!
//! Native errors cross into Python at exactly one place, [`to_py_err`].
//! Business-rule failures become `mylib.MyError`; the rest map onto the
//! closest built-in exception. A failure raised by a Python override
//! travels through the core as [`Error::Dispatch`] and is re-raised here
//! unchanged.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyOverflowError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use mylib_core::Error;

create_exception!(
    mylib,
    MyError,
    PyException,
    "Raised when a native operation reports a business-rule failure."
);

/// Convert a core error into the Python exception the caller should see.
pub fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::OperationFailed(message) => MyError::new_err(message),
        Error::Dispatch { method, source } => match source.downcast::<PyErr>() {
            Ok(original) => *original,
            Err(other) => PyRuntimeError::new_err(format!("{method}() failed: {other}")),
        },
        overflow @ Error::Overflow { .. } => PyOverflowError::new_err(overflow.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Register the exception types with the module.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("MyError", m.py().get_type::<MyError>())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::exceptions::PyKeyError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_operation_failed_becomes_my_error() {
        Python::initialize();

        Python::attach(|py| {
            let err = to_py_err(Error::failed("Something went wrong"));
            assert!(err.is_instance_of::<MyError>(py));
            assert_eq!(err.value(py).to_string(), "Something went wrong");
        });
    }

    #[test]
    fn test_builtin_mappings() {
        Python::initialize();

        Python::attach(|py| {
            let overflow = to_py_err(Error::Overflow { operation: "add" });
            assert!(overflow.is_instance_of::<PyOverflowError>(py));

            let invalid = to_py_err(Error::invalid("r", "must not be negative"));
            assert!(invalid.is_instance_of::<PyValueError>(py));

            let empty = to_py_err(Error::EmptyInput { operation: "mean" });
            assert!(empty.is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn test_dispatch_reraises_original_exception() {
        Python::initialize();

        Python::attach(|py| {
            let original = PyKeyError::new_err("missing");
            let err = to_py_err(Error::dispatch("area", original));
            assert!(err.is_instance_of::<PyKeyError>(py));
            assert_eq!(err.value(py).to_string(), "'missing'");
        });
    }
}
