//! The `Counter` class and its class-level instance count.

use pyo3::prelude::*;

use mylib_core::Counter;

/// Counts how many `Counter` objects have been created in this process.
///
/// The count is available both as `Counter.get_instances()` and as the
/// class attribute `Counter.instances`.
#[pyclass(name = "Counter", subclass)]
pub struct PyCounter {
    inner: Counter,
}

// Class attributes are plain values, so the attribute is refreshed after
// every change. The GIL is held throughout, so the attribute and the
// atomic count cannot be observed out of step from Python.
fn publish_instances(py: Python<'_>) -> PyResult<u64> {
    let instances = Counter::instances();
    py.get_type::<PyCounter>().setattr("instances", instances)?;
    Ok(instances)
}

#[pymethods]
impl PyCounter {
    #[new]
    fn new(py: Python<'_>) -> PyResult<Self> {
        let inner = Counter::new();
        publish_instances(py)?;
        Ok(PyCounter { inner })
    }

    /// Number of instances created so far.
    #[staticmethod]
    fn get_instances(py: Python<'_>) -> PyResult<u64> {
        publish_instances(py)
    }

    #[classattr]
    fn instances() -> u64 {
        Counter::instances()
    }

    /// 1-based creation number of this instance.
    #[getter]
    fn serial(&self) -> u64 {
        self.inner.serial()
    }

    fn __repr__(&self) -> String {
        format!("Counter(serial={})", self.inner.serial())
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCounter>()?;
    Ok(())
}
