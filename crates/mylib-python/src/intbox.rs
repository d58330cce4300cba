//! The `IntBox` iterable and its iterator.

use pyo3::exceptions::PyIndexError;
use pyo3::prelude::*;

use mylib_core::IntBox;

/// A growable box of integers supporting `len()`, indexing and iteration.
#[pyclass(name = "IntBox", sequence)]
#[derive(Debug, Default)]
pub struct PyIntBox {
    inner: IntBox,
}

#[pymethods]
impl PyIntBox {
    #[new]
    fn new() -> Self {
        PyIntBox::default()
    }

    /// Append `value` to the box.
    fn add(&mut self, value: i64) {
        self.inner.add(value);
    }

    /// Number of stored values.
    #[getter]
    fn length(&self) -> usize {
        self.inner.len()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __getitem__(&self, index: isize) -> PyResult<i64> {
        self.inner
            .get(index)
            .ok_or_else(|| PyIndexError::new_err("IntBox index out of range"))
    }

    /// Iterate over a snapshot of the current contents.
    fn __iter__(&self) -> PyIntBoxIter {
        PyIntBoxIter {
            items: self.inner.as_slice().to_vec().into_iter(),
        }
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

/// Iterator returned by `iter(IntBox)`.
#[pyclass(name = "IntBoxIterator")]
pub struct PyIntBoxIter {
    items: std::vec::IntoIter<i64>,
}

#[pymethods]
impl PyIntBoxIter {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<i64> {
        slf.items.next()
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyIntBox>()?;
    Ok(())
}
