//! The `mylib.util` submodule.

use pyo3::prelude::*;

use mylib_core::util;

use crate::error::to_py_err;

/// Arithmetic mean of a list of numbers.
///
/// # Raises
/// * `ValueError` - If `values` is empty
#[pyfunction]
pub fn mean(values: Vec<f64>) -> PyResult<f64> {
    util::mean(&values).map_err(to_py_err)
}

/// Create `util`, attach it to `parent` and make it importable as
/// `mylib.util`.
pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = parent.py();
    let submodule = PyModule::new(py, "util")?;
    submodule.add("__doc__", "Numeric helpers.")?;
    submodule.add_function(wrap_pyfunction!(mean, &submodule)?)?;
    parent.add_submodule(&submodule)?;

    // add_submodule names the attribute after `__name__`, so the qualified
    // name is only set once the submodule is attached.
    submodule.setattr("__name__", "mylib.util")?;

    // The import system needs the sys.modules entry for `import mylib.util`.
    py.import("sys")?
        .getattr("modules")?
        .set_item("mylib.util", &submodule)?;
    Ok(())
}
