//! Free functions exposed at the top level of the module.

use chrono::NaiveDateTime;
use numpy::{AllowTypeChange, PyArrayLikeDyn};
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};

use mylib_core::{arith, clock, containers, geometry, pricing, CapturedArgs};

use crate::error::to_py_err;

/// A function that adds two numbers.
#[pyfunction]
pub fn add(a: i64, b: i64) -> PyResult<i64> {
    arith::add(a, b).map_err(to_py_err)
}

/// Area of a circle, `area(r)`, or of a rectangle, `area(w, h)`.
///
/// The overload is picked by the number of positional arguments.
#[pyfunction]
#[pyo3(signature = (*args), text_signature = "(r_or_w, h=None, /)")]
pub fn area(args: &Bound<'_, PyTuple>) -> PyResult<f64> {
    match args.len() {
        1 => {
            let r: f64 = args.get_item(0)?.extract()?;
            geometry::circle_area(r).map_err(to_py_err)
        }
        2 => {
            let (w, h): (f64, f64) = args.extract()?;
            geometry::rectangle_area(w, h).map_err(to_py_err)
        }
        n => Err(PyTypeError::new_err(format!(
            "area(): incompatible function arguments; {n} given. The following argument types are supported:\n    \
             1. area(r: float) -> float\n    \
             2. area(w: float, h: float) -> float"
        ))),
    }
}

/// Return `{"args": args, "kwargs": kwargs}` exactly as received.
#[pyfunction]
#[pyo3(signature = (*args, **kwargs))]
pub fn echo<'py>(
    py: Python<'py>,
    args: &Bound<'py, PyTuple>,
    kwargs: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let mut captured = CapturedArgs::new();
    for arg in args.iter() {
        captured.push_arg(arg);
    }
    if let Some(kwargs) = kwargs {
        for (key, value) in kwargs.iter() {
            captured.insert_kwarg(key.extract::<String>()?, value);
        }
    }
    captured_to_dict(py, captured)
}

fn captured_to_dict<'py>(
    py: Python<'py>,
    captured: CapturedArgs<Bound<'py, PyAny>>,
) -> PyResult<Bound<'py, PyDict>> {
    let kwargs = PyDict::new(py);
    for (key, value) in captured.kwargs {
        kwargs.set_item(key, value)?;
    }

    let out = PyDict::new(py);
    out.set_item("args", PyTuple::new(py, captured.args)?)?;
    out.set_item("kwargs", kwargs)?;
    Ok(out)
}

/// Raise `MyError("Something went wrong")` when `fail` is true.
#[pyfunction]
pub fn might_fail(fail: bool) -> PyResult<()> {
    arith::might_fail(fail).map_err(to_py_err)
}

/// Call `f` on `x`, then on the result: `f(f(x))`.
///
/// # Raises
/// * `TypeError` - If `f` is not callable
/// * Any exception raised by `f`, unchanged
#[pyfunction]
pub fn apply_twice<'py>(f: &Bound<'py, PyAny>, x: Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    if !f.is_callable() {
        return Err(PyTypeError::new_err(format!(
            "apply_twice() expected a callable, got {}",
            f.get_type().name()?
        )));
    }
    arith::apply_twice(|value| f.call1((value,)), x)
}

/// Sum a list of integers.
#[pyfunction]
pub fn sum_vec(values: Vec<i64>) -> PyResult<i64> {
    containers::sum_vec(&values).map_err(to_py_err)
}

/// `None` stays `None`, any integer is incremented.
#[pyfunction]
#[pyo3(signature = (value))]
pub fn maybe_add_one(value: Option<i64>) -> PyResult<Option<i64>> {
    containers::maybe_add_one(value).map_err(to_py_err)
}

/// Sum every element of a numeric array.
///
/// NumPy arrays are read through the buffer without a per-element Python
/// call, converting the dtype to `float64` when needed. Other sequences of
/// numbers are accepted too, so NumPy is never imported by this function.
#[pyfunction]
pub fn sum_array(values: &Bound<'_, PyAny>) -> PyResult<f64> {
    if is_numpy_array(values)? {
        let array: PyArrayLikeDyn<'_, f64, AllowTypeChange> = values.extract()?;
        return Ok(containers::sum_array(array.as_array().iter().copied()));
    }
    let values: Vec<f64> = values.extract()?;
    Ok(containers::sum_array(values))
}

// Only array-likes with NumPy already loaded take the buffer path; touching
// the NumPy C API otherwise would import it.
fn is_numpy_array(values: &Bound<'_, PyAny>) -> PyResult<bool> {
    let py = values.py();
    let numpy_loaded = py.import("sys")?.getattr("modules")?.contains("numpy")?;
    Ok(numpy_loaded && values.hasattr("__array_interface__")?)
}

/// Current local time as a naive `datetime.datetime`.
#[pyfunction]
pub fn now() -> NaiveDateTime {
    clock::now()
}

/// Sum `0..n` natively with the GIL released, returning `n*(n-1)/2`.
///
/// Other Python threads keep running while the loop executes.
#[pyfunction]
pub fn long_task(py: Python<'_>, n: u64) -> PyResult<u64> {
    py.detach(|| arith::long_task(n)).map_err(to_py_err)
}

/// Black-Scholes price of a European call.
///
/// # Arguments
/// * `spot` - Current price of the underlying
/// * `strike` - Strike price
/// * `rate` - Continuously compounded risk-free rate
/// * `vol` - Annualised volatility
/// * `days` - Calendar days to expiry
#[pyfunction]
pub fn european_call_price(spot: f64, strike: f64, rate: f64, vol: f64, days: f64) -> PyResult<f64> {
    pricing::european_call_price(spot, strike, rate, vol, days).map_err(to_py_err)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(add, m)?)?;
    m.add_function(wrap_pyfunction!(area, m)?)?;
    m.add_function(wrap_pyfunction!(echo, m)?)?;
    m.add_function(wrap_pyfunction!(might_fail, m)?)?;
    m.add_function(wrap_pyfunction!(apply_twice, m)?)?;
    m.add_function(wrap_pyfunction!(sum_vec, m)?)?;
    m.add_function(wrap_pyfunction!(maybe_add_one, m)?)?;
    m.add_function(wrap_pyfunction!(sum_array, m)?)?;
    m.add_function(wrap_pyfunction!(now, m)?)?;
    m.add_function(wrap_pyfunction!(long_task, m)?)?;
    m.add_function(wrap_pyfunction!(european_call_price, m)?)?;
    Ok(())
}
