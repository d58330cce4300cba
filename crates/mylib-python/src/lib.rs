//! Python bindings for mylib.
//!
//! This crate builds the `mylib` extension module. It demonstrates the
//! interop features a native module can offer Python callers:
//! - Constants and an enumeration with stable integer values
//! - Overloaded and variadic free functions
//! - Native errors raised as a module-defined exception
//! - Python callables invoked from native code
//! - List, optional, NumPy array and datetime conversion
//! - A long-running computation that releases the GIL
//! - Value, iterable and counting classes
//! - A class hierarchy whose Python subclasses are dispatched to natively
//! - A nested `util` submodule
//!
//! The semantics live in `mylib-core`; everything here converts arguments
//! and results and translates errors (see [`error::to_py_err`]).

use pyo3::prelude::*;

pub mod color;
pub mod config;
pub mod counter;
pub mod error;
pub mod functions;
pub mod intbox;
pub mod point;
pub mod shapes;
pub mod util;

// Re-export types for use by other Rust code
pub use color::PyColor;
pub use counter::PyCounter;
pub use error::MyError;
pub use intbox::{PyIntBox, PyIntBoxIter};
pub use point::PyPoint;
pub use shapes::{PyCircle, PyRectangle, PyShape, PyShapeHandle};

/// Example extension module exercising the Python/Rust binding surface.
#[pymodule]
pub fn mylib(m: &Bound<'_, PyModule>) -> PyResult<()> {
    config::init_from_env();

    // ========== Constants / Enum ==========
    color::register(m)?;

    // ========== Exceptions ==========
    error::register(m)?;

    // ========== Free Functions ==========
    functions::register(m)?;
    config::register(m)?;

    // ========== Classes ==========
    point::register(m)?;
    intbox::register(m)?;
    shapes::register(m)?;
    counter::register(m)?;

    // ========== Submodules ==========
    util::register(m)?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    tracing::debug!(module = "mylib", "module initialised");
    Ok(())
}
