//! # mylib core
//!
//! Native semantics behind the `mylib` Python extension.
//!
//! Nothing in this crate depends on Python: the binding crate converts
//! arguments, releases the interpreter lock where needed and translates
//! [`Error`] values into Python exceptions.
//!
//! ## Module Structure
//!
//! - [`constants`]: `APP_NAME`, `PI` and the [`Color`] enumeration
//! - [`arith`]: `add`, `apply_twice`, `might_fail`, `long_task`
//! - [`geometry`]: the `area` overloads and [`Point`]
//! - [`shapes`]: the [`Shape`] dispatch trait, [`Rectangle`], [`Circle`]
//! - [`containers`]: sequence/optional helpers, [`IntBox`], [`CapturedArgs`]
//! - [`counter`]: process-wide [`Counter`]
//! - [`pricing`]: Black-Scholes European call
//! - [`clock`]: wall-clock `now`
//! - [`util`]: `mean`
//! - [`error`]: [`Error`] and [`Result`]
//!
//! ## Example
//!
//! ```rust
//! use mylib_core::{Point, total_area, Rectangle, Circle, Shape};
//!
//! let mut p = Point::new(3.0, 4.0);
//! assert_eq!(p.distance_to(&Point::origin()), 5.0);
//! p.translate(1.0, -2.0);
//! assert_eq!(p.to_string(), "Point(4, 2)");
//!
//! let shapes: Vec<Box<dyn Shape>> = vec![
//!     Box::new(Rectangle::new(3.0, 2.0).unwrap()),
//!     Box::new(Circle::new(1.0).unwrap()),
//! ];
//! assert!(total_area(&shapes).unwrap() > 9.0);
//! ```

pub mod arith;
pub mod clock;
pub mod constants;
pub mod containers;
pub mod counter;
pub mod error;
pub mod geometry;
pub mod pricing;
pub mod shapes;
pub mod util;

// Re-export main types for convenience
pub use arith::{add, apply_twice, long_task, might_fail};
pub use constants::{Color, APP_NAME, PI};
pub use containers::{maybe_add_one, sum_array, sum_vec, CapturedArgs, IntBox};
pub use counter::Counter;
pub use error::{Error, Result};
pub use geometry::{circle_area, rectangle_area, Point};
pub use pricing::european_call_price;
pub use shapes::{describe, total_area, Circle, Rectangle, Shape};
