//! Small numeric helpers grouped under the `util` namespace.

use crate::error::{Error, Result};

/// Arithmetic mean of `values`.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyInput { operation: "mean" });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}
