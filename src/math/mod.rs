use crate::error::{ParameterError, Result};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Checks that `value` is finite and lies in `[min, max]`.
///
/// # Errors
///
/// Returns a [`ParameterError`] naming `parameter` if the check fails.
pub(crate) fn require_in_range(
    parameter: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite { parameter, value }.into());
    }
    if value < min || value > max {
        return Err(ParameterError::OutOfRange {
            parameter,
            value,
            min,
            max,
        }
        .into());
    }
    Ok(value)
}
