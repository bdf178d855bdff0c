mod controls;
mod view_state;

pub use controls::{ViewControls, ViewKey};
pub use view_state::ViewState;

use crate::error::{ParameterError, Result};
use crate::math::{require_in_range, TOLERANCE};

/// Camera parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    rotation_speed: f64,
    distance: f64,
    fovy: f64,
    near: f64,
    far: f64,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            rotation_speed: 60.0,
            distance: 10.0,
            fovy: 60.0,
            near: 0.5,
            far: 100.0,
        }
    }
}

impl ViewParams {
    /// Creates camera parameters.
    ///
    /// * `rotation_speed` - Degrees per second while a key is held.
    /// * `distance` - Distance from the camera to the lattice center.
    /// * `fovy` - Vertical field of view in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite or out of range, or if
    /// `near` is not closer than `far`.
    pub fn new(rotation_speed: f64, distance: f64, fovy: f64, near: f64, far: f64) -> Result<Self> {
        let rotation_speed = require_in_range("rotation_speed", rotation_speed, 0.0, 3600.0)?;
        let distance = require_in_range("distance", distance, TOLERANCE, f64::MAX)?;
        let fovy = require_in_range("fovy", fovy, 1.0, 179.0)?;
        let near = require_in_range("near", near, TOLERANCE, f64::MAX)?;
        let far = require_in_range("far", far, TOLERANCE, f64::MAX)?;
        if far - near < TOLERANCE {
            return Err(ParameterError::OutOfRange {
                parameter: "far",
                value: far,
                min: near,
                max: f64::MAX,
            }
            .into());
        }
        Ok(Self {
            rotation_speed,
            distance,
            fovy,
            near,
            far,
        })
    }

    #[must_use]
    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    #[must_use]
    pub fn fovy(&self) -> f64 {
        self.fovy
    }

    #[must_use]
    pub fn near(&self) -> f64 {
        self.near
    }

    #[must_use]
    pub fn far(&self) -> f64 {
        self.far
    }
}
