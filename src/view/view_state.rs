use nalgebra::{Perspective3, Rotation3};

use crate::error::Result;
use crate::math::{require_in_range, Matrix4, Vector3, TOLERANCE};

use super::{ViewControls, ViewParams};

/// Accumulated camera orientation, in degrees.
///
/// Purely presentational: nothing here reads or writes lattice state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    params: ViewParams,
    /// Rotation about the vertical axis.
    yaw: f64,
    /// Rotation about the horizontal axis.
    pitch: f64,
}

impl ViewState {
    #[must_use]
    pub fn new(params: ViewParams) -> Self {
        Self {
            params,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    #[must_use]
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    #[must_use]
    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    /// Advances the camera by `elapsed` seconds of the held keys.
    ///
    /// Left/right turn yaw down/up, up/down turn pitch down/up, each at the
    /// configured degrees per second.
    pub fn advance(&mut self, controls: &ViewControls, elapsed: f64) {
        let step = self.params.rotation_speed() * elapsed;
        if controls.left {
            self.yaw -= step;
        }
        if controls.right {
            self.yaw += step;
        }
        if controls.up {
            self.pitch -= step;
        }
        if controls.down {
            self.pitch += step;
        }
    }

    /// Model-view matrix: step back along -z, then pitch, then yaw.
    #[must_use]
    pub fn model_view(&self) -> Matrix4 {
        let back = Matrix4::new_translation(&Vector3::new(0.0, 0.0, -self.params.distance()));
        let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), self.pitch.to_radians());
        let yaw = Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw.to_radians());
        back * pitch.to_homogeneous() * yaw.to_homogeneous()
    }

    /// Perspective projection for a viewport of the given aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns an error if `aspect` is not a positive finite number.
    pub fn projection(&self, aspect: f64) -> Result<Matrix4> {
        let aspect = require_in_range("aspect", aspect, TOLERANCE, f64::MAX)?;
        Ok(Perspective3::new(
            aspect,
            self.params.fovy().to_radians(),
            self.params.near(),
            self.params.far(),
        )
        .to_homogeneous())
    }
}
