mod tessellate_lattice;

pub use tessellate_lattice::{FaceletQuad, TessellateLattice};

use crate::error::Result;
use crate::math::{require_in_range, Point3, Vector3, TOLERANCE};
use crate::state::{Position, Rgb};

/// Parameters controlling where cubies are drawn in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    spacing: f64,
    cubie_size: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            spacing: 1.1,
            cubie_size: 1.0,
        }
    }
}

impl RenderParams {
    /// Creates render parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `cubie_size` is not positive, or if `spacing` is
    /// smaller than `cubie_size` (neighbouring cubies would overlap).
    pub fn new(spacing: f64, cubie_size: f64) -> Result<Self> {
        let cubie_size = require_in_range("cubie_size", cubie_size, TOLERANCE, f64::MAX)?;
        let spacing = require_in_range("spacing", spacing, cubie_size, f64::MAX)?;
        Ok(Self {
            spacing,
            cubie_size,
        })
    }

    /// Distance between neighbouring cubie centers.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Edge length of a single cubie.
    #[must_use]
    pub fn cubie_size(&self) -> f64 {
        self.cubie_size
    }

    /// World-space center of the cubie at `position`; the lattice center is the origin.
    #[must_use]
    pub fn center_of(&self, position: Position) -> Point3 {
        let [x, y, z] = position.centered().map(f64::from);
        Point3::new(x, y, z) * self.spacing
    }
}

/// A colored triangle mesh of the whole lattice.
#[derive(Debug, Clone, Default)]
pub struct SceneMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Per-vertex colors.
    pub colors: Vec<Rgb>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl SceneMesh {
    /// Appends one quad as two triangles sharing its first corner.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push_quad(&mut self, quad: &FaceletQuad) {
        let base = self.vertices.len() as u32;
        let rgb = quad.color.rgb();
        for corner in quad.corners {
            self.vertices.push(corner);
            self.normals.push(quad.normal);
            self.colors.push(rgb);
        }
        self.indices.push([base, base + 1, base + 2]);
        self.indices.push([base, base + 2, base + 3]);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_matches_classic_layout() {
        let params = RenderParams::default();
        assert_relative_eq!(params.spacing(), 1.1);
        assert_relative_eq!(params.cubie_size(), 1.0);
    }

    #[test]
    fn new_with_valid_values() {
        let params = RenderParams::new(1.5, 1.0).unwrap();
        assert_relative_eq!(params.spacing(), 1.5);
    }

    #[test]
    fn overlapping_spacing_fails() {
        assert!(RenderParams::new(0.9, 1.0).is_err());
    }

    #[test]
    fn zero_size_fails() {
        assert!(RenderParams::new(1.0, 0.0).is_err());
        assert!(RenderParams::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn center_of_scales_centered_coordinates() {
        let params = RenderParams::default();
        let corner = params.center_of(Position::new(2, 0, 1).unwrap());
        assert_relative_eq!(corner, Point3::new(1.1, -1.1, 0.0));
        let middle = params.center_of(Position::new(1, 1, 1).unwrap());
        assert_relative_eq!(middle, Point3::origin());
    }
}
