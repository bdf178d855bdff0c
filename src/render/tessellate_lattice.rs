use crate::math::{Point3, Vector3, TOLERANCE};
use crate::state::{CubeLattice, Direction, FaceColor, Position};

use super::{RenderParams, SceneMesh};

/// One colored side of one cubie, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceletQuad {
    pub position: Position,
    pub direction: Direction,
    pub color: FaceColor,
    pub normal: Vector3,
    /// Corners in counter-clockwise order seen from outside the cubie.
    pub corners: [Point3; 4],
}

/// Turns a lattice into colored quads, six per cubie.
///
/// Reads the lattice only; interior facelets are emitted too and simply end
/// up hidden behind their neighbours.
pub struct TessellateLattice {
    params: RenderParams,
}

impl TessellateLattice {
    /// Creates a new `TessellateLattice` operation.
    #[must_use]
    pub fn new(params: RenderParams) -> Self {
        Self { params }
    }

    /// All 162 facelet quads in position order, then slot order.
    #[must_use]
    pub fn quads(&self, lattice: &CubeLattice) -> Vec<FaceletQuad> {
        lattice
            .iter()
            .flat_map(move |(position, cubie)| {
                cubie
                    .facelets()
                    .map(move |(direction, color)| self.quad(position, direction, color))
            })
            .collect()
    }

    /// Executes the tessellation, returning a combined mesh.
    #[must_use]
    pub fn execute(&self, lattice: &CubeLattice) -> SceneMesh {
        let mut mesh = SceneMesh::default();
        for quad in self.quads(lattice) {
            mesh.push_quad(&quad);
        }
        mesh
    }

    fn quad(&self, position: Position, direction: Direction, color: FaceColor) -> FaceletQuad {
        let normal = to_vector(direction.unit());
        // Any side perpendicular to the normal; v completes a right-handed frame.
        let side = Direction::ALL
            .into_iter()
            .find(|d| to_vector(d.unit()).dot(&normal).abs() < TOLERANCE)
            .unwrap_or(direction);
        let u = to_vector(side.unit());
        let v = normal.cross(&u);

        let half = self.params.cubie_size() * 0.5;
        let center = self.params.center_of(position) + normal * half;
        let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
            .map(|(a, b)| center + (u * a + v * b) * half);

        FaceletQuad {
            position,
            direction,
            color,
            normal,
            corners,
        }
    }
}

fn to_vector(unit: [i8; 3]) -> Vector3 {
    let [x, y, z] = unit.map(f64::from);
    Vector3::new(x, y, z)
}
