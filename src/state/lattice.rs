use tracing::debug;

use super::position::CELLS;
use super::{Cubie, Direction, FaceColor, Position, RotationAxis, Spin};
use crate::operations::Move;

/// The 27-cell cube, owning one [`Cubie`] per [`Position`].
///
/// Created solved and mutated in place by [`CubeLattice::rotate`]. Rotations
/// only ever move whole cubies between positions and relabel their slots, so the
/// multiset of 162 facelet colors never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeLattice {
    cubies: [Cubie; CELLS],
}

impl Default for CubeLattice {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeLattice {
    /// Creates a solved lattice.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cubies: [Cubie::solved(); CELLS],
        }
    }

    /// Fills every position with a solved cubie.
    pub fn initialize(&mut self) {
        self.cubies.iter_mut().for_each(Cubie::initialize);
    }

    /// Returns the cubie at `position`.
    #[must_use]
    pub fn cubie(&self, position: Position) -> &Cubie {
        &self.cubies[position.index()]
    }

    /// Iterates all cubies with their positions in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cubie)> + '_ {
        Position::all().map(move |p| (p, &self.cubies[p.index()]))
    }

    /// Returns `true` if every cubie holds the solved assignment.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cubies.iter().all(|c| *c == Cubie::solved())
    }

    /// Positions whose cubie differs between `self` and `other`.
    #[must_use]
    pub fn differing_positions(&self, other: &CubeLattice) -> Vec<Position> {
        Position::all()
            .filter(|p| self.cubie(*p) != other.cubie(*p))
            .collect()
    }

    /// The axis a face turns about.
    #[must_use]
    pub const fn axis_of(face: FaceColor) -> RotationAxis {
        match face {
            FaceColor::Red | FaceColor::Orange => RotationAxis::Pitch,
            FaceColor::Green | FaceColor::Blue => RotationAxis::Roll,
            FaceColor::White | FaceColor::Yellow => RotationAxis::Yaw,
        }
    }

    /// The spin realising a quarter turn of `face`.
    ///
    /// Orange, Blue and Yellow look at their axis from the opposite side to
    /// Red, Green and White, so they invert the direction.
    #[must_use]
    pub const fn spin_for(face: FaceColor, clockwise: bool) -> Spin {
        let secondary = matches!(face, FaceColor::Orange | FaceColor::Blue | FaceColor::Yellow);
        Spin::new(Self::axis_of(face), clockwise != secondary)
    }

    /// Turns the outer layer on `face` by 90°.
    ///
    /// The eight boundary cubies of the layer move one quarter step around the
    /// layer and are re-oriented to match; the layer center and the other 18
    /// cubies are not touched.
    pub fn rotate(&mut self, face: FaceColor, clockwise: bool) {
        let spin = Self::spin_for(face, clockwise);
        for ring in layer_rings(face.home_direction(), spin) {
            self.hand_off(ring, spin);
        }
        debug!(%face, clockwise, ?spin, "turned face");
    }

    /// Applies a parsed move.
    pub fn apply(&mut self, mv: Move) {
        self.rotate(mv.face, mv.clockwise);
    }

    /// Moves the cubie at `ring[k]` to `ring[k + 1]`, re-orienting it by `spin`.
    fn hand_off(&mut self, ring: [Position; 4], spin: Spin) {
        let last = self.cubies[ring[3].index()];
        for k in (1..4).rev() {
            let source = self.cubies[ring[k - 1].index()];
            self.cubies[ring[k].index()].derive_from(&source, spin);
        }
        self.cubies[ring[0].index()].derive_from(&last, spin);
    }
}

/// The edge ring and corner ring of the layer behind `normal`, each ordered so
/// that `spin` carries every entry onto the next.
fn layer_rings(normal: Direction, spin: Spin) -> Vec<[Position; 4]> {
    let n = normal.unit();
    let Some(side) = Direction::ALL.into_iter().find(|d| dot(d.unit(), n) == 0) else {
        return Vec::new();
    };
    let side = side.unit();
    let edge = add(n, side);
    let corner = add(edge, spin.rotate_vector(side));
    [edge, corner]
        .into_iter()
        .filter_map(|start| ring_from(start, spin))
        .collect()
}

fn ring_from(start: [i8; 3], spin: Spin) -> Option<[Position; 4]> {
    let mut current = start;
    let mut ring = [Position::from_centered(start)?; 4];
    for slot in ring.iter_mut().skip(1) {
        current = spin.rotate_vector(current);
        *slot = Position::from_centered(current)?;
    }
    Some(ring)
}

fn dot(a: [i8; 3], b: [i8; 3]) -> i8 {
    a.into_iter().zip(b).map(|(a, b)| a * b).sum()
}

fn add(a: [i8; 3], b: [i8; 3]) -> [i8; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}
