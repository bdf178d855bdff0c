use crate::error::{LatticeError, Result};

/// Number of cells along each lattice edge.
pub const EDGE: u8 = 3;

/// Number of cells in the lattice.
pub const CELLS: usize = 27;

/// A lattice coordinate `(x, y, z)` with each component in `0..=2`.
///
/// +x points right, +y up and +z toward the front face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    x: u8,
    y: u8,
    z: u8,
}

impl Position {
    /// Creates a position, checking each coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is greater than 2.
    pub fn new(x: u8, y: u8, z: u8) -> Result<Self> {
        if x >= EDGE || y >= EDGE || z >= EDGE {
            return Err(LatticeError::PositionOutOfRange { x, y, z }.into());
        }
        Ok(Self { x, y, z })
    }

    /// Maps a linear slot index back to a position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELLS {
            return None;
        }
        let index = u8::try_from(index).ok()?;
        Some(Self {
            x: index / 9,
            y: index / 3 % 3,
            z: index % 3,
        })
    }

    /// Linear slot index, `x * 9 + y * 3 + z`.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.x) * 9 + usize::from(self.y) * 3 + usize::from(self.z)
    }

    #[must_use]
    pub fn x(self) -> u8 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> u8 {
        self.y
    }

    #[must_use]
    pub fn z(self) -> u8 {
        self.z
    }

    /// Coordinates relative to the lattice center, each in `-1..=1`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn centered(self) -> [i8; 3] {
        [self.x, self.y, self.z].map(|c| c as i8 - 1)
    }

    /// Inverse of [`Position::centered`]; `None` if any component is outside `-1..=1`.
    #[must_use]
    pub fn from_centered(c: [i8; 3]) -> Option<Self> {
        let [x, y, z] = c.map(|v| v.checked_add(1).and_then(|v| u8::try_from(v).ok()));
        Self::new(x?, y?, z?).ok()
    }

    /// All 27 positions in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELLS).filter_map(Self::from_index)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CubeError;

    #[test]
    fn index_is_row_major() {
        let p = Position::new(2, 1, 0).unwrap();
        assert_eq!(p.index(), 21);
        assert_eq!(Position::from_index(21), Some(p));
    }

    #[test]
    fn index_is_a_bijection() {
        let indices: Vec<usize> = Position::all().map(Position::index).collect();
        assert_eq!(indices, (0..CELLS).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(
            Position::new(0, 3, 1),
            Err(CubeError::Lattice(LatticeError::PositionOutOfRange {
                x: 0,
                y: 3,
                z: 1
            }))
        );
        assert_eq!(Position::from_index(27), None);
    }

    #[test]
    fn centered_round_trips() {
        for p in Position::all() {
            assert_eq!(Position::from_centered(p.centered()), Some(p));
        }
        assert_eq!(Position::new(1, 1, 1).unwrap().centered(), [0, 0, 0]);
        assert_eq!(Position::from_centered([2, 0, 0]), None);
        assert_eq!(Position::from_centered([0, -2, 0]), None);
    }
}
