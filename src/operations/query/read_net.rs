use std::fmt;

use crate::state::{CubeLattice, FaceColor};

use super::{FaceGrid, ReadFace};

/// All six visible faces, laid out as an unfolded cross when displayed:
///
/// ```text
///       W W W
///       W W W
///       W W W
/// O O O G G G R R R B B B
/// O O O G G G R R R B B B
/// O O O G G G R R R B B B
///       Y Y Y
///       Y Y Y
///       Y Y Y
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Net {
    grids: [FaceGrid; 6],
}

/// Faces of the middle band, left to right.
const BAND: [FaceColor; 4] = [
    FaceColor::Orange,
    FaceColor::Green,
    FaceColor::Red,
    FaceColor::Blue,
];

impl Net {
    /// The grid of `face`.
    #[must_use]
    pub fn face(&self, face: FaceColor) -> &FaceGrid {
        &self.grids[face.index()]
    }

    /// Returns `true` if every face shows a single color.
    #[must_use]
    pub fn looks_solved(&self) -> bool {
        self.grids.iter().all(FaceGrid::is_uniform)
    }

    fn write_cap(f: &mut fmt::Formatter<'_>, grid: &FaceGrid) -> fmt::Result {
        for row in grid.cells {
            write!(f, "      ")?;
            write_row(f, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, row: [FaceColor; 3]) -> fmt::Result {
    for (i, color) in row.into_iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", color.letter().to_ascii_uppercase())?;
    }
    Ok(())
}

impl fmt::Display for Net {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_cap(f, self.face(FaceColor::White))?;
        for row in 0..3 {
            for (i, face) in BAND.into_iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write_row(f, self.face(face).row(row))?;
            }
            writeln!(f)?;
        }
        Self::write_cap(f, self.face(FaceColor::Yellow))
    }
}

/// Reads every face of a lattice into a [`Net`].
#[derive(Debug, Default)]
pub struct ReadNet;

impl ReadNet {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn execute(&self, lattice: &CubeLattice) -> Net {
        Net {
            grids: FaceColor::ALL.map(|face| ReadFace::new(face).execute(lattice)),
        }
    }
}
