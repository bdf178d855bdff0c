use crate::state::{CubeLattice, Direction, FaceColor, Position};

/// The nine facelets visible on one face, as seen from outside the cube.
///
/// `cells[row][col]` runs top to bottom, left to right. Side faces are read
/// with White up; the White face with Blue up and the Yellow face with Green up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceGrid {
    pub face: FaceColor,
    pub cells: [[FaceColor; 3]; 3],
}

impl FaceGrid {
    /// Returns `true` if all nine facelets share one color.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let first = self.cells[0][0];
        self.cells.iter().flatten().all(|&c| c == first)
    }

    #[must_use]
    pub fn row(&self, row: usize) -> [FaceColor; 3] {
        self.cells[row]
    }
}

/// Reads the visible facelets of one face.
pub struct ReadFace {
    face: FaceColor,
}

impl ReadFace {
    /// Creates a new `ReadFace` query.
    #[must_use]
    pub fn new(face: FaceColor) -> Self {
        Self { face }
    }

    /// Executes the query against `lattice`.
    #[must_use]
    pub fn execute(&self, lattice: &CubeLattice) -> FaceGrid {
        let normal = self.face.home_direction();
        let (right, up) = screen_axes(normal);
        let mut cells = [[self.face; 3]; 3];
        for (row, line) in (0i8..).zip(cells.iter_mut()) {
            for (col, cell) in (0i8..).zip(line.iter_mut()) {
                let centered = [0usize, 1, 2].map(|i| {
                    normal.unit()[i] + (col - 1) * right.unit()[i] + (1 - row) * up.unit()[i]
                });
                if let Some(position) = Position::from_centered(centered) {
                    *cell = lattice.cubie(position).facelet(normal);
                }
            }
        }
        FaceGrid {
            face: self.face,
            cells,
        }
    }
}

/// Screen-right and screen-up directions when looking at the face with `normal`.
fn screen_axes(normal: Direction) -> (Direction, Direction) {
    match normal {
        Direction::Front => (Direction::Right, Direction::Up),
        Direction::Back => (Direction::Left, Direction::Up),
        Direction::Right => (Direction::Back, Direction::Up),
        Direction::Left => (Direction::Front, Direction::Up),
        Direction::Up => (Direction::Right, Direction::Back),
        Direction::Down => (Direction::Right, Direction::Front),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_faces_are_uniform() {
        let lattice = CubeLattice::new();
        for face in FaceColor::ALL {
            let grid = ReadFace::new(face).execute(&lattice);
            assert!(grid.is_uniform(), "{face}");
            assert_eq!(grid.cells[1][1], face);
        }
    }

    #[test]
    fn screen_axes_are_right_handed() {
        // right x up must point out of the face, toward the viewer.
        for d in Direction::ALL {
            let (r, u) = screen_axes(d);
            let (r, u) = (r.unit(), u.unit());
            let cross = [
                r[1] * u[2] - r[2] * u[1],
                r[2] * u[0] - r[0] * u[2],
                r[0] * u[1] - r[1] * u[0],
            ];
            assert_eq!(cross, d.unit(), "{d:?}");
        }
    }

    #[test]
    fn white_clockwise_shifts_side_rows() {
        let mut lattice = CubeLattice::new();
        lattice.rotate(FaceColor::White, true);

        let front = ReadFace::new(FaceColor::Green).execute(&lattice);
        assert_eq!(front.row(0), [FaceColor::Red; 3]);
        assert_eq!(front.row(1), [FaceColor::Green; 3]);
        assert_eq!(front.row(2), [FaceColor::Green; 3]);

        let left = ReadFace::new(FaceColor::Orange).execute(&lattice);
        assert_eq!(left.row(0), [FaceColor::Green; 3]);

        assert!(ReadFace::new(FaceColor::White).execute(&lattice).is_uniform());
        assert!(ReadFace::new(FaceColor::Yellow).execute(&lattice).is_uniform());
    }

    #[test]
    fn green_clockwise_moves_white_onto_the_right_column() {
        let mut lattice = CubeLattice::new();
        lattice.rotate(FaceColor::Green, true);

        let right = ReadFace::new(FaceColor::Red).execute(&lattice);
        // The right face is read with Back on the right, so Front is column 0.
        for row in 0..3 {
            assert_eq!(right.cells[row][0], FaceColor::White);
            assert_eq!(right.cells[row][2], FaceColor::Red);
        }
        assert!(ReadFace::new(FaceColor::Green).execute(&lattice).is_uniform());
    }
}
