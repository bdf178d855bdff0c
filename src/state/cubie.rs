use super::{Direction, FaceColor, Spin};

/// One of the 27 unit cubes of the lattice, holding one color per direction.
///
/// Every cubie starts with the canonical solved assignment. The engine does not
/// tell corners, edges and centers apart; facelets pointing into the cube are
/// simply never seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cubie {
    facelets: [FaceColor; 6],
}

impl Default for Cubie {
    fn default() -> Self {
        Self::solved()
    }
}

impl Cubie {
    /// A cubie with each color in its home slot.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            facelets: Direction::ALL.map(FaceColor::at_home),
        }
    }

    /// Resets all six slots to the solved assignment.
    pub fn initialize(&mut self) {
        *self = Self::solved();
    }

    /// Returns the color showing in `direction`.
    #[must_use]
    pub fn facelet(&self, direction: Direction) -> FaceColor {
        self.facelets[direction.slot()]
    }

    /// Iterates the six `(direction, color)` pairs in slot order.
    pub fn facelets(&self) -> impl Iterator<Item = (Direction, FaceColor)> + '_ {
        Direction::ALL.into_iter().zip(self.facelets.iter().copied())
    }

    /// Overwrites this cubie with `source` spun 90° by `spin`.
    ///
    /// The previous contents of `self` are not read.
    pub fn derive_from(&mut self, source: &Cubie, spin: Spin) {
        let table = spin.table();
        self.facelets = Direction::ALL.map(|dest| source.facelets[table[dest.slot()].slot()]);
    }

    /// Returns `self` spun 90° by `spin`.
    #[must_use]
    pub fn spun(&self, spin: Spin) -> Self {
        let mut out = *self;
        out.derive_from(self, spin);
        out
    }
}
