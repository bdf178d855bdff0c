use crate::state::{CubeLattice, FaceColor};

/// Number of facelets of each color across a lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorCensus {
    counts: [usize; 6],
}

impl ColorCensus {
    #[must_use]
    pub fn count(&self, color: FaceColor) -> usize {
        self.counts[color.index()]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Counts every facelet of every cubie, including hidden interior ones.
///
/// A solved lattice holds 27 of each color; turns never change the census.
#[derive(Debug, Default)]
pub struct CountColors;

impl CountColors {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn execute(&self, lattice: &CubeLattice) -> ColorCensus {
        let mut census = ColorCensus::default();
        for (_, cubie) in lattice.iter() {
            for (_, color) in cubie.facelets() {
                census.counts[color.index()] += 1;
            }
        }
        census
    }
}
