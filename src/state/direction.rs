/// One of the six cube-relative directions a facelet can face.
///
/// The declaration order is the slot order of a [`Cubie`](super::Cubie).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Right,
    Front,
    Back,
    Left,
    Down,
    Up,
}

impl Direction {
    /// All directions in slot order.
    pub const ALL: [Self; 6] = [
        Self::Right,
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Down,
        Self::Up,
    ];

    /// Slot index of this direction inside a cubie.
    #[must_use]
    pub const fn slot(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Front => Self::Back,
            Self::Back => Self::Front,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }

    /// Integer unit vector pointing out of the cube in this direction.
    ///
    /// +x is right, +y is up and +z is front.
    #[must_use]
    pub const fn unit(self) -> [i8; 3] {
        match self {
            Self::Right => [1, 0, 0],
            Self::Front => [0, 0, 1],
            Self::Back => [0, 0, -1],
            Self::Left => [-1, 0, 0],
            Self::Down => [0, -1, 0],
            Self::Up => [0, 1, 0],
        }
    }

    /// Inverse of [`Direction::unit`].
    #[must_use]
    pub fn from_unit(unit: [i8; 3]) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.unit() == unit)
    }
}
