use std::fmt;

use super::Direction;

/// One of the six sticker colors, also naming the face that shows it when solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaceColor {
    Red,
    Green,
    Blue,
    Orange,
    Yellow,
    White,
}

/// Linear RGB triple in `[0, 1]` used when drawing a facelet.
pub type Rgb = [f32; 3];

impl FaceColor {
    /// All colors in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Orange,
        Self::Yellow,
        Self::White,
    ];

    /// Index of this color in [`FaceColor::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter code used by the move grammar.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Green => 'g',
            Self::Blue => 'b',
            Self::Orange => 'o',
            Self::Yellow => 'y',
            Self::White => 'w',
        }
    }

    /// Looks up a face by its single-letter code.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.letter() == letter)
    }

    /// The slot this color occupies in a solved cubie, which is also the
    /// outward normal of the face it names.
    #[must_use]
    pub const fn home_direction(self) -> Direction {
        match self {
            Self::Red => Direction::Right,
            Self::Green => Direction::Front,
            Self::Blue => Direction::Back,
            Self::Orange => Direction::Left,
            Self::Yellow => Direction::Down,
            Self::White => Direction::Up,
        }
    }

    /// Inverse of [`FaceColor::home_direction`].
    #[must_use]
    pub const fn at_home(direction: Direction) -> Self {
        match direction {
            Direction::Right => Self::Red,
            Direction::Front => Self::Green,
            Direction::Back => Self::Blue,
            Direction::Left => Self::Orange,
            Direction::Down => Self::Yellow,
            Direction::Up => Self::White,
        }
    }

    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => [0.77, 0.12, 0.23],
            Self::Green => [0.00, 0.62, 0.38],
            Self::Blue => [0.00, 0.32, 0.73],
            Self::Orange => [1.00, 0.35, 0.00],
            Self::Yellow => [1.00, 0.84, 0.00],
            Self::White => [1.00, 1.00, 1.00],
        }
    }
}

impl fmt::Display for FaceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::White => "white",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_unique_and_round_trip() {
        for color in FaceColor::ALL {
            assert_eq!(FaceColor::from_letter(color.letter()), Some(color));
        }
        assert_eq!(FaceColor::from_letter('z'), None);
        assert_eq!(FaceColor::from_letter('R'), None);
    }

    #[test]
    fn home_directions_are_a_bijection() {
        for color in FaceColor::ALL {
            assert_eq!(FaceColor::at_home(color.home_direction()), color);
        }
    }

    #[test]
    fn opposite_faces_pair_up() {
        let opposite = |c: FaceColor| FaceColor::at_home(c.home_direction().opposite());
        assert_eq!(opposite(FaceColor::Red), FaceColor::Orange);
        assert_eq!(opposite(FaceColor::Green), FaceColor::Blue);
        assert_eq!(opposite(FaceColor::White), FaceColor::Yellow);
    }
}
