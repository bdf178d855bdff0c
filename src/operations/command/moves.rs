use std::fmt;
use std::str::FromStr;

use crate::error::{CommandError, CubeError};
use crate::state::FaceColor;

/// Modifier letter marking a counter-clockwise turn.
pub const INVERSE_MARK: char = 'i';

/// A quarter turn of one face, as named by a command token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: FaceColor,
    pub clockwise: bool,
}

impl Move {
    #[must_use]
    pub const fn new(face: FaceColor, clockwise: bool) -> Self {
        Self { face, clockwise }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, !self.clockwise)
    }

    /// All twelve quarter turns.
    pub fn all() -> impl Iterator<Item = Self> {
        FaceColor::ALL
            .into_iter()
            .flat_map(|face| [Self::new(face, true), Self::new(face, false)])
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face.letter())?;
        if !self.clockwise {
            write!(f, "{INVERSE_MARK}")?;
        }
        Ok(())
    }
}

/// Strict parsing: everything the permissive interpreter would ignore is an error.
impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(CommandError::Empty)?;
        let face = FaceColor::from_letter(letter).ok_or(CommandError::UnknownFace(letter))?;
        let clockwise = match chars.next() {
            None => true,
            Some(INVERSE_MARK) => false,
            Some(other) => return Err(CommandError::UnknownModifier(other).into()),
        };
        let rest = chars.as_str();
        if !rest.is_empty() {
            return Err(CommandError::TrailingCharacters(rest.to_owned()).into());
        }
        Ok(Self::new(face, clockwise))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_letter_as_clockwise() {
        let mv: Move = "y".parse().unwrap();
        assert_eq!(mv, Move::new(FaceColor::Yellow, true));
    }

    #[test]
    fn parses_inverse_mark() {
        let mv: Move = "yi".parse().unwrap();
        assert_eq!(mv, Move::new(FaceColor::Yellow, false));
    }

    #[test]
    fn display_matches_grammar() {
        for mv in Move::all() {
            assert_eq!(mv.to_string().parse::<Move>().unwrap(), mv);
        }
        assert_eq!(Move::new(FaceColor::Blue, false).to_string(), "bi");
    }

    #[test]
    fn rejects_what_the_interpreter_ignores() {
        assert_eq!("".parse::<Move>(), Err(CommandError::Empty.into()));
        assert_eq!(
            "z".parse::<Move>(),
            Err(CommandError::UnknownFace('z').into())
        );
        assert_eq!(
            "rx".parse::<Move>(),
            Err(CommandError::UnknownModifier('x').into())
        );
        assert_eq!(
            "gii".parse::<Move>(),
            Err(CommandError::TrailingCharacters("i".into()).into())
        );
    }

    #[test]
    fn inverse_flips_direction() {
        let mv = Move::new(FaceColor::Red, true);
        assert_eq!(mv.inverse(), Move::new(FaceColor::Red, false));
        assert_eq!(mv.inverse().inverse(), mv);
    }
}
