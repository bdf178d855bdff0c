use crate::state::{CubeLattice, FaceColor};

use super::{Move, INVERSE_MARK};

/// Turns short text tokens into face turns.
///
/// Grammar: the first character picks the face (`g r o b y w`); a token of
/// exactly two characters ending in `i` turns counter-clockwise, anything
/// else clockwise. Unknown or empty tokens are dropped without a trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandInterpreter;

impl CommandInterpreter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolves `token` to a move without touching any lattice.
    #[must_use]
    pub fn resolve(token: &str) -> Option<Move> {
        let mut chars = token.chars();
        let face = chars.next().and_then(FaceColor::from_letter)?;
        let inverse = chars.next() == Some(INVERSE_MARK) && chars.next().is_none();
        Some(Move::new(face, !inverse))
    }

    /// Applies `token` to `lattice`, returning the move performed, if any.
    pub fn execute(&self, lattice: &mut CubeLattice, token: &str) -> Option<Move> {
        let mv = Self::resolve(token)?;
        lattice.apply(mv);
        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_turns_clockwise() {
        assert_eq!(
            CommandInterpreter::resolve("y"),
            Some(Move::new(FaceColor::Yellow, true))
        );
    }

    #[test]
    fn two_letters_ending_in_i_turn_counter_clockwise() {
        assert_eq!(
            CommandInterpreter::resolve("yi"),
            Some(Move::new(FaceColor::Yellow, false))
        );
    }

    #[test]
    fn other_second_characters_turn_clockwise() {
        assert_eq!(
            CommandInterpreter::resolve("gx"),
            Some(Move::new(FaceColor::Green, true))
        );
        assert_eq!(
            CommandInterpreter::resolve("gI"),
            Some(Move::new(FaceColor::Green, true))
        );
    }

    #[test]
    fn longer_tokens_turn_clockwise() {
        assert_eq!(
            CommandInterpreter::resolve("wix"),
            Some(Move::new(FaceColor::White, true))
        );
        assert_eq!(
            CommandInterpreter::resolve("bii"),
            Some(Move::new(FaceColor::Blue, true))
        );
    }

    #[test]
    fn every_face_letter_resolves() {
        let faces: Vec<_> = "groybw"
            .chars()
            .filter_map(|c| CommandInterpreter::resolve(&c.to_string()))
            .map(|m| m.face)
            .collect();
        assert_eq!(
            faces,
            [
                FaceColor::Green,
                FaceColor::Red,
                FaceColor::Orange,
                FaceColor::Yellow,
                FaceColor::Blue,
                FaceColor::White
            ]
        );
    }

    #[test]
    fn unknown_tokens_leave_lattice_untouched() {
        let mut lattice = CubeLattice::new();
        let interpreter = CommandInterpreter::new();
        for token in ["", "z", "ab", "i", " r", "R", "é"] {
            assert_eq!(interpreter.execute(&mut lattice, token), None, "{token:?}");
            assert!(lattice.is_solved());
        }
    }

    #[test]
    fn turn_and_inverse_restore_solved() {
        let mut lattice = CubeLattice::new();
        let interpreter = CommandInterpreter::new();
        interpreter.execute(&mut lattice, "r");
        assert!(!lattice.is_solved());
        interpreter.execute(&mut lattice, "ri");
        assert!(lattice.is_solved());
    }

    #[test]
    fn execute_reports_the_applied_move() {
        let mut lattice = CubeLattice::new();
        let applied = CommandInterpreter::new().execute(&mut lattice, "oi");
        assert_eq!(applied, Some(Move::new(FaceColor::Orange, false)));
    }
}
