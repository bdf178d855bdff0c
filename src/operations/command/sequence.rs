use crate::error::Result;
use crate::state::CubeLattice;

use super::Move;

/// Applies a whitespace-separated script of moves, e.g. `"r gi w"`.
///
/// Unlike [`CommandInterpreter`](super::CommandInterpreter), every token must
/// be a valid move. The whole script is parsed before the lattice is touched.
pub struct ApplySequence<'a> {
    script: &'a str,
}

impl<'a> ApplySequence<'a> {
    /// Creates a new `ApplySequence` operation.
    #[must_use]
    pub fn new(script: &'a str) -> Self {
        Self { script }
    }

    /// Parses the script into moves without applying them.
    ///
    /// # Errors
    ///
    /// Returns an error for the first token that is not a valid move.
    pub fn parse(&self) -> Result<Vec<Move>> {
        self.script.split_whitespace().map(str::parse::<Move>).collect()
    }

    /// Executes the script, returning the moves applied.
    ///
    /// # Errors
    ///
    /// Returns an error if any token is invalid; the lattice is then unchanged.
    pub fn execute(&self, lattice: &mut CubeLattice) -> Result<Vec<Move>> {
        let moves = self.parse()?;
        for mv in &moves {
            lattice.apply(*mv);
        }
        Ok(moves)
    }

    /// The script that undoes `moves`.
    #[must_use]
    pub fn inverse_script(moves: &[Move]) -> String {
        moves
            .iter()
            .rev()
            .map(|m| m.inverse().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{CommandError, CubeError};
    use crate::state::FaceColor;

    #[test]
    fn applies_every_move_in_order() {
        let mut lattice = CubeLattice::new();
        let moves = ApplySequence::new("r  gi\tw").execute(&mut lattice).unwrap();
        assert_eq!(
            moves,
            [
                Move::new(FaceColor::Red, true),
                Move::new(FaceColor::Green, false),
                Move::new(FaceColor::White, true),
            ]
        );

        let mut expected = CubeLattice::new();
        expected.rotate(FaceColor::Red, true);
        expected.rotate(FaceColor::Green, false);
        expected.rotate(FaceColor::White, true);
        assert_eq!(lattice, expected);
    }

    #[test]
    fn invalid_token_leaves_lattice_unchanged() {
        let mut lattice = CubeLattice::new();
        let result = ApplySequence::new("r g q").execute(&mut lattice);
        assert_eq!(
            result,
            Err(CubeError::Command(CommandError::UnknownFace('q')))
        );
        assert!(lattice.is_solved());
    }

    #[test]
    fn empty_script_is_a_no_op() {
        let mut lattice = CubeLattice::new();
        let moves = ApplySequence::new("   ").execute(&mut lattice).unwrap();
        assert!(moves.is_empty());
        assert!(lattice.is_solved());
    }

    #[test]
    fn inverse_script_undoes_the_sequence() {
        let mut lattice = CubeLattice::new();
        let moves = ApplySequence::new("r g bi y oi w")
            .execute(&mut lattice)
            .unwrap();
        assert!(!lattice.is_solved());

        let undo = ApplySequence::inverse_script(&moves);
        assert_eq!(undo, "wi o yi b gi ri");
        ApplySequence::new(&undo).execute(&mut lattice).unwrap();
        assert!(lattice.is_solved());
    }
}
