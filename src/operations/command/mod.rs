mod interpreter;
mod moves;
mod sequence;

pub use interpreter::CommandInterpreter;
pub use moves::{Move, INVERSE_MARK};
pub use sequence::ApplySequence;
