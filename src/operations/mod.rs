pub mod command;
pub mod query;

pub use command::{ApplySequence, CommandInterpreter, Move};
