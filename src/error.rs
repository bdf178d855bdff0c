use thiserror::Error;

/// Top-level error type for the cube lattice crate.
///
/// The turn engine itself never fails. Errors only come from the strict
/// parsing and validated-constructor APIs layered on top of it.
#[derive(Debug, Error, PartialEq)]
pub enum CubeError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Lattice(#[from] LatticeError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Errors produced by the strict move grammar.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty move token")]
    Empty,

    #[error("unknown face letter '{0}'")]
    UnknownFace(char),

    #[error("unknown direction modifier '{0}' (expected 'i')")]
    UnknownModifier(char),

    #[error("unexpected trailing characters in move token: {0:?}")]
    TrailingCharacters(String),
}

/// Errors related to lattice addressing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LatticeError {
    #[error("position ({x}, {y}, {z}) is outside the 3x3x3 lattice")]
    PositionOutOfRange { x: u8, y: u8, z: u8 },
}

/// Errors related to render and view parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} must be finite, got {value}")]
    NotFinite { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`CubeError`].
pub type Result<T> = std::result::Result<T, CubeError>;
