pub mod error;
pub mod math;
pub mod operations;
pub mod render;
pub mod session;
pub mod state;
pub mod view;

pub use error::{CubeError, Result};
