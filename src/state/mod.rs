pub mod cubie;
pub mod direction;
pub mod face_color;
pub mod lattice;
pub mod position;
pub mod spin;

pub use cubie::Cubie;
pub use direction::Direction;
pub use face_color::{FaceColor, Rgb};
pub use lattice::CubeLattice;
pub use position::Position;
pub use spin::{RotationAxis, Spin};
