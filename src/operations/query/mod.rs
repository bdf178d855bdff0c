mod count_colors;
mod read_face;
mod read_net;

pub use count_colors::{ColorCensus, CountColors};
pub use read_face::{FaceGrid, ReadFace};
pub use read_net::{Net, ReadNet};
