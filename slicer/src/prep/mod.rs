pub mod improc;
pub mod log;
pub mod volume;

pub use improc::consts::{BASE_INDEX, DEFAULT_SIZE, SEG_SUFFIX, T1POST_SUFFIX};
pub use improc::{Interpolation, Rotation};
pub use self::log::AccTimer;
pub use volume::Volume;
