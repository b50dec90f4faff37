pub use super::config::GeneratorConfig;
pub use super::convert::{convert_dataset, convert_dir};
pub use super::error::{Error, Result};
pub use super::generator::{CaseReport, DatasetGenerator, GenerationReport};
pub use super::prep::improc::consts::{
    BASE_INDEX, DEFAULT_SIZE, IMAGES_DIR, MASKS_DIR, OUTPUT_EXT, SEG_SUFFIX, T1POST_SUFFIX,
};
pub use super::prep::{AccTimer, Interpolation, Rotation, Volume};
pub use super::verify::{verify_pairs, PairReport};
