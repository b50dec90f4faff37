use crate::error::{Error, Result};
use crate::prep::improc::consts::{
    BASE_INDEX, DEFAULT_SIZE, IMAGES_DIR, MASKS_DIR, OUTPUT_EXT, SEG_SUFFIX, T1POST_SUFFIX,
};
use crate::prep::{Interpolation, Rotation};
use std::path::{Path, PathBuf};

/// Everything the dataset generator needs to know, fixed at construction.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Directory holding one subdirectory per case.
    pub input_dir: PathBuf,
    /// Receives the `images/` and `masks/` subdirectories.
    pub output_dir: PathBuf,
    pub rotation: Rotation,
    /// Edge length of the square output slices.
    pub size: usize,
    pub interpolation: Interpolation,
    pub seg_suffix: String,
    pub t1post_suffix: String,
    /// Extension of written slices, including the leading dot.
    pub output_ext: String,
    pub base_index: usize,
}

impl GeneratorConfig {
    /// Default settings reading from `input_dir` and writing below `output_dir`.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(input_dir: P, output_dir: Q) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            rotation: Rotation::default(),
            size: DEFAULT_SIZE,
            interpolation: Interpolation::default(),
            seg_suffix: SEG_SUFFIX.to_owned(),
            t1post_suffix: T1POST_SUFFIX.to_owned(),
            output_ext: OUTPUT_EXT.to_owned(),
            base_index: BASE_INDEX,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_base_index(mut self, base_index: usize) -> Self {
        self.base_index = base_index;
        self
    }

    #[inline]
    pub fn images_dir(&self) -> PathBuf {
        self.output_dir.join(IMAGES_DIR)
    }

    #[inline]
    pub fn masks_dir(&self) -> PathBuf {
        self.output_dir.join(MASKS_DIR)
    }

    /// `<case>_<index + base_index><ext>`, shared by an image and its mask.
    pub fn slice_filename(&self, case: &str, index: usize) -> Result<String> {
        let number = index
            .checked_add(self.base_index)
            .ok_or_else(|| Error::IndexOverflow {
                case: case.to_owned(),
                index,
                base_index: self.base_index,
            })?;
        Ok(format!("{case}_{number}{}", self.output_ext))
    }

    /// Paths of the segmentation and intensity volumes of `case` inside `case_dir`.
    pub fn case_volumes(&self, case: &str, case_dir: &Path) -> (PathBuf, PathBuf) {
        (
            case_dir.join(format!("{case}{}", self.seg_suffix)),
            case_dir.join(format!("{case}{}", self.t1post_suffix)),
        )
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(".", ".")
    }
}
