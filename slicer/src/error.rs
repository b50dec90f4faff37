use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a generation or conversion run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input directory `{}` not found", .0.display())]
    InputDirNotFound(PathBuf),

    #[error("resize dimension must be positive, got {0}")]
    InvalidSize(usize),

    #[error("failed to read NIfTI volume `{}`", .path.display())]
    Nifti {
        path: PathBuf,
        #[source]
        source: nifti::NiftiError,
    },

    #[error("`{}` is not a 3-D volume (shape {shape:?})", .path.display())]
    NotVolumetric { path: PathBuf, shape: Vec<usize> },

    #[error("case `{case}`: slice {index} + base index {base_index} overflows")]
    IndexOverflow {
        case: String,
        index: usize,
        base_index: usize,
    },

    #[error("case `{case}`: segmentation shape {seg:?} does not match intensity shape {image:?}")]
    ShapeMismatch {
        case: String,
        seg: [usize; 3],
        image: [usize; 3],
    },

    #[error("failed to decode or encode image `{}`", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list directory")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    #[inline]
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }

    #[inline]
    pub(crate) fn image(path: impl Into<PathBuf>) -> impl FnOnce(image::ImageError) -> Self {
        let path = path.into();
        move |source| Error::Image { path, source }
    }

    #[inline]
    pub(crate) fn nifti(path: impl Into<PathBuf>) -> impl FnOnce(nifti::NiftiError) -> Self {
        let path = path.into();
        move |source| Error::Nifti { path, source }
    }
}
