//! Per-slice pixel arithmetic: foreground test, normalization, resize and rotation.

use image::{imageops, GrayImage, Luma};
use ndarray::{Array2, ArrayView2};

/// Fixed values of the slice dataset layout.
pub mod consts {
    /// Added to every slice index when naming output files.
    pub const BASE_INDEX: usize = 1000;

    /// Default edge length of the square output slices.
    pub const DEFAULT_SIZE: usize = 512;

    /// Factor stretching a {0, 1} mask to {0, 255}.
    pub const MASK_SCALE: f64 = 255.0;

    /// Suffix of the segmentation volume inside a case directory.
    pub const SEG_SUFFIX: &str = "_seg.nii.gz";

    /// Suffix of the T1 post-contrast volume inside a case directory.
    pub const T1POST_SUFFIX: &str = "_t1post.nii.gz";

    /// Extension of every written slice.
    pub const OUTPUT_EXT: &str = ".png";

    pub const IMAGES_DIR: &str = "images";
    pub const MASKS_DIR: &str = "masks";
}

use consts::MASK_SCALE;

/// How a slice is resampled to the output size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Bilinear with half-pixel centres, clamped at the edges.
    #[default]
    Linear,
    Nearest,
}

/// Rotation applied to every written slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    None,
    #[default]
    Clockwise90,
    Rotate180,
    CounterClockwise90,
}

/// Casts like a float array converted to `uint8`: truncate toward zero, then wrap.
/// Non-finite values become 0.
#[inline]
pub fn cast_u8(v: f64) -> u8 {
    if v.is_finite() {
        v.trunc() as i64 as u8
    } else {
        0
    }
}

/// Whether the mask slice holds at least one strictly-positive voxel.
#[inline]
pub fn has_foreground(slice: ArrayView2<f64>) -> bool {
    slice.iter().any(|&v| v > 0.0)
}

/// Intensity normalization used for the image slices.
///
/// The bounds are divided by 255 before use, so the result is only a true
/// min-max stretch when the slice minimum is zero. Values past 255 wrap.
pub fn normalize(slice: ArrayView2<f64>) -> Array2<u8> {
    let (lo, hi) = slice.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    let min = lo / 255.0;
    let max = hi / 255.0;
    let scale = max - min;
    slice.mapv(|v| cast_u8((v - min) / scale))
}

/// Stretches a resized mask slice to the 8-bit range.
pub fn scale_mask(slice: ArrayView2<f64>) -> Array2<u8> {
    slice.mapv(|v| cast_u8(v * MASK_SCALE))
}

/// Resamples `src` to a `size` x `size` grid.
pub fn resize(src: ArrayView2<f64>, size: usize, interpolation: Interpolation) -> Array2<f64> {
    let (rows, cols) = src.dim();
    match interpolation {
        Interpolation::Nearest => {
            let row_idx: Vec<usize> = (0..size).map(|d| nearest_tap(d, rows, size)).collect();
            let col_idx: Vec<usize> = (0..size).map(|d| nearest_tap(d, cols, size)).collect();
            Array2::from_shape_fn((size, size), |(r, c)| src[[row_idx[r], col_idx[c]]])
        }
        Interpolation::Linear => {
            let row_taps: Vec<_> = (0..size).map(|d| linear_tap(d, rows, size)).collect();
            let col_taps: Vec<_> = (0..size).map(|d| linear_tap(d, cols, size)).collect();
            Array2::from_shape_fn((size, size), |(r, c)| {
                let (r0, r1, tr) = row_taps[r];
                let (c0, c1, tc) = col_taps[c];
                let top = lerp(src[[r0, c0]], src[[r0, c1]], tc);
                let bottom = lerp(src[[r1, c0]], src[[r1, c1]], tc);
                lerp(top, bottom, tr)
            })
        }
    }
}

/// [`resize`] for 8-bit slices; results are rounded and saturated.
pub fn resize_u8(src: ArrayView2<u8>, size: usize, interpolation: Interpolation) -> Array2<u8> {
    let wide = src.mapv(f64::from);
    resize(wide.view(), size, interpolation).mapv(|v| v.round().clamp(0.0, 255.0) as u8)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
fn nearest_tap(dst: usize, src_len: usize, dst_len: usize) -> usize {
    let scale = src_len as f64 / dst_len as f64;
    ((dst as f64 * scale).floor() as usize).min(src_len - 1)
}

#[inline]
fn linear_tap(dst: usize, src_len: usize, dst_len: usize) -> (usize, usize, f64) {
    let scale = src_len as f64 / dst_len as f64;
    let pos = ((dst as f64 + 0.5) * scale - 0.5).max(0.0);
    let i0 = (pos.floor() as usize).min(src_len - 1);
    let i1 = (i0 + 1).min(src_len - 1);
    (i0, i1, pos - i0 as f64)
}

/// Converts a row-major slice into a grayscale image: rows become image rows.
pub fn to_gray_image(slice: ArrayView2<u8>) -> GrayImage {
    let (rows, cols) = slice.dim();
    GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        Luma([slice[[y as usize, x as usize]]])
    })
}

pub fn rotate(img: GrayImage, rotation: Rotation) -> GrayImage {
    match rotation {
        Rotation::None => img,
        Rotation::Clockwise90 => imageops::rotate90(&img),
        Rotation::Rotate180 => imageops::rotate180(&img),
        Rotation::CounterClockwise90 => imageops::rotate270(&img),
    }
}
