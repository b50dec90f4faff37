//! NIfTI volumes as `[width, height, depth]` arrays.

use crate::error::{Error, Result};
use ndarray::{Array3, ArrayD, ArrayView2, Axis, Ix3};
use nifti::{IntoNdArray, NiftiHeader, NiftiObject, ReaderOptions};
use std::path::Path;

/// A fully loaded volume. Slices are taken along the third axis.
#[derive(Debug, Clone)]
pub struct Volume {
    data: Array3<f64>,
}

impl Volume {
    /// Reads a `.nii` or `.nii.gz` file, applying the header's intensity scaling.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let obj = ReaderOptions::new()
            .read_file(path)
            .map_err(Error::nifti(path))?;
        let data = obj
            .into_volume()
            .into_ndarray::<f64>()
            .map_err(Error::nifti(path))?;
        Self::from_dyn(data, path)
    }

    /// Reads only the header and returns the volume shape.
    pub fn probe_shape<P: AsRef<Path>>(path: P) -> Result<[usize; 3]> {
        let path = path.as_ref();
        let header = NiftiHeader::from_file(path).map_err(Error::nifti(path))?;
        let ndim = (header.dim[0] as usize).min(7);
        let dims: Vec<usize> = header.dim[1..=ndim].iter().map(|&d| d as usize).collect();
        squeeze_shape(&dims).ok_or_else(|| Error::NotVolumetric {
            path: path.to_path_buf(),
            shape: dims,
        })
    }

    fn from_dyn(mut data: ArrayD<f64>, path: &Path) -> Result<Self> {
        while data.ndim() > 3 && data.shape()[data.ndim() - 1] == 1 {
            let last = Axis(data.ndim() - 1);
            data = data.index_axis_move(last, 0);
        }
        let shape = data.shape().to_vec();
        data.into_dimensionality::<Ix3>()
            .map(Self::from)
            .map_err(|_| Error::NotVolumetric {
                path: path.to_path_buf(),
                shape,
            })
    }

    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        let (w, h, d) = self.data.dim();
        [w, h, d]
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    /// The 2-D cross-section at depth `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.depth()`.
    #[inline]
    pub fn slice(&self, index: usize) -> ArrayView2<'_, f64> {
        self.data.index_axis(Axis(2), index)
    }

    /// Iterates over all slices in depth order.
    pub fn slices(&self) -> impl Iterator<Item = ArrayView2<'_, f64>> + '_ {
        self.data.axis_iter(Axis(2))
    }
}

impl From<Array3<f64>> for Volume {
    #[inline]
    fn from(data: Array3<f64>) -> Self {
        Self { data }
    }
}

/// Drops trailing singleton dimensions; `None` unless exactly three remain.
fn squeeze_shape(dims: &[usize]) -> Option<[usize; 3]> {
    let mut len = dims.len();
    while len > 3 && dims[len - 1] == 1 {
        len -= 1;
    }
    match &dims[..len] {
        &[w, h, d] => Some([w, h, d]),
        _ => None,
    }
}
