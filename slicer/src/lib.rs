//! Slices paired NIfTI segmentation/intensity volumes into 2-D PNG image/mask
//! datasets, converts JPEG datasets to PNG and checks the resulting pairs.

pub mod config;
pub mod convert;
pub mod error;
pub mod generator;
pub mod prelude;
pub mod prep;
pub mod verify;

pub use error::{Error, Result};
