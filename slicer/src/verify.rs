//! Consistency check of a generated `images/` + `masks/` dataset.

use crate::error::{Error, Result};
use crate::prep::improc::consts::{IMAGES_DIR, MASKS_DIR};
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PairReport {
    /// Number of filenames present in both directories.
    pub pairs: usize,
    pub orphan_images: Vec<String>,
    pub orphan_masks: Vec<String>,
    /// Pairs whose image and mask have different pixel dimensions.
    pub size_mismatches: Vec<String>,
}

impl PairReport {
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.orphan_images.is_empty() && self.orphan_masks.is_empty() && self.size_mismatches.is_empty()
    }
}

/// Pairs `output_root/images/*.png` with `output_root/masks/*.png` by filename.
pub fn verify_pairs<P: AsRef<Path>>(output_root: P) -> Result<PairReport> {
    let root = output_root.as_ref();
    let images_dir = root.join(IMAGES_DIR);
    let masks_dir = root.join(MASKS_DIR);
    let images = png_names(&images_dir)?;
    let masks = png_names(&masks_dir)?;

    let mut report = PairReport {
        orphan_images: images.difference(&masks).cloned().collect(),
        orphan_masks: masks.difference(&images).cloned().collect(),
        ..Default::default()
    };
    for name in images.intersection(&masks) {
        report.pairs += 1;
        let image_path = images_dir.join(name);
        let mask_path = masks_dir.join(name);
        let image_dim = image::image_dimensions(&image_path).map_err(Error::image(&image_path))?;
        let mask_dim = image::image_dimensions(&mask_path).map_err(Error::image(&mask_path))?;
        if image_dim != mask_dim {
            report.size_mismatches.push(name.clone());
        }
    }
    Ok(report)
}

fn png_names(dir: &Path) -> Result<BTreeSet<String>> {
    if !dir.is_dir() {
        return Err(Error::InputDirNotFound(dir.to_path_buf()));
    }
    let mut names = BTreeSet::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().map_or(false, |e| e == "png") {
            names.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}
