use super::DEFAULT_DATASET_DIR;
use anyhow::{bail, Context, Result};
use clap::Args;
use slicer::prelude::verify_pairs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct Verify {
    /// Dataset root holding `images/` and `masks/`.
    #[arg(long = "output-dir", short, default_value = DEFAULT_DATASET_DIR)]
    out_dir: PathBuf,
}

impl Verify {
    pub fn run(&mut self) -> Result<()> {
        let report = verify_pairs(&self.out_dir)
            .with_context(|| format!("verifying `{}`", self.out_dir.display()))?;
        for name in &report.orphan_images {
            log::error!("`{name}` has no mask");
        }
        for name in &report.orphan_masks {
            log::error!("`{name}` has no image");
        }
        for name in &report.size_mismatches {
            log::error!("`{name}`: image and mask sizes differ");
        }
        if !report.is_consistent() {
            bail!(
                "{} orphan images, {} orphan masks, {} size mismatches",
                report.orphan_images.len(),
                report.orphan_masks.len(),
                report.size_mismatches.len()
            );
        }
        log::info!("{} image/mask pairs verified", report.pairs);
        Ok(())
    }
}
