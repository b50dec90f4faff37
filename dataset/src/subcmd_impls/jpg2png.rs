use super::utils::{recreate_dir, require_dir};
use super::{DEFAULT_JPG_INPUT, DEFAULT_PNG_OUTPUT};
use anyhow::{Context, Result};
use clap::Args;
use slicer::prelude::{convert_dataset, convert_dir, IMAGES_DIR, MASKS_DIR};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct Jpg2png {
    /// Dataset root holding `images/` and `masks/` (or a flat directory with `--flat`).
    #[arg(long = "input-dir", short, default_value = DEFAULT_JPG_INPUT)]
    in_dir: PathBuf,
    /// Output root; mirrors the input layout.
    #[arg(long = "output-dir", short, default_value = DEFAULT_PNG_OUTPUT)]
    out_dir: PathBuf,
    /// Convert the `*.jpg` files of the input directory itself.
    #[arg(long)]
    flat: bool,
    /// Delete the output directory before converting.
    #[arg(long)]
    clean: bool,
}

impl Jpg2png {
    pub fn run(&mut self) -> Result<()> {
        // [input-dir/{images, masks}/*.jpg] -> [output-dir/{images, masks}/*.png]
        if self.flat {
            require_dir(&self.in_dir)?;
        } else {
            for sub in [IMAGES_DIR, MASKS_DIR] {
                require_dir(&self.in_dir.join(sub))?;
            }
        }
        if self.clean {
            recreate_dir(&self.out_dir)?;
        }
        let written = if self.flat {
            convert_dir(&self.in_dir, &self.out_dir)
        } else {
            convert_dataset(&self.in_dir, &self.out_dir)
        }
        .with_context(|| format!("converting `{}`", self.in_dir.display()))?;
        log::info!("Converted {} files", written.len());
        Ok(())
    }
}
