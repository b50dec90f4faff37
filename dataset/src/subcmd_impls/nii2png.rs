use super::utils::{positive_size, recreate_dir, require_dir};
use super::{DEFAULT_DATASET_DIR, DEFAULT_NII_INPUT};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use slicer::prelude::{
    DatasetGenerator, GeneratorConfig, Interpolation, Rotation, BASE_INDEX, DEFAULT_SIZE,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct Nii2png {
    /// Directory with one `<case>/` subdirectory per study.
    #[arg(long = "input-dir", short, default_value = DEFAULT_NII_INPUT)]
    in_dir: PathBuf,
    /// Dataset root; `images/` and `masks/` are created inside.
    #[arg(long = "output-dir", short, default_value = DEFAULT_DATASET_DIR)]
    out_dir: PathBuf,
    /// Edge length of the square output slices.
    #[arg(long, short, default_value_t = DEFAULT_SIZE, value_parser = positive_size)]
    size: usize,
    /// Rotation applied to every slice.
    #[arg(long, value_enum, default_value_t = RotationArg::Clockwise90)]
    rotation: RotationArg,
    /// Resampling used when resizing.
    #[arg(long, value_enum, default_value_t = InterpolationArg::Linear)]
    interpolation: InterpolationArg,
    /// Added to the slice index in output filenames.
    #[arg(long = "base-index", default_value_t = BASE_INDEX)]
    base_index: usize,
    /// Delete the output directory before generating.
    #[arg(long)]
    clean: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RotationArg {
    None,
    #[value(name = "clockwise90")]
    Clockwise90,
    #[value(name = "rotate180")]
    Rotate180,
    #[value(name = "counter-clockwise90")]
    CounterClockwise90,
}

impl From<RotationArg> for Rotation {
    #[inline]
    fn from(arg: RotationArg) -> Self {
        match arg {
            RotationArg::None => Rotation::None,
            RotationArg::Clockwise90 => Rotation::Clockwise90,
            RotationArg::Rotate180 => Rotation::Rotate180,
            RotationArg::CounterClockwise90 => Rotation::CounterClockwise90,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InterpolationArg {
    Linear,
    Nearest,
}

impl From<InterpolationArg> for Interpolation {
    #[inline]
    fn from(arg: InterpolationArg) -> Self {
        match arg {
            InterpolationArg::Linear => Interpolation::Linear,
            InterpolationArg::Nearest => Interpolation::Nearest,
        }
    }
}

impl Nii2png {
    pub fn run(&mut self) -> Result<()> {
        // [input-dir/<case>/<case>_{seg,t1post}.nii.gz] -> [output-dir/{images, masks}/<case>_<i>.png]
        require_dir(&self.in_dir)?;
        if self.clean {
            recreate_dir(&self.out_dir)?;
        }
        let config = self.config();
        let generator = DatasetGenerator::new(config).context("preparing output directories")?;
        let report = generator
            .generate()
            .with_context(|| format!("generating dataset from `{}`", self.in_dir.display()))?;
        log::info!(
            "{} pairs written to `{}`",
            report.pairs(),
            self.out_dir.display()
        );
        Ok(())
    }

    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new(&self.in_dir, &self.out_dir)
            .with_size(self.size)
            .with_rotation(self.rotation.into())
            .with_interpolation(self.interpolation.into())
            .with_base_index(self.base_index)
    }
}
