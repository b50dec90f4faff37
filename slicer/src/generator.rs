//! Case-by-case slicing of segmentation and T1-post volumes into PNG pairs.
//!
//! Each case runs in two phases. The segmentation volume is scanned first; every
//! slice with foreground is written to `masks/` and its index retained. The
//! intensity volume is then sliced at exactly the retained indices into
//! `images/`, so every image has a same-named mask and vice versa.

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::prep::improc::{self, has_foreground};
use crate::prep::{AccTimer, Volume};
use image::GrayImage;
use log::{debug, info, warn};
use ndarray::Array2;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of one case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaseReport {
    pub case: String,
    /// Depth of the segmentation volume.
    pub slices: usize,
    /// Slice indices that produced an image/mask pair, ascending.
    pub retained: Vec<usize>,
}

impl CaseReport {
    #[inline]
    pub fn pairs(&self) -> usize {
        self.retained.len()
    }
}

/// Outcome of a whole run, in case order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub cases: Vec<CaseReport>,
}

impl GenerationReport {
    pub fn pairs(&self) -> usize {
        self.cases.iter().map(CaseReport::pairs).sum()
    }

    pub fn slices(&self) -> usize {
        self.cases.iter().map(|c| c.slices).sum()
    }
}

pub struct DatasetGenerator {
    config: GeneratorConfig,
    images_dir: PathBuf,
    masks_dir: PathBuf,
}

impl DatasetGenerator {
    /// Validates `config` and creates the `images/` and `masks/` output directories.
    ///
    /// Nothing is created unless the input root exists.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        if config.size == 0 {
            return Err(Error::InvalidSize(config.size));
        }
        if !config.input_dir.is_dir() {
            return Err(Error::InputDirNotFound(config.input_dir.clone()));
        }
        let images_dir = config.images_dir();
        let masks_dir = config.masks_dir();
        for dir in [&images_dir, &masks_dir] {
            fs::create_dir_all(dir).map_err(Error::io(dir))?;
        }
        Ok(Self {
            config,
            images_dir,
            masks_dir,
        })
    }

    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Processes every case directory under the input root in name order.
    pub fn generate(&self) -> Result<GenerationReport> {
        let input_dir = self.config.input_dir.as_path();
        if !input_dir.is_dir() {
            return Err(Error::InputDirNotFound(input_dir.to_path_buf()));
        }

        let mut run_timer = AccTimer::new();
        let mut report = GenerationReport::default();
        for entry in WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()))
        {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                warn!("Skipping `{}`: not a case directory", entry.path().display());
                continue;
            }
            let case = entry.file_name().to_string_lossy().into_owned();
            run_timer.start();
            report.cases.push(self.generate_case(&case, entry.path())?);
            run_timer.elapsed();
        }

        info!(
            "Wrote {} image/mask pairs from {} slices in {} cases ({} ms)",
            report.pairs(),
            report.slices(),
            report.cases.len(),
            run_timer.get_total_ms()
        );
        Ok(report)
    }

    /// Runs both phases for one case located at `case_dir`.
    pub fn generate_case(&self, case: &str, case_dir: &Path) -> Result<CaseReport> {
        info!("=== case {case}");
        let mut timer = AccTimer::new();
        let (seg_path, t1post_path) = self.config.case_volumes(case, case_dir);

        let seg = Volume::probe_shape(&seg_path)?;
        let image = Volume::probe_shape(&t1post_path)?;
        if seg != image {
            return Err(Error::ShapeMismatch {
                case: case.to_owned(),
                seg,
                image,
            });
        }

        let retained = self.generate_mask_files(case, &seg_path)?;
        self.generate_image_files(case, &t1post_path, &retained)?;
        timer.elapsed();

        info!(
            "case {case}: {} of {} slices kept ({} ms)",
            retained.len(),
            seg[2],
            timer.get_total_ms()
        );
        Ok(CaseReport {
            case: case.to_owned(),
            slices: seg[2],
            retained,
        })
    }

    /// Writes one mask per slice with foreground and returns those slice indices.
    pub fn generate_mask_files(&self, case: &str, seg_path: &Path) -> Result<Vec<usize>> {
        let volume = Volume::open(seg_path)?;
        let mut retained = Vec::new();
        for (i, slice) in volume.slices().enumerate() {
            if !has_foreground(slice) {
                continue;
            }
            let resized = improc::resize(slice, self.config.size, self.config.interpolation);
            let mask = improc::scale_mask(resized.view());
            let path = self.masks_dir.join(self.config.slice_filename(case, i)?);
            self.save(mask, &path)?;
            debug!("--- Saved {}", path.display());
            retained.push(i);
        }
        Ok(retained)
    }

    /// Writes the normalized intensity slice for every index in `retained`.
    pub fn generate_image_files(
        &self,
        case: &str,
        t1post_path: &Path,
        retained: &[usize],
    ) -> Result<()> {
        let volume = Volume::open(t1post_path)?;
        for &i in retained {
            let normalized = improc::normalize(volume.slice(i));
            let resized =
                improc::resize_u8(normalized.view(), self.config.size, self.config.interpolation);
            let path = self.images_dir.join(self.config.slice_filename(case, i)?);
            self.save(resized, &path)?;
            debug!("=== Saved {}", path.display());
        }
        Ok(())
    }

    fn save(&self, slice: Array2<u8>, path: &Path) -> Result<()> {
        let img: GrayImage = improc::rotate(improc::to_gray_image(slice.view()), self.config.rotation);
        img.save(path).map_err(Error::image(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn zero_size_is_rejected() {
        let dir = tempdir().unwrap();
        let cfg = GeneratorConfig::new(dir.path(), dir.path().join("out")).with_size(0);
        assert!(matches!(DatasetGenerator::new(cfg), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn new_creates_output_dirs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let generator = DatasetGenerator::new(GeneratorConfig::new(dir.path(), &out)).unwrap();
        assert!(out.join("images").is_dir());
        assert!(out.join("masks").is_dir());
        assert_eq!(generator.config().output_dir, out);
    }

    #[test]
    fn missing_input_dir_creates_nothing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let cfg = GeneratorConfig::new(dir.path().join("absent"), &out);
        let err = DatasetGenerator::new(cfg).err().unwrap();
        assert!(matches!(err, Error::InputDirNotFound(p) if p.ends_with("absent")));
        assert!(!out.exists());
    }

    #[test]
    fn stray_files_are_not_cases() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("README.txt"), b"notes").unwrap();
        let cfg = GeneratorConfig::new(&input, dir.path().join("out"));
        let report = DatasetGenerator::new(cfg).unwrap().generate().unwrap();
        assert!(report.cases.is_empty());
        assert_eq!(report.pairs(), 0);
    }

    #[test]
    fn report_totals() {
        let report = GenerationReport {
            cases: vec![
                CaseReport {
                    case: "A".into(),
                    slices: 3,
                    retained: vec![1, 2],
                },
                CaseReport {
                    case: "B".into(),
                    slices: 5,
                    retained: vec![0],
                },
            ],
        };
        assert_eq!(report.pairs(), 3);
        assert_eq!(report.slices(), 8);
    }
}
