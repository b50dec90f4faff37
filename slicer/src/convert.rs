//! JPEG to PNG batch conversion.

use crate::error::{Error, Result};
use crate::prep::improc::consts::{IMAGES_DIR, MASKS_DIR};
use image::io::Reader as ImageReader;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Only files with exactly this extension are converted.
pub const JPEG_EXT: &str = "jpg";

/// Re-encodes every `*.jpg` directly inside `src` as `dst/<stem>.png`.
///
/// Every output is 8-bit RGB, grayscale sources included; pixels are
/// otherwise written unchanged. Returns the written paths in name order.
pub fn convert_dir<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<Vec<PathBuf>> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    if !src.is_dir() {
        return Err(Error::InputDirNotFound(src.to_path_buf()));
    }
    fs::create_dir_all(dst).map_err(Error::io(dst))?;

    let mut written = Vec::new();
    for entry in WalkDir::new(src)
        .min_depth(1)
        .max_depth(1)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()))
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|s| s.to_str()) != Some(JPEG_EXT)
        {
            continue;
        }
        let Some(stem) = path.file_stem() else {
            continue;
        };

        let img = ImageReader::open(path)
            .map_err(Error::io(path))?
            .decode()
            .map_err(Error::image(path))?;
        let mut name = stem.to_os_string();
        name.push(".png");
        let out = dst.join(name);
        img.to_rgb8().save(&out).map_err(Error::image(&out))?;
        info!("Saved {}", out.display());
        written.push(out);
    }
    Ok(written)
}

/// Converts `src_root/images` and `src_root/masks` into the same layout under `dst_root`.
pub fn convert_dataset<P: AsRef<Path>, Q: AsRef<Path>>(
    src_root: P,
    dst_root: Q,
) -> Result<Vec<PathBuf>> {
    let (src_root, dst_root) = (src_root.as_ref(), dst_root.as_ref());
    let mut written = Vec::new();
    for sub in [IMAGES_DIR, MASKS_DIR] {
        written.extend(convert_dir(src_root.join(sub), dst_root.join(sub))?);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, GenericImageView, GrayImage, Luma, Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn converts_only_jpg_files() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        RgbImage::from_pixel(7, 5, Rgb([200, 40, 40]))
            .save(src.join("a.jpg"))
            .unwrap();
        GrayImage::from_pixel(3, 9, Luma([128]))
            .save(src.join("b.jpg"))
            .unwrap();
        GrayImage::new(2, 2).save(src.join("c.png")).unwrap();
        fs::write(src.join("notes.txt"), b"skip me").unwrap();

        let dst = dir.path().join("dst");
        let written = convert_dir(&src, &dst).unwrap();
        assert_eq!(written, vec![dst.join("a.png"), dst.join("b.png")]);
        assert_eq!(image::image_dimensions(dst.join("a.png")).unwrap(), (7, 5));
        assert_eq!(image::image_dimensions(dst.join("b.png")).unwrap(), (3, 9));
        assert!(!dst.join("c.png").exists());
    }

    #[test]
    fn grayscale_jpg_becomes_rgb_png() {
        let dir = tempdir().unwrap();
        GrayImage::from_pixel(4, 3, Luma([200]))
            .save(dir.path().join("mask.jpg"))
            .unwrap();
        let dst = dir.path().join("png");
        convert_dir(dir.path(), &dst).unwrap();

        let png = image::open(dst.join("mask.png")).unwrap();
        assert_eq!(png.color(), ColorType::Rgb8);
        assert_eq!((png.width(), png.height()), (4, 3));
        let px = png.to_rgb8().get_pixel(0, 0).0;
        assert!(px[0] == px[1] && px[1] == px[2]);
    }

    #[test]
    fn undecodable_jpg_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.jpg"), b"not a jpeg").unwrap();
        let err = convert_dir(dir.path(), dir.path().join("out")).unwrap_err();
        assert!(matches!(err, Error::Image { path, .. } if path.ends_with("broken.jpg")));
    }

    #[test]
    fn dataset_layout_is_mirrored() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("mini_test");
        for sub in [IMAGES_DIR, MASKS_DIR] {
            fs::create_dir_all(src.join(sub)).unwrap();
            GrayImage::from_pixel(4, 4, Luma([255]))
                .save(src.join(sub).join("10001.jpg"))
                .unwrap();
        }
        let dst = dir.path().join("png");
        let written = convert_dataset(&src, &dst).unwrap();
        assert_eq!(written.len(), 2);
        assert!(dst.join("images/10001.png").is_file());
        assert!(dst.join("masks/10001.png").is_file());
    }

    #[test]
    fn missing_source_dir() {
        let dir = tempdir().unwrap();
        let err = convert_dir(dir.path().join("nope"), dir.path().join("out")).unwrap_err();
        assert!(matches!(err, Error::InputDirNotFound(_)));
    }
}
