#![allow(dead_code)]

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes a gzipped single-file NIfTI-1 float32 volume, `x` varying fastest.
pub fn write_nii_gz<F>(path: &Path, dims: [usize; 3], voxel: F)
where
    F: Fn(usize, usize, usize) -> f32,
{
    let [nx, ny, nz] = dims;
    let mut header = [0u8; 348];
    header[0..4].copy_from_slice(&348i32.to_le_bytes());
    let dim: [i16; 8] = [3, nx as i16, ny as i16, nz as i16, 1, 1, 1, 1];
    for (i, d) in dim.iter().enumerate() {
        header[40 + i * 2..42 + i * 2].copy_from_slice(&d.to_le_bytes());
    }
    // FLOAT32
    header[70..72].copy_from_slice(&16i16.to_le_bytes());
    header[72..74].copy_from_slice(&32i16.to_le_bytes());
    for i in 0..8 {
        header[76 + i * 4..80 + i * 4].copy_from_slice(&1.0f32.to_le_bytes());
    }
    header[108..112].copy_from_slice(&352.0f32.to_le_bytes());
    header[112..116].copy_from_slice(&1.0f32.to_le_bytes());
    header[116..120].copy_from_slice(&0.0f32.to_le_bytes());
    header[344..348].copy_from_slice(b"n+1\0");

    let mut raw = Vec::with_capacity(352 + nx * ny * nz * 4);
    raw.extend_from_slice(&header);
    raw.extend_from_slice(&[0u8; 4]);
    for z in 0..nz {
        for y in 0..ny {
            for x in 0..nx {
                raw.extend_from_slice(&voxel(x, y, z).to_le_bytes());
            }
        }
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&raw).unwrap();
    fs::write(path, encoder.finish().unwrap()).unwrap();
}

/// Creates `<root>/<case>/<case>_seg.nii.gz` and `<case>_t1post.nii.gz`.
pub fn write_case<S, T>(root: &Path, case: &str, dims: [usize; 3], seg: S, t1post: T)
where
    S: Fn(usize, usize, usize) -> f32,
    T: Fn(usize, usize, usize) -> f32,
{
    let dir = root.join(case);
    fs::create_dir_all(&dir).unwrap();
    write_nii_gz(&dir.join(format!("{case}_seg.nii.gz")), dims, seg);
    write_nii_gz(&dir.join(format!("{case}_t1post.nii.gz")), dims, t1post);
}

/// Sorted file names directly inside `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
