use anyhow::{Context, Result};
use slicer::Error;
use std::fs;
use std::path::Path;

/// Parses a strictly positive slice edge length.
pub fn positive_size(s: &str) -> Result<usize, &'static str> {
    const ERR: &str = "size must be a positive integer";
    match s.parse::<usize>() {
        Ok(0) | Err(_) => Err(ERR),
        Ok(v) => Ok(v),
    }
}

/// Fails with `Error::InputDirNotFound` unless `dir` is an existing directory.
pub fn require_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(Error::InputDirNotFound(dir.to_path_buf()).into())
    }
}

/// Removes `dir` if present and recreates it empty.
pub fn recreate_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        log::warn!("Removing existing `{}`", dir.display());
        fs::remove_dir_all(dir).with_context(|| format!("removing `{}`", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("creating `{}`", dir.display()))
}
