//! CLI command implementations

pub mod blur;
pub mod info;

use anyhow::{Context, Result};
use pxm_io::{PpmImage, ppm};
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<PpmImage> {
    ppm::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &PpmImage) -> Result<()> {
    ppm::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}
