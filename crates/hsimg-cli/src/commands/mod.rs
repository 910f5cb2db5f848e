//! CLI command implementations

pub mod process;

use anyhow::{Context, Result};
use hsimg_core::Image;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<Image> {
    hsimg_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &Image) -> Result<()> {
    hsimg_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}
