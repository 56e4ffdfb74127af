//! PNG swatch strips.
//!
//! One square per colour, laid out left to right in palette order.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{HubError, Result};
use crate::types::Palette;

/// Edge length of a swatch square when none is configured.
pub const DEFAULT_SWATCH_SIZE: u32 = 64;

/// Render a palette as a `len * size` by `size` image.
pub fn render_swatches(palette: &Palette, size: u32) -> Result<RgbImage> {
    let size = size.max(1); // Minimum swatch of 1px

    if palette.is_empty() {
        return Err(HubError::Export {
            message: "Cannot render an empty palette".to_string(),
            help: None,
        });
    }

    let width = palette.len() as u32 * size;
    let mut img: RgbImage = ImageBuffer::new(width, size);

    for (i, colour) in palette.colours().iter().enumerate() {
        let rgb = Rgb(colour.to_rgb());
        let left = i as u32 * size;
        for y in 0..size {
            for x in left..left + size {
                img.put_pixel(x, y, rgb);
            }
        }
    }

    Ok(img)
}

/// Write a palette as a PNG swatch strip.
///
/// # Arguments
///
/// * `palette` - The palette to draw
/// * `path` - Output file path
/// * `size` - Edge length of each swatch in pixels (0 is treated as 1)
pub fn write_swatch_png(palette: &Palette, path: &Path, size: u32) -> Result<()> {
    let img = render_swatches(palette, size)?;

    img.save(path).map_err(|e| HubError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
