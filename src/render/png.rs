//! PNG output for composed canvases.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{PxgenError, Result};

use super::Canvas;

/// Write a canvas to a PNG file.
///
/// `scale` is an integer nearest-neighbour upscale factor (1 = native
/// resolution); sprites stay crisp at any factor.
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1);

    let width = canvas.width() * scale;
    let height = canvas.height() * scale;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let colour = canvas.get(x, y).unwrap_or_default();
            let rgba = Rgba(colour.to_rgba());

            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x * scale + sx, y * scale + sy, rgba);
                }
            }
        }
    }

    img.save(path).map_err(|e| PxgenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
