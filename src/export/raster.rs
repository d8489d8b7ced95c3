//! Raster export: PixelBuffer to bitmap to PNG bytes.
//!
//! Each logical cell becomes a solid `scale × scale` block. Empty cells
//! render as a fixed mid-dark gray, never as transparency, so exported
//! images have no alpha-dependent pixels and look identical everywhere.
//!
//! Export reads a snapshot of the buffer at call time; it has no
//! ordering dependency on drawing operations that follow it.

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

use crate::buffer::{GridSize, PixelBuffer, Rgb};
use crate::Result;

/// Fixed scale used for list-preview thumbnails.
pub const THUMBNAIL_SCALE: u32 = 2;

/// Target edge length for full-size exports, in pixels.
const EXPORT_TARGET_EDGE: u32 = 512;

/// Choose the per-cell scale for a full-size export.
///
/// `max(2, 512 / side)`: small grids are upscaled for visibility, large
/// grids are not upscaled excessively.
#[inline]
pub const fn export_scale(size: GridSize) -> u32 {
    let scale = EXPORT_TARGET_EDGE / size.side();
    if scale < 2 {
        2
    } else {
        scale
    }
}

/// The filename convention for downloaded exports.
pub fn export_filename(size: GridSize, timestamp: u64) -> String {
    format!("pixel-art-{size}-{timestamp}.png")
}

/// Rasterize a buffer to an RGB bitmap at the given per-cell scale.
///
/// The output is `(side * scale)²` pixels. A scale of 0 is treated as 1.
pub fn rasterize(buffer: &PixelBuffer, scale: u32) -> RgbImage {
    let scale = scale.max(1);
    let background = pixel(Rgb::EXPORT_BACKGROUND);
    let edge = buffer.side() * scale;
    let mut image = RgbImage::from_pixel(edge, edge, background);

    for (index, cell) in buffer.cells().iter().enumerate() {
        let Some(color) = cell else {
            continue; // Background is already in place
        };
        let Some((cell_x, cell_y)) = buffer.coords_of(index) else {
            continue;
        };
        let block = pixel(*color);
        for dy in 0..scale {
            for dx in 0..scale {
                image.put_pixel(cell_x * scale + dx, cell_y * scale + dy, block);
            }
        }
    }

    image
}

/// Rasterize at the small fixed thumbnail scale.
pub fn thumbnail(buffer: &PixelBuffer) -> RgbImage {
    rasterize(buffer, THUMBNAIL_SCALE)
}

/// Encode a bitmap as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

/// Rasterize at the export scale policy and encode as PNG, ready for
/// the host's download/share surface.
pub fn export_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    encode_png(&rasterize(buffer, export_scale(buffer.size())))
}

#[inline]
const fn pixel(color: Rgb) -> image::Rgb<u8> {
    image::Rgb([color.r, color.g, color.b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_scale_policy() {
        assert_eq!(export_scale(GridSize::Size8), 64); // 8 * 64 = 512
        assert_eq!(export_scale(GridSize::Size16), 32);
        assert_eq!(export_scale(GridSize::Size32), 16);
        assert_eq!(export_scale(GridSize::Size64), 8);
    }

    #[test]
    fn test_rasterize_dimensions() {
        let buffer = PixelBuffer::new(GridSize::Size8);
        let image = rasterize(&buffer, 4);
        assert_eq!(image.dimensions(), (32, 32));
    }

    #[test]
    fn test_rasterize_zero_scale_treated_as_one() {
        let buffer = PixelBuffer::new(GridSize::Size8);
        let image = rasterize(&buffer, 0);
        assert_eq!(image.dimensions(), (8, 8));
    }

    #[test]
    fn test_empty_cells_render_as_background() {
        let buffer = PixelBuffer::new(GridSize::Size8);
        let image = rasterize(&buffer, 2);
        let bg = image::Rgb([0x1a, 0x1a, 0x1a]);
        assert!(image.pixels().all(|p| *p == bg));
    }

    #[test]
    fn test_painted_cell_becomes_solid_block() {
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        // Cell (1, 0).
        buffer.set_pixel(1, Rgb::new(255, 0, 0));

        let image = rasterize(&buffer, 4);
        let red = image::Rgb([255, 0, 0]);
        let bg = image::Rgb([0x1a, 0x1a, 0x1a]);

        for dy in 0..4 {
            for dx in 0..4 {
                assert_eq!(*image.get_pixel(4 + dx, dy), red);
            }
        }
        // Neighboring blocks untouched.
        assert_eq!(*image.get_pixel(3, 0), bg);
        assert_eq!(*image.get_pixel(8, 0), bg);
        assert_eq!(*image.get_pixel(4, 4), bg);
    }

    #[test]
    fn test_thumbnail_dimensions() {
        let buffer = PixelBuffer::new(GridSize::Size32);
        let image = thumbnail(&buffer);
        assert_eq!(image.dimensions(), (64, 64));
    }

    #[test]
    fn test_encode_png_signature() {
        let buffer = PixelBuffer::new(GridSize::Size8);
        let bytes = encode_png(&rasterize(&buffer, 2)).unwrap();
        assert!(bytes.len() > 8);
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_export_png_decodes_back() {
        let mut buffer = PixelBuffer::new(GridSize::Size8);
        buffer.set_pixel(0, Rgb::WHITE);

        let bytes = export_png(&buffer).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (512, 512));
        assert_eq!(*decoded.get_pixel(0, 0), image::Rgb([255, 255, 255]));
        // Past the first 64px block lies untouched background.
        assert_eq!(*decoded.get_pixel(64, 0), image::Rgb([0x1a, 0x1a, 0x1a]));
    }

    #[test]
    fn test_export_filename_convention() {
        assert_eq!(
            export_filename(GridSize::Size16, 1_700_000_000),
            "pixel-art-16x16-1700000000.png"
        );
    }
}
