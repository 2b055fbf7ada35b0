//! Raster export of the pixel grid.
//!
//! Rasterizes the model's cells directly (not the on-screen view) so the
//! output never contains panel chrome or zoom artifacts.

use image::{ImageFormat, RgbaImage};
use log::info;
use rayon::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::domain::GridModel;
use crate::error::{Error, Result};

/// Largest width or height of an exported image, in pixels
pub const MAX_EXPORT_EDGE: u32 = 16384;

/// How large each cell becomes in the exported image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub cell_pixels: u32,
    pub scale: u32,
}

impl ExportOptions {
    /// Edge length of one cell in output pixels, None on overflow
    pub const fn block(&self) -> Option<u32> {
        self.cell_pixels.checked_mul(self.scale)
    }

    /// Edge length of the whole image for a grid of `size` cells.
    /// Fails when a cell is empty or the image would exceed `MAX_EXPORT_EDGE`.
    pub fn edge(&self, size: usize) -> Result<u32> {
        let too_large = || {
            Error::Export(format!(
                "{} cells at {}x{}px exceeds {}px",
                size, self.cell_pixels, self.scale, MAX_EXPORT_EDGE
            ))
        };
        let block = self.block().ok_or_else(too_large)?;
        if block == 0 {
            return Err(Error::Export("cell size must be positive".into()));
        }
        u32::try_from(size)
            .ok()
            .and_then(|s| s.checked_mul(block))
            .filter(|&edge| edge <= MAX_EXPORT_EDGE)
            .ok_or_else(too_large)
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { cell_pixels: 16, scale: 2 }
    }
}

/// Rasterize every cell into a square block.
/// Rows of the output are filled in parallel.
pub fn rasterize(model: &GridModel, options: &ExportOptions) -> Result<RgbaImage> {
    let size = model.size();
    let edge = options.edge(size)?;
    // edge > 0 here, so block is non-zero too
    let block = edge as usize / size;

    let cells = model.cells();
    let row_bytes = edge as usize * 4;
    let len = row_bytes
        .checked_mul(edge as usize)
        .ok_or_else(|| Error::Export(format!("{}px image does not fit in memory", edge)))?;
    let mut buffer = vec![0u8; len];

    buffer
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            let cell_row = y / block;
            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                let cell_col = x / block;
                pixel.copy_from_slice(&cells[cell_row * size + cell_col].to_rgba());
            }
        });

    RgbaImage::from_raw(edge, edge, buffer)
        .ok_or_else(|| Error::Export("raster buffer size mismatch".into()))
}

/// Encode the grid as PNG bytes
pub fn encode_png(model: &GridModel, options: &ExportOptions) -> Result<Vec<u8>> {
    let image = rasterize(model, options)?;
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Write the grid to `path` as PNG, creating parent directories as needed
pub fn export_png(model: &GridModel, options: &ExportOptions, path: &Path) -> Result<()> {
    let bytes = encode_png(model, options)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|e| Error::Export(format!("{}: {}", dir.display(), e)))?;
    }
    fs::write(path, &bytes).map_err(|e| Error::Export(format!("{}: {}", path.display(), e)))?;
    info!("Exported {}x{} grid to {} ({} bytes)", model.size(), model.size(), path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GridSize, Rgb};

    const RED: Rgb = Rgb::new(0xff, 0, 0);

    fn model() -> GridModel {
        GridModel::new(GridSize::try_from(8).unwrap(), Rgb::WHITE)
    }

    #[test]
    fn test_rasterize_dimensions() {
        let image = rasterize(&model(), &ExportOptions::default()).unwrap();
        assert_eq!(image.dimensions(), (8 * 32, 8 * 32));
    }

    #[test]
    fn test_rasterize_block_colors() {
        let mut model = model();
        model.paint(9, RED); // row 1, col 1
        let options = ExportOptions { cell_pixels: 2, scale: 1 };
        let image = rasterize(&model, &options).unwrap();

        assert_eq!(image.get_pixel(2, 2).0, [0xff, 0, 0, 0xff]);
        assert_eq!(image.get_pixel(3, 3).0, [0xff, 0, 0, 0xff]);
        assert_eq!(image.get_pixel(1, 2).0, [0xff, 0xff, 0xff, 0xff]);
        assert_eq!(image.get_pixel(4, 2).0, [0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_zero_block_is_rejected() {
        let options = ExportOptions { cell_pixels: 0, scale: 2 };
        assert!(matches!(rasterize(&model(), &options), Err(Error::Export(_))));
    }

    #[test]
    fn test_overflowing_block_is_rejected() {
        let options = ExportOptions { cell_pixels: 70_000, scale: 70_000 };
        assert_eq!(options.block(), None);
        assert!(matches!(rasterize(&model(), &options), Err(Error::Export(_))));
    }

    #[test]
    fn test_oversized_image_is_rejected() {
        // 64 cells at 100000px fits in u32 but not in memory
        let model = GridModel::new(GridSize::try_from(64).unwrap(), Rgb::WHITE);
        let options = ExportOptions { cell_pixels: 100_000, scale: 1 };
        assert!(matches!(rasterize(&model, &options), Err(Error::Export(_))));
    }

    #[test]
    fn test_edge_limit_is_inclusive() {
        let options = ExportOptions { cell_pixels: 128, scale: 2 };
        assert_eq!(options.edge(64).unwrap(), MAX_EXPORT_EDGE);
        assert!(options.edge(65).is_err());
    }

    #[test]
    fn test_encode_png_signature() {
        let bytes = encode_png(&model(), &ExportOptions { cell_pixels: 1, scale: 1 }).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_export_writes_decodable_file() {
        let dir = std::env::temp_dir().join(format!("pixel_art_export_{}", std::process::id()));
        let path = dir.join("nested").join("art.png");
        export_png(&model(), &ExportOptions { cell_pixels: 1, scale: 2 }, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 16));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_reports_unwritable_path() {
        // A file cannot be used as a parent directory
        let file = std::env::temp_dir().join(format!("pixel_art_blocker_{}", std::process::id()));
        fs::write(&file, b"x").unwrap();
        let result = export_png(&model(), &ExportOptions::default(), &file.join("art.png"));
        assert!(matches!(result, Err(Error::Export(_))));
        let _ = fs::remove_file(&file);
    }
}
