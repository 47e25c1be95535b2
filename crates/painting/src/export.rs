//! Conversion of canvases to `image` buffers and PNG output

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use tracing::debug;

use crate::error::PaintingError;
use crate::surface::Canvas;
use crate::types::PixelFormat;

impl Canvas {
    /// Convert to an `image` buffer: `ImageRgb8` for RGB canvases, `ImageRgba8` otherwise
    pub fn to_dynamic_image(&self) -> Result<DynamicImage, PaintingError> {
        let size = self.size();
        let invalid = || PaintingError::InvalidDimensions {
            width: size,
            height: size,
        };
        if size == 0 {
            return Err(invalid());
        }

        match self.format() {
            PixelFormat::Rgba => {
                let buffer = RgbaImage::from_raw(size, size, self.as_bytes().to_vec())
                    .ok_or_else(invalid)?;
                Ok(DynamicImage::ImageRgba8(buffer))
            }
            PixelFormat::Rgb => {
                let rgb: Vec<u8> = self
                    .pixels()
                    .iter()
                    .flat_map(|p| [p[0], p[1], p[2]])
                    .collect();
                let buffer = RgbImage::from_raw(size, size, rgb).ok_or_else(invalid)?;
                Ok(DynamicImage::ImageRgb8(buffer))
            }
        }
    }

    /// Encode as PNG into memory
    pub fn encode_png(&self) -> Result<Vec<u8>, PaintingError> {
        let mut bytes = Cursor::new(Vec::new());
        self.to_dynamic_image()?.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }

    /// Encode as PNG and write to `path`, replacing any existing file
    pub fn save_png(&self, path: &Path) -> Result<(), PaintingError> {
        debug!(
            "Canvas::save_png: {}x{} {:?} -> {}",
            self.width(),
            self.height(),
            self.format(),
            path.display()
        );
        let bytes = self.encode_png()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}
