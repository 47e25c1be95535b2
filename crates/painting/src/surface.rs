//! CPU canvas for icon rendering - 8-bit RGB/RGBA storage

use crate::constants::{BLACK, TRANSPARENT};
use crate::types::{Color, PixelFormat};

/// A square 8-bit canvas
/// Stores pixels as [u8; 4] regardless of format; RGB canvases keep alpha at 255
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Edge length in pixels
    size: u32,
    format: PixelFormat,
    /// Pixel data in row-major order
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a blank canvas: transparent black for RGBA, opaque black for RGB
    pub fn new(size: u32, format: PixelFormat) -> Self {
        let background = match format {
            PixelFormat::Rgba => TRANSPARENT,
            PixelFormat::Rgb => BLACK,
        };
        let pixel_count = (size as usize) * (size as usize);
        Self {
            size,
            format,
            pixels: vec![background; pixel_count],
        }
    }

    /// Create a canvas cleared to a solid background color
    pub fn filled(size: u32, format: PixelFormat, color: Color) -> Self {
        let mut canvas = Self::new(size, format);
        canvas.clear(color);
        canvas
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Clear the canvas to a solid color
    pub fn clear(&mut self, color: Color) {
        let color = self.normalize(color);
        self.pixels.fill(color);
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.size || y >= self.size {
            return;
        }
        let index = self.index(x, y);
        self.pixels[index] = self.normalize(color);
    }

    /// Set a pixel addressed by signed coordinates, clipping anything off-canvas
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        self.set_pixel(x as u32, y as u32, color);
    }

    /// True when no pixel carries partial or zero alpha
    pub fn is_opaque(&self) -> bool {
        !self.format.has_alpha() || self.pixels.iter().all(|p| p[3] == 255)
    }

    /// Number of pixels exactly matching `color`
    pub fn count_color(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Raw RGBA bytes, four per pixel
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.size as usize) + (x as usize)
    }

    /// RGB canvases have no alpha channel to write into
    #[inline]
    fn normalize(&self, color: Color) -> Color {
        match self.format {
            PixelFormat::Rgba => color,
            PixelFormat::Rgb => [color[0], color[1], color[2], 255],
        }
    }
}
