/// An 8-bit RGBA color
pub type Color = [u8; 4];

/// Pixel format of a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PixelFormat {
    /// Opaque RGB; alpha is forced to 255 on every write
    Rgb = 0,
    /// RGBA with per-pixel alpha
    #[default]
    Rgba = 1,
}

impl PixelFormat {
    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Rgba)
    }
}

/// An integer pixel coordinate. May lie outside the canvas; drawing clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box with inclusive corners `[x0, y0, x1, y1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box of a circle with the given center and radius
    pub const fn around(center: Point, radius: i32) -> Self {
        Self {
            x0: center.x - radius,
            y0: center.y - radius,
            x1: center.x + radius,
            y1: center.y + radius,
        }
    }

    /// Width in pixels, counting both edges
    #[inline]
    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    /// Height in pixels, counting both edges
    #[inline]
    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// True when every corner lies in `[0, size)` on both axes
    pub fn fits_within(&self, size: u32) -> bool {
        let size = size as i64;
        let inside = |v: i32| (v as i64) >= 0 && (v as i64) < size;
        self.x0 <= self.x1
            && self.y0 <= self.y1
            && inside(self.x0)
            && inside(self.y0)
            && inside(self.x1)
            && inside(self.y1)
    }
}
