//! "X" logo glyph, white on an opaque black square
//!
//! Two alternative renderers share the same contract:
//! - [`render_logo_a`] carves a white square with two black bars
//! - [`render_logo_b`] draws two diagonals thickened by parallel 1px copies

use painting::{BLACK, Canvas, PixelFormat, Point, Rect, WHITE};
use tracing::debug;

/// Geometry of the "block" variant
///
/// The bars only cut the top and bottom edges of the square, so the result
/// is not a true X.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLayout {
    pub size: i32,
    pub padding: i32,
    pub bar_thickness: i32,
}

impl BlockLayout {
    pub fn new(size: u32) -> Self {
        let size = size as i32;
        Self {
            size,
            padding: size / 8,
            bar_thickness: (size / 8).max(2),
        }
    }

    pub fn square(&self) -> Rect {
        let (p, s) = (self.padding, self.size);
        Rect::new(p, p, s - p, s - p)
    }

    /// Top and bottom bar outlines
    pub fn bars(&self) -> [[Point; 4]; 2] {
        let (p, s, t) = (self.padding, self.size, self.bar_thickness);
        [
            [
                Point::new(p, p),
                Point::new(s - p, p),
                Point::new(s - p - t, p + t),
                Point::new(p + t, p + t),
            ],
            [
                Point::new(p, s - p),
                Point::new(s - p, s - p),
                Point::new(s - p - t, s - p - t),
                Point::new(p + t, s - p - t),
            ],
        ]
    }
}

/// Geometry of the "stroke" variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrokeLayout {
    pub size: i32,
    pub padding: i32,
    pub thickness: i32,
}

impl StrokeLayout {
    pub fn new(size: u32) -> Self {
        let size = size as i32;
        Self {
            size,
            padding: size / 5,
            thickness: (size / 7).max(2),
        }
    }

    /// Horizontal shifts of the parallel copies, centered on zero
    pub fn offsets(&self) -> impl Iterator<Item = i32> + use<> {
        let half = self.thickness / 2;
        (0..self.thickness).map(move |i| i - half)
    }

    /// Both diagonals ("\" then "/") for one offset
    pub fn diagonals(&self, offset: i32) -> [(Point, Point); 2] {
        let (p, s) = (self.padding, self.size);
        [
            (Point::new(p + offset, p), Point::new(s - p + offset, s - p)),
            (Point::new(s - p + offset, p), Point::new(p + offset, s - p)),
        ]
    }
}

/// Render the "block" X: white square with black bars at top and bottom
pub fn render_logo_a(size: u32) -> Canvas {
    let layout = BlockLayout::new(size);
    debug!("render_logo_a: size={} layout={:?}", size, layout);

    let mut canvas = Canvas::filled(size, PixelFormat::Rgb, BLACK);
    canvas.fill_rect(layout.square(), WHITE);
    for bar in layout.bars() {
        if let Some(region) = canvas.fill_polygon(&bar, BLACK) {
            debug!("  bar region {:?}", region);
        }
    }
    canvas
}

/// Render the "stroke" X: two thick white diagonals
pub fn render_logo_b(size: u32) -> Canvas {
    let layout = StrokeLayout::new(size);
    debug!("render_logo_b: size={} layout={:?}", size, layout);

    let mut canvas = Canvas::filled(size, PixelFormat::Rgb, BLACK);
    for offset in layout.offsets() {
        for (start, end) in layout.diagonals(offset) {
            canvas.draw_line(start, end, WHITE);
        }
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use icongen_config::ICON_SIZES;

    #[test]
    fn test_variants_are_opaque_squares() {
        for size in ICON_SIZES {
            for canvas in [render_logo_a(size), render_logo_b(size)] {
                assert_eq!(canvas.width(), size);
                assert_eq!(canvas.height(), size);
                assert_eq!(canvas.format(), PixelFormat::Rgb);
                assert!(canvas.is_opaque());
            }
        }
    }

    #[test]
    fn test_only_black_and_white() {
        for size in ICON_SIZES {
            for canvas in [render_logo_a(size), render_logo_b(size)] {
                let bw = canvas.count_color(BLACK) + canvas.count_color(WHITE);
                assert_eq!(bw, canvas.pixel_count());
                assert!(canvas.count_color(WHITE) > 0);
            }
        }
    }

    #[test]
    fn test_block_layout() {
        let layout = BlockLayout::new(128);
        assert_eq!(layout.padding, 16);
        assert_eq!(layout.bar_thickness, 16);
        assert_eq!(layout.square(), Rect::new(16, 16, 112, 112));
        assert_eq!(BlockLayout::new(16).bar_thickness, 2);
    }

    #[test]
    fn test_block_geometry_within_canvas() {
        for size in ICON_SIZES {
            let layout = BlockLayout::new(size);
            assert!(layout.square().fits_within(size), "size {size}: square");
            for bar in layout.bars() {
                for vertex in bar {
                    let point = Rect::new(vertex.x, vertex.y, vertex.x, vertex.y);
                    assert!(point.fits_within(size), "size {size}: {vertex:?}");
                }
            }
        }
    }

    #[test]
    fn test_block_keeps_center_white() {
        // The bars only cut the edges; the middle of the square survives
        let canvas = render_logo_a(128);
        assert_eq!(canvas.get_pixel(64, 64), Some(WHITE));
        assert_eq!(canvas.get_pixel(64, 16), Some(BLACK));
        assert_eq!(canvas.get_pixel(64, 112), Some(BLACK));
        assert_eq!(canvas.get_pixel(0, 0), Some(BLACK));
        // Side edges between the bars stay white
        assert_eq!(canvas.get_pixel(16, 64), Some(WHITE));
    }

    #[test]
    fn test_stroke_layout() {
        let layout = StrokeLayout::new(128);
        assert_eq!(layout.padding, 25);
        assert_eq!(layout.thickness, 18);
        let offsets: Vec<i32> = layout.offsets().collect();
        assert_eq!(offsets.len(), 18);
        assert_eq!(offsets.first(), Some(&-9));
        assert_eq!(offsets.last(), Some(&8));

        let small = StrokeLayout::new(16);
        assert_eq!(small.padding, 3);
        assert_eq!(small.thickness, 2);
        assert_eq!(small.offsets().collect::<Vec<_>>(), vec![-1, 0]);
    }

    #[test]
    fn test_stroke_geometry_within_canvas() {
        for size in ICON_SIZES {
            let layout = StrokeLayout::new(size);
            for offset in layout.offsets() {
                for (start, end) in layout.diagonals(offset) {
                    let bounds = Rect::new(
                        start.x.min(end.x),
                        start.y.min(end.y),
                        start.x.max(end.x),
                        start.y.max(end.y),
                    );
                    assert!(bounds.fits_within(size), "size {size}: {bounds:?}");
                }
            }
        }
    }

    #[test]
    fn test_stroke_draws_diagonals() {
        let canvas = render_logo_b(128);
        // Both diagonals cross at the center
        assert_eq!(canvas.get_pixel(64, 64), Some(WHITE));
        assert_eq!(canvas.get_pixel(25, 25), Some(WHITE));
        assert_eq!(canvas.get_pixel(103, 25), Some(WHITE));
        // Outside the padding stays black
        assert_eq!(canvas.get_pixel(0, 0), Some(BLACK));
        assert_eq!(canvas.get_pixel(64, 5), Some(BLACK));
    }
}
