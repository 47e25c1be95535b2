//! Filled-shape primitives
//!
//! Every primitive takes integer geometry in canvas pixels, clips it to the
//! canvas, and returns the clipped region it touched as `(x, y, width, height)`,
//! or `None` when nothing landed on the canvas.

use tracing::debug;

use crate::surface::Canvas;
use crate::types::{Color, Point, Rect};

/// Affected region: x, y, width, height
pub type Region = (u32, u32, u32, u32);

impl Canvas {
    /// Fill an axis-aligned rectangle, both corners inclusive
    pub fn fill_rect(&mut self, rect: Rect, color: Color) -> Option<Region> {
        debug!("Canvas::fill_rect: {:?} color={:?}", rect, color);

        let (x_min, y_min, x_max, y_max) = self.clip(rect)?;
        for py in y_min..y_max {
            for px in x_min..x_max {
                self.set_pixel(px, py, color);
            }
        }
        Some((x_min, y_min, x_max - x_min, y_max - y_min))
    }

    /// Fill the ellipse inscribed in an inclusive bounding box
    ///
    /// A pixel is painted when its center falls inside the ellipse.
    pub fn fill_ellipse(&mut self, bounds: Rect, color: Color) -> Option<Region> {
        debug!("Canvas::fill_ellipse: {:?} color={:?}", bounds, color);

        if bounds.x1 < bounds.x0 || bounds.y1 < bounds.y0 {
            debug!("  -> skipped: inverted bounds");
            return None;
        }

        let radius_x = bounds.width() as f32 / 2.0;
        let radius_y = bounds.height() as f32 / 2.0;
        let center_x = bounds.x0 as f32 + radius_x;
        let center_y = bounds.y0 as f32 + radius_y;

        let (x_min, y_min, x_max, y_max) = self.clip(bounds)?;
        for py in y_min..y_max {
            for px in x_min..x_max {
                let nx = ((px as f32 + 0.5) - center_x) / radius_x;
                let ny = ((py as f32 + 0.5) - center_y) / radius_y;
                if nx * nx + ny * ny <= 1.0 {
                    self.set_pixel(px, py, color);
                }
            }
        }
        Some((x_min, y_min, x_max - x_min, y_max - y_min))
    }

    /// Fill a closed polygon (even-odd rule on pixel centers) and stroke its outline
    pub fn fill_polygon(&mut self, points: &[Point], color: Color) -> Option<Region> {
        debug!("Canvas::fill_polygon: {:?} color={:?}", points, color);

        let first = points.first()?;
        let bounds = points.iter().fold(
            Rect::new(first.x, first.y, first.x, first.y),
            |acc, p| Rect::new(acc.x0.min(p.x), acc.y0.min(p.y), acc.x1.max(p.x), acc.y1.max(p.y)),
        );
        let (x_min, y_min, x_max, y_max) = self.clip(bounds)?;

        for py in y_min..y_max {
            for px in x_min..x_max {
                if contains(points, px as f32 + 0.5, py as f32 + 0.5) {
                    self.set_pixel(px, py, color);
                }
            }
        }

        for (i, &start) in points.iter().enumerate() {
            let end = points[(i + 1) % points.len()];
            self.draw_line(start, end, color);
        }

        Some((x_min, y_min, x_max - x_min, y_max - y_min))
    }

    /// Draw a 1-pixel line, both endpoints inclusive (Bresenham)
    pub fn draw_line(&mut self, start: Point, end: Point, color: Color) -> Option<Region> {
        debug!("Canvas::draw_line: {:?} -> {:?} color={:?}", start, end, color);

        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        let step_x = if start.x < end.x { 1 } else { -1 };
        let step_y = if start.y < end.y { 1 } else { -1 };

        let mut x = start.x;
        let mut y = start.y;
        let mut err = dx + dy;
        loop {
            self.put(x, y, color);
            if x == end.x && y == end.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += step_x;
            }
            if e2 <= dx {
                err += dx;
                y += step_y;
            }
        }

        let bounds = Rect::new(
            start.x.min(end.x),
            start.y.min(end.y),
            start.x.max(end.x),
            start.y.max(end.y),
        );
        let (x_min, y_min, x_max, y_max) = self.clip(bounds)?;
        Some((x_min, y_min, x_max - x_min, y_max - y_min))
    }

    /// Clamp an inclusive box to the canvas, returning exclusive max bounds
    fn clip(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let size = self.size() as i64;
        let x_min = (rect.x0 as i64).clamp(0, size) as u32;
        let y_min = (rect.y0 as i64).clamp(0, size) as u32;
        let x_max = (rect.x1 as i64 + 1).clamp(0, size) as u32;
        let y_max = (rect.y1 as i64 + 1).clamp(0, size) as u32;

        // Completely outside or inverted
        if x_min >= x_max || y_min >= y_max {
            return None;
        }
        Some((x_min, y_min, x_max, y_max))
    }
}

/// Even-odd point-in-polygon test
fn contains(points: &[Point], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = (points[i].x as f32, points[i].y as f32);
        let (xj, yj) = (points[j].x as f32, points[j].y as f32);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
