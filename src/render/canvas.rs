//! Canvas: a fixed-size RGBA pixel grid plus the shape primitives that
//! mutate it.
//!
//! All primitives overwrite destination pixels outright (alpha included)
//! and silently clip anything outside the canvas bounds. The `_blend`
//! variants composite instead, for soft glows built from concentric shapes
//! with decreasing alpha.

use crate::types::Colour;

/// A mutable grid of colours, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Canvas {
    /// Create a canvas with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width * height) as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the pixel at (x, y), or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Flat row-major pixel slice.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 4);
        for colour in &self.pixels {
            buffer.extend_from_slice(&colour.to_rgba());
        }
        buffer
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn set_px(&mut self, x: i32, y: i32, colour: Colour) {
        if self.in_bounds(x, y) {
            self.pixels[(y as u32 * self.width + x as u32) as usize] = colour;
        }
    }

    fn blend_px(&mut self, x: i32, y: i32, colour: Colour) {
        if self.in_bounds(x, y) {
            let i = (y as u32 * self.width + x as u32) as usize;
            self.pixels[i] = colour.over(self.pixels[i]);
        }
    }

    /// Set exactly one pixel, full overwrite.
    pub fn point(&mut self, x: i32, y: i32, colour: Colour) {
        self.set_px(x, y, colour);
    }

    /// Overwrite every pixel on the Bresenham path between the endpoints,
    /// inclusive. Endpoints are normalized first so the pixel set is the
    /// same regardless of direction.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        let ((x0, y0), (x1, y1)) = if (y0, x0) <= (y1, x1) {
            ((x0, y0), (x1, y1))
        } else {
            ((x1, y1), (x0, y0))
        };

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_px(x, y, colour);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = err * 2;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Overwrite the inclusive axis-aligned block between the two corners,
    /// given in any order.
    pub fn rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        self.fill_rect(x0, y0, x1, y1, colour, false);
    }

    /// Like [`Canvas::rect`] but alpha-composited instead of overwritten.
    pub fn rect_blend(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        self.fill_rect(x0, y0, x1, y1, colour, true);
    }

    fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour, blend: bool) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        for y in y0..=y1 {
            for x in x0..=x1 {
                if blend {
                    self.blend_px(x, y, colour);
                } else {
                    self.set_px(x, y, colour);
                }
            }
        }
    }

    /// Fill the closed polygon given by `vertices` (three or more), scanline
    /// even-odd rule, then trace the outline so every edge pixel is
    /// included.
    pub fn polygon(&mut self, vertices: &[(i32, i32)], colour: Colour) {
        if vertices.len() < 3 {
            return;
        }

        let y_min = vertices.iter().map(|v| v.1).min().unwrap_or(0);
        let y_max = vertices.iter().map(|v| v.1).max().unwrap_or(0);

        for y in y_min..=y_max {
            let mut crossings: Vec<f64> = Vec::new();
            for i in 0..vertices.len() {
                let (xa, ya) = vertices[i];
                let (xb, yb) = vertices[(i + 1) % vertices.len()];
                if ya == yb {
                    continue;
                }
                // Half-open span [min, max) so shared vertices count once.
                let (lo, hi) = if ya < yb { (ya, yb) } else { (yb, ya) };
                if y >= lo && y < hi {
                    let t = f64::from(y - ya) / f64::from(yb - ya);
                    crossings.push(f64::from(xa) + t * f64::from(xb - xa));
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap());
            for pair in crossings.chunks_exact(2) {
                let start = pair[0].round() as i32;
                let end = pair[1].round() as i32;
                for x in start..=end {
                    self.set_px(x, y, colour);
                }
            }
        }

        // Outline pass covers horizontal edges and rounding gaps.
        for i in 0..vertices.len() {
            let (xa, ya) = vertices[i];
            let (xb, yb) = vertices[(i + 1) % vertices.len()];
            self.line(xa, ya, xb, yb, colour);
        }
    }

    /// Fill the ellipse inscribed in the inclusive bounding box between the
    /// two corners.
    pub fn ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        self.fill_ellipse(x0, y0, x1, y1, colour, false);
    }

    /// Like [`Canvas::ellipse`] but alpha-composited instead of overwritten.
    pub fn ellipse_blend(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        self.fill_ellipse(x0, y0, x1, y1, colour, true);
    }

    fn fill_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour, blend: bool) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        let cx = f64::from(x0 + x1) / 2.0;
        let cy = f64::from(y0 + y1) / 2.0;
        // Half a pixel of slack keeps the extreme rows and columns of the
        // bounding box on the ellipse.
        let rx = f64::from(x1 - x0) / 2.0 + 0.5;
        let ry = f64::from(y1 - y0) / 2.0 + 0.5;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = (f64::from(x) - cx) / rx;
                let dy = (f64::from(y) - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    if blend {
                        self.blend_px(x, y, colour);
                    } else {
                        self.set_px(x, y, colour);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Colour = Colour::rgb(255, 0, 0);
    const BLUE: Colour = Colour::rgb(0, 0, 255);

    #[test]
    fn test_new_fills_every_pixel() {
        let canvas = Canvas::new(4, 3, RED);
        assert_eq!(canvas.size(), (4, 3));
        assert!(canvas.pixels().iter().all(|&c| c == RED));
    }

    #[test]
    fn test_point_overwrites_alpha() {
        let mut canvas = Canvas::new(2, 2, Colour::rgb(9, 9, 9));
        let ghost = Colour::new(1, 2, 3, 0);
        canvas.point(1, 1, ghost);
        // Full overwrite: destination alpha is replaced, not composited.
        assert_eq!(canvas.get(1, 1), Some(ghost));
    }

    #[test]
    fn test_point_out_of_bounds_is_noop() {
        let mut canvas = Canvas::new(2, 2, Colour::TRANSPARENT);
        canvas.point(-1, 0, RED);
        canvas.point(0, 5, RED);
        assert!(canvas.pixels().iter().all(|c| c.is_transparent()));
    }

    #[test]
    fn test_line_horizontal() {
        let mut canvas = Canvas::new(5, 3, Colour::TRANSPARENT);
        canvas.line(0, 1, 4, 1, RED);
        for x in 0..5 {
            assert_eq!(canvas.get(x, 1), Some(RED));
        }
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_line_symmetric_for_swapped_endpoints() {
        let mut forward = Canvas::new(10, 10, Colour::TRANSPARENT);
        let mut backward = Canvas::new(10, 10, Colour::TRANSPARENT);
        forward.line(1, 2, 8, 7, RED);
        backward.line(8, 7, 1, 2, RED);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_line_clips_silently() {
        let mut canvas = Canvas::new(4, 4, Colour::TRANSPARENT);
        canvas.line(-3, 2, 7, 2, RED);
        for x in 0..4 {
            assert_eq!(canvas.get(x, 2), Some(RED));
        }
    }

    #[test]
    fn test_rect_corners_any_order() {
        let mut a = Canvas::new(6, 6, Colour::TRANSPARENT);
        let mut b = Canvas::new(6, 6, Colour::TRANSPARENT);
        a.rect(1, 1, 4, 3, RED);
        b.rect(4, 3, 1, 1, RED);
        assert_eq!(a, b);
        // Inclusive block.
        assert_eq!(a.get(1, 1), Some(RED));
        assert_eq!(a.get(4, 3), Some(RED));
        assert_eq!(a.get(5, 3), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_rect_partial_clip() {
        let mut canvas = Canvas::new(4, 4, Colour::TRANSPARENT);
        canvas.rect(2, 2, 9, 9, RED);
        assert_eq!(canvas.get(2, 2), Some(RED));
        assert_eq!(canvas.get(3, 3), Some(RED));
        assert_eq!(canvas.get(1, 1), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_overlapping_rects_later_wins() {
        let mut canvas = Canvas::new(8, 8, Colour::TRANSPARENT);
        canvas.rect(0, 0, 5, 5, RED);
        canvas.rect(3, 3, 7, 7, BLUE);
        // Every pixel of the intersection is the later colour.
        for y in 3..=5 {
            for x in 3..=5 {
                assert_eq!(canvas.get(x, y), Some(BLUE));
            }
        }
        assert_eq!(canvas.get(0, 0), Some(RED));
    }

    #[test]
    fn test_rect_blend_formula() {
        let mut canvas = Canvas::new(2, 2, Colour::new(0, 0, 0, 255));
        canvas.rect_blend(0, 0, 1, 1, Colour::new(255, 255, 255, 128));
        let c = canvas.get(0, 0).unwrap();
        assert_eq!(c, Colour::new(128, 128, 128, 255));
    }

    #[test]
    fn test_polygon_triangle_fills_interior() {
        let mut canvas = Canvas::new(10, 10, Colour::TRANSPARENT);
        canvas.polygon(&[(1, 1), (8, 1), (4, 8)], RED);
        // Interior
        assert_eq!(canvas.get(4, 3), Some(RED));
        // Vertices are part of the edge set.
        assert_eq!(canvas.get(1, 1), Some(RED));
        assert_eq!(canvas.get(8, 1), Some(RED));
        assert_eq!(canvas.get(4, 8), Some(RED));
        // Outside
        assert_eq!(canvas.get(0, 9), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(9, 9), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_polygon_quad_covers_rect() {
        let mut poly = Canvas::new(8, 8, Colour::TRANSPARENT);
        let mut rect = Canvas::new(8, 8, Colour::TRANSPARENT);
        poly.polygon(&[(1, 2), (6, 2), (6, 5), (1, 5)], RED);
        rect.rect(1, 2, 6, 5, RED);
        assert_eq!(poly, rect);
    }

    #[test]
    fn test_polygon_too_few_vertices_is_noop() {
        let mut canvas = Canvas::new(4, 4, Colour::TRANSPARENT);
        canvas.polygon(&[(0, 0), (3, 3)], RED);
        assert!(canvas.pixels().iter().all(|c| c.is_transparent()));
    }

    #[test]
    fn test_ellipse_inscribed() {
        let mut canvas = Canvas::new(16, 16, Colour::TRANSPARENT);
        canvas.ellipse(2, 2, 13, 13, RED);
        // Centre and axis extremes are inside.
        assert_eq!(canvas.get(7, 7), Some(RED));
        assert_eq!(canvas.get(2, 7), Some(RED));
        assert_eq!(canvas.get(13, 8), Some(RED));
        assert_eq!(canvas.get(7, 2), Some(RED));
        // Bounding-box corners are not.
        assert_eq!(canvas.get(2, 2), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(13, 13), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_ellipse_blend_composites() {
        let mut canvas = Canvas::new(8, 8, Colour::new(0, 0, 0, 255));
        canvas.ellipse_blend(0, 0, 7, 7, Colour::new(255, 255, 255, 128));
        assert_eq!(canvas.get(3, 3), Some(Colour::new(128, 128, 128, 255)));
        // Corner outside the ellipse keeps the base.
        assert_eq!(canvas.get(0, 0), Some(Colour::new(0, 0, 0, 255)));
    }

    #[test]
    fn test_fully_out_of_bounds_shapes_do_not_panic() {
        let mut canvas = Canvas::new(4, 4, Colour::TRANSPARENT);
        canvas.rect(10, 10, 20, 20, RED);
        canvas.ellipse(-9, -9, -2, -2, RED);
        canvas.polygon(&[(-5, -5), (-1, -8), (-3, -2)], RED);
        canvas.line(-4, -4, -1, -1, RED);
        assert!(canvas.pixels().iter().all(|c| c.is_transparent()));
    }
}
