//! A CPU-side pixel buffer implementing the draw-call boundary.

use flatshade_core::math::color::Color4;
use flatshade_core::render::{Fill, Target};

use crate::Dims;

/// A row-major `0xAA_RR_GG_BB` pixel buffer.
///
/// Implements [`Target`], rasterizing the flat screen-space polygons the
/// pipeline emits. All drawing is clipped to the buffer bounds; coordinates
/// may lie anywhere in the f32 range.
#[derive(Clone, Debug)]
pub struct Framebuf {
    dims: Dims,
    data: Vec<u32>,
}

impl Framebuf {
    /// Creates a buffer of the given dimensions, cleared to black.
    pub fn new(dims: Dims) -> Self {
        let (w, h) = dims;
        Self { dims, data: vec![0; (w * h) as usize] }
    }

    /// Fills the whole buffer with `color`.
    pub fn clear(&mut self, color: Color4) {
        self.data.fill(color.to_argb_u32());
    }

    /// Returns the pixel data, rows in top-down order.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    fn plot(&mut self, x: i32, y: i32, argb: u32) {
        let (w, h) = self.dims;
        if (0..w as i32).contains(&x) && (0..h as i32).contains(&y) {
            self.data[(y as u32 * w + x as u32) as usize] = argb;
        }
    }

    /// Draws a line between two points with Bresenham's algorithm.
    fn line(&mut self, from: (f32, f32), to: (f32, f32), argb: u32) {
        let (mut x, mut y) = (from.0.round() as i32, from.1.round() as i32);
        let (x1, y1) = (to.0.round() as i32, to.1.round() as i32);

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y, argb);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fills the polygon interior scanline by scanline, using the
    /// even-odd rule. Sampling is at pixel centers (y + 0.5).
    fn fill_scanlines(&mut self, pts: &[(f32, f32)], argb: u32) {
        let (w, h) = self.dims;
        let y_min = pts.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let y_max = pts.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        let y0 = y_min.floor().max(0.0) as i32;
        let y1 = y_max.ceil().min(h as f32 - 1.0) as i32;

        let mut xs = Vec::with_capacity(pts.len());
        for y in y0..=y1 {
            let scan = y as f32 + 0.5;
            xs.clear();
            for i in 0..pts.len() {
                let (ax, ay) = pts[i];
                let (bx, by) = pts[(i + 1) % pts.len()];
                // crossing test; edges touching the scanline from one
                // side only are counted once
                if (ay <= scan) != (by <= scan) {
                    let t = (scan - ay) / (by - ay);
                    xs.push(ax + t * (bx - ax));
                }
            }
            xs.sort_by(f32::total_cmp);
            for pair in xs.chunks_exact(2) {
                let xa = pair[0].round().max(0.0) as i32;
                let xb = pair[1].round().min(w as f32 - 1.0) as i32;
                for x in xa..=xb {
                    self.plot(x, y, argb);
                }
            }
        }
    }
}

impl Target for Framebuf {
    fn dims(&self) -> Dims {
        self.dims
    }

    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color4, fill: Fill) {
        if points.len() < 3 {
            return;
        }
        let argb = color.to_argb_u32();
        match fill {
            Fill::Solid => self.fill_scanlines(points, argb),
            Fill::Outline => {
                for i in 0..points.len() {
                    self.line(points[i], points[(i + 1) % points.len()], argb);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use flatshade_core::math::color::{gray, rgba};

    use super::*;

    const WHITE: u32 = 0xFF_FF_FF_FF;

    fn buf() -> Framebuf {
        Framebuf::new((8, 8))
    }

    fn pixel(fb: &Framebuf, x: u32, y: u32) -> u32 {
        fb.data()[(y * fb.dims().0 + x) as usize]
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut fb = buf();
        fb.clear(rgba(0x12, 0x34, 0x56, 0xFF));
        assert!(fb.data().iter().all(|&px| px == 0xFF_12_34_56));
    }

    #[test]
    fn solid_fill_covers_interior() {
        let mut fb = buf();
        let square = [(1.0, 1.0), (6.0, 1.0), (6.0, 6.0), (1.0, 6.0)];
        fb.fill_polygon(&square, gray(0xFF), Fill::Solid);

        assert_eq!(pixel(&fb, 3, 3), WHITE);
        assert_eq!(pixel(&fb, 0, 3), 0);
        assert_eq!(pixel(&fb, 3, 0), 0);
        assert_eq!(pixel(&fb, 7, 7), 0);
    }

    #[test]
    fn fill_is_clipped_to_bounds() {
        let mut fb = buf();
        let huge = [(-100.0, -100.0), (100.0, -100.0), (0.0, 100.0)];
        fb.fill_polygon(&huge, gray(0xFF), Fill::Solid);
        assert_eq!(pixel(&fb, 4, 4), WHITE);
    }

    #[test]
    fn outline_leaves_interior_untouched() {
        let mut fb = buf();
        let square = [(0.0, 0.0), (7.0, 0.0), (7.0, 7.0), (0.0, 7.0)];
        fb.fill_polygon(&square, gray(0xFF), Fill::Outline);

        assert_eq!(pixel(&fb, 0, 0), WHITE);
        assert_eq!(pixel(&fb, 7, 3), WHITE);
        assert_eq!(pixel(&fb, 3, 3), 0);
    }

    #[test]
    fn degenerate_polygon_is_ignored() {
        let mut fb = buf();
        fb.fill_polygon(
            &[(1.0, 1.0), (5.0, 5.0)],
            gray(0xFF),
            Fill::Solid,
        );
        assert!(fb.data().iter().all(|&px| px == 0));
    }
}
