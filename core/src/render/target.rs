//! Output of the rendering pipeline.

use crate::math::color::Color4;

/// Whether to fill a polygon's interior or draw its outline only.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Fill {
    /// Fill the interior.
    #[default]
    Solid,
    /// Draw the edges only.
    Outline,
}

/// A 2D drawing surface accepting polygon draw calls.
///
/// This is the core's only outward boundary. The pipeline resolves all
/// transforms, lighting, depth ordering, and projection itself and hands
/// the target nothing but flat, colored screen-space polygons.
pub trait Target {
    /// Returns the (width, height) of `self` in pixels.
    fn dims(&self) -> (u32, u32);

    /// Draws the polygon with the given screen-space corner points,
    /// filled or outlined with `color`.
    ///
    /// Points outside the surface are expected to be clipped by the
    /// implementation.
    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color4, fill: Fill);
}
