//! Face lighting.

use core::f32::consts::PI;

use crate::geom::Polygon;
use crate::math::vec::{pt3, Vector4};

/// A point light source shading faces by incidence angle.
///
/// The shade of a face is the angle between its normal and the vector from
/// the light position to the face centroid, mapped linearly from [0, π]
/// onto a grayscale intensity: angle 0 is darkest (0), angle π brightest
/// (255). A face lit head-on thus has its normal pointing opposite the
/// incoming light.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    /// Position of the light source, as a point (h = 1).
    pub pos: Vector4,
}

impl Light {
    /// Creates a light source at `pos`.
    pub fn new(pos: Vector4) -> Self {
        Self { pos }
    }

    /// Returns the grayscale intensity of `face` under `self`.
    ///
    /// Degenerate faces, whose normal or centroid direction vanishes,
    /// shade to 0.
    pub fn intensity(&self, face: &Polygon) -> u8 {
        let normal = face.normal_fast();
        let to_face = face.centroid() - self.pos;
        match normal.angle_to(&to_face) {
            Ok(angle) => {
                let rads = angle.to_rads().clamp(0.0, PI);
                (rads * 255.0 / PI) as u8
            }
            Err(_) => 0,
        }
    }
}

impl Default for Light {
    /// A light above the scene, at (0, 0, 10).
    fn default() -> Self {
        Self::new(pt3(0.0, 0.0, 10.0))
    }
}
