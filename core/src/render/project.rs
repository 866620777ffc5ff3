//! Mapping resolved 3D vertices to screen coordinates.

use crate::geom::Polygon;
use crate::math::{Error, Result};

/// Denominators smaller than this in magnitude put a vertex on the viewer
/// plane, where the perspective divide is singular.
const DIV_EPS: f32 = 1e-6;

/// How a mesh maps transformed vertices to screen space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Projection {
    /// Plain 2D placement: `screen = origin + (x, y)`, z discarded.
    ///
    /// Appropriate when the transform sequence already scales the mesh to
    /// pixel dimensions, as the classic precomputed-matrix effects do.
    Offset,
    /// Perspective projection scaling inversely with viewer distance:
    ///
    /// `screen_x = x · fov / (viewer_distance + z) + width / 2`
    /// `screen_y = −y · fov / (viewer_distance + z) + height / 2`
    Perspective { fov: f32, viewer_distance: f32 },
}

impl Projection {
    /// Projects every vertex of `poly` to screen coordinates.
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] if any vertex of a perspective
    /// projection lies within epsilon of the viewer plane
    /// (`viewer_distance + z ≈ 0`). The source material divides unguarded
    /// and produces unbounded coordinates; failing here lets the pipeline
    /// cull the face instead, a deliberate deviation.
    pub fn project(
        &self,
        poly: &Polygon,
        dims: (u32, u32),
        origin: (f32, f32),
    ) -> Result<Vec<(f32, f32)>> {
        match *self {
            Self::Offset => Ok(poly.projected(origin)),
            Self::Perspective { fov, viewer_distance } => {
                let (w, h) = (dims.0 as f32, dims.1 as f32);
                poly.verts()
                    .iter()
                    .map(|v| {
                        let denom = viewer_distance + v.z;
                        if denom.abs() < DIV_EPS {
                            return Err(Error::DivisionByZero);
                        }
                        let factor = fov / denom;
                        Ok((
                            v.x * factor + w / 2.0,
                            -v.y * factor + h / 2.0,
                        ))
                    })
                    .collect()
            }
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::Offset
    }
}

#[cfg(test)]
mod tests {
    use crate::math::pt3;

    use super::*;

    fn poly_at(x: f32, y: f32, z: f32) -> Polygon {
        Polygon::new([
            pt3(x, y, z),
            pt3(x + 1.0, y, z),
            pt3(x, y + 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn offset_shifts_by_origin() {
        let pts = Projection::Offset
            .project(&poly_at(1.0, 2.0, -7.0), (600, 600), (10.0, 20.0))
            .unwrap();
        assert_eq!(pts[0], (11.0, 22.0));
    }

    #[test]
    fn perspective_centers_the_origin() {
        let proj = Projection::Perspective { fov: 2.0, viewer_distance: 256.0 };
        let pts = proj
            .project(&poly_at(0.0, 0.0, 0.0), (600, 600), (0.0, 0.0))
            .unwrap();
        assert_eq!(pts[0], (300.0, 300.0));
    }

    #[test]
    fn perspective_flips_y() {
        let proj = Projection::Perspective { fov: 256.0, viewer_distance: 256.0 };
        let pts = proj
            .project(&poly_at(0.0, 10.0, 0.0), (600, 600), (0.0, 0.0))
            .unwrap();
        // y up in world space is up on screen, i.e. a smaller row index
        assert!(pts[0].1 < 300.0);
    }

    #[test]
    fn perspective_fails_at_viewer_plane() {
        let proj = Projection::Perspective { fov: 2.0, viewer_distance: 5.0 };
        assert_eq!(
            proj.project(&poly_at(0.0, 0.0, -5.0), (600, 600), (0.0, 0.0)),
            Err(Error::DivisionByZero)
        );
    }
}
