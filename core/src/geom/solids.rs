//! Static assembly of simple solids.
//!
//! Each solid is built once, before any animation, by placing copies of a
//! unit face with [`Polygon::transform_in_place`], the only mutating
//! polygon operation, never used after assembly.

use crate::geom::Polygon;
use crate::math::angle::degs;
use crate::math::mat::{rotate_x, rotate_y, translate};
use crate::math::vec::{pt3, Vector4};

//
// Types
//

/// A cube of half-extent 1, centered on the origin, with six quad faces.
#[derive(Copy, Clone, Debug, Default)]
pub struct Cube;

/// A four-sided pyramid of triangle faces, without a base, centered on
/// the origin.
#[derive(Copy, Clone, Debug, Default)]
pub struct Pyramid;

/// A single triangle face in the xy plane.
#[derive(Copy, Clone, Debug, Default)]
pub struct Triangle;

//
// Free fns
//

/// Returns the corners of a square of half-extent 1 in the xy plane,
/// in counter-clockwise order viewed from +z.
pub fn unit_square() -> [Vector4; 4] {
    [
        pt3(-1.0, -1.0, 0.0),
        pt3(1.0, -1.0, 0.0),
        pt3(1.0, 1.0, 0.0),
        pt3(-1.0, 1.0, 0.0),
    ]
}

/// Returns the corners of a triangle in the xy plane,
/// in counter-clockwise order viewed from +z.
pub fn unit_triangle() -> [Vector4; 3] {
    [
        pt3(-1.0, -1.0, 0.0),
        pt3(1.0, -1.0, 0.0),
        pt3(0.0, 1.0, 0.0),
    ]
}

fn face<const N: usize>(verts: [Vector4; N]) -> Polygon {
    Polygon::new(verts).expect("a face has at least three vertices")
}

/// Returns a copy of `poly` rotated about the x and y axes by the given
/// angles in degrees and then shifted by `(dx, dy, dz)`.
fn placed(poly: &Polygon, rot_x: f32, rot_y: f32, shift: [f32; 3]) -> Polygon {
    let [dx, dy, dz] = shift;
    let mut poly = poly.clone();
    if rot_x != 0.0 {
        poly.transform_in_place(&rotate_x(degs(rot_x)));
    }
    if rot_y != 0.0 {
        poly.transform_in_place(&rotate_y(degs(rot_y)));
    }
    poly.transform_in_place(&translate(dx, dy, dz));
    poly
}

//
// Inherent impls
//

impl Cube {
    /// Builds the six faces of `self`.
    pub fn build(self) -> Vec<Polygon> {
        let square = face(unit_square());
        vec![
            // left, right
            placed(&square, 0.0, 90.0, [-1.0, 0.0, 0.0]),
            placed(&square, 0.0, 90.0, [1.0, 0.0, 0.0]),
            // bottom, top
            placed(&square, 90.0, 0.0, [0.0, -1.0, 0.0]),
            placed(&square, 90.0, 0.0, [0.0, 1.0, 0.0]),
            // front, back
            placed(&square, 0.0, 0.0, [0.0, 0.0, -1.0]),
            placed(&square, 0.0, 0.0, [0.0, 0.0, 1.0]),
        ]
    }
}

impl Pyramid {
    /// Builds the four slanted faces of `self`.
    pub fn build(self) -> Vec<Polygon> {
        let tri = face(unit_triangle());
        vec![
            // front, back
            placed(&tri, -45.0, 0.0, [0.0, 0.0, 1.0]),
            placed(&tri, 45.0, 0.0, [0.0, 0.0, -1.0]),
            // left, right
            placed(&tri, -45.0, -90.0, [1.0, 0.0, 0.0]),
            placed(&tri, -45.0, 90.0, [-1.0, 0.0, 0.0]),
        ]
    }
}

impl Triangle {
    /// Builds the single face of `self`.
    pub fn build(self) -> Vec<Polygon> {
        vec![face(unit_triangle())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_six_quads() {
        let faces = Cube.build();
        assert_eq!(faces.len(), 6);
        assert!(faces.iter().all(|f| f.verts().len() == 4));
    }

    #[test]
    fn cube_faces_are_centered_on_axes() {
        let centroids: Vec<_> =
            Cube.build().iter().map(|f| f.centroid()).collect();
        for c in &centroids {
            // each face centroid sits one unit along exactly one axis
            assert_approx_eq!(c.len(), 1.0, eps = 1e-5);
        }
        let mean = centroids
            .iter()
            .fold(Vector4::ZERO, |acc, &c| acc + c);
        assert_approx_eq!(mean.len(), 0.0, eps = 1e-5);
    }

    #[test]
    fn pyramid_has_four_triangles() {
        let faces = Pyramid.build();
        assert_eq!(faces.len(), 4);
        assert!(faces.iter().all(|f| f.verts().len() == 3));
    }

    #[test]
    fn solids_build_valid_polygons() {
        for poly in [Cube.build(), Pyramid.build(), Triangle.build()]
            .into_iter()
            .flatten()
        {
            assert!(poly.normal().is_ok());
        }
    }
}
