//! Flat polygon faces.

use core::cmp::Ordering;

use crate::math::approx::ApproxEq;
use crate::math::mat::Matrix4;
use crate::math::vec::{pt3, Vector4};
use crate::math::{Error, Result};

//
// Types
//

/// A flat face given by an ordered list of at least three vertices.
///
/// The vertex list is not automatically closed; the last vertex is simply
/// adjacent to the first. A polygon is an immutable value in the per-frame
/// animation path: [`transform`][Self::transform] returns a new polygon and
/// never touches the source. The single mutating operation,
/// [`transform_in_place`][Self::transform_in_place], exists for one-time
/// static-mesh assembly only.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Vector4>,
}

//
// Inherent impls
//

impl Polygon {
    /// Creates a polygon from the given vertices.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if fewer than three vertices
    /// are given.
    pub fn new<V>(verts: V) -> Result<Self>
    where
        V: IntoIterator<Item = Vector4>,
    {
        let verts: Vec<_> = verts.into_iter().collect();
        if verts.len() < 3 {
            return Err(Error::DimensionMismatch {
                expected: 3,
                actual: verts.len(),
            });
        }
        Ok(Self { verts })
    }

    /// Returns the vertices of `self`.
    pub fn verts(&self) -> &[Vector4] {
        &self.verts
    }

    /// Returns the centroid of `self`: the arithmetic mean of its vertices,
    /// as a point (h = 1).
    pub fn centroid(&self) -> Vector4 {
        let n = self.verts.len() as f32;
        let sum = self
            .verts
            .iter()
            .fold(Vector4::ZERO, |acc, &v| acc + v);
        pt3(sum.x / n, sum.y / n, sum.z / n)
    }

    /// Returns the unit normal of `self`: the normalized cross product of
    /// the two edges adjacent to the first vertex.
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] if the polygon is degenerate
    /// (the adjacent edges are parallel or zero-length).
    pub fn normal(&self) -> Result<Vector4> {
        self.normal_fast().normalize()
    }

    /// Returns the unnormalized normal of `self`.
    ///
    /// Cheaper than [`normal`][Self::normal], but the magnitude depends on
    /// the edge lengths; use only where direction alone matters.
    pub fn normal_fast(&self) -> Vector4 {
        let [a, b, c] = [self.verts[0], self.verts[1], self.verts[2]];
        (b - a).cross(&(c - a))
    }

    /// Returns the mean z coordinate of the vertices of `self`.
    ///
    /// A cheap depth-sorting proxy, not an exact distance to the viewer.
    pub fn avg_depth(&self) -> f32 {
        let sum: f32 = self.verts.iter().map(|v| v.z).sum();
        sum / self.verts.len() as f32
    }

    /// Orders polygons back to front for the painter's algorithm.
    ///
    /// The viewer is on the positive z side, so a smaller average z means a
    /// deeper (farther) polygon, drawn earlier. Ties keep their relative
    /// order under a stable sort; no further tie-break is applied.
    pub fn cmp_depth(&self, other: &Self) -> Ordering {
        self.avg_depth().total_cmp(&other.avg_depth())
    }

    /// Returns a new polygon with every vertex of `self` mapped through
    /// `m`. Never mutates `self`.
    #[must_use]
    pub fn transform(&self, m: &Matrix4) -> Self {
        Self {
            verts: self.verts.iter().map(|&v| m.mul_vec(v)).collect(),
        }
    }

    /// Maps every vertex of `self` through `m`, in place.
    ///
    /// Reserved for one-time static-mesh assembly, such as shifting a face
    /// of a cube into place before any animation; the per-frame pipeline
    /// uses [`transform`][Self::transform] exclusively.
    pub fn transform_in_place(&mut self, m: &Matrix4) {
        for v in &mut self.verts {
            *v = m.mul_vec(*v);
        }
    }

    /// Maps each vertex's (x, y) to screen coordinates offset by `origin`,
    /// discarding z. Any perspective division must already have been
    /// applied upstream.
    pub fn projected(&self, origin: (f32, f32)) -> Vec<(f32, f32)> {
        self.verts
            .iter()
            .map(|v| (origin.0 + v.x, origin.1 + v.y))
            .collect()
    }
}

impl ApproxEq for Polygon {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        self.verts.len() == other.verts.len()
            && core::iter::zip(&self.verts, &other.verts)
                .all(|(a, b)| a.approx_eq_eps(b, rel_eps))
    }
}
