//! Turning 3D polygons into 2D draw calls.
//!
//! This module is the rendering pipeline of `flatshade`. A [`Mesh`] owns a
//! static set of polygons and a precomputed, cyclically reused sequence of
//! per-frame transforms; every [`update`][Mesh::update] call selects the
//! frame's transform, transforms the base polygons, lights and depth-sorts
//! the results, projects them to screen space, and emits one filled-polygon
//! draw call per face to an external [`Target`].

use crate::geom::Polygon;
use crate::math::color::gray;
use crate::math::mat::Matrix4;
use crate::math::{Error, Result};

pub mod light;
pub mod project;
pub mod stats;
pub mod target;

pub use light::Light;
pub use project::Projection;
pub use stats::Stats;
pub use target::{Fill, Target};

//
// Types
//

/// Anything that can advance its animation state and draw one frame.
///
/// This is the single explicit contract shared by all drawable effects;
/// a caller's main loop needs nothing else.
pub trait Render<T: Target> {
    /// Draws the current frame onto `target` and advances to the next,
    /// returning statistics of the work done.
    fn render_frame(&mut self, target: &mut T) -> Stats;
}

/// A static polygon set animated by a precomputed transform sequence.
///
/// The polygon set and the transform list are built once at construction,
/// possibly at considerable cost, and never mutated afterwards; the only
/// per-frame state is the frame counter. The number of transforms need not
/// match the number of frames rendered: transforms are reused cyclically.
///
/// The draw surface is externally owned and may be shared by any number of
/// meshes; it is passed to [`update`][Self::update] anew each frame.
/// Where meshes overlap, later updates overpaint earlier ones; the pipeline
/// performs no compositing.
#[derive(Clone, Debug)]
pub struct Mesh {
    origin: (i32, i32),
    transforms: Vec<Matrix4>,
    polys: Vec<Polygon>,
    projection: Projection,
    light: Light,
    frame: usize,
}

//
// Inherent impls
//

impl Mesh {
    /// Creates a mesh drawing at the screen-space `origin`, animated by
    /// cycling through `transforms`, one per frame.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if `transforms` or `polys`
    /// is empty.
    pub fn new(
        origin: (i32, i32),
        transforms: Vec<Matrix4>,
        polys: Vec<Polygon>,
    ) -> Result<Self> {
        for len in [transforms.len(), polys.len()] {
            if len == 0 {
                return Err(Error::DimensionMismatch {
                    expected: 1,
                    actual: 0,
                });
            }
        }
        Ok(Self {
            origin,
            transforms,
            polys,
            projection: Projection::default(),
            light: Light::default(),
            frame: 0,
        })
    }

    /// Sets the projection used to map transformed vertices to the screen.
    #[must_use]
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Sets the light source shading the mesh's faces.
    #[must_use]
    pub fn with_light(mut self, light: Light) -> Self {
        self.light = light;
        self
    }

    /// Returns the transform that [`update`][Self::update] applies on
    /// frame `frame`. Transforms are reused cyclically.
    pub fn transform_for_frame(&self, frame: usize) -> &Matrix4 {
        &self.transforms[frame % self.transforms.len()]
    }

    /// Returns the number of frames rendered so far.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Renders the current frame of `self` onto `target` and advances the
    /// frame counter.
    ///
    /// All pipeline stages run to completion before returning: select the
    /// frame's transform, transform every base polygon (purely; the base
    /// set is never touched), shade each face by its angle to the light,
    /// sort back to front, project to screen space, and emit one draw call
    /// per face. Faces that reach the perspective singularity are culled
    /// rather than projected to unbounded coordinates.
    pub fn update(&mut self, target: &mut impl Target) -> Stats {
        let mut stats = Stats::start();
        stats.frames += 1.0;
        stats.calls += 1.0;
        stats.polys.i += self.polys.len();

        let tf = self.transform_for_frame(self.frame);

        let mut faces: Vec<(Polygon, u8)> = self
            .polys
            .iter()
            .map(|poly| {
                let poly = poly.transform(tf);
                let lum = self.light.intensity(&poly);
                (poly, lum)
            })
            .collect();

        // Painter's algorithm: draw far faces first. A stable sort keeps
        // equal-depth faces in construction order.
        faces.sort_by(|(a, _), (b, _)| a.cmp_depth(b));

        let origin = (self.origin.0 as f32, self.origin.1 as f32);
        for (poly, lum) in &faces {
            let Ok(points) =
                self.projection.project(poly, target.dims(), origin)
            else {
                // At the viewer plane; skip instead of dividing by zero
                continue;
            };
            target.fill_polygon(&points, gray(*lum), Fill::Solid);
            stats.polys.o += 1;
        }

        self.frame += 1;
        stats.finish()
    }
}

impl<T: Target> Render<T> for Mesh {
    fn render_frame(&mut self, target: &mut T) -> Stats {
        self.update(target)
    }
}
