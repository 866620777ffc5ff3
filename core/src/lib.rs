//! Core functionality of the `flatshade` project.
//!
//! A small software 3D renderer in the classic demoscene style: homogeneous
//! vector and matrix algebra, composable affine transforms, perspective
//! projection, back-to-front depth sorting (the painter's algorithm), and
//! simple angle-based directional lighting of flat polygon faces.
//!
//! The crate deliberately knows nothing about windows, events, or pixels.
//! Its only outward boundary is the [`render::Target`] trait, a minimal
//! filled-polygon drawing surface; the `flatshade-front` crate provides a
//! software framebuffer and window frontends implementing it.

#[macro_use]
pub mod math;

pub mod geom;
pub mod render;

pub mod prelude {
    pub use crate::geom::{
        polygon::Polygon,
        solids::{Cube, Pyramid, Triangle},
    };
    pub use crate::math::{
        angle::{degs, rads, turns, Angle},
        color::{gray, rgb, rgba, Color3, Color4},
        mat::{
            rotate_x, rotate_y, rotate_z, scale, translate, viewport_aspect,
            Matrix4,
        },
        vec::{dir3, pt3, vec4, Vector4},
        Error, Result,
    };
    pub use crate::render::{
        light::Light,
        project::Projection,
        target::{Fill, Target},
        Mesh, Render, Stats,
    };
}
