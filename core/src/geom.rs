//! Polygonal geometry.

pub mod polygon;
pub mod solids;

pub use polygon::Polygon;
