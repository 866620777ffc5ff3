//! Frontends for creating simple applications with `flatshade`.

use std::time::Duration;

use flatshade_core::render::Stats;

pub mod fb;
pub mod minifb;

pub use fb::Framebuf;

/// The width and height of a window or buffer, in pixels.
pub type Dims = (u32, u32);

/// Common framebuffer dimensions.
pub mod dims {
    use super::Dims;

    pub const VGA_640_480: Dims = (640, 480);
    pub const SVGA_800_600: Dims = (800, 600);
}

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Framebuffer in which to draw.
    pub buf: &'a mut Framebuf,
    /// Reference to the window object.
    pub win: &'a mut Win,
    /// Accumulated rendering statistics, printed when the loop exits.
    pub stats: &'a mut Stats,
}
