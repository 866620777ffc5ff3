//! A grid of spinning cubes, each with its own precomputed rotation cycle.

use std::ops::ControlFlow::Continue;

use fs_core::prelude::*;
use fs_front::{minifb::Window, Frame};

/// Precomputes one full rotation cycle: on step `i` the mesh is rotated by
/// `i` times the per-step angles, then passed through `base`.
fn spin(base: &Matrix4, deg_steps: (f32, f32, f32), steps: usize) -> Vec<Matrix4> {
    let (dx, dy, dz) = deg_steps;
    (0..steps)
        .map(|i| {
            let i = i as f32;
            let rot = rotate_x(degs(dx * i))
                * rotate_y(degs(dy * i))
                * rotate_z(degs(dz * i));
            *base * rot
        })
        .collect()
}

fn main() {
    let dims = (600, 600);

    // Pixel-space scaling with a 16:9 aspect correction baked into every
    // transform, so the cubes can be drawn with the plain offset projection.
    let base = translate(0.0, 0.0, -20.0)
        * scale(20.0, 20.0, 1.0)
        * viewport_aspect(16.0, 9.0);

    let mut meshes: Vec<Mesh> = Vec::new();
    for y in (100..500).step_by(50) {
        for x in (100..500).step_by(50) {
            let deg_steps = (
                (x - y + 20) as f32 / 50.0,
                (y - x + 40) as f32 / 50.0,
                3.0,
            );
            let mesh = Mesh::new(
                (x, y),
                spin(&base, deg_steps, 360),
                Cube.build(),
            )
            .expect("cube grid is nonempty");
            meshes.push(mesh);
        }
    }

    let mut win = Window::builder()
        .title("flatshade//cubes")
        .dims(dims)
        .build()
        .unwrap();

    win.run(|frame: &mut Frame<_>| {
        for mesh in &mut meshes {
            *frame.stats += mesh.render_frame(frame.buf);
        }
        Continue(())
    });
}
