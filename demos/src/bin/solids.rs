//! A cube and a pyramid orbiting under a perspective projection.

use std::ops::ControlFlow::Continue;

use fs_core::prelude::*;
use fs_front::{minifb::Window, Frame};

/// One full revolution about all three axes, pushed away from the viewer
/// plane so the perspective divide stays well-conditioned.
fn orbit(deg_steps: (f32, f32, f32), z_off: f32) -> Vec<Matrix4> {
    let (dx, dy, dz) = deg_steps;
    (0..360)
        .map(|i| {
            let i = i as f32;
            translate(0.0, 0.0, z_off)
                * rotate_x(degs(dx * i))
                * rotate_y(degs(dy * i))
                * rotate_z(degs(dz * i))
        })
        .collect()
}

fn main() {
    let dims = (600, 600);
    let projection = Projection::Perspective { fov: 256.0, viewer_distance: 2.0 };
    let light = Light::new(pt3(0.0, 0.0, 10.0));

    let mut cube = Mesh::new((0, 0), orbit((1.0, 2.0, 3.0), 4.0), Cube.build())
        .expect("transforms and faces are nonempty")
        .with_projection(projection)
        .with_light(light);

    let mut pyramid =
        Mesh::new((0, 0), orbit((3.0, 1.0, 2.0), 12.0), Pyramid.build())
            .expect("transforms and faces are nonempty")
            .with_projection(projection)
            .with_light(light);

    let mut win = Window::builder()
        .title("flatshade//solids")
        .dims(dims)
        .build()
        .unwrap();

    win.run(|frame: &mut Frame<_>| {
        *frame.stats += pyramid.render_frame(frame.buf);
        *frame.stats += cube.render_frame(frame.buf);
        Continue(())
    });
}
