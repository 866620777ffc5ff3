//! End-to-end tests of the polygon rendering pipeline.

use flatshade_core::prelude::*;

/// A target that records every draw call instead of rasterizing.
struct Recorder {
    dims: (u32, u32),
    calls: Vec<(Vec<(f32, f32)>, Color4)>,
}

impl Recorder {
    fn new(dims: (u32, u32)) -> Self {
        Self { dims, calls: Vec::new() }
    }
}

impl Target for Recorder {
    fn dims(&self) -> (u32, u32) {
        self.dims
    }
    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color4, _: Fill) {
        self.calls.push((points.to_vec(), color));
    }
}

fn tri_at(x: f32, z: f32) -> Polygon {
    Polygon::new([
        pt3(x, 0.0, z),
        pt3(x + 1.0, 0.0, z),
        pt3(x, 1.0, z),
    ])
    .unwrap()
}

#[test]
fn transforms_are_reused_cyclically() {
    let spins: Vec<Matrix4> =
        (0..360).map(|i| rotate_z(degs(i as f32))).collect();
    let mesh = Mesh::new((0, 0), spins, vec![tri_at(0.0, 0.0)]).unwrap();

    assert_eq!(mesh.transform_for_frame(0), mesh.transform_for_frame(360));
    assert_eq!(mesh.transform_for_frame(1), mesh.transform_for_frame(721));
    assert_ne!(mesh.transform_for_frame(1), mesh.transform_for_frame(2));
}

#[test]
fn update_advances_the_frame_counter() {
    let mut mesh =
        Mesh::new((0, 0), vec![Matrix4::IDENTITY], vec![tri_at(0.0, 0.0)])
            .unwrap();
    let mut target = Recorder::new((600, 600));

    assert_eq!(mesh.frame(), 0);
    mesh.render_frame(&mut target);
    mesh.render_frame(&mut target);
    assert_eq!(mesh.frame(), 2);
}

#[test]
fn farther_faces_are_drawn_first() {
    // z = -5 lies deeper than z = -1 and must be overpainted by it
    let far = tri_at(10.0, -5.0);
    let near = tri_at(20.0, -1.0);
    let mut mesh =
        Mesh::new((0, 0), vec![Matrix4::IDENTITY], vec![near, far]).unwrap();

    let mut target = Recorder::new((600, 600));
    mesh.render_frame(&mut target);

    assert_eq!(target.calls.len(), 2);
    assert_eq!(target.calls[0].0[0], (10.0, 0.0));
    assert_eq!(target.calls[1].0[0], (20.0, 0.0));
}

#[test]
fn base_polygons_are_never_mutated() {
    let mut mesh = Mesh::new(
        (0, 0),
        vec![scale(2.0, 2.0, 2.0)],
        vec![tri_at(3.0, 0.0)],
    )
    .unwrap();

    let mut target = Recorder::new((600, 600));
    mesh.render_frame(&mut target);
    mesh.render_frame(&mut target);

    // scaling applies to the original vertices on both frames
    assert_eq!(target.calls[0].0, target.calls[1].0);
    assert_eq!(target.calls[0].0[0], (6.0, 0.0));
}

#[test]
fn perspective_centers_world_origin_on_screen() {
    let origin_tri = Polygon::new([
        pt3(0.0, 0.0, 0.0),
        pt3(1.0, 0.0, 0.0),
        pt3(0.0, 1.0, 0.0),
    ])
    .unwrap();
    let mut mesh =
        Mesh::new((0, 0), vec![Matrix4::IDENTITY], vec![origin_tri])
            .unwrap()
            .with_projection(Projection::Perspective {
                fov: 2.0,
                viewer_distance: 256.0,
            });

    let mut target = Recorder::new((600, 600));
    mesh.render_frame(&mut target);

    assert_eq!(target.calls[0].0[0], (300.0, 300.0));
}

#[test]
fn faces_at_the_viewer_plane_are_culled() {
    let mut mesh = Mesh::new(
        (0, 0),
        vec![Matrix4::IDENTITY],
        vec![tri_at(0.0, -5.0), tri_at(0.0, 0.0)],
    )
    .unwrap()
    .with_projection(Projection::Perspective {
        fov: 2.0,
        viewer_distance: 5.0,
    });

    let mut target = Recorder::new((600, 600));
    let stats = mesh.render_frame(&mut target);

    assert_eq!(target.calls.len(), 1);
    assert_eq!(stats.polys.i, 2);
    assert_eq!(stats.polys.o, 1);
}

#[test]
fn faces_are_shaded_by_light_angle() {
    // a flat face lit head-on from above comes out brighter than the
    // same face lit edge-on
    let flat = Polygon::new([
        pt3(-1.0, 0.0, 1.0),
        pt3(1.0, 0.0, 1.0),
        pt3(0.0, 0.0, -2.0),
    ])
    .unwrap();

    let mut bright = Recorder::new((600, 600));
    Mesh::new((0, 0), vec![Matrix4::IDENTITY], vec![flat.clone()])
        .unwrap()
        .with_light(Light::new(pt3(0.0, 10.0, 0.0)))
        .render_frame(&mut bright);

    let mut dim = Recorder::new((600, 600));
    Mesh::new((0, 0), vec![Matrix4::IDENTITY], vec![flat])
        .unwrap()
        .with_light(Light::new(pt3(10.0, 0.0, 0.0)))
        .render_frame(&mut dim);

    assert_eq!(bright.calls[0].1, gray(255));
    assert_eq!(dim.calls[0].1, gray(127));
}

#[test]
fn meshes_need_transforms_and_polygons() {
    assert!(matches!(
        Mesh::new((0, 0), vec![], vec![tri_at(0.0, 0.0)]),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(matches!(
        Mesh::new((0, 0), vec![Matrix4::IDENTITY], vec![]),
        Err(Error::DimensionMismatch { .. })
    ));
}
