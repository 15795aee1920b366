// Host-side tests for GLB parsing and model placement.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod model {
    include!("../src/model.rs");
}

use glam::Vec3;
use model::*;

/// A single triangle in a node translated by +1 on Y, no normals.
fn triangle_glb() -> Vec<u8> {
    let positions: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0, 0.0];
    let indices: [u16; 3] = [0, 1, 2];
    let mut bin: Vec<u8> = Vec::new();
    for p in positions {
        bin.extend_from_slice(&p.to_le_bytes());
    }
    for i in indices {
        bin.extend_from_slice(&i.to_le_bytes());
    }
    while bin.len() % 4 != 0 {
        bin.push(0);
    }

    let json = format!(
        r#"{{"asset":{{"version":"2.0"}},"scene":0,"scenes":[{{"nodes":[0]}}],"nodes":[{{"mesh":0,"translation":[0.0,1.0,0.0]}}],"meshes":[{{"primitives":[{{"attributes":{{"POSITION":0}},"indices":1}}]}}],"buffers":[{{"byteLength":{len}}}],"bufferViews":[{{"buffer":0,"byteOffset":0,"byteLength":36}},{{"buffer":0,"byteOffset":36,"byteLength":6}}],"accessors":[{{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0.0,0.0,0.0],"max":[1.0,2.0,0.0]}},{{"bufferView":1,"componentType":5123,"count":3,"type":"SCALAR"}}]}}"#,
        len = bin.len()
    );
    let mut json = json.into_bytes();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }

    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut glb = Vec::with_capacity(total);
    glb.extend_from_slice(b"glTF");
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&(total as u32).to_le_bytes());
    glb.extend_from_slice(&(json.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"JSON");
    glb.extend_from_slice(&json);
    glb.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"BIN\0");
    glb.extend_from_slice(&bin);
    glb
}

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn parses_triangle_with_node_transform() {
    let mesh = parse_glb(&triangle_glb()).unwrap();
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert!(close(mesh.bounds.min, Vec3::new(0.0, 1.0, 0.0)));
    assert!(close(mesh.bounds.max, Vec3::new(1.0, 3.0, 0.0)));
    // Default material is opaque white
    assert_eq!(mesh.vertices[0].color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn missing_normals_are_generated_from_faces() {
    let mesh = parse_glb(&triangle_glb()).unwrap();
    for v in &mesh.vertices {
        assert!(close(Vec3::from_array(v.normal), Vec3::Z));
    }
}

#[test]
fn fit_scales_about_origin_then_subtracts_center() {
    let mut mesh = parse_glb(&triangle_glb()).unwrap();
    // Unscaled center is (0.5, 2, 0)
    mesh.fit(3.5);
    let p1 = Vec3::from_array(mesh.vertices[1].position);
    // (1,1,0) * 3.5 - (0.5,2,0)
    assert!(close(p1, Vec3::new(3.0, 1.5, 0.0)));
    assert!(close(mesh.bounds.min, Vec3::new(-0.5, 1.5, 0.0)));
    assert!(close(mesh.bounds.max, Vec3::new(3.0, 8.5, 0.0)));
}

#[test]
fn garbage_bytes_are_an_error() {
    assert!(parse_glb(b"not a model").is_err());
}

#[test]
fn smooth_normals_average_shared_vertices() {
    // Two triangles folded 90 degrees along the X axis
    let positions = [
        Vec3::ZERO,
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
    ];
    let indices = [0, 1, 2, 0, 3, 1];
    let n = smooth_normals(&positions, &indices);
    assert!(close(n[2], Vec3::Z));
    assert!(close(n[3], Vec3::Y));
    let shared = Vec3::new(0.0, 1.0, 1.0).normalize();
    assert!(close(n[0], shared));
    assert!(close(n[1], shared));
}

#[test]
fn smooth_normals_skip_out_of_range_triangles() {
    let n = smooth_normals(&[Vec3::ZERO, Vec3::X, Vec3::Y], &[0, 1, 7]);
    assert!(n.iter().all(|v| *v == Vec3::ZERO));
}
