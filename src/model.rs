// GLB → flat triangle list in world space.
//
// Node transforms are baked into the vertices so the renderer only needs a
// view-projection matrix. Kept free of browser APIs; `assets.rs` does the
// fetching.

use glam::{Mat3, Mat4, Vec3};
use intake_core::{fit_transform, Bounds};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub bounds: Bounds,
}

impl MeshData {
    /// Re-center and uniformly scale in place; `bounds` follows the vertices.
    pub fn fit(&mut self, scale: f32) {
        let m = fit_transform(&self.bounds, scale);
        for v in &mut self.vertices {
            v.position = m.transform_point3(Vec3::from_array(v.position)).to_array();
        }
        self.bounds = Bounds::from_points(self.vertices.iter().map(|v| Vec3::from_array(v.position)));
    }
}

pub fn parse_glb(bytes: &[u8]) -> anyhow::Result<MeshData> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let blob = gltf.blob.as_deref();
    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or_else(|| anyhow::anyhow!("model has no scene"))?;
    let mut out = MeshData::default();
    for node in scene.nodes() {
        append_node(&node, Mat4::IDENTITY, blob, &mut out)?;
    }
    if out.indices.is_empty() {
        anyhow::bail!("model has no triangle geometry");
    }
    Ok(out)
}

fn append_node(
    node: &gltf::Node<'_>,
    parent: Mat4,
    blob: Option<&[u8]>,
    out: &mut MeshData,
) -> anyhow::Result<()> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        let normal_m = Mat3::from_mat4(world).inverse().transpose();
        for prim in mesh.primitives() {
            if prim.mode() != gltf::mesh::Mode::Triangles {
                log::warn!("[model] skipping {:?} primitive in mesh {}", prim.mode(), mesh.index());
                continue;
            }
            let reader = prim.reader(|buffer| match buffer.source() {
                gltf::buffer::Source::Bin => blob,
                gltf::buffer::Source::Uri(_) => None,
            });
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<Vec3> = positions
                .map(|p| world.transform_point3(Vec3::from_array(p)))
                .collect();
            let indices: Vec<u32> = match reader.read_indices() {
                Some(ix) => ix.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };
            if indices.iter().any(|&i| i as usize >= positions.len()) {
                anyhow::bail!("mesh {} has an index out of range", mesh.index());
            }
            let normals: Vec<Vec3> = reader
                .read_normals()
                .map(|ns| {
                    ns.map(|n| (normal_m * Vec3::from_array(n)).normalize_or_zero())
                        .collect()
                })
                .unwrap_or_default();
            let normals = if normals.len() == positions.len() {
                normals
            } else {
                smooth_normals(&positions, &indices)
            };
            let color = prim.material().pbr_metallic_roughness().base_color_factor();

            let base = out.vertices.len() as u32;
            for (p, n) in positions.iter().zip(&normals) {
                out.bounds.include(*p);
                out.vertices.push(MeshVertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                    color,
                });
            }
            out.indices.extend(indices.iter().map(|i| base + i));
        }
    }
    for child in node.children() {
        append_node(&child, world, blob, out)?;
    }
    Ok(())
}

/// Area-weighted vertex normals for primitives that ship without them.
pub fn smooth_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let (Some(pa), Some(pb), Some(pc)) = (positions.get(a), positions.get(b), positions.get(c))
        else {
            continue;
        };
        let n = (*pb - *pa).cross(*pc - *pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter().map(Vec3::normalize_or_zero).collect()
}
