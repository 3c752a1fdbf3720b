use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Three indices into a vertex buffer forming one triangle.
pub type Triangle = [u32; 3];

/// Interleaved position + normal, six floats per vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    /// Number of `f32` components in one vertex.
    pub const COMPONENTS: usize = 6;

    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// Unnormalized face normal implied by the winding of `triangle`.
///
/// Counter-clockwise order (seen from the side the result points to) yields a
/// vector facing the viewer.
pub fn winding_normal(vertices: &[Vertex], triangle: Triangle) -> Vec3 {
    let [a, b, c] = triangle.map(|i| vertices[i as usize].position());
    (b - a).cross(c - a)
}

pub fn vertices_as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

pub fn indices_as_bytes(indices: &[u32]) -> &[u8] {
    bytemuck::cast_slice(indices)
}
