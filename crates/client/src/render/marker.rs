use glam::{Mat4, Vec3};

use super::mesh::GpuMesh;

/// Small cube drawn at the light position.
pub struct LightMarker {
    gpu: GpuMesh,
    position: Vec3,
}

impl LightMarker {
    pub fn new(device: &wgpu::Device, position: Vec3) -> Self {
        let (vertices, indices) = orb::light_marker_mesh();
        Self {
            gpu: GpuMesh::new(device, "Light Marker", &vertices, &indices),
            position,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.gpu.draw(pass);
    }
}
