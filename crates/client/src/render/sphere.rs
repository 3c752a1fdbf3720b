use orb::{MeshError, SphereMesh};

use super::mesh::GpuMesh;

/// GPU copy of a generated sphere. The CPU mesh is dropped after upload.
pub struct SphereModel {
    gpu: GpuMesh,
}

impl SphereModel {
    pub fn new(device: &wgpu::Device, points_per_ring: u32, radius: f32) -> Result<Self, MeshError> {
        let mesh = SphereMesh::new(points_per_ring, radius)?;
        let gpu = GpuMesh::new(device, "Sphere", mesh.vertices(), mesh.indices());

        log::info!(
            "Uploaded sphere ({} points per ring, {} rings): {} vertices, {} indices",
            mesh.points_per_ring(),
            mesh.rings(),
            mesh.vertex_count(),
            gpu.num_indices()
        );

        Ok(Self { gpu })
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.gpu.draw(pass);
    }
}
