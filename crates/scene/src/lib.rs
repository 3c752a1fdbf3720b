pub mod camera;
pub mod error;
pub mod mesh;

pub use camera::FlyCamera;
pub use error::MeshError;
pub use mesh::{
    SphereMesh, Triangle, Vertex, indices_as_bytes, light_marker_mesh, vertices_as_bytes,
    winding_normal,
};
