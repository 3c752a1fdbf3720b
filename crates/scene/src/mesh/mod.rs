mod cube;
mod sphere;
mod vertex;

pub use cube::light_marker_mesh;
pub use sphere::SphereMesh;
pub use vertex::{Triangle, Vertex, indices_as_bytes, vertices_as_bytes, winding_normal};
