use glam::Vec3;

use super::vertex::Vertex;

const HALF: f32 = 0.5;

// 0-3: front face (z = +0.5), 4-7: back face (z = -0.5)
#[rustfmt::skip]
const CORNERS: [[f32; 3]; 8] = [
    [-HALF, -HALF,  HALF], // 0: bottom-left
    [ HALF, -HALF,  HALF], // 1: bottom-right
    [ HALF,  HALF,  HALF], // 2: top-right
    [-HALF,  HALF,  HALF], // 3: top-left
    [-HALF, -HALF, -HALF], // 4: bottom-left
    [ HALF, -HALF, -HALF], // 5: bottom-right
    [ HALF,  HALF, -HALF], // 6: top-right
    [-HALF,  HALF, -HALF], // 7: top-left
];

#[rustfmt::skip]
const INDICES: [u32; 36] = [
    0, 1, 2, 0, 2, 3, // front (+Z)
    4, 6, 5, 4, 7, 6, // back (-Z)
    3, 2, 6, 3, 6, 7, // top (+Y)
    0, 5, 1, 0, 4, 5, // bottom (-Y)
    1, 6, 2, 1, 5, 6, // right (+X)
    0, 7, 4, 0, 3, 7, // left (-X)
];

/// Unit cube marking the light position.
///
/// Corners are shared between faces, so each normal points diagonally away
/// from the centre.
pub fn light_marker_mesh() -> (Vec<Vertex>, Vec<u32>) {
    let vertices = CORNERS
        .iter()
        .map(|&corner| {
            let position = Vec3::from_array(corner);
            Vertex::new(position, position.normalize())
        })
        .collect();

    (vertices, INDICES.to_vec())
}
