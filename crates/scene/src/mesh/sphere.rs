use std::f64::consts::PI;
use std::fmt::Write as _;

use glam::Vec3;

use super::vertex::{Triangle, Vertex};
use crate::error::MeshError;

/// UV-sphere centred on the origin.
///
/// Vertices are laid out ring by ring from the south pole upwards, one ring of
/// `points_per_ring` vertices per latitude, followed by the welded south pole
/// and then the north pole. Every triangle is wound counter-clockwise when
/// seen from outside the sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    points_per_ring: u32,
    rings: u32,
    radius: f32,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl SphereMesh {
    /// Upper bound on `points_per_ring`, about 2.1M vertices and 50 MB of
    /// vertex data.
    pub const MAX_POINTS_PER_RING: u32 = 2048;

    pub fn new(points_per_ring: u32, radius: f32) -> Result<Self, MeshError> {
        Self::validate(points_per_ring, radius)?;

        let rings = points_per_ring / 2 - 1;
        let vertices = build_vertices(points_per_ring, rings, radius);
        let indices = build_indices(points_per_ring, rings);

        log::debug!(
            "Generated sphere: {} points per ring, {} rings, {} vertices, {} triangles",
            points_per_ring,
            rings,
            vertices.len(),
            indices.len() / 3
        );

        Ok(Self {
            points_per_ring,
            rings,
            radius,
            vertices,
            indices,
        })
    }

    fn validate(points_per_ring: u32, radius: f32) -> Result<(), MeshError> {
        if points_per_ring % 2 != 0 {
            return Err(MeshError::OddPointCount(points_per_ring));
        }
        if points_per_ring < 4 {
            return Err(MeshError::TooFewPoints(points_per_ring));
        }
        if points_per_ring > Self::MAX_POINTS_PER_RING {
            return Err(MeshError::TooManyPoints(points_per_ring));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MeshError::InvalidRadius(radius));
        }
        Ok(())
    }

    pub fn points_per_ring(&self) -> u32 {
        self.points_per_ring
    }

    /// Number of latitude rings, poles excluded.
    pub fn rings(&self) -> u32 {
        self.rings
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn south_pole_index(&self) -> u32 {
        self.vertices.len() as u32 - 2
    }

    pub fn north_pole_index(&self) -> u32 {
        self.vertices.len() as u32 - 1
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// One vertex per line: position then normal, rounded to one decimal.
    pub fn vertices_report(&self) -> String {
        let mut out = String::from("sphere vertices:\n");
        for vertex in &self.vertices {
            let values = vertex.position.iter().chain(vertex.normal.iter());
            let line: Vec<String> = values.map(|v| format!("{}", round_tenth(*v))).collect();
            let _ = writeln!(out, "{}", line.join(" "));
        }
        out
    }

    /// One triangle per line.
    pub fn indices_report(&self) -> String {
        let mut out = String::from("sphere indices:\n");
        for [a, b, c] in self.triangles() {
            let _ = writeln!(out, "{a} {b} {c}");
        }
        out
    }
}

fn round_tenth(value: f32) -> f32 {
    // Avoid printing "-0" for values that round to zero.
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn build_vertices(points_per_ring: u32, rings: u32, radius: f32) -> Vec<Vertex> {
    let delta = 2.0 * PI / f64::from(points_per_ring);
    let mut vertices = Vec::with_capacity((points_per_ring * rings + 2) as usize);

    // theta sweeps latitude over (-pi, 0), phi sweeps longitude over [0, 2pi)
    for i in 1..=rings {
        let (sin_theta, cos_theta) = (-PI + f64::from(i) * delta).sin_cos();
        for j in 0..points_per_ring {
            let (sin_phi, cos_phi) = (f64::from(j) * delta).sin_cos();
            let direction = Vec3::new(
                (sin_theta * cos_phi) as f32,
                cos_theta as f32,
                (sin_theta * sin_phi) as f32,
            );
            vertices.push(Vertex::new(direction * radius, direction));
        }
    }

    vertices.push(Vertex::new(Vec3::new(0.0, -radius, 0.0), Vec3::NEG_Y));
    vertices.push(Vertex::new(Vec3::new(0.0, radius, 0.0), Vec3::Y));
    vertices
}

fn build_indices(points_per_ring: u32, rings: u32) -> Vec<u32> {
    let n = points_per_ring;
    let index_count = n as usize * rings as usize * 6;
    let mut indices = vec![0u32; index_count];

    let south = n * rings;
    let north = south + 1;
    let top_ring = (rings - 1) * n;

    // Caps: the south cap fills the head of the buffer, the north cap the tail.
    for j in 0..n {
        let next = (j + 1) % n;
        let head = j as usize * 3;
        indices[head..head + 3].copy_from_slice(&[next, south, j]);

        let tail = index_count - head - 3;
        indices[tail..tail + 3].copy_from_slice(&[top_ring + j, north, top_ring + next]);
    }

    let mut k = n as usize * 3;
    for i in 0..rings - 1 {
        for j in 0..n {
            let next = (j + 1) % n;
            let left_bottom = i * n + j;
            let right_bottom = i * n + next;
            let left_top = (i + 1) * n + j;
            let right_top = (i + 1) * n + next;

            indices[k..k + 6].copy_from_slice(&[
                left_bottom,
                right_top,
                right_bottom,
                left_bottom,
                left_top,
                right_top,
            ]);
            k += 6;
        }
    }

    indices
}
