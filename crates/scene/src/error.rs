#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("points per ring must be even, got {0}")]
    OddPointCount(u32),
    #[error("points per ring must be at least 4, got {0}")]
    TooFewPoints(u32),
    #[error("points per ring must be at most {max}, got {0}", max = crate::SphereMesh::MAX_POINTS_PER_RING)]
    TooManyPoints(u32),
    #[error("radius must be a finite positive number, got {0}")]
    InvalidRadius(f32),
}
