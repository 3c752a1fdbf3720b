use glam::{Mat4, Vec3};

/// Free-flying first-person camera.
///
/// Angles are kept in degrees. Horizontal movement stays on the XZ plane
/// regardless of pitch, vertical movement only touches `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    position: Vec3,
    front: Vec3,
    yaw: f32,
    pitch: f32,
    fov: f32,
    enabled: bool,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl FlyCamera {
    /// Units per second.
    pub const SPEED: f32 = 5.0;
    pub const UP: Vec3 = Vec3::Y;

    pub const PITCH_LIMIT: f32 = 89.0;
    pub const MIN_FOV: f32 = 1.0;
    pub const MAX_FOV: f32 = 45.0;

    /// Faces negative Z.
    const DEFAULT_YAW: f32 = -90.0;

    pub fn new(position: Vec3) -> Self {
        let yaw = Self::DEFAULT_YAW;
        let pitch = 0.0;
        Self {
            position,
            front: front_from_angles(yaw, pitch),
            yaw,
            pitch,
            fov: Self::MAX_FOV,
            enabled: true,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        Self::UP
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn field_of_view(&self) -> f32 {
        self.fov
    }

    pub fn speed(&self) -> f32 {
        Self::SPEED
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// While disabled, movement and rotation are ignored. Zoom still applies.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn move_forward(&mut self, offset: f32) {
        self.translate(self.forward_xz(), offset);
    }

    pub fn move_backward(&mut self, offset: f32) {
        self.translate(-self.forward_xz(), offset);
    }

    pub fn move_left(&mut self, offset: f32) {
        self.translate(-self.right(), offset);
    }

    pub fn move_right(&mut self, offset: f32) {
        self.translate(self.right(), offset);
    }

    pub fn move_up(&mut self, offset: f32) {
        self.translate(Self::UP, offset);
    }

    pub fn move_down(&mut self, offset: f32) {
        self.translate(-Self::UP, offset);
    }

    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        if !self.enabled {
            return;
        }
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
        self.front = front_from_angles(self.yaw, self.pitch);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.fov = (self.fov - delta).clamp(Self::MIN_FOV, Self::MAX_FOV);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, Self::UP)
    }

    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, near, far)
    }

    fn forward_xz(&self) -> Vec3 {
        Vec3::new(self.front.x, 0.0, self.front.z).normalize()
    }

    fn right(&self) -> Vec3 {
        self.front.cross(Self::UP).normalize()
    }

    fn translate(&mut self, direction: Vec3, offset: f32) {
        if !self.enabled {
            return;
        }
        self.position += direction * Self::SPEED * offset;
    }
}

fn front_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
}
