use glam::{Mat4, Vec3};

/// Accumulated rigid transform of a movable entity.
///
/// Every increment is left-multiplied onto the stored matrix
/// (`T = delta * T`), so rotations and translations are expressed in world
/// space rather than in the entity's local frame. Only rotations and
/// translations are ever composed in, so the rotation block stays orthonormal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    transform: Mat4,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        transform: Mat4::IDENTITY,
    };

    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Drop everything accumulated so far.
    pub fn reset(&mut self) {
        self.transform = Mat4::IDENTITY;
    }

    /// Rotate the current configuration about a fixed world axis through the origin.
    ///
    /// The axis does not need to be unit length. A zero axis leaves the pose untouched.
    pub fn rotate(&mut self, axis: Vec3, degrees: f32) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        let rotation = Mat4::from_axis_angle(axis, degrees.to_radians());
        self.transform = rotation * self.transform;
    }

    /// Rotate about a world axis passing through `pivot` instead of the origin.
    pub fn rotate_about(&mut self, pivot: Vec3, axis: Vec3, degrees: f32) {
        self.translate(-pivot);
        self.rotate(axis, degrees);
        self.translate(pivot);
    }

    /// Translate by a world-space offset.
    pub fn translate(&mut self, offset: Vec3) {
        self.transform = Mat4::from_translation(offset) * self.transform;
    }

    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    /// Apply the pose to a point (w = 1).
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.transform.transform_point3(point)
    }

    /// Apply the pose to a direction (w = 0), ignoring translation.
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.transform.transform_vector3(vector)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new()
    }
}
