use glam::{Mat4, Vec3};

use crate::error::{Result, ViewerError};
use crate::pose::Pose;

pub const DEFAULT_MOVE_STEP: f32 = 0.1;
pub const DEFAULT_ROTATION_STEP: f32 = 3.0;

/// Discrete camera operation, one per input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraCommand {
    MoveFront,
    MoveBack,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    RotateUp,
    RotateDown,
    RotateLeft,
    RotateRight,
    Reset,
}

/// Perspective camera: a fixed base pose plus an accumulated [`Pose`] offset.
///
/// The effective position, direction and up vectors are always derived on
/// demand from the base values and the accumulator; nothing is cached.
#[derive(Debug, Clone)]
pub struct Camera {
    base_position: Vec3,
    base_direction: Vec3,
    base_up: Vec3,
    fov: f32,
    near: f32,
    far: f32,
    width: u32,
    height: u32,
    move_step: f32,
    rotation_step: f32,
    pose: Pose,
}

impl Camera {
    /// Camera with world-up `(0, 1, 0)`.
    pub fn new(
        position: Vec3,
        direction: Vec3,
        fov: f32,
        near: f32,
        far: f32,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        Self::with_up(position, direction, Vec3::Y, fov, near, far, width, height)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_up(
        position: Vec3,
        direction: Vec3,
        up: Vec3,
        fov: f32,
        near: f32,
        far: f32,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        if !(fov.is_finite() && fov > 0.0 && fov < 180.0) {
            return Err(ViewerError::InvalidFieldOfView(fov));
        }
        if !(near.is_finite() && far.is_finite() && near > 0.0 && near < far) {
            return Err(ViewerError::InvalidClipPlanes { near, far });
        }
        check_viewport(width, height)?;
        if !position.is_finite() {
            return Err(ViewerError::DegenerateVector("position"));
        }
        let direction = direction
            .try_normalize()
            .ok_or(ViewerError::DegenerateVector("direction"))?;
        let up = up.try_normalize().ok_or(ViewerError::DegenerateVector("up"))?;
        if direction.cross(up).try_normalize().is_none() {
            return Err(ViewerError::DegenerateVector("direction parallel to up"));
        }

        Ok(Self {
            base_position: position,
            base_direction: direction,
            base_up: up,
            fov,
            near,
            far,
            width,
            height,
            move_step: DEFAULT_MOVE_STEP,
            rotation_step: DEFAULT_ROTATION_STEP,
            pose: Pose::new(),
        })
    }

    /// Override the per-event movement distance and rotation angle (degrees).
    /// Both must be finite and positive.
    pub fn with_steps(mut self, move_step: f32, rotation_step: f32) -> Result<Self> {
        check_step("move step", move_step)?;
        check_step("rotation step", rotation_step)?;
        self.move_step = move_step;
        self.rotation_step = rotation_step;
        Ok(self)
    }

    pub fn position(&self) -> Vec3 {
        self.pose.transform_point(self.base_position)
    }

    pub fn direction(&self) -> Vec3 {
        self.pose
            .transform_vector(self.base_direction)
            .try_normalize()
            .unwrap_or(self.base_direction)
    }

    pub fn up(&self) -> Vec3 {
        self.pose
            .transform_vector(self.base_up)
            .try_normalize()
            .unwrap_or(self.base_up)
    }

    /// Unit strafe axis, `direction x up`.
    pub fn right(&self) -> Vec3 {
        let direction = self.direction();
        direction
            .cross(self.up())
            .try_normalize()
            .unwrap_or_else(|| direction.any_orthonormal_vector())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect_ratio(), self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        let position = self.position();
        Mat4::look_at_rh(position, position + self.direction(), self.up())
    }

    /// Combined view-projection matrix handed to the renderer each frame.
    pub fn camera_matrix(&self) -> Mat4 {
        self.projection() * self.view()
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_width(&mut self, width: u32) -> Result<()> {
        check_viewport(width, self.height)?;
        self.width = width;
        Ok(())
    }

    pub fn set_height(&mut self, height: u32) -> Result<()> {
        check_viewport(self.width, height)?;
        self.height = height;
        Ok(())
    }

    /// Set both viewport sides at once; on error neither changes.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> Result<()> {
        check_viewport(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn move_front(&mut self) {
        self.translate(self.direction() * self.move_step);
    }

    pub fn move_back(&mut self) {
        self.translate(-self.direction() * self.move_step);
    }

    pub fn move_up(&mut self) {
        self.translate(self.up() * self.move_step);
    }

    pub fn move_down(&mut self) {
        self.translate(-self.up() * self.move_step);
    }

    pub fn move_left(&mut self) {
        self.translate(-self.right() * self.move_step);
    }

    pub fn move_right(&mut self) {
        self.translate(self.right() * self.move_step);
    }

    /// Pitch the view upwards in place.
    pub fn rotate_up(&mut self) {
        self.rotate_in_place(self.right(), self.rotation_step);
    }

    pub fn rotate_down(&mut self) {
        self.rotate_in_place(self.right(), -self.rotation_step);
    }

    /// Yaw the view to the left in place.
    pub fn rotate_left(&mut self) {
        self.rotate_in_place(self.up(), self.rotation_step);
    }

    pub fn rotate_right(&mut self) {
        self.rotate_in_place(self.up(), -self.rotation_step);
    }

    fn rotate_in_place(&mut self, axis: Vec3, degrees: f32) {
        let pivot = self.position();
        self.pose.rotate_about(pivot, axis, degrees);
    }

    /// Return to the base pose.
    pub fn reset_transforms(&mut self) {
        self.pose.reset();
    }

    pub fn rotate(&mut self, axis: Vec3, degrees: f32) {
        self.pose.rotate(axis, degrees);
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.pose.translate(offset);
    }

    pub fn transform(&self) -> Mat4 {
        self.pose.transform()
    }

    pub fn set_transform(&mut self, transform: Mat4) {
        self.pose.set_transform(transform);
    }

    pub fn apply(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::MoveFront => self.move_front(),
            CameraCommand::MoveBack => self.move_back(),
            CameraCommand::MoveLeft => self.move_left(),
            CameraCommand::MoveRight => self.move_right(),
            CameraCommand::MoveUp => self.move_up(),
            CameraCommand::MoveDown => self.move_down(),
            CameraCommand::RotateUp => self.rotate_up(),
            CameraCommand::RotateDown => self.rotate_down(),
            CameraCommand::RotateLeft => self.rotate_left(),
            CameraCommand::RotateRight => self.rotate_right(),
            CameraCommand::Reset => self.reset_transforms(),
        }
    }
}

fn check_step(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ViewerError::InvalidStep { name, value })
    }
}

fn check_viewport(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ViewerError::InvalidViewport { width, height });
    }
    Ok(())
}
