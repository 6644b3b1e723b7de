use glam::{EulerRot, Quat, Vec3};

/// Pitch limit just short of straight up/down so the basis vectors never
/// degenerate.
pub const MAX_PITCH: f32 = 1.5533;

/// Position + orientation of an object in 3D space.
///
/// Orientation is stored as yaw/pitch/roll Euler angles in radians. Yaw 0
/// looks along +Z, positive pitch looks up, and roll is kept at zero by the
/// fly-camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        yaw: 0.0,
        pitch: 0.0,
        roll: 0.0,
    };

    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
            roll: 0.0,
        }
    }

    /// Unit vector the transform is facing.
    pub fn forward(&self) -> Vec3 {
        let pitch = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
        Vec3::new(
            self.yaw.sin() * pitch.cos(),
            pitch.sin(),
            self.yaw.cos() * pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    /// Orientation as a quaternion, consistent with `forward()` when the
    /// pitch is within `MAX_PITCH`.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, self.roll)
    }

    /// Rebuild a transform from a position and rotation quaternion.
    pub fn from_parts(position: Vec3, rotation: Quat) -> Self {
        let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
        Self {
            position,
            yaw,
            pitch: -pitch,
            roll,
        }
    }

    /// Compose with a child-local transform: the result is `local` expressed
    /// in world space with `self` as the parent.
    pub fn compose(&self, local: &Transform) -> Transform {
        let rotation = self.rotation() * local.rotation();
        let position = self.position + self.rotation() * local.position;
        Transform::from_parts(position, rotation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
