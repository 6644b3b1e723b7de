use glam::Mat4;

use crate::transform::Transform;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub _pad0: f32,
    pub forward: [f32; 3],
    pub _pad1: f32,
    pub right: [f32; 3],
    pub _pad2: f32,
    pub up: [f32; 3],
    pub aspect: f32,
}

/// Perspective camera owning the transform the fly-camera drives.
pub struct Camera {
    pub transform: Transform,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            transform: Transform::new(glam::Vec3::new(0.0, 2.0, -8.0), 0.0, 0.0),
            fov_y: 60f32.to_radians(),
            aspect: width as f32 / height as f32,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        let eye = self.transform.position;
        let view = Mat4::look_at_rh(eye, eye + self.transform.forward(), self.transform.up());
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far);
        proj * view
    }

    pub fn to_uniform(&self) -> CameraUniform {
        self.uniform_for(&self.transform)
    }

    /// Uniform for an explicit pose, used when an XR rig supplies the world
    /// transform instead of `self.transform`.
    pub fn uniform_for(&self, pose: &Transform) -> CameraUniform {
        CameraUniform {
            position: pose.position.to_array(),
            _pad0: 0.0,
            forward: pose.forward().to_array(),
            _pad1: 0.0,
            right: pose.right().to_array(),
            _pad2: 0.0,
            up: pose.up().to_array(),
            aspect: self.aspect,
        }
    }
}
