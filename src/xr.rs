use crate::transform::Transform;

/// Parent rig for XR sessions.
///
/// Under XR the device owns the camera's local transform and rewrites it
/// every frame, so the fly-camera cannot move the camera directly. Instead
/// it drives this rig, and the effective world pose is the rig composed
/// with whatever local pose the device reports.
pub struct XrRig {
    /// The transform the fly-camera drives
    pub rig: Transform,
    device_local: Transform,
}

impl XrRig {
    /// Reparent: capture the current camera pose into the rig and reset the
    /// camera-local pose to identity. The composed world pose is unchanged.
    pub fn attach(camera_local: &mut Transform) -> Self {
        let rig = *camera_local;
        *camera_local = Transform::IDENTITY;
        Self {
            rig,
            device_local: Transform::IDENTITY,
        }
    }

    /// Record the device-reported camera-local pose for this frame.
    pub fn set_device_pose(&mut self, pose: Transform) {
        self.device_local = pose;
    }

    pub fn device_pose(&self) -> &Transform {
        &self.device_local
    }

    /// World pose of the camera: rig composed with the device-local pose.
    pub fn world(&self) -> Transform {
        self.rig.compose(&self.device_local)
    }
}
