use glam::Vec2;

use crate::config::FlycamConfig;
use crate::controller::{Button, Controller};
use crate::transform::Transform;

/// Drag rotation: radians per pixel of pointer travel, per unit of
/// rotational speed and per second.
pub const DRAG_ROTATION_SCALE: f32 = 0.1;
/// Arrow keys turn at five times the drag scale.
pub const ARROW_ROTATION_SCALE: f32 = 0.5;

/// Free-look debug camera: maps held keys and pointer drags onto a target
/// transform once per frame.
///
/// WASD moves along the local forward/right axes, E/Q (or Space) move
/// vertically, Shift sprints, the left/right arrows turn, and dragging with
/// the primary mouse button looks around. Roll is forced back to zero every
/// update so the view stays upright.
pub struct FlyCam {
    /// Linear speed in units per second
    pub lin_speed: f32,
    /// Rotational speed in radians per second
    pub rot_speed: f32,
    /// Speed factor applied while Shift is held
    pub sprint_multiplier: f32,
    /// Pretend the forward key is always held (soak testing)
    pub sim_forward_input: bool,
    /// Ignore movement keys unless the primary button is held
    pub require_primary_to_move: bool,
    /// When set, replaces the measured frame delta
    pub fixed_dt: Option<f32>,
    /// A disabled controller leaves the target untouched
    pub enabled: bool,
    dragging: bool,
    last_pointer: Option<Vec2>,
}

impl FlyCam {
    pub fn new() -> Self {
        Self::from_config(&FlycamConfig::default())
    }

    pub fn from_config(config: &FlycamConfig) -> Self {
        Self {
            lin_speed: config.lin_speed,
            rot_speed: config.rot_speed_deg.to_radians(),
            sprint_multiplier: config.sprint_multiplier,
            sim_forward_input: config.sim_forward_input,
            require_primary_to_move: config.require_primary_to_move,
            fixed_dt: config.fixed_dt,
            enabled: true,
            dragging: false,
            last_pointer: None,
        }
    }

    /// True between a primary-button press and its release.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Advance one frame: apply movement and look input to `target`.
    ///
    /// `dt` is the elapsed frame time in seconds; a configured `fixed_dt`
    /// takes precedence. Never fails - input is polled, not awaited.
    pub fn update(&mut self, target: &mut Transform, input: &impl Controller, dt: f32) {
        if !self.enabled {
            return;
        }

        // Only a positive fixed step overrides the measured delta.
        let dt = self.fixed_dt.filter(|&v| v > 0.0).unwrap_or(dt);

        self.update_movement(target, input, dt);
        self.update_dragging(target, input, dt);

        // Kill roll last so nothing above can tilt the horizon.
        target.roll = 0.0;
    }

    fn update_movement(&self, target: &mut Transform, input: &impl Controller, dt: f32) {
        if self.require_primary_to_move && !input.is_down(Button::MouseLeft) {
            return;
        }

        let mut forward = axis(input, Button::KeyW, Button::KeyS);
        if self.sim_forward_input {
            forward = 1.0;
        }
        let strafe = axis(input, Button::KeyD, Button::KeyA);
        let rise = vertical_axis(input);

        let mut speed = self.lin_speed;
        if input.is_down(Button::Shift) {
            speed *= self.sprint_multiplier;
        }
        let step = speed * dt;

        target.position += target.forward() * forward * step
            + target.right() * strafe * step
            + target.up() * rise * step;

        let turn = axis(input, Button::ArrowRight, Button::ArrowLeft);
        target.yaw += ARROW_ROTATION_SCALE * self.rot_speed * turn * dt;
    }

    fn update_dragging(&mut self, target: &mut Transform, input: &impl Controller, dt: f32) {
        let pointer = input.pointer_position();

        if !self.dragging && input.just_pressed(Button::MouseLeft) {
            if let Some(position) = pointer {
                self.dragging = true;
                self.last_pointer = Some(position);
            }
        }

        // A drag also ends if the button silently stopped being held, e.g.
        // the window lost focus and the release event never arrived.
        if self.dragging
            && (input.just_released(Button::MouseLeft) || !input.is_down(Button::MouseLeft))
        {
            self.dragging = false;
            self.last_pointer = None;
        }

        if self.dragging {
            if let (Some(position), Some(last)) = (pointer, self.last_pointer) {
                let delta = position - last;
                let k = DRAG_ROTATION_SCALE * self.rot_speed * dt;
                target.yaw += k * delta.x;
                target.pitch -= k * delta.y;
                self.last_pointer = Some(position);
            }
        }
    }
}

impl Default for FlyCam {
    fn default() -> Self {
        Self::new()
    }
}

fn axis(input: &impl Controller, positive: Button, negative: Button) -> f32 {
    (input.is_down(positive) as i32 - input.is_down(negative) as i32) as f32
}

fn vertical_axis(input: &impl Controller) -> f32 {
    let up = input.is_down(Button::KeyE) || input.is_down(Button::Space);
    (up as i32 - input.is_down(Button::KeyQ) as i32) as f32
}
