use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controller::{Button, Controller};

/// Adapter that bridges winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed: HashSet<Button>,
    /// Buttons that went down since the last `end_frame`
    just_pressed: HashSet<Button>,
    /// Buttons that went up since the last `end_frame`
    just_released: HashSet<Button>,
    /// Last reported cursor position (relative to window)
    pointer_position: Option<Vec2>,
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.apply_transition(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = Self::mouse_button_to_button(*button) {
                    self.apply_transition(button, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer_position = Some(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::Focused(false) => {
                // Keys released while unfocused never reach us; drop them all
                // so nothing sticks.
                self.clear();
            }
            _ => {}
        }
    }

    /// Clear per-frame transition state. Call once per frame after the
    /// update has consumed input.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Release everything, held state included. Held buttons become release
    /// edges so downstream state machines (e.g. an active drag) see them end.
    pub fn clear(&mut self) {
        self.just_pressed.clear();
        self.just_released.extend(self.pressed.drain());
    }

    fn apply_transition(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                // Key-repeat delivers extra Pressed events; only the first
                // one is an edge.
                if self.pressed.insert(button) {
                    self.just_pressed.insert(button);
                }
            }
            ElementState::Released => {
                if self.pressed.remove(&button) {
                    self.just_released.insert(button);
                }
            }
        }
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            _ => None,
        }
    }

    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn just_pressed(&self, button: Button) -> bool {
        self.just_pressed.contains(&button)
    }

    fn just_released(&self, button: Button) -> bool {
        self.just_released.contains(&button)
    }

    fn pointer_position(&self) -> Option<Vec2> {
        self.pointer_position
    }
}
