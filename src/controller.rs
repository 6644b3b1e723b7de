use glam::Vec2;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    Space,
    Shift,
    Escape,
    ArrowLeft,
    ArrowRight,
    MouseLeft,
    MouseRight,
}

/// Controller - the polling seam the fly-camera reads input through.
///
/// Besides held state, the drag logic needs the press/release transitions of
/// the current frame and the pointer position, so the trait exposes those
/// too. Implementations never fail; a missing pointer is simply `None`.
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Check if button went down this frame
    fn just_pressed(&self, button: Button) -> bool;

    /// Check if button was released this frame
    fn just_released(&self, button: Button) -> bool;

    /// Last known pointer position in window coordinates
    fn pointer_position(&self) -> Option<Vec2>;
}
