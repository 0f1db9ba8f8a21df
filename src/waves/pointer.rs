use crate::constants::{POINTER_SMOOTHING, POINTER_SPEED_MAX, POINTER_START};
use glam::Vec2;

/// Pointer tracking for one renderer.
///
/// Event handlers write `raw` through [`PointerState::move_to`]; the frame
/// tick calls [`PointerState::advance`] once before integrating points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub raw: Vec2,
    pub smoothed: Vec2,
    pub last: Vec2,
    pub speed: f32,
    pub smoothed_speed: f32,
    /// Direction of the last frame-to-frame motion, radians.
    pub angle: f32,
    pub initialized: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            raw: Vec2::from(POINTER_START),
            smoothed: Vec2::ZERO,
            last: Vec2::ZERO,
            speed: 0.0,
            smoothed_speed: 0.0,
            angle: 0.0,
            initialized: false,
        }
    }
}

impl PointerState {
    /// Record a pointer position in surface-local coordinates.
    ///
    /// The first event snaps the smoothed and last-frame positions so the
    /// field does not see a jump from the origin.
    pub fn move_to(&mut self, pos: Vec2) {
        if !pos.is_finite() {
            return;
        }
        self.raw = pos;
        if !self.initialized {
            self.smoothed = pos;
            self.last = pos;
            self.initialized = true;
        }
    }

    /// Per-frame smoothing of position and speed.
    pub fn advance(&mut self) {
        self.smoothed += (self.raw - self.smoothed) * POINTER_SMOOTHING;
        let delta = self.raw - self.last;
        self.speed = delta.length();
        self.smoothed_speed += (self.speed - self.smoothed_speed) * POINTER_SMOOTHING;
        self.smoothed_speed = self.smoothed_speed.min(POINTER_SPEED_MAX);
        self.angle = delta.y.atan2(delta.x);
        self.last = self.raw;
    }
}
