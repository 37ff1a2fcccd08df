use std::f32::consts::TAU;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Two-component vector used for the pan position and its momentum.
///
/// Deliberately minimal: the engine only ever needs elementwise arithmetic,
/// so there is no reason to pull in a linear-algebra crate for two floats.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

/// The full animatable parameter state read by the render pipeline each frame.
///
/// Every value field is paired with a momentum (`*_vel`) field that the
/// integrator accumulates into it once per tick. The momenta are part of the
/// state on purpose: snapshots, presets, and transitions all carry them, so a
/// recalled preset resumes with the motion it was stored with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamState {
    pub zoom: f32,
    pub zoom_vel: f32,
    pub rotation: f32,
    pub rotation_vel: f32,
    pub position: Vec2,
    pub position_vel: Vec2,
    pub color_offset: f32,
    pub color_offset_vel: f32,
    pub linearity: f32,
    pub linearity_vel: f32,
}

impl Default for ParamState {
    /// The rest state: unit zoom, everything else (momenta included) zero.
    fn default() -> Self {
        Self {
            zoom: 1.0,
            zoom_vel: 0.0,
            rotation: 0.0,
            rotation_vel: 0.0,
            position: Vec2::ZERO,
            position_vel: Vec2::ZERO,
            color_offset: 0.0,
            color_offset_vel: 0.0,
            linearity: 0.0,
            linearity_vel: 0.0,
        }
    }
}

impl ParamState {
    /// Returns the state to its rest values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Wraps the unbounded fields back into their canonical ranges:
    /// rotation into `[0, 2π)` and each position component into `[-1, 1)`.
    ///
    /// Momenta are left untouched; only the integrated values wrap.
    pub fn normalize(&mut self) {
        self.rotation = (self.rotation / TAU).rem_euclid(1.0) * TAU;
        // The product can round up to a full turn when the remainder is
        // within one ulp of 1.0; the range is half-open.
        if self.rotation >= TAU {
            self.rotation -= TAU;
        }
        self.position.x = wrap(self.position.x, -1.0, 1.0);
        self.position.y = wrap(self.position.y, -1.0, 1.0);
    }
}

/// Wraps `value` into `[low, high)` by taking the fractional part of its
/// normalized offset.
fn wrap(value: f32, low: f32, high: f32) -> f32 {
    let t = (value - low) / (high - low);
    low + (high - low) * (t - t.floor())
}

impl Add for ParamState {
    type Output = ParamState;

    fn add(self, rhs: ParamState) -> ParamState {
        ParamState {
            zoom: self.zoom + rhs.zoom,
            zoom_vel: self.zoom_vel + rhs.zoom_vel,
            rotation: self.rotation + rhs.rotation,
            rotation_vel: self.rotation_vel + rhs.rotation_vel,
            position: self.position + rhs.position,
            position_vel: self.position_vel + rhs.position_vel,
            color_offset: self.color_offset + rhs.color_offset,
            color_offset_vel: self.color_offset_vel + rhs.color_offset_vel,
            linearity: self.linearity + rhs.linearity,
            linearity_vel: self.linearity_vel + rhs.linearity_vel,
        }
    }
}

impl AddAssign for ParamState {
    fn add_assign(&mut self, rhs: ParamState) {
        *self = *self + rhs;
    }
}

impl Sub for ParamState {
    type Output = ParamState;

    fn sub(self, rhs: ParamState) -> ParamState {
        ParamState {
            zoom: self.zoom - rhs.zoom,
            zoom_vel: self.zoom_vel - rhs.zoom_vel,
            rotation: self.rotation - rhs.rotation,
            rotation_vel: self.rotation_vel - rhs.rotation_vel,
            position: self.position - rhs.position,
            position_vel: self.position_vel - rhs.position_vel,
            color_offset: self.color_offset - rhs.color_offset,
            color_offset_vel: self.color_offset_vel - rhs.color_offset_vel,
            linearity: self.linearity - rhs.linearity,
            linearity_vel: self.linearity_vel - rhs.linearity_vel,
        }
    }
}

impl SubAssign for ParamState {
    fn sub_assign(&mut self, rhs: ParamState) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for ParamState {
    type Output = ParamState;

    fn mul(self, rhs: f32) -> ParamState {
        ParamState {
            zoom: self.zoom * rhs,
            zoom_vel: self.zoom_vel * rhs,
            rotation: self.rotation * rhs,
            rotation_vel: self.rotation_vel * rhs,
            position: self.position * rhs,
            position_vel: self.position_vel * rhs,
            color_offset: self.color_offset * rhs,
            color_offset_vel: self.color_offset_vel * rhs,
            linearity: self.linearity * rhs,
            linearity_vel: self.linearity_vel * rhs,
        }
    }
}

impl Div<f32> for ParamState {
    type Output = ParamState;

    fn div(self, rhs: f32) -> ParamState {
        ParamState {
            zoom: self.zoom / rhs,
            zoom_vel: self.zoom_vel / rhs,
            rotation: self.rotation / rhs,
            rotation_vel: self.rotation_vel / rhs,
            position: self.position / rhs,
            position_vel: self.position_vel / rhs,
            color_offset: self.color_offset / rhs,
            color_offset_vel: self.color_offset_vel / rhs,
            linearity: self.linearity / rhs,
            linearity_vel: self.linearity_vel / rhs,
        }
    }
}
