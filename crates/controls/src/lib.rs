//! Parameter control and transition engine for the refeed visualizer.
//!
//! The engine turns noisy, asynchronous input (held keys, pointer deltas,
//! device orientation) into a smoothly evolving, boundedly-valued parameter
//! state that a feedback render pipeline reads once per frame:
//!
//! ```text
//!   key set ──┐
//!   pointer ──┤ InputSender ─▶ queue ─▶ Controls::tick ─▶ ParamState
//!   sensors ──┘                              │                │
//!                                 Transition ┘                ▼
//!                                 (preset recall)       FrameUniforms
//! ```
//!
//! Each tick integrates per-axis momenta (nudged while keys are held,
//! decaying geometrically otherwise), wraps rotation and position back into
//! canonical ranges, and services preset stores/recalls. Recalling a preset
//! starts a 180-step cubic-eased [`Transition`]; recalling again mid-flight
//! chains the running transition as the origin of the new one, so retargeting
//! never jumps.

mod bindings;
mod controls;
mod easing;
mod frame;
mod input;
mod presets;
mod state;
mod transition;

pub use bindings::{Axis, Binding, BINDINGS};
pub use controls::{Controls, PointerMode, BASE_STEP, FALLOFF};
pub use easing::Curve;
pub use frame::FrameUniforms;
pub use input::{InputEvent, InputSender, Key, KeySet};
pub use presets::PresetBank;
pub use state::{ParamState, Vec2};
pub use transition::{Transition, TransitionOrigin, TRANSITION_STEPS};
