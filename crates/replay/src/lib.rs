//! Deterministic input replay for the refeed control engine.
//!
//! A [`Script`] is a TOML timeline of segments (held keys plus optional
//! per-tick pointer/orientation deltas); [`Playback`] feeds it through a
//! `Controls` engine tick by tick, producing a stream of [`TickRecord`]s.
//! Scripts double as regression fixtures: the same file drives the CLI and
//! the test suite.

mod playback;
mod script;

pub use playback::{Playback, TickRecord};
pub use script::{Script, ScriptError, Segment, SegmentLength, Viewport};
