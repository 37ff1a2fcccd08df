use std::collections::HashSet;

use crossbeam_channel::Sender;
use serde::{Deserialize, Serialize};

/// Logical keyboard keys the control engine understands.
///
/// Hosts translate whatever their windowing layer reports into this enum and
/// hand the engine the set of keys currently held. The lowercase serde names
/// are what replay scripts use (`"keyi"`, `"digit3"`, `"shift"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    KeyA,
    KeyD,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyS,
    KeyW,
    KeyX,
    KeyZ,
    Comma,
    Period,
    Tab,
    Space,
    Shift,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
}

impl Key {
    /// Preset slot carried by this key, if it is a digit key.
    pub fn digit(self) -> Option<u8> {
        match self {
            Key::Digit0 => Some(0),
            Key::Digit1 => Some(1),
            Key::Digit2 => Some(2),
            Key::Digit3 => Some(3),
            Key::Digit4 => Some(4),
            Key::Digit5 => Some(5),
            Key::Digit6 => Some(6),
            Key::Digit7 => Some(7),
            Key::Digit8 => Some(8),
            Key::Digit9 => Some(9),
            _ => None,
        }
    }

    /// Digit key for a preset slot; `None` for slots above 9.
    pub fn from_digit(slot: u8) -> Option<Self> {
        match slot {
            0 => Some(Key::Digit0),
            1 => Some(Key::Digit1),
            2 => Some(Key::Digit2),
            3 => Some(Key::Digit3),
            4 => Some(Key::Digit4),
            5 => Some(Key::Digit5),
            6 => Some(Key::Digit6),
            7 => Some(Key::Digit7),
            8 => Some(Key::Digit8),
            9 => Some(Key::Digit9),
            _ => None,
        }
    }
}

/// The set of keys held during a tick.
pub type KeySet = HashSet<Key>;

/// Raw input events produced outside the tick loop.
///
/// Pointer and orientation callbacks typically arrive on a different thread
/// than the render loop; they are funneled through a channel and drained at
/// the start of each tick so the live state is only ever touched from one
/// place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Relative pointer motion in physical pixels.
    PointerDelta { dx: f32, dy: f32 },
    /// Device-orientation rates (yaw, pitch, roll).
    Orientation { yaw: f64, pitch: f64, roll: f64 },
    /// Viewport size used to scale pointer deltas.
    Viewport { width: f32, height: f32 },
}

/// Cloneable handle for delivering [`InputEvent`]s to the engine from any
/// thread.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<InputEvent>,
}

impl InputSender {
    pub(crate) fn new(tx: Sender<InputEvent>) -> Self {
        Self { tx }
    }

    /// Enqueues an event for the next tick. Events sent after the engine has
    /// been dropped are discarded.
    pub fn send(&self, event: InputEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!(?event, "input event dropped: controls no longer running");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_round_trip_slots() {
        for slot in 0..=9u8 {
            let key = Key::from_digit(slot).expect("digit key");
            assert_eq!(key.digit(), Some(slot));
        }
        assert_eq!(Key::from_digit(10), None);
        assert_eq!(Key::KeyA.digit(), None);
        assert_eq!(Key::Shift.digit(), None);
    }

    #[test]
    fn keys_use_lowercase_names() {
        let json = serde_json::to_string(&Key::ArrowUp).unwrap();
        assert_eq!(json, "\"arrowup\"");
        let key: Key = serde_json::from_str("\"digit7\"").unwrap();
        assert_eq!(key, Key::Digit7);
        let key: Key = serde_json::from_str("\"comma\"").unwrap();
        assert_eq!(key, Key::Comma);
    }
}
