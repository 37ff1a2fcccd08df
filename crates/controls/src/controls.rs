use crossbeam_channel::{unbounded, Receiver};
use tracing::debug;

use crate::bindings::BINDINGS;
use crate::input::{InputEvent, InputSender, Key, KeySet};
use crate::presets::PresetBank;
use crate::state::{ParamState, Vec2};
use crate::transition::Transition;

/// Per-tick momentum nudge while an axis key is held.
pub const BASE_STEP: f32 = 0.00005;

/// Geometric decay applied to an axis momentum on ticks without input.
pub const FALLOFF: f32 = 0.95;

/// Held-shift multiplier on the per-tick step.
const SHIFT_MULTIPLIER: f32 = 10.0;

/// Pointer deltas are scaled down by viewport size and then by this.
const POINTER_DAMP: f32 = 3.0;

/// Orientation rates are divided by this before feeding the momenta.
const ORIENTATION_DAMP: f64 = 3000.0;

/// What pointer motion steers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerMode {
    /// Horizontal motion turns, vertical motion zooms.
    #[default]
    Zoom,
    /// Motion pans the position.
    Pan,
}

/// The parameter integrator: owns the live [`ParamState`], the preset bank,
/// and at most one active transition, and turns per-tick key sets plus queued
/// pointer/orientation events into the next parameter state.
///
/// All mutation happens inside [`Controls::tick`] and the explicit
/// store/recall calls. Asynchronous producers hand events to an
/// [`InputSender`] instead of touching the state; the queue is drained at the
/// start of every tick.
pub struct Controls {
    state: ParamState,
    mode: PointerMode,
    viewport: Option<(f32, f32)>,
    presets: PresetBank,
    transition: Option<Transition>,
    events: Receiver<InputEvent>,
    sender: InputSender,
}

impl Controls {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            state: ParamState::default(),
            mode: PointerMode::default(),
            viewport: None,
            presets: PresetBank::new(),
            transition: None,
            events: rx,
            sender: InputSender::new(tx),
        }
    }

    /// The current live state, as of the last tick.
    pub fn state(&self) -> ParamState {
        self.state
    }

    pub fn mode(&self) -> PointerMode {
        self.mode
    }

    pub fn presets(&self) -> &PresetBank {
        &self.presets
    }

    pub fn presets_mut(&mut self) -> &mut PresetBank {
        &mut self.presets
    }

    /// Cloneable handle for delivering events from other threads.
    pub fn input_sender(&self) -> InputSender {
        self.sender.clone()
    }

    /// Records the viewport used to scale pointer deltas. Idempotent.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport = Some((width, height));
    }

    /// Feeds a relative pointer motion into the momenta for the current
    /// pointer mode. Deltas arriving before any viewport size is known are
    /// dropped, since they cannot be scaled.
    pub fn on_pointer_delta(&mut self, dx: f32, dy: f32) {
        let Some((width, height)) = self.viewport else {
            debug!("pointer delta ignored: no viewport size yet");
            return;
        };
        let adjusted_dx = dx / width / POINTER_DAMP;
        let adjusted_dy = dy / height / POINTER_DAMP;
        match self.mode {
            PointerMode::Zoom => {
                self.state.rotation_vel += adjusted_dx;
                self.state.zoom_vel += adjusted_dy;
            }
            PointerMode::Pan => {
                self.state.position_vel += Vec2::new(adjusted_dx, adjusted_dy);
            }
        }
    }

    /// Feeds device-orientation rates into the momenta.
    pub fn on_orientation(&mut self, yaw: f64, pitch: f64, roll: f64) {
        self.state.rotation_vel += (roll / ORIENTATION_DAMP) as f32;
        self.state.zoom_vel += (yaw / ORIENTATION_DAMP) as f32;
        self.state.position_vel += Vec2::new(
            (pitch.sin() / ORIENTATION_DAMP) as f32,
            (pitch.cos() / ORIENTATION_DAMP) as f32,
        );
    }

    /// Runs one integration step against the set of currently-held keys and
    /// returns the resulting state.
    ///
    /// Order per tick: drain queued events, advance any running transition
    /// (its output replaces the live state for this tick), apply mode toggle
    /// and reset keys, integrate each binding (decrement wins over a
    /// simultaneous increment; unpressed axes decay by [`FALLOFF`]),
    /// normalize, then dispatch a held digit as a preset store (with shift)
    /// or recall. When several digits are held the lowest wins.
    pub fn tick(&mut self, pressed: &KeySet) -> ParamState {
        self.drain_events();

        if let Some(transition) = self.transition.as_mut() {
            if !transition.is_complete() {
                self.state = transition.advance();
            }
        }

        if pressed.contains(&Key::Tab) {
            self.mode = match self.mode {
                PointerMode::Zoom => PointerMode::Pan,
                PointerMode::Pan => PointerMode::Zoom,
            };
            debug!(mode = ?self.mode, "pointer mode toggled");
        }

        if pressed.contains(&Key::Space) {
            self.state.reset();
        }

        let step = BASE_STEP
            * if pressed.contains(&Key::Shift) {
                SHIFT_MULTIPLIER
            } else {
                1.0
            };

        for binding in &BINDINGS {
            let momentum = binding.axis.momentum_mut(&mut self.state);
            if binding.decrement.iter().any(|key| pressed.contains(key)) {
                *momentum -= step;
            } else if binding.increment.iter().any(|key| pressed.contains(key)) {
                *momentum += step;
            } else {
                *momentum *= FALLOFF;
            }
            let momentum = *momentum;
            *binding.axis.value_mut(&mut self.state) += momentum;
        }

        self.state.normalize();

        if let Some(slot) = pressed.iter().filter_map(|key| key.digit()).min() {
            if pressed.contains(&Key::Shift) {
                self.store_preset(slot);
            } else {
                self.recall_preset(slot);
            }
        }

        self.state
    }

    /// Snapshots the live state into `slot`, overwriting any prior snapshot.
    pub fn store_preset(&mut self, slot: u8) {
        if slot > 9 {
            debug!(slot, "store ignored: slot out of range");
            return;
        }
        debug!(slot, "storing preset");
        self.presets.store(slot, self.state);
    }

    /// Begins an eased transition toward the snapshot in `slot`; a no-op if
    /// the slot is empty. If a transition is already running it becomes the
    /// origin of the new one, so the retarget picks up from what is currently
    /// on screen.
    pub fn recall_preset(&mut self, slot: u8) {
        let Some(stored) = self.presets.get(slot) else {
            debug!(slot, "recall ignored: empty preset slot");
            return;
        };
        debug!(slot, "recalling preset");
        self.transition = Some(match self.transition.take() {
            Some(active) if !active.is_complete() => Transition::from_transition(active, stored),
            _ => Transition::from_snapshot(self.state, stored),
        });
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                InputEvent::PointerDelta { dx, dy } => self.on_pointer_delta(dx, dy),
                InputEvent::Orientation { yaw, pitch, roll } => {
                    self.on_orientation(yaw, pitch, roll)
                }
                InputEvent::Viewport { width, height } => self.set_viewport_size(width, height),
            }
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}
