use serde::Serialize;
use tracing::debug;

use controls::{Controls, KeySet, ParamState};

use crate::script::Script;

/// One tick of playback output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickRecord {
    pub tick: u64,
    #[serde(flatten)]
    pub state: ParamState,
}

/// Steps a [`Controls`] engine through a [`Script`], one tick at a time.
///
/// Segments are resolved to concrete key sets and tick counts up front; the
/// script itself is not needed afterwards. Pointer and orientation deltas are
/// fed to the engine immediately before each tick of their segment, matching
/// how a live host would deliver events between frames.
pub struct Playback {
    controls: Controls,
    segments: Vec<ResolvedSegment>,
    segment: usize,
    tick_in_segment: u32,
    tick: u64,
}

struct ResolvedSegment {
    held: KeySet,
    ticks: u32,
    pointer: Option<(f32, f32)>,
    orientation: Option<(f64, f64, f64)>,
}

impl Playback {
    pub fn new(mut controls: Controls, script: &Script) -> Self {
        if let Some(viewport) = script.viewport {
            controls.set_viewport_size(viewport.width, viewport.height);
        }
        let segments = script
            .segments
            .iter()
            .map(|segment| ResolvedSegment {
                held: segment.hold.iter().copied().collect(),
                ticks: segment.ticks(script.fps),
                pointer: segment.pointer.map(|[dx, dy]| (dx, dy)),
                orientation: segment.orientation.map(|[yaw, pitch, roll]| (yaw, pitch, roll)),
            })
            .collect();
        debug!(
            segments = script.segments.len(),
            ticks = script.total_ticks(),
            "playback resolved"
        );
        Self {
            controls,
            segments,
            segment: 0,
            tick_in_segment: 0,
            tick: 0,
        }
    }

    /// Runs the next tick, or returns `None` once the script is exhausted.
    pub fn step(&mut self) -> Option<TickRecord> {
        loop {
            let segment = self.segments.get(self.segment)?;
            if self.tick_in_segment < segment.ticks {
                break;
            }
            self.segment += 1;
            self.tick_in_segment = 0;
        }

        let segment = &self.segments[self.segment];
        if let Some((dx, dy)) = segment.pointer {
            self.controls.on_pointer_delta(dx, dy);
        }
        if let Some((yaw, pitch, roll)) = segment.orientation {
            self.controls.on_orientation(yaw, pitch, roll);
        }
        let state = self.controls.tick(&segment.held);

        self.tick_in_segment += 1;
        let record = TickRecord {
            tick: self.tick,
            state,
        };
        self.tick += 1;
        Some(record)
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Hands the engine back, with whatever state and presets the script
    /// left it in.
    pub fn into_controls(self) -> Controls {
        self.controls
    }
}
