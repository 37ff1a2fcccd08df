use crate::input::Key;
use crate::state::ParamState;

/// Animatable scalar axes of the parameter state.
///
/// Each axis selects a value field and its paired momentum field. Using an
/// explicit enum instead of field pointers keeps the binding table plain data
/// and makes every access site visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Zoom,
    Rotation,
    PositionX,
    PositionY,
    ColorOffset,
    Linearity,
}

impl Axis {
    /// Mutable access to the integrated value this axis drives.
    pub fn value_mut(self, state: &mut ParamState) -> &mut f32 {
        match self {
            Axis::Zoom => &mut state.zoom,
            Axis::Rotation => &mut state.rotation,
            Axis::PositionX => &mut state.position.x,
            Axis::PositionY => &mut state.position.y,
            Axis::ColorOffset => &mut state.color_offset,
            Axis::Linearity => &mut state.linearity,
        }
    }

    /// Mutable access to the momentum accumulator for this axis.
    pub fn momentum_mut(self, state: &mut ParamState) -> &mut f32 {
        match self {
            Axis::Zoom => &mut state.zoom_vel,
            Axis::Rotation => &mut state.rotation_vel,
            Axis::PositionX => &mut state.position_vel.x,
            Axis::PositionY => &mut state.position_vel.y,
            Axis::ColorOffset => &mut state.color_offset_vel,
            Axis::Linearity => &mut state.linearity_vel,
        }
    }

    /// Current value of the axis.
    pub fn value(self, state: &ParamState) -> f32 {
        match self {
            Axis::Zoom => state.zoom,
            Axis::Rotation => state.rotation,
            Axis::PositionX => state.position.x,
            Axis::PositionY => state.position.y,
            Axis::ColorOffset => state.color_offset,
            Axis::Linearity => state.linearity,
        }
    }

    /// Current momentum of the axis.
    pub fn momentum(self, state: &ParamState) -> f32 {
        match self {
            Axis::Zoom => state.zoom_vel,
            Axis::Rotation => state.rotation_vel,
            Axis::PositionX => state.position_vel.x,
            Axis::PositionY => state.position_vel.y,
            Axis::ColorOffset => state.color_offset_vel,
            Axis::Linearity => state.linearity_vel,
        }
    }
}

/// One key-to-axis association: which keys nudge the axis momentum down,
/// which nudge it up.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub axis: Axis,
    pub decrement: &'static [Key],
    pub increment: &'static [Key],
}

/// The fixed binding table, one entry per axis. Built once, never mutated.
///
/// Arrow keys mirror the IJKL cluster so the bindings work one-handed on
/// either side of the keyboard.
pub const BINDINGS: [Binding; 6] = [
    Binding {
        axis: Axis::Zoom,
        decrement: &[Key::ArrowUp, Key::KeyI],
        increment: &[Key::ArrowDown, Key::KeyK],
    },
    Binding {
        axis: Axis::Rotation,
        decrement: &[Key::ArrowLeft, Key::KeyJ],
        increment: &[Key::ArrowRight, Key::KeyL],
    },
    Binding {
        axis: Axis::PositionX,
        decrement: &[Key::KeyA],
        increment: &[Key::KeyD],
    },
    Binding {
        axis: Axis::PositionY,
        decrement: &[Key::KeyS],
        increment: &[Key::KeyW],
    },
    Binding {
        axis: Axis::ColorOffset,
        decrement: &[Key::KeyX],
        increment: &[Key::KeyZ],
    },
    Binding {
        axis: Axis::Linearity,
        decrement: &[Key::Comma],
        increment: &[Key::Period],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_axis_has_exactly_one_binding() {
        let axes: Vec<Axis> = BINDINGS.iter().map(|b| b.axis).collect();
        for axis in [
            Axis::Zoom,
            Axis::Rotation,
            Axis::PositionX,
            Axis::PositionY,
            Axis::ColorOffset,
            Axis::Linearity,
        ] {
            assert_eq!(axes.iter().filter(|a| **a == axis).count(), 1);
        }
    }

    #[test]
    fn no_key_is_bound_to_more_than_one_direction() {
        let mut seen = Vec::new();
        for binding in &BINDINGS {
            for key in binding.decrement.iter().chain(binding.increment.iter()) {
                assert!(!seen.contains(key), "{key:?} bound twice");
                seen.push(*key);
            }
        }
    }

    #[test]
    fn accessors_reach_the_paired_fields() {
        let mut state = ParamState::default();
        for binding in &BINDINGS {
            *binding.axis.momentum_mut(&mut state) = 0.5;
            *binding.axis.value_mut(&mut state) = 2.0;
            assert_eq!(binding.axis.momentum(&state), 0.5);
            assert_eq!(binding.axis.value(&state), 2.0);
            *binding.axis.momentum_mut(&mut state) = 0.0;
            *binding.axis.value_mut(&mut state) = 0.0;
        }
        // Spot-check that the position axes hit separate components.
        *Axis::PositionX.value_mut(&mut state) = 0.25;
        assert_eq!(state.position.x, 0.25);
        assert_eq!(state.position.y, 0.0);
    }
}
