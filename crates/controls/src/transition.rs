use crate::easing::Curve;
use crate::state::ParamState;

/// Number of ticks an eased transition runs for.
pub const TRANSITION_STEPS: u32 = 180;

/// Where a transition blends from.
///
/// A transition started while a previous one was still running wraps that
/// previous transition instead of sampling it once: evaluating the origin
/// recursively each tick keeps the retargeted animation continuous with
/// whatever was on screen, rather than snapping to a stale snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOrigin {
    /// A fixed starting snapshot.
    Snapshot(ParamState),
    /// A superseded transition, still advanced once per tick through here.
    Chained(Box<Transition>),
}

/// A time-boxed eased blend toward a target snapshot.
///
/// Two states only: running (`step < TRANSITION_STEPS`) and complete
/// (`step == TRANSITION_STEPS`), and it never goes backwards. Once complete,
/// [`Transition::advance`] keeps returning the target unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    origin: TransitionOrigin,
    target: ParamState,
    step: u32,
}

impl Transition {
    /// Starts a transition from a fixed snapshot.
    pub fn from_snapshot(origin: ParamState, target: ParamState) -> Self {
        Self {
            origin: TransitionOrigin::Snapshot(origin),
            target,
            step: 0,
        }
    }

    /// Starts a transition that blends away from a still-running one.
    pub fn from_transition(origin: Transition, target: ParamState) -> Self {
        Self {
            origin: TransitionOrigin::Chained(Box::new(origin)),
            target,
            step: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.step == TRANSITION_STEPS
    }

    pub fn target(&self) -> ParamState {
        self.target
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Produces the next blended state and advances the step counter.
    ///
    /// Call `n` evaluates the easing at `n / TRANSITION_STEPS`, so the final
    /// call lands on the target; it is returned directly rather than through
    /// the blend so no floating-point residue survives. Advancing a chained
    /// origin drives the inner transition's own counter as a side effect.
    pub fn advance(&mut self) -> ParamState {
        if self.is_complete() {
            return self.target;
        }

        let base = match &mut self.origin {
            TransitionOrigin::Snapshot(snapshot) => *snapshot,
            TransitionOrigin::Chained(inner) => inner.advance(),
        };

        self.step += 1;
        if self.step == TRANSITION_STEPS {
            return self.target;
        }

        let eased = Curve::CubicInOut.sample(self.step as f32 / TRANSITION_STEPS as f32);
        base + (self.target - base) * eased
    }
}
