/// Easing curves for remapping a normalized time fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    Smoothstep,
    /// Cubic ease-in-out: accelerates through the first half, decelerates
    /// through the second. Used by parameter transitions.
    CubicInOut,
}

impl Curve {
    /// Samples the curve at `t`, clamping the input to `[0, 1]`.
    pub fn sample(self, t: f32) -> f32 {
        let clamped = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => clamped,
            Curve::Smoothstep => clamped * clamped * (3.0 - 2.0 * clamped),
            Curve::CubicInOut => {
                if clamped < 0.5 {
                    4.0 * clamped * clamped * clamped
                } else {
                    let f = -2.0 * clamped + 2.0;
                    1.0 - f * f * f / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_their_endpoints() {
        for curve in [Curve::Linear, Curve::Smoothstep, Curve::CubicInOut] {
            assert!((curve.sample(0.0) - 0.0).abs() < 1e-6);
            assert!((curve.sample(1.0) - 1.0).abs() < 1e-6);
        }
        assert_eq!(Curve::CubicInOut.sample(1.0), 1.0);
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in [Curve::Linear, Curve::Smoothstep, Curve::CubicInOut] {
            let mut last = 0.0;
            for step in 0..=100 {
                let sample = curve.sample(step as f32 / 100.0);
                assert!(sample >= last - f32::EPSILON);
                last = sample;
            }
        }
    }

    #[test]
    fn cubic_is_symmetric_around_midpoint() {
        let curve = Curve::CubicInOut;
        assert!((curve.sample(0.5) - 0.5).abs() < 1e-6);
        for step in 0..=50 {
            let t = step as f32 / 100.0;
            let early = curve.sample(t);
            let late = curve.sample(1.0 - t);
            assert!((early + late - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn cubic_accelerates_then_decelerates() {
        let curve = Curve::CubicInOut;
        assert!(curve.sample(0.25) < 0.25);
        assert!(curve.sample(0.75) > 0.75);
    }

    #[test]
    fn sample_clamps_out_of_range_input() {
        assert_eq!(Curve::CubicInOut.sample(-2.0), 0.0);
        assert_eq!(Curve::CubicInOut.sample(3.0), 1.0);
    }
}
