//! Easing functions for animation interpolation.
//!
//! Provides the easing curves the splash phases use. All functions are
//! cheap closed-form polynomials.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Decelerating ease-out (fast start, slow finish).
    /// Formula: 1 - (1-t)²
    DecelerateOut,
    /// Overshoot: runs past the target before settling on it.
    /// Formula: (k+1)·(t-1)³ + k·(t-1)² + 1 with tension k.
    Overshoot {
        /// Tension; higher values overshoot further past the target.
        tension: f32,
    },
}

impl EasingFunction {
    /// Overshoot with the tension the ring-collapse snap uses.
    pub const SNAP: EasingFunction =
        EasingFunction::Overshoot { tension: 6.0 };

    /// Evaluate the easing function at time t.
    ///
    /// `Linear` and `DecelerateOut` clamp their input to [0.0, 1.0] and
    /// return a value in the same range. `Overshoot` is left unclamped on
    /// both ends: its output exceeds 1.0 over part of the curve, and when a
    /// tick overshoots a phase boundary the raw input may leave [0, 1] and
    /// produce a negative value. Callers that feed the result into a radius
    /// clamp it at zero.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            EasingFunction::Linear => t.clamp(0.0, 1.0),
            EasingFunction::DecelerateOut => {
                let omt = 1.0 - t.clamp(0.0, 1.0);
                1.0 - omt * omt
            }
            EasingFunction::Overshoot { tension } => {
                let u = t - 1.0;
                (tension + 1.0) * u * u * u + tension * u * u + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_linear_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_decelerate_endpoints() {
        let decel = EasingFunction::DecelerateOut;
        assert_eq!(decel.evaluate(0.0), 0.0);
        assert_eq!(decel.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(decel.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_decelerate_is_fast_start() {
        let decel = EasingFunction::DecelerateOut;
        let result_at_quarter = decel.evaluate(0.25);
        assert!(
            result_at_quarter > 0.25,
            "Decelerate should have value > 0.25 at t=0.25, got {}",
            result_at_quarter
        );
    }

    #[test]
    fn test_decelerate_monotone() {
        let decel = EasingFunction::DecelerateOut;
        let mut prev = decel.evaluate(0.0);
        for i in 1..=20 {
            let value = decel.evaluate(i as f32 / 20.0);
            assert!(
                value >= prev,
                "Decelerate must be monotone non-decreasing, {value} < {prev}"
            );
            prev = value;
        }
    }

    #[test]
    fn test_overshoot_endpoints() {
        let snap = EasingFunction::SNAP;
        assert!(snap.evaluate(0.0).abs() < 1e-6);
        assert!((snap.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_overshoot_exceeds_one_in_interior() {
        // With tension 6, the curve peaks at t = 3/7 with value 1 + 32/49.
        let snap = EasingFunction::SNAP;
        let peak = snap.evaluate(3.0 / 7.0);
        assert!(
            peak > 1.5,
            "Snap tension should overshoot well past 1.0, got {peak}"
        );
    }

    #[test]
    fn test_overshoot_unclamped_outside_range() {
        // Past-the-end inputs from an overshooting final tick go negative;
        // the state machine clamps the resulting radius, not the curve.
        let snap = EasingFunction::SNAP;
        assert!(snap.evaluate(-0.1) < 0.0);
        assert!(snap.evaluate(1.1) > 1.0);
    }
}
