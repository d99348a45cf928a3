//! Animation phases and their per-frame parametric math.
//!
//! Each phase computes one scalar draw parameter from its local elapsed
//! time; the functions here are pure so they can be tested without a state
//! machine around them.

use std::f32::consts::TAU;
use std::time::Duration;

use crate::util::easing::EasingFunction;

/// The active phase of the splash animation.
///
/// Phases advance one-directionally: Rotating -> Merging -> Singular ->
/// Expanding -> Done. Each timed variant carries its own local clock;
/// Merging also carries the draw values captured when the disappear request
/// arrived, so the collapse starts exactly where the rotation left off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Circles orbit the center. Repeats forever; only an external
    /// disappear request advances past it.
    Rotating {
        /// Time since the phase began.
        elapsed: Duration,
    },
    /// The ring collapses toward the center with an overshoot snap.
    Merging {
        /// Time since the phase began.
        elapsed: Duration,
        /// Rotation angle at the moment the disappear request arrived.
        start_angle: f32,
        /// Ring radius at the moment the disappear request arrived.
        start_radius: f32,
    },
    /// The merged single circle shrinks to a point.
    Singular {
        /// Time since the phase began.
        elapsed: Duration,
    },
    /// A transparent hole grows to cover the view. Last timed phase.
    Expanding {
        /// Time since the phase began.
        elapsed: Duration,
    },
    /// Animation finished; further ticks are no-ops.
    Done,
}

impl Phase {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rotating { .. } => "rotating",
            Self::Merging { .. } => "merging",
            Self::Singular { .. } => "singular",
            Self::Expanding { .. } => "expanding",
            Self::Done => "done",
        }
    }

    /// Whether the animation has reached its inert terminal state.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Normalized progress of `elapsed` through `duration`.
///
/// Zero durations resolve to 1.0 (already complete), so a misconfigured
/// phase can neither divide by zero nor stall; it transitions on the next
/// tick. The result is not capped at 1.0.
#[must_use]
pub fn phase_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        1.0
    } else {
        elapsed.as_secs_f32() / duration.as_secs_f32()
    }
}

/// Wrap an angle to [0, 2pi).
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for inputs just below zero.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Rotation angle after `elapsed` time at one full turn per `period`.
///
/// Always in [0, 2pi). A zero period pins the angle at zero rather than
/// dividing by it.
#[must_use]
pub fn rotation_angle(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 0.0;
    }
    let turns = elapsed.as_secs_f32() / period.as_secs_f32();
    wrap_angle(turns.fract() * TAU)
}

/// Ring radius while the circles merge toward the center.
///
/// Follows `start_radius * overshoot(1 - t)`: the ring briefly swings
/// outward past its starting radius before snapping in. The raw value can
/// dip below zero when the final tick overshoots the duration; callers
/// clamp it for rendering. At or past `duration` the radius is exactly 0.
#[must_use]
pub fn merge_ring_radius(
    elapsed: Duration,
    duration: Duration,
    start_radius: f32,
) -> f32 {
    if elapsed >= duration {
        return 0.0;
    }
    let t = phase_progress(elapsed, duration);
    start_radius * EasingFunction::SNAP.evaluate(1.0 - t)
}

/// Radius of the single merged circle as it shrinks to a point.
///
/// Same overshoot curve as [`merge_ring_radius`], applied to the circle
/// radius. At or past `duration` the radius is exactly 0.
#[must_use]
pub fn singular_circle_radius(
    elapsed: Duration,
    duration: Duration,
    start_radius: f32,
) -> f32 {
    if elapsed >= duration {
        return 0.0;
    }
    let t = phase_progress(elapsed, duration);
    start_radius * EasingFunction::SNAP.evaluate(1.0 - t)
}

/// Radius of the transparent hole as it expands over the view.
///
/// Decelerating growth (fast start, slow finish), monotone non-decreasing,
/// reaching `max_radius` at `elapsed >= duration` and staying there.
#[must_use]
pub fn hole_radius(
    elapsed: Duration,
    duration: Duration,
    max_radius: f32,
) -> f32 {
    let t = phase_progress(elapsed, duration).min(1.0);
    max_radius * EasingFunction::DecelerateOut.evaluate(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    // =========================================================================
    // rotation_angle tests
    // =========================================================================

    #[test]
    fn test_rotation_angle_accumulation() {
        // After N ticks of spacing dt, angle == (N*dt / period mod 1) * 2pi.
        let period = ms(1200);
        for n in [1_u64, 10, 75, 76, 300, 1000] {
            let elapsed = ms(16 * n);
            let angle = rotation_angle(elapsed, period);
            let expected =
                ((n as f32 * 16.0 / 1200.0).fract()) * TAU;
            assert!(
                (angle - expected).abs() < 1e-4,
                "after {n} ticks expected {expected}, got {angle}"
            );
        }
    }

    #[test]
    fn test_rotation_angle_half_period_is_pi() {
        let angle = rotation_angle(ms(600), ms(1200));
        assert!(
            (angle - std::f32::consts::PI).abs() < EPSILON,
            "half a period should be pi, got {angle}"
        );
    }

    #[test]
    fn test_rotation_angle_always_in_range() {
        let period = ms(1200);
        for i in 0..500 {
            let angle = rotation_angle(ms(i * 37), period);
            assert!(
                (0.0..TAU).contains(&angle),
                "angle {angle} out of [0, 2pi) at elapsed {}ms",
                i * 37
            );
        }
    }

    #[test]
    fn test_rotation_angle_zero_period() {
        assert_eq!(rotation_angle(ms(500), Duration::ZERO), 0.0);
    }

    // =========================================================================
    // wrap_angle tests
    // =========================================================================

    #[test]
    fn test_wrap_angle_range() {
        for raw in [-10.0_f32, -TAU, -0.1, 0.0, 1.0, TAU, 3.0 * TAU + 0.5] {
            let wrapped = wrap_angle(raw);
            assert!(
                (0.0..TAU).contains(&wrapped),
                "wrap_angle({raw}) = {wrapped} out of range"
            );
        }
    }

    #[test]
    fn test_wrap_angle_identity_in_range() {
        assert!((wrap_angle(1.5) - 1.5).abs() < EPSILON);
    }

    // =========================================================================
    // merge_ring_radius tests
    // =========================================================================

    #[test]
    fn test_merge_starts_at_start_radius() {
        let r = merge_ring_radius(Duration::ZERO, ms(400), 30.0);
        assert!(
            (r - 30.0).abs() < 1e-3,
            "merge should start at the captured radius, got {r}"
        );
    }

    #[test]
    fn test_merge_reaches_zero_at_duration() {
        assert_eq!(merge_ring_radius(ms(400), ms(400), 30.0), 0.0);
        assert_eq!(merge_ring_radius(ms(500), ms(400), 30.0), 0.0);
    }

    #[test]
    fn test_merge_overshoots_outward_mid_curve() {
        // The snap curve swings the ring outward past its start radius
        // early in the phase (overshoot peak at t = 4/7 of the countdown).
        let r = merge_ring_radius(ms(100), ms(400), 30.0);
        assert!(
            r > 30.0,
            "ring should briefly exceed the start radius, got {r}"
        );
    }

    #[test]
    fn test_merge_zero_duration_resolves_instantly() {
        assert_eq!(merge_ring_radius(Duration::ZERO, Duration::ZERO, 30.0), 0.0);
    }

    // =========================================================================
    // singular_circle_radius tests
    // =========================================================================

    #[test]
    fn test_singular_endpoints() {
        let r0 = singular_circle_radius(Duration::ZERO, ms(250), 6.0);
        assert!((r0 - 6.0).abs() < 1e-4);
        assert_eq!(singular_circle_radius(ms(250), ms(250), 6.0), 0.0);
    }

    // =========================================================================
    // hole_radius tests
    // =========================================================================

    #[test]
    fn test_hole_monotone_and_capped() {
        let duration = ms(600);
        let max = 424.26;
        let mut prev = hole_radius(Duration::ZERO, duration, max);
        assert_eq!(prev, 0.0);
        for i in 1..=80 {
            let r = hole_radius(ms(i * 10), duration, max);
            assert!(
                r >= prev,
                "hole radius must not shrink: {r} < {prev} at {}ms",
                i * 10
            );
            prev = r;
        }
        assert!(
            (hole_radius(ms(600), duration, max) - max).abs() < EPSILON,
            "hole should equal the diagonal at the duration"
        );
        assert!(
            (hole_radius(ms(900), duration, max) - max).abs() < EPSILON,
            "hole stays at the diagonal past the duration"
        );
    }

    #[test]
    fn test_hole_zero_duration_resolves_instantly() {
        let r = hole_radius(Duration::ZERO, Duration::ZERO, 100.0);
        assert_eq!(r, 100.0);
    }

    // =========================================================================
    // phase_progress tests
    // =========================================================================

    #[test]
    fn test_progress_zero_duration_is_complete() {
        assert_eq!(phase_progress(Duration::ZERO, Duration::ZERO), 1.0);
        assert_eq!(phase_progress(ms(10), Duration::ZERO), 1.0);
    }

    #[test]
    fn test_progress_uncapped() {
        let p = phase_progress(ms(300), ms(200));
        assert!((p - 1.5).abs() < EPSILON, "progress is not capped, got {p}");
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::Rotating { elapsed: ms(0) }.name(), "rotating");
        assert_eq!(Phase::Done.name(), "done");
        assert!(Phase::Done.is_done());
        assert!(!Phase::Singular { elapsed: ms(0) }.is_done());
    }
}
