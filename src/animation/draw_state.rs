//! Per-frame draw parameters shared by all phases.

use crate::color::Color;

/// The draw parameters a frame is composed from.
///
/// Exactly one live instance exists, owned by
/// [`SplashAnimation`](super::SplashAnimation); each phase mutates it in
/// place on tick, and the renderer reads it without copying. All radii stay
/// non-negative and the angle stays in [0, 2pi).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    /// Current rotation angle of slot 0, radians in [0, 2pi).
    pub angle: f32,
    /// Distance from the view center to each circle center.
    pub ring_radius: f32,
    /// Radius of each circle (or of the single merged circle).
    pub circle_radius: f32,
    /// Radius of the transparent hole; 0 until the expand phase.
    pub hole_radius: f32,
    /// Color of the single merged circle.
    pub single_color: Color,
}

impl DrawState {
    /// Initial draw state for the rotating phase.
    #[must_use]
    pub const fn new(
        ring_radius: f32,
        circle_radius: f32,
        single_color: Color,
    ) -> Self {
        Self {
            angle: 0.0,
            ring_radius,
            circle_radius,
            hole_radius: 0.0,
            single_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let draw = DrawState::new(30.0, 6.0, Color::rgb(255, 150, 0));
        assert_eq!(draw.angle, 0.0);
        assert_eq!(draw.ring_radius, 30.0);
        assert_eq!(draw.circle_radius, 6.0);
        assert_eq!(draw.hole_radius, 0.0);
    }
}
