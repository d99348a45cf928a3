//! View geometry derived from the host-provided size.

use glam::Vec2;

/// Size-derived values the renderer and state machine need every frame.
///
/// The center point and diagonal are cached at resize time so per-tick code
/// never recomputes them. The diagonal is the largest radius the expanding
/// hole can need to cover the whole view from its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewGeometry {
    width: f32,
    height: f32,
    center: Vec2,
    diagonal: f32,
}

impl ViewGeometry {
    /// Construct from a view size in surface units. Negative dimensions are
    /// treated as zero.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self {
            width,
            height,
            center: Vec2::new(width / 2.0, height / 2.0),
            diagonal: width.hypot(height),
        }
    }

    /// View width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// View height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// View center point.
    #[must_use]
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    /// Corner-to-corner distance; upper bound for the hole radius.
    #[must_use]
    pub const fn diagonal(&self) -> f32 {
        self.diagonal
    }

    /// Position of a ring circle at `angle` radians.
    ///
    /// Angle zero is straight up from the center; angles increase clockwise,
    /// in a y-down surface coordinate system.
    #[must_use]
    pub fn ring_position(&self, angle: f32, ring_radius: f32) -> Vec2 {
        self.center + ring_radius * Vec2::new(angle.sin(), -angle.cos())
    }
}

impl Default for ViewGeometry {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_diagonal() {
        let geom = ViewGeometry::new(300.0, 300.0);
        assert_eq!(geom.center(), Vec2::new(150.0, 150.0));
        assert!(
            (geom.diagonal() - 424.26407).abs() < 1e-3,
            "300x300 diagonal should be ~424.26, got {}",
            geom.diagonal()
        );
    }

    #[test]
    fn test_ring_position_at_zero_angle_is_above_center() {
        let geom = ViewGeometry::new(100.0, 100.0);
        let pos = geom.ring_position(0.0, 30.0);
        assert!((pos.x - 50.0).abs() < 1e-5);
        assert!((pos.y - 20.0).abs() < 1e-5, "y-down: up means smaller y");
    }

    #[test]
    fn test_ring_position_quarter_turn() {
        let geom = ViewGeometry::new(100.0, 100.0);
        let pos =
            geom.ring_position(std::f32::consts::FRAC_PI_2, 30.0);
        assert!((pos.x - 80.0).abs() < 1e-4, "quarter turn points right");
        assert!((pos.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_negative_size_clamps_to_zero() {
        let geom = ViewGeometry::new(-10.0, -20.0);
        assert_eq!(geom.width(), 0.0);
        assert_eq!(geom.height(), 0.0);
        assert_eq!(geom.diagonal(), 0.0);
    }
}
