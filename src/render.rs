//! Frame composition against an abstract drawing surface.

use glam::Vec2;

use crate::animation::draw_state::DrawState;
use crate::animation::phase::Phase;
use crate::color::{Color, Palette};
use crate::geometry::ViewGeometry;

/// Drawing surface the splash renders onto.
///
/// The three primitives are everything the animation needs: a full-surface
/// fill, filled circles for the ring, and a stroked circle whose stroke
/// forms the annulus around the expanding hole. Platform canvases, software
/// rasterizers, and test recorders all fit behind this.
pub trait DrawSurface {
    /// Fill the entire surface with `color`.
    fn fill(&mut self, color: Color);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw a stroked circle of the given stroke width, centered on the
    /// stroke (the painted band spans `radius +/- stroke_width / 2`).
    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        stroke_width: f32,
        color: Color,
    );
}

/// Composes one frame from the current draw parameters.
///
/// Holds the palette and background color up front so rendering a frame
/// allocates nothing: the palette slice is iterated in place and colors are
/// passed by value.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    palette: Palette,
    background: Color,
}

impl FrameRenderer {
    /// Create a renderer for the given palette and background.
    #[must_use]
    pub fn new(palette: Palette, background: Color) -> Self {
        Self { palette, background }
    }

    /// Compose one frame.
    ///
    /// Background first: an opaque fill while the hole is closed, or an
    /// annulus leaving the hole transparent once it opens. Then the
    /// foreground for the active phase: the full ring while rotating or
    /// merging, the single merged circle while singular, nothing while
    /// expanding or done.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        geometry: &ViewGeometry,
        draw: &DrawState,
        phase: Phase,
    ) {
        self.draw_background(surface, geometry, draw);
        match phase {
            Phase::Rotating { .. } | Phase::Merging { .. } => {
                self.draw_ring(surface, geometry, draw);
            }
            Phase::Singular { .. } => {
                surface.fill_circle(
                    geometry.center(),
                    draw.circle_radius,
                    draw.single_color,
                );
            }
            Phase::Expanding { .. } | Phase::Done => {}
        }
    }

    fn draw_background(
        &self,
        surface: &mut dyn DrawSurface,
        geometry: &ViewGeometry,
        draw: &DrawState,
    ) {
        if draw.hole_radius > 0.0 {
            let stroke_width = geometry.diagonal() - draw.hole_radius;
            let radius = draw.hole_radius + stroke_width / 2.0;
            surface.stroke_circle(
                geometry.center(),
                radius,
                stroke_width,
                self.background,
            );
        } else {
            surface.fill(self.background);
        }
    }

    fn draw_ring(
        &self,
        surface: &mut dyn DrawSurface,
        geometry: &ViewGeometry,
        draw: &DrawState,
    ) {
        let spacing = self.palette.slot_spacing();
        for (i, &color) in self.palette.colors().iter().enumerate() {
            let angle = draw.angle + i as f32 * spacing;
            let position = geometry.ring_position(angle, draw.ring_radius);
            surface.fill_circle(position, draw.circle_radius, color);
        }
    }
}
