//! Color values and the rotating-circle palette.

use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Construct from RGB channel values.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Ordered set of circle colors.
///
/// Insertion order defines the angular slot assignment on the ring: slot
/// `i` sits at `i * 2pi / len()` ahead of the current rotation angle. The
/// palette is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Construct from an ordered list of colors.
    ///
    /// An empty list falls back to the default palette so the renderer
    /// always has at least one slot to draw.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            warn!("empty splash palette, falling back to default colors");
            return Self::default();
        }
        Self(colors)
    }

    /// The colors in slot order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Number of circles on the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the palette is empty. Always false for palettes built via
    /// [`Palette::new`] or [`Palette::default`]; deserialized palettes may
    /// still be empty and are resolved by [`Palette::or_default`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace an empty (deserialized) palette with the default colors.
    #[must_use]
    pub fn or_default(self) -> Self {
        if self.is_empty() {
            Self::default()
        } else {
            self
        }
    }

    /// Angular spacing between adjacent slots, in radians.
    #[must_use]
    pub fn slot_spacing(&self) -> f32 {
        std::f32::consts::TAU / self.0.len().max(1) as f32
    }

    /// The color the ring collapses into: the first slot.
    #[must_use]
    pub fn merged_color(&self) -> Color {
        self.0.first().copied().unwrap_or(Color::rgb(255, 150, 0))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            Color::rgb(255, 150, 0),  // orange
            Color::rgb(2, 209, 172),  // aqua
            Color::rgb(255, 210, 0),  // yellow
            Color::rgb(0, 198, 255),  // blue
            Color::rgb(0, 224, 153),  // green
            Color::rgb(255, 56, 145), // pink
        ])
    }
}
