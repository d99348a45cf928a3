//! Splash configuration with TOML preset support.
//!
//! All tweakable settings (radii, durations, colors, the detach flag) are
//! consolidated here. Options serialize to/from TOML; every field has a
//! default so partial files (e.g. only overriding `rotation_duration_ms`)
//! work correctly. Options are immutable for the lifetime of one animation
//! run.

use std::path::Path;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::{Color, Palette};
use crate::error::SplashError;

/// Top-level splash configuration.
///
/// Radii are density-independent units; `density` converts them to surface
/// units, standing in for whatever pixel-density scale the host platform
/// reports.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct SplashOptions {
    /// Ask the host container to detach the splash when the animation ends.
    pub remove_from_parent_on_end: bool,
    /// Distance from the view center to each circle center, in
    /// density-independent units.
    pub rotation_radius: f32,
    /// Radius of each circle, in density-independent units.
    pub circle_radius: f32,
    /// Scale from density-independent units to surface units.
    pub density: f32,
    /// Background color filled behind the circles.
    pub background: Color,
    /// Time for one full rotation of the ring.
    pub rotation_duration_ms: u64,
    /// Time for the ring to collapse into a single circle.
    pub merge_duration_ms: u64,
    /// Time for the merged circle to shrink to a point.
    pub singular_duration_ms: u64,
    /// Time for the transparent hole to cover the view.
    pub expand_duration_ms: u64,
    /// Circle colors in angular slot order.
    pub palette: Palette,
}

impl Default for SplashOptions {
    fn default() -> Self {
        Self {
            remove_from_parent_on_end: true,
            rotation_radius: 30.0,
            circle_radius: 6.0,
            density: 1.0,
            background: Color::rgb(238, 236, 226),
            rotation_duration_ms: 1200,
            merge_duration_ms: 400,
            singular_duration_ms: 250,
            expand_duration_ms: 600,
            palette: Palette::default(),
        }
    }
}

impl SplashOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(SplashOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SplashError> {
        let content = std::fs::read_to_string(path).map_err(SplashError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SplashError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SplashError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SplashError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SplashError::Io)?;
        }
        std::fs::write(path, content).map_err(SplashError::Io)
    }

    /// Ring radius in surface units.
    #[must_use]
    pub fn scaled_rotation_radius(&self) -> f32 {
        self.rotation_radius * self.density
    }

    /// Circle radius in surface units.
    #[must_use]
    pub fn scaled_circle_radius(&self) -> f32 {
        self.circle_radius * self.density
    }

    /// Rotation period as a [`Duration`].
    #[must_use]
    pub const fn rotation_duration(&self) -> Duration {
        Duration::from_millis(self.rotation_duration_ms)
    }

    /// Merge phase duration.
    #[must_use]
    pub const fn merge_duration(&self) -> Duration {
        Duration::from_millis(self.merge_duration_ms)
    }

    /// Singular phase duration.
    #[must_use]
    pub const fn singular_duration(&self) -> Duration {
        Duration::from_millis(self.singular_duration_ms)
    }

    /// Expand phase duration.
    #[must_use]
    pub const fn expand_duration(&self) -> Duration {
        Duration::from_millis(self.expand_duration_ms)
    }

    /// Total duration of the disappear animator (merge + singular +
    /// expand); the denominator for listener progress fractions.
    #[must_use]
    pub const fn disappear_duration(&self) -> Duration {
        Duration::from_millis(
            self.merge_duration_ms
                + self.singular_duration_ms
                + self.expand_duration_ms,
        )
    }
}
