//! The splash state machine: phase transitions, draw-state updates, and
//! listener notification.

use std::time::Duration;

use log::{debug, warn};

use crate::geometry::ViewGeometry;
use crate::options::SplashOptions;

use super::draw_state::DrawState;
use super::listener::{HostContainer, SplashListener};
use super::phase::{self, Phase};

/// Drives the splash animation through its phases.
///
/// The machine owns the single live [`DrawState`] and the active [`Phase`].
/// Hosts call [`on_resize`](Self::on_resize) when the view size is known,
/// [`start`](Self::start) to begin rotating,
/// [`request_disappear`](Self::request_disappear) to trigger the collapse
/// sequence, and [`tick`](Self::tick) once per frame. Ticks are processed
/// to completion on the caller's thread; nothing here blocks or spawns.
pub struct SplashAnimation {
    options: SplashOptions,
    geometry: ViewGeometry,
    phase: Phase,
    draw: DrawState,
    started: bool,
    start_notified: bool,
    disappear_requested: bool,
    /// Time accumulated across the merge/singular/expand phases, used for
    /// listener progress fractions.
    disappear_elapsed: Duration,
    listener: Option<Box<dyn SplashListener>>,
    host: Option<Box<dyn HostContainer>>,
}

impl SplashAnimation {
    /// Create a machine with the given options. The view size starts at
    /// zero; hosts must call [`on_resize`](Self::on_resize) before the
    /// first render.
    #[must_use]
    pub fn new(mut options: SplashOptions) -> Self {
        options.palette = options.palette.clone().or_default();
        let draw = DrawState::new(
            options.scaled_rotation_radius(),
            options.scaled_circle_radius(),
            options.palette.merged_color(),
        );
        Self {
            options,
            geometry: ViewGeometry::default(),
            phase: Phase::Rotating {
                elapsed: Duration::ZERO,
            },
            draw,
            started: false,
            start_notified: false,
            disappear_requested: false,
            disappear_elapsed: Duration::ZERO,
            listener: None,
            host: None,
        }
    }

    /// Attach the host container the splash detaches from when it ends.
    pub fn set_host(&mut self, host: Box<dyn HostContainer>) {
        self.host = Some(host);
    }

    /// Update the view geometry. Center and diagonal are recomputed here
    /// and nowhere else.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.geometry = ViewGeometry::new(width, height);
    }

    /// Begin the rotation phase.
    ///
    /// A no-op if the animation is already running. The listener's
    /// `on_start` is deferred to the first tick rather than fired here, so
    /// the host's in-flight layout pass completes before any callback.
    pub fn start(&mut self, listener: Option<Box<dyn SplashListener>>) {
        if self.started {
            debug!("splash start ignored: animation already running");
            return;
        }
        self.started = true;
        self.listener = listener;
        self.phase = Phase::Rotating {
            elapsed: Duration::ZERO,
        };
    }

    /// Ask the splash to collapse and disappear.
    ///
    /// Valid while rotating (or before start, in which case it applies on
    /// the first tick). The merge captures the current rotation angle and
    /// ring radius as its starting values, so there is no visual jump.
    /// Requests arriving in any later phase are ignored.
    pub fn request_disappear(&mut self) {
        if !self.started {
            self.disappear_requested = true;
            return;
        }
        match self.phase {
            Phase::Rotating { .. } => self.begin_merge(),
            _ => debug!(
                "splash disappear request ignored in phase {}",
                self.phase.name()
            ),
        }
    }

    /// Advance the animation by `dt`.
    ///
    /// Updates the active phase's local clock, recomputes the draw state,
    /// and performs at most one phase transition. Returns whether a redraw
    /// is needed: true for every tick while a phase is active (including
    /// the tick that lands in the terminal state, whose frame shows the
    /// fully open hole), false before start and after the end.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.started || self.phase.is_done() {
            return false;
        }

        if !self.start_notified {
            self.start_notified = true;
            if let Some(listener) = self.listener.as_mut() {
                listener.on_start();
            }
            if self.disappear_requested {
                self.begin_merge();
            }
        }

        self.notify_progress(dt);

        match self.phase {
            Phase::Rotating { elapsed } => {
                let elapsed = elapsed + dt;
                self.draw.angle = phase::rotation_angle(
                    elapsed,
                    self.options.rotation_duration(),
                );
                self.phase = Phase::Rotating { elapsed };
            }
            Phase::Merging {
                elapsed,
                start_angle,
                start_radius,
            } => {
                let elapsed = elapsed + dt;
                let duration = self.options.merge_duration();
                self.draw.angle = start_angle;
                if elapsed >= duration {
                    self.draw.ring_radius = 0.0;
                    self.enter_singular();
                } else {
                    self.draw.ring_radius = phase::merge_ring_radius(
                        elapsed,
                        duration,
                        start_radius,
                    )
                    .max(0.0);
                    self.phase = Phase::Merging {
                        elapsed,
                        start_angle,
                        start_radius,
                    };
                }
            }
            Phase::Singular { elapsed } => {
                let elapsed = elapsed + dt;
                let duration = self.options.singular_duration();
                if elapsed >= duration {
                    self.draw.circle_radius = 0.0;
                    self.enter_expanding();
                } else {
                    self.draw.circle_radius = phase::singular_circle_radius(
                        elapsed,
                        duration,
                        self.options.scaled_circle_radius(),
                    )
                    .max(0.0);
                    self.phase = Phase::Singular { elapsed };
                }
            }
            Phase::Expanding { elapsed } => {
                let elapsed = elapsed + dt;
                let duration = self.options.expand_duration();
                if elapsed >= duration {
                    self.draw.hole_radius = self.geometry.diagonal();
                    self.finish();
                } else {
                    self.draw.hole_radius = phase::hole_radius(
                        elapsed,
                        duration,
                        self.geometry.diagonal(),
                    );
                    self.phase = Phase::Expanding { elapsed };
                }
            }
            Phase::Done => {}
        }

        true
    }

    /// The active phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The current draw parameters.
    #[must_use]
    pub const fn draw_state(&self) -> &DrawState {
        &self.draw
    }

    /// The current view geometry.
    #[must_use]
    pub const fn geometry(&self) -> &ViewGeometry {
        &self.geometry
    }

    /// The configuration this run was built with.
    #[must_use]
    pub const fn options(&self) -> &SplashOptions {
        &self.options
    }

    /// Whether the animation has started and not yet finished.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.started && !self.phase.is_done()
    }

    fn begin_merge(&mut self) {
        debug!(
            "splash disappear: merging from angle {:.3} rad, radius {:.1}",
            self.draw.angle, self.draw.ring_radius
        );
        self.disappear_requested = false;
        self.phase = Phase::Merging {
            elapsed: Duration::ZERO,
            start_angle: self.draw.angle,
            start_radius: self.draw.ring_radius,
        };
    }

    fn enter_singular(&mut self) {
        debug!("splash phase transition: merging -> singular");
        self.draw.single_color = self.options.palette.merged_color();
        self.draw.circle_radius = self.options.scaled_circle_radius();
        self.phase = Phase::Singular {
            elapsed: Duration::ZERO,
        };
    }

    fn enter_expanding(&mut self) {
        debug!("splash phase transition: singular -> expanding");
        self.phase = Phase::Expanding {
            elapsed: Duration::ZERO,
        };
    }

    fn finish(&mut self) {
        debug!("splash phase transition: expanding -> done");
        if self.options.remove_from_parent_on_end {
            if let Some(host) = self.host.as_mut() {
                host.detach();
            } else {
                warn!(
                    "splash not removed after animation end: \
                     no host container attached"
                );
            }
        }
        if let Some(listener) = self.listener.as_mut() {
            listener.on_end();
        }
        self.phase = Phase::Done;
    }

    /// Accumulate disappear time and notify the listener once per tick of
    /// the merge/singular/expand animator. The fraction is deliberately
    /// uncapped: the final tick usually lands past the configured total.
    fn notify_progress(&mut self, dt: Duration) {
        if !matches!(
            self.phase,
            Phase::Merging { .. }
                | Phase::Singular { .. }
                | Phase::Expanding { .. }
        ) {
            return;
        }
        self.disappear_elapsed += dt;
        let total = self.options.disappear_duration();
        let fraction = if total.is_zero() {
            1.0
        } else {
            self.disappear_elapsed.as_secs_f32() / total.as_secs_f32()
        };
        if let Some(listener) = self.listener.as_mut() {
            listener.on_update(fraction);
        }
    }
}

impl std::fmt::Debug for SplashAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplashAnimation")
            .field("phase", &self.phase.name())
            .field("draw", &self.draw)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}
