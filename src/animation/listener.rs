//! Observer and host-container capability traits.

/// Observer for splash animation lifecycle events.
///
/// All methods are invoked synchronously from
/// [`SplashAnimation::tick`](super::SplashAnimation::tick), never from a
/// background context. Every method has an empty default body so listeners
/// implement only what they care about.
pub trait SplashListener {
    /// Called exactly once, on the first tick after
    /// [`start`](super::SplashAnimation::start). Deferred to tick time so
    /// the host's current layout/draw pass finishes before any callback
    /// runs.
    fn on_start(&mut self) {}

    /// Called on every tick while the disappear animator runs (merge,
    /// singular, and expand phases). `fraction` is the share of the total
    /// disappear time consumed so far; it is strictly increasing and may
    /// exceed 1.0 when the final tick overshoots the configured durations.
    fn on_update(&mut self, fraction: f32) {
        let _ = fraction;
    }

    /// Called exactly once, after the host detach has been attempted.
    fn on_end(&mut self) {}
}

/// Host container that can detach the splash element once the animation
/// ends.
///
/// Detachment is best-effort: a splash without a host (or with
/// `remove_from_parent_on_end` disabled) simply skips this step.
pub trait HostContainer {
    /// Remove the splash element from the container. After this returns the
    /// host should stop delivering ticks.
    fn detach(&mut self);
}
