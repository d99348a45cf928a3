//! Shared utilities for the splash animation.
//!
//! Helpers for easing curves and frame timing.

pub mod easing;
pub mod timing;
