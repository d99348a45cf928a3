// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparison: animation math frequently compares against 0.0, 1.0, etc.
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::module_name_repetitions)]

//! Ring-splash loading animation.
//!
//! A ring of colored circles orbits the view center until the host requests
//! the splash to disappear; the ring then snaps into a single circle, the
//! circle shrinks to a point, and a transparent hole expands over the
//! background before the component asks its host container to detach it.
//!
//! The crate owns the animation state machine, the per-phase parametric
//! math, and frame composition. Everything platform-specific stays outside,
//! behind three small traits:
//!
//! - [`render::DrawSurface`] - a target that can fill itself and draw
//!   filled or stroked circles
//! - [`animation::HostContainer`] - a container that can detach the splash
//!   element when the animation ends
//! - [`animation::SplashListener`] - an observer for start/progress/end
//!
//! Hosts drive the animation by calling [`animation::SplashAnimation::tick`]
//! with the elapsed time since the previous frame (a game loop, a web
//! canvas animation-frame callback, or [`util::timing::FrameTiming`] for
//! loops that want an FPS cap) and rendering through
//! [`render::FrameRenderer`] whenever `tick` reports a redraw is needed.

pub mod animation;
pub mod color;
pub mod error;
pub mod geometry;
pub mod options;
pub mod render;
pub mod util;
