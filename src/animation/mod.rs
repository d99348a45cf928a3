//! Splash animation state machine and per-phase parametric math.

pub mod draw_state;
pub mod listener;
pub mod machine;
pub mod phase;

pub use draw_state::DrawState;
pub use listener::{HostContainer, SplashListener};
pub use machine::SplashAnimation;
pub use phase::Phase;
