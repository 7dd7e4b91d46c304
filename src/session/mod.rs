//! Host side of a game: tap handling, restarts and progress display.

mod controller;
mod hud;
mod progress;

pub use controller::{Notice, RestartDecision, Session, TapResponse};
pub use hud::Hud;
pub use progress::{Argb, ProgressPalette};
