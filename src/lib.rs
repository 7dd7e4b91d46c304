//! Single-player memory-matching game.
//!
//! [`game`] holds the card-flip state machine: a shuffled deck of paired
//! symbols, the lone face-up card awaiting its partner, and the move and pair
//! counters. [`session`] is the host side that feeds taps into a game, turns
//! rejected taps into user notices and derives the progress display.
//!
//! ```rust
//! use memory_game::{BoardSize, FlipOutcome, GameState};
//!
//! let mut game = GameState::seeded(BoardSize::Small, 7);
//! assert_eq!(game.flip(0).unwrap(), FlipOutcome::FirstOfPair);
//! assert_eq!(game.moves_count(), 1);
//! assert!(!game.have_won());
//! ```

pub mod game;
pub mod session;

pub use game::{
    BoardSize, BoardView, Card, CardFace, FlipOutcome, GameError, GameState, Result, Symbol,
};
pub use session::{Argb, Hud, Notice, ProgressPalette, RestartDecision, Session, TapResponse};
