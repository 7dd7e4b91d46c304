//! Card-flip state machine and the types it is built from.

mod board_size;
mod card;
mod error;
mod state;
mod view;

pub use board_size::BoardSize;
pub use card::{Card, CardFace, SYMBOLS, Symbol};
pub use error::{GameError, Result};
pub use state::{FlipOutcome, GameState};
pub use view::BoardView;
