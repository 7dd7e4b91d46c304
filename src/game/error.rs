//! Errors raised by the game state machine.

use thiserror::Error;

use super::card::Symbol;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position {position} is outside the board of {total} cards")]
    PositionOutOfRange { position: usize, total: usize },

    #[error("Card at position {position} is already face up")]
    CardAlreadyRevealed { position: usize },

    #[error("The game is already won")]
    AlreadyWon,

    #[error("Deck has {actual} cards, board needs {expected}")]
    DeckSize { expected: usize, actual: usize },

    #[error("Symbol {} appears {count} times, expected exactly 2", .symbol.id())]
    UnpairedSymbol { symbol: Symbol, count: usize },

    #[error("Unknown board size: {0:?}")]
    UnknownBoardSize(String),
}

impl GameError {
    /// True for flips a player can legitimately attempt but the rules refuse.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            GameError::CardAlreadyRevealed { .. } | GameError::AlreadyWon
        )
    }
}
