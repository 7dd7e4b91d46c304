use serde::{Deserialize, Serialize};

use super::board_size::BoardSize;
use super::card::CardFace;

/// Snapshot of a game for rendering: one face per card in board order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: BoardSize,
    pub width: usize,
    pub faces: Vec<CardFace>,
    pub moves: u32,
    pub pairs_found: usize,
    pub total_pairs: usize,
    pub won: bool,
}

impl BoardView {
    /// Faces laid out as grid rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CardFace]> {
        self.faces.chunks(self.width.max(1))
    }
}
