use crate::game::GameState;

use super::progress::{Argb, ProgressPalette};

/// Progress text shown next to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hud {
    pub title: String,
    pub pairs: String,
    pub pairs_color: Argb,
}

impl Hud {
    /// Counts are taken from the game's board size, never from fixed strings.
    pub fn for_game(game: &GameState, palette: &ProgressPalette) -> Self {
        let total_pairs = game.board_size().pairs();
        let title = if game.moves_count() == 0 {
            game.board_size().label()
        } else {
            format!("Moves: {}", game.moves_count())
        };
        Hud {
            title,
            pairs: format!("Pairs: {}/{}", game.pairs_found_count(), total_pairs),
            pairs_color: palette.color_for(game.pairs_found_count(), total_pairs),
        }
    }
}
