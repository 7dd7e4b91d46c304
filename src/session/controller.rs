use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument, warn};

use crate::game::{BoardSize, FlipOutcome, GameState, Result};

use super::hud::Hud;
use super::progress::ProgressPalette;

/// Message surfaced to the player after a tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    AlreadyWon,
    InvalidMove,
    Won,
}

impl Notice {
    pub fn is_error(self) -> bool {
        matches!(self, Notice::AlreadyWon | Notice::InvalidMove)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Notice::AlreadyWon => "You already won",
            Notice::InvalidMove => "Invalid move",
            Notice::Won => "You have won the game",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TapResponse {
    /// `None` when the tap was refused.
    pub outcome: Option<FlipOutcome>,
    pub notice: Option<Notice>,
    pub hud: Hud,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartDecision {
    /// A game is under way; ask before throwing it away.
    NeedsConfirmation,
    Restarted,
}

impl RestartDecision {
    pub const CONFIRMATION_TITLE: &'static str = "Quit game";
}

/// Host-side driver for one player: owns the current game and replaces it
/// on restart or when the board size changes.
#[derive(Debug)]
pub struct Session {
    board_size: BoardSize,
    game: GameState,
    palette: ProgressPalette,
    rng: StdRng,
}

impl Session {
    pub fn new(board_size: BoardSize) -> Self {
        Self::with_rng(board_size, StdRng::from_rng(&mut rand::rng()))
    }

    /// Every game dealt by this session follows from `seed`.
    pub fn with_seed(board_size: BoardSize, seed: u64) -> Self {
        Self::with_rng(board_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board_size: BoardSize, mut rng: StdRng) -> Self {
        let game = GameState::with_rng(board_size, &mut rng);
        Session {
            board_size,
            game,
            palette: ProgressPalette::default(),
            rng,
        }
    }

    /// Starts a session on an already dealt game; later games follow from `seed`.
    pub fn from_game(game: GameState, seed: u64) -> Self {
        Session {
            board_size: game.board_size(),
            game,
            palette: ProgressPalette::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_palette(mut self, palette: ProgressPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn palette(&self) -> &ProgressPalette {
        &self.palette
    }

    pub fn hud(&self) -> Hud {
        Hud::for_game(&self.game, &self.palette)
    }

    /// Applies a tap on `position`. Refused taps leave the game unchanged
    /// and come back with an error notice.
    #[instrument(skip(self))]
    pub fn tap(&mut self, position: usize) -> Result<TapResponse> {
        let revealed = self.game.is_face_up(position)?;

        if self.game.have_won() {
            warn!("tap after the game was won");
            return Ok(self.respond(None, Some(Notice::AlreadyWon)));
        }
        if revealed {
            warn!("tap on a card that is already showing");
            return Ok(self.respond(None, Some(Notice::InvalidMove)));
        }

        let outcome = self.game.flip(position)?;
        let mut notice = None;
        if outcome.is_match() {
            info!(
                pairs_found = self.game.pairs_found_count(),
                total_pairs = self.board_size.pairs(),
                "match"
            );
            if self.game.have_won() {
                info!(moves = self.game.moves_count(), "game won");
                notice = Some(Notice::Won);
            }
        }
        Ok(self.respond(Some(outcome), notice))
    }

    /// Restarts unless that would discard a game in progress.
    #[instrument(skip(self))]
    pub fn request_restart(&mut self) -> RestartDecision {
        if self.game.moves_count() > 0 && !self.game.have_won() {
            return RestartDecision::NeedsConfirmation;
        }
        self.restart();
        RestartDecision::Restarted
    }

    pub fn restart(&mut self) {
        self.game = GameState::with_rng(self.board_size, &mut self.rng);
        info!(size = %self.board_size, "new game");
    }

    pub fn select_board_size(&mut self, board_size: BoardSize) {
        self.board_size = board_size;
        self.restart();
    }

    fn respond(&self, outcome: Option<FlipOutcome>, notice: Option<Notice>) -> TapResponse {
        TapResponse {
            outcome,
            notice,
            hud: self.hud(),
        }
    }
}
