use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Board configurations a game can be started on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Small, BoardSize::Medium, BoardSize::Large];

    /// Grid columns and total card count.
    pub fn config(self) -> (usize, usize) {
        match self {
            BoardSize::Small => (2, 8),
            BoardSize::Medium => (3, 18),
            BoardSize::Large => (4, 24),
        }
    }

    pub fn width(self) -> usize {
        self.config().0
    }

    pub fn total_cards(self) -> usize {
        self.config().1
    }

    pub fn height(self) -> usize {
        let (width, total) = self.config();
        total / width
    }

    pub fn pairs(self) -> usize {
        self.total_cards() / 2
    }

    pub fn name(self) -> &'static str {
        match self {
            BoardSize::Small => "Easy",
            BoardSize::Medium => "Medium",
            BoardSize::Large => "Hard",
        }
    }

    /// Heading shown before the first move, e.g. `Easy: 4 * 2`.
    pub fn label(self) -> String {
        format!("{}: {} * {}", self.name(), self.height(), self.width())
    }

    pub fn as_code(self) -> &'static str {
        match self {
            BoardSize::Small => "small",
            BoardSize::Medium => "medium",
            BoardSize::Large => "large",
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardSize {
    type Err = GameError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" | "easy" => Ok(BoardSize::Small),
            "medium" => Ok(BoardSize::Medium),
            "large" | "hard" => Ok(BoardSize::Large),
            _ => Err(GameError::UnknownBoardSize(value.to_string())),
        }
    }
}
