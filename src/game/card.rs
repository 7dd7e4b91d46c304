use serde::{Deserialize, Serialize};

/// Glyphs a deck draws its symbols from.
pub const SYMBOLS: [&str; 32] = [
    // Animals
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐸",
    // Fruits
    "🍎", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓",
    // Sports
    "⚽", "🏀", "🏈", "⚾", "🎾", "🏐",
    // Objects
    "🎨", "🎲", "🎯", "🚀", "🌙", "⛵",
];

/// Symbol identifier, shared by exactly two cards of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(u16);

impl Symbol {
    pub const fn new(id: u16) -> Self {
        Symbol(id)
    }

    pub fn id(self) -> u16 {
        self.0
    }

    /// Glyph for this symbol, wrapping around the pool for ids past its end.
    pub fn glyph(self) -> &'static str {
        SYMBOLS[self.0 as usize % SYMBOLS.len()]
    }
}

/// What the presentation layer should draw for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "symbol", rename_all = "snake_case")]
pub enum CardFace {
    Hidden,
    FaceUp(Symbol),
    Matched(Symbol),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub identifier: Symbol,
    pub is_face_up: bool,
    pub is_matched: bool,
}

impl Card {
    pub fn new(identifier: Symbol) -> Self {
        Card {
            identifier,
            is_face_up: false,
            is_matched: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.is_face_up || self.is_matched
    }

    pub fn face(&self) -> CardFace {
        if self.is_matched {
            CardFace::Matched(self.identifier)
        } else if self.is_face_up {
            CardFace::FaceUp(self.identifier)
        } else {
            CardFace::Hidden
        }
    }

    pub(crate) fn turn_up(&mut self) {
        self.is_face_up = true;
    }

    pub(crate) fn turn_down(&mut self) {
        self.is_face_up = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.is_face_up = true;
        self.is_matched = true;
    }
}
