use std::collections::HashMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::board_size::BoardSize;
use super::card::{Card, SYMBOLS, Symbol};
use super::error::{GameError, Result};
use super::view::BoardView;

/// Result of an accepted flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of a pair attempt; it stays up awaiting its partner.
    FirstOfPair,
    /// Second card matched the lone face-up card.
    Matched,
    /// Second card differed; both went back face down.
    Mismatched,
}

impl FlipOutcome {
    pub fn is_match(self) -> bool {
        self == FlipOutcome::Matched
    }
}

/// Authoritative state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    board_size: BoardSize,
    cards: Vec<Card>,
    lone_face_up: Option<usize>,
    moves: u32,
    pairs_found: usize,
}

impl GameState {
    pub fn new(board_size: BoardSize) -> Self {
        Self::with_rng(board_size, &mut rand::rng())
    }

    pub fn seeded(board_size: BoardSize, seed: u64) -> Self {
        Self::with_rng(board_size, &mut StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng + ?Sized>(board_size: BoardSize, rng: &mut R) -> Self {
        let mut symbol_pool: Vec<Symbol> = (0..SYMBOLS.len() as u16).map(Symbol::new).collect();
        symbol_pool.shuffle(rng);

        let mut symbols = Vec::with_capacity(board_size.total_cards());
        for &symbol in symbol_pool.iter().take(board_size.pairs()) {
            symbols.push(symbol);
            symbols.push(symbol);
        }
        symbols.shuffle(rng);

        Self::from_cards(board_size, symbols)
    }

    /// Starts a game on a fixed arrangement of symbols.
    pub fn from_symbols(board_size: BoardSize, symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.len() != board_size.total_cards() {
            return Err(GameError::DeckSize {
                expected: board_size.total_cards(),
                actual: symbols.len(),
            });
        }

        let mut counts: HashMap<Symbol, usize> = HashMap::new();
        for &symbol in &symbols {
            *counts.entry(symbol).or_default() += 1;
        }
        if let Some((&symbol, &count)) = counts
            .iter()
            .filter(|&(_, &count)| count != 2)
            .min_by_key(|&(symbol, _)| *symbol)
        {
            return Err(GameError::UnpairedSymbol { symbol, count });
        }

        Ok(Self::from_cards(board_size, symbols))
    }

    fn from_cards(board_size: BoardSize, symbols: Vec<Symbol>) -> Self {
        GameState {
            board_size,
            cards: symbols.into_iter().map(Card::new).collect(),
            lone_face_up: None,
            moves: 0,
            pairs_found: 0,
        }
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn lone_face_up(&self) -> Option<usize> {
        self.lone_face_up
    }

    pub fn moves_count(&self) -> u32 {
        self.moves
    }

    pub fn pairs_found_count(&self) -> usize {
        self.pairs_found
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn have_won(&self) -> bool {
        self.pairs_found == self.total_pairs()
    }

    /// Whether the card is showing, either face up or already matched.
    pub fn is_face_up(&self, position: usize) -> Result<bool> {
        self.checked_card(position).map(Card::is_revealed)
    }

    pub fn view(&self) -> BoardView {
        BoardView {
            size: self.board_size,
            width: self.board_size.width(),
            faces: self.cards.iter().map(Card::face).collect(),
            moves: self.moves,
            pairs_found: self.pairs_found,
            total_pairs: self.total_pairs(),
            won: self.have_won(),
        }
    }

    /// Reveals the card at `position` and resolves the pair attempt if it
    /// was the second card. Rejected flips leave the state untouched.
    pub fn flip(&mut self, position: usize) -> Result<FlipOutcome> {
        if self.checked_card(position)?.is_revealed() {
            if self.have_won() {
                return Err(GameError::AlreadyWon);
            }
            return Err(GameError::CardAlreadyRevealed { position });
        }
        if self.have_won() {
            return Err(GameError::AlreadyWon);
        }

        self.cards[position].turn_up();
        self.moves = self.moves.saturating_add(1);

        let Some(first) = self.lone_face_up.take() else {
            self.lone_face_up = Some(position);
            debug!(position, moves = self.moves, "first card of pair");
            return Ok(FlipOutcome::FirstOfPair);
        };

        if self.cards[first].identifier == self.cards[position].identifier {
            self.cards[first].mark_matched();
            self.cards[position].mark_matched();
            self.pairs_found += 1;
            debug!(first, position, pairs_found = self.pairs_found, "pair matched");
            Ok(FlipOutcome::Matched)
        } else {
            self.cards[first].turn_down();
            self.cards[position].turn_down();
            debug!(first, position, "pair mismatched");
            Ok(FlipOutcome::Mismatched)
        }
    }

    fn checked_card(&self, position: usize) -> Result<&Card> {
        self.cards.get(position).ok_or(GameError::PositionOutOfRange {
            position,
            total: self.cards.len(),
        })
    }
}
