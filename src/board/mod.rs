//! The board: cards, pair generation, and dealing.
//!
//! A board is an ordered sequence of face-down cards, each carrying a
//! `SymbolId` that appears on exactly two cards. Card identity is the
//! board position index. `revealed`/`matched` flags are mutated only by
//! the game controller.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Pair identifier: two cards share a symbol, no symbol appears on more
/// than two cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// A single card on the board.
///
/// The symbol is fixed at deal time; the two flags track its progress
/// through the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Which pair this card belongs to.
    pub symbol: SymbolId,

    /// Face-up, pending resolution or already matched.
    pub revealed: bool,

    /// Permanently paired off for this round.
    pub matched: bool,
}

impl Card {
    fn face_down(symbol: SymbolId) -> Self {
        Self {
            symbol,
            revealed: false,
            matched: false,
        }
    }
}

/// An ordered, shuffled sequence of cards for one round.
///
/// ## Invariants
///
/// - Even length, equal to `2 * pair_count()`
/// - Every distinct `SymbolId` appears exactly twice
/// - A matched card is also revealed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Deal a fresh board: `pair_count` distinct symbols, each twice,
    /// uniformly shuffled.
    ///
    /// The symbol multiset is deterministic given `pair_count`; all
    /// randomness is in the shuffle.
    #[must_use]
    pub fn dealt(pair_count: usize, rng: &mut GameRng) -> Self {
        let mut symbols: Vec<SymbolId> = (0..pair_count as u32)
            .flat_map(|id| [SymbolId::new(id), SymbolId::new(id)])
            .collect();
        rng.shuffle(&mut symbols);

        Self {
            cards: symbols.into_iter().map(Card::face_down).collect(),
        }
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True for a board with no cards (never produced by `dealt`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of distinct pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get a card by position, if the position is on the board.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The symbol at a position. Panics on an off-board index; callers
    /// guard positions via [`Board::card`] first.
    #[must_use]
    pub fn symbol_at(&self, index: usize) -> SymbolId {
        self.cards[index].symbol
    }

    /// Turn a card face-up.
    pub fn reveal(&mut self, index: usize) {
        self.cards[index].revealed = true;
    }

    /// Turn a card face-down again (mismatch revert).
    pub fn conceal(&mut self, index: usize) {
        self.cards[index].revealed = false;
    }

    /// Mark a card as permanently paired off. Matched cards stay revealed.
    pub fn set_matched(&mut self, index: usize) {
        self.cards[index].matched = true;
        self.cards[index].revealed = true;
    }

    /// True once every card on the board is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|card| card.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_dealt_board_size() {
        let mut rng = GameRng::new(42);

        for pair_count in [2, 8, 18] {
            let board = Board::dealt(pair_count, &mut rng);
            assert_eq!(board.len(), pair_count * 2);
            assert_eq!(board.pair_count(), pair_count);
            assert!(!board.is_empty());
        }
    }

    #[test]
    fn test_every_symbol_appears_exactly_twice() {
        let mut rng = GameRng::new(42);
        let board = Board::dealt(8, &mut rng);

        let mut counts: HashMap<SymbolId, usize> = HashMap::new();
        for card in board.cards() {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&count| count == 2));
    }

    #[test]
    fn test_dealt_cards_start_face_down() {
        let mut rng = GameRng::new(42);
        let board = Board::dealt(2, &mut rng);

        for card in board.cards() {
            assert!(!card.revealed);
            assert!(!card.matched);
        }
    }

    #[test]
    fn test_deal_is_deterministic_per_seed() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        assert_eq!(Board::dealt(8, &mut rng1), Board::dealt(8, &mut rng2));
    }

    #[test]
    fn test_reveal_and_conceal() {
        let mut rng = GameRng::new(42);
        let mut board = Board::dealt(2, &mut rng);

        board.reveal(0);
        assert!(board.card(0).unwrap().revealed);

        board.conceal(0);
        assert!(!board.card(0).unwrap().revealed);
    }

    #[test]
    fn test_matched_card_stays_revealed() {
        let mut rng = GameRng::new(42);
        let mut board = Board::dealt(2, &mut rng);

        board.set_matched(1);

        let card = board.card(1).unwrap();
        assert!(card.matched);
        assert!(card.revealed);
    }

    #[test]
    fn test_is_complete() {
        let mut rng = GameRng::new(42);
        let mut board = Board::dealt(2, &mut rng);

        assert!(!board.is_complete());

        for index in 0..board.len() {
            board.set_matched(index);
        }
        assert!(board.is_complete());
    }

    #[test]
    fn test_card_out_of_range() {
        let mut rng = GameRng::new(42);
        let board = Board::dealt(2, &mut rng);

        assert!(board.card(4).is_none());
    }

    #[test]
    fn test_board_serialization() {
        let mut rng = GameRng::new(42);
        let mut board = Board::dealt(2, &mut rng);
        board.reveal(0);

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
