//! Draw and discard piles.
//!
//! ## Composition
//!
//! A full deck holds 64 cards: each of the four suits carries the thirteen
//! ranks plus the three action cards. Construction enumerates the full
//! product and shuffles once; the wildcard rule is not the deck's business.
//!
//! ## Recycling
//!
//! When the draw pile runs out mid-game the discard pile is recycled: the
//! newest discard stays put and everything underneath is reshuffled into a
//! fresh draw pile. Recycling needs at least two discards; with fewer, the
//! deck is exhausted and [`DeckError::InsufficientCards`] is returned.
//!
//! The top of either pile is the vector end.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{ActionKind, Card, GameRng, Rank, Suit, DECK_SIZE};

/// Errors from deck operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A draw needed a recycle, but the discard pile cannot seed one:
    /// recycling keeps the newest discard aside, so it needs at least two.
    #[error("cannot recycle: {discarded} card(s) in the discard pile, need at least 2")]
    InsufficientCards { discarded: usize },
}

/// Draw pile plus discard pile.
///
/// Every card of the 64-card deck is in the draw pile, the discard pile, or
/// some player's hand; the deck never duplicates or drops cards.
///
/// ## Example
///
/// ```
/// use crazy_eights::core::GameRng;
/// use crazy_eights::deck::Deck;
///
/// let mut rng = GameRng::new(42);
/// let mut deck = Deck::build(&mut rng);
/// assert_eq!(deck.draw_pile().len(), 64);
///
/// let card = deck.draw(&mut rng)?;
/// deck.discard(card);
/// assert_eq!(deck.top_discard(), Some(card));
/// # Ok::<(), crazy_eights::deck::DeckError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Build the full 64-card deck, shuffled, with an empty discard pile.
    #[must_use]
    pub fn build(rng: &mut GameRng) -> Self {
        let mut draw_pile = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                draw_pile.push(Card::rank_card(suit, rank));
            }
        }
        for suit in Suit::ALL {
            for action in ActionKind::ALL {
                draw_pile.push(Card::action_card(suit, action));
            }
        }

        let mut deck = Self {
            draw_pile,
            discard_pile: Vec::new(),
        };
        deck.shuffle(rng);
        deck
    }

    /// The draw pile, bottom first.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    /// The discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// The newest discard, if any.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    /// Shuffle the draw pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.draw_pile);
    }

    /// Put a card on top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Draw the top card, recycling the discard pile if the draw pile is out.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<Card, DeckError> {
        if self.draw_pile.is_empty() {
            self.recycle(rng)?;
        }
        // A successful recycle moves at least one card.
        Ok(self
            .draw_pile
            .pop()
            .expect("draw pile refilled by recycle"))
    }

    /// Rebuild the draw pile from the discard pile.
    ///
    /// The newest discard stays as the entire discard pile; every card under
    /// it returns to the draw pile, which is then reshuffled. Fails when the
    /// discard pile holds fewer than two cards.
    pub fn recycle(&mut self, rng: &mut GameRng) -> Result<(), DeckError> {
        if self.discard_pile.len() <= 1 {
            return Err(DeckError::InsufficientCards {
                discarded: self.discard_pile.len(),
            });
        }

        if let Some(top) = self.discard_pile.pop() {
            self.draw_pile.append(&mut self.discard_pile);
            self.discard_pile.push(top);
        }
        self.shuffle(rng);

        debug!(
            "recycled discard pile: {} card(s) back in the draw pile",
            self.draw_pile.len()
        );
        Ok(())
    }

    /// Draw cards until a rank card surfaces, discard it, and return it.
    ///
    /// Rejected action cards go back to the bottom of the draw pile and the
    /// pile is reshuffled before the next attempt, so the opening card is
    /// never an action card. The draw pile must hold at least one rank card.
    pub fn deal_opening_card(&mut self, rng: &mut GameRng) -> Result<Card, DeckError> {
        debug_assert!(
            self.draw_pile.iter().any(|card| !card.is_action()),
            "opening deal needs a rank card in the draw pile"
        );

        loop {
            let card = self.draw(rng)?;
            if card.is_action() {
                trace!("opening deal turned up {card}, reshuffling");
                self.draw_pile.insert(0, card);
                self.shuffle(rng);
                continue;
            }
            self.discard_pile.push(card);
            return Ok(card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn census(cards: impl IntoIterator<Item = Card>) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for card in cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_build_composition() {
        let mut rng = GameRng::new(42);
        let deck = Deck::build(&mut rng);

        assert_eq!(deck.draw_pile().len(), DECK_SIZE);
        assert!(deck.discard_pile().is_empty());

        let counts = census(deck.draw_pile().iter().copied());
        assert_eq!(counts.len(), DECK_SIZE, "all cards distinct");
        assert!(counts.values().all(|&n| n == 1));

        let rank_cards = deck.draw_pile().iter().filter(|c| !c.is_action()).count();
        let action_cards = deck.draw_pile().iter().filter(|c| c.is_action()).count();
        assert_eq!(rank_cards, 52);
        assert_eq!(action_cards, 12);
    }

    #[test]
    fn test_build_is_seed_deterministic() {
        let deck1 = Deck::build(&mut GameRng::new(7));
        let deck2 = Deck::build(&mut GameRng::new(7));
        let deck3 = Deck::build(&mut GameRng::new(8));

        assert_eq!(deck1, deck2);
        assert_ne!(deck1, deck3);
    }

    #[test]
    fn test_draw_pops_the_top() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::build(&mut rng);
        let top = *deck.draw_pile().last().unwrap();

        let drawn = deck.draw(&mut rng).unwrap();

        assert_eq!(drawn, top);
        assert_eq!(deck.draw_pile().len(), DECK_SIZE - 1);
    }

    #[test]
    fn test_draw_recycles_when_pile_is_out() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::build(&mut rng);

        // Run the entire deck through the discard pile.
        for _ in 0..DECK_SIZE {
            let card = deck.draw(&mut rng).unwrap();
            deck.discard(card);
        }
        assert!(deck.draw_pile().is_empty());
        let newest = deck.top_discard().unwrap();

        let drawn = deck.draw(&mut rng).unwrap();

        // Recycle kept the newest discard aside and reshuffled the rest.
        assert_eq!(deck.discard_pile(), &[newest]);
        assert_ne!(drawn, newest);
        assert_eq!(deck.draw_pile().len(), DECK_SIZE - 2);
    }

    #[test]
    fn test_recycle_requires_two_discards() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::build(&mut rng);

        assert_eq!(
            deck.recycle(&mut rng),
            Err(DeckError::InsufficientCards { discarded: 0 })
        );

        let card = deck.draw(&mut rng).unwrap();
        deck.discard(card);
        assert_eq!(
            deck.recycle(&mut rng),
            Err(DeckError::InsufficientCards { discarded: 1 })
        );

        let card = deck.draw(&mut rng).unwrap();
        deck.discard(card);
        assert_eq!(deck.recycle(&mut rng), Ok(()));
    }

    #[test]
    fn test_recycle_keeps_newest_and_conserves_cards() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::build(&mut rng);

        for _ in 0..10 {
            let card = deck.draw(&mut rng).unwrap();
            deck.discard(card);
        }
        let newest = deck.top_discard().unwrap();
        let before = census(
            deck.draw_pile()
                .iter()
                .chain(deck.discard_pile())
                .copied(),
        );

        deck.recycle(&mut rng).unwrap();

        assert_eq!(deck.discard_pile(), &[newest]);
        assert_eq!(deck.draw_pile().len(), DECK_SIZE - 1);
        let after = census(
            deck.draw_pile()
                .iter()
                .chain(deck.discard_pile())
                .copied(),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn test_opening_card_is_never_an_action() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let mut deck = Deck::build(&mut rng);

            let opening = deck.deal_opening_card(&mut rng).unwrap();

            assert!(!opening.is_action(), "seed {seed} opened with {opening}");
            assert_eq!(deck.top_discard(), Some(opening));
            assert_eq!(
                deck.draw_pile().len() + deck.discard_pile().len(),
                DECK_SIZE
            );
        }
    }

    #[test]
    fn test_deck_serialization() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::build(&mut rng);
        let card = deck.draw(&mut rng).unwrap();
        deck.discard(card);

        let json = serde_json::to_string(&deck).unwrap();
        let deserialized: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, deserialized);
    }
}
