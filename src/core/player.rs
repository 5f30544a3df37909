//! Players and their hands.
//!
//! A player is a named hand of cards. Decision-making does not live here:
//! choosers (human or CPU) are in [`crate::choose`] and act on views of the
//! hand, so the same `Player` type serves every seat.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameRng};
use crate::deck::{Deck, DeckError};

/// A named hand of cards.
///
/// Hand order is draw order: new cards go to the end, and plays remove by
/// index. Seats are identified by position in the game's player list.
///
/// ## Example
///
/// ```
/// use crazy_eights::core::{GameRng, Player};
/// use crazy_eights::deck::Deck;
///
/// let mut rng = GameRng::new(7);
/// let mut deck = Deck::build(&mut rng);
///
/// let mut player = Player::new("Player 1");
/// player.draw(&mut deck, &mut rng, 5)?;
/// assert_eq!(player.hand().len(), 5);
/// # Ok::<(), crazy_eights::deck::DeckError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's hand, oldest card first.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Add a card to the hand.
    pub fn give(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove and return the card at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    /// Draw `count` cards from the deck into the hand.
    ///
    /// Drawing may recycle the discard pile into a fresh draw pile; recycle
    /// exhaustion is the only failure and leaves any already-drawn cards in
    /// the hand.
    pub fn draw(
        &mut self,
        deck: &mut Deck,
        rng: &mut GameRng,
        count: usize,
    ) -> Result<(), DeckError> {
        for _ in 0..count {
            self.hand.push(deck.draw(rng)?);
        }
        Ok(())
    }
}
