//! Card value types: suits, ranks, and action tags.
//!
//! A card is either a plain rank card (ace through king) or an action card
//! (skip, draw-two, reverse). Both carry a suit; the algebraic `CardKind`
//! means no sentinel "action" rank exists.
//!
//! Cards are immutable values: `Copy`, comparable, hashable, serializable.
//! Nothing here knows about playability: the wildcard-eight rule and the
//! match predicates live in [`crate::rules`].

use serde::{Deserialize, Serialize};

/// Number of cards in a full deck: 52 rank cards plus 12 action cards.
pub const DECK_SIZE: usize = 64;

/// Card suit.
///
/// `ALL` fixes the construction and menu order used everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All four suits, in deck-construction (and suit-menu) order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "HEARTS",
            Suit::Spades => "SPADES",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
        };
        write!(f, "{name}")
    }
}

/// Rank of a plain card, ace through king.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks, in deck-construction order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        };
        write!(f, "{name}")
    }
}

/// Special effect carried by an action card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// The next player loses their turn.
    Skip,
    /// The next player draws two cards.
    DrawTwo,
    /// Play order flips direction.
    Reverse,
}

impl ActionKind {
    /// All three actions, in deck-construction order.
    pub const ALL: [ActionKind; 3] = [ActionKind::Skip, ActionKind::DrawTwo, ActionKind::Reverse];
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::Skip => "SKIP",
            ActionKind::DrawTwo => "DRAW 2",
            ActionKind::Reverse => "REVERSE",
        };
        write!(f, "{name}")
    }
}

/// What a card is: a plain rank card or a special action card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Rank(Rank),
    Action(ActionKind),
}

/// A playing card. Immutable once created.
///
/// ## Example
///
/// ```
/// use crazy_eights::core::{ActionKind, Card, Rank, Suit};
///
/// let eight = Card::rank_card(Suit::Clubs, Rank::Eight);
/// assert_eq!(eight.rank(), Some(Rank::Eight));
/// assert_eq!(eight.action(), None);
/// assert_eq!(eight.to_string(), "8 of CLUBS");
///
/// let skip = Card::action_card(Suit::Hearts, ActionKind::Skip);
/// assert!(skip.is_action());
/// assert_eq!(skip.to_string(), "SKIP of HEARTS");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub kind: CardKind,
}

impl Card {
    /// Create a plain rank card.
    #[must_use]
    pub const fn rank_card(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            kind: CardKind::Rank(rank),
        }
    }

    /// Create an action card.
    #[must_use]
    pub const fn action_card(suit: Suit, action: ActionKind) -> Self {
        Self {
            suit,
            kind: CardKind::Action(action),
        }
    }

    /// The card's rank, if it is a rank card.
    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        match self.kind {
            CardKind::Rank(rank) => Some(rank),
            CardKind::Action(_) => None,
        }
    }

    /// The card's action tag, if it is an action card.
    #[must_use]
    pub const fn action(self) -> Option<ActionKind> {
        match self.kind {
            CardKind::Rank(_) => None,
            CardKind::Action(action) => Some(action),
        }
    }

    /// Check whether this is an action card.
    #[must_use]
    pub const fn is_action(self) -> bool {
        matches!(self.kind, CardKind::Action(_))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::Rank(rank) => write!(f, "{} of {}", rank, self.suit),
            CardKind::Action(action) => write!(f, "{} of {}", action, self.suit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_orders() {
        assert_eq!(Suit::ALL.len(), 4);
        assert_eq!(Rank::ALL.len(), 13);
        assert_eq!(ActionKind::ALL.len(), 3);
        assert_eq!(Suit::ALL[0], Suit::Hearts);
        assert_eq!(Rank::ALL[0], Rank::Ace);
        assert_eq!(Rank::ALL[12], Rank::King);
        assert_eq!(ActionKind::ALL[0], ActionKind::Skip);
    }

    #[test]
    fn test_deck_size_matches_composition() {
        assert_eq!(
            DECK_SIZE,
            Suit::ALL.len() * Rank::ALL.len() + Suit::ALL.len() * ActionKind::ALL.len()
        );
    }

    #[test]
    fn test_accessors() {
        let five = Card::rank_card(Suit::Diamonds, Rank::Five);
        assert_eq!(five.rank(), Some(Rank::Five));
        assert_eq!(five.action(), None);
        assert!(!five.is_action());

        let reverse = Card::action_card(Suit::Spades, ActionKind::Reverse);
        assert_eq!(reverse.rank(), None);
        assert_eq!(reverse.action(), Some(ActionKind::Reverse));
        assert!(reverse.is_action());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::rank_card(Suit::Hearts, Rank::Ace).to_string(), "A of HEARTS");
        assert_eq!(Card::rank_card(Suit::Clubs, Rank::Ten).to_string(), "10 of CLUBS");
        assert_eq!(
            Card::action_card(Suit::Diamonds, ActionKind::DrawTwo).to_string(),
            "DRAW 2 of DIAMONDS"
        );
    }

    #[test]
    fn test_card_equality_and_hash() {
        use std::collections::HashSet;

        let a = Card::rank_card(Suit::Hearts, Rank::Eight);
        let b = Card::rank_card(Suit::Hearts, Rank::Eight);
        let c = Card::rank_card(Suit::Spades, Rank::Eight);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(c);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serialization() {
        let card = Card::action_card(Suit::Clubs, ActionKind::Skip);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
