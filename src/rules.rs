//! Play validity and action resolution.
//!
//! ## Match predicates
//!
//! A card is playable against the top discard and the current suit when the
//! first of these holds, checked in order:
//!
//! 1. it is an action card ([`MatchReason::Action`]),
//! 2. its rank is the wildcard [`WILD_RANK`] ([`MatchReason::Wild`]),
//! 3. its suit equals the current suit ([`MatchReason::Suit`]),
//! 4. its rank equals the top discard's rank ([`MatchReason::Rank`]).
//!
//! The current suit is tracked separately from the top discard because a
//! wildcard play declares a suit the card itself need not have.
//!
//! ## Action resolution
//!
//! [`resolve_action`] translates a played action card into calls on an
//! [`ActionEffects`] implementor. The rules hold no turn-order or deck state
//! of their own, so they test without a game attached.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActionKind, Card, Rank, Suit};
use crate::deck::DeckError;

/// The wildcard rank, playable on anything.
pub const WILD_RANK: Rank = Rank::Eight;

/// How many cards a draw-two play forces on the next player.
pub const DRAW_TWO_AMOUNT: usize = 2;

/// Why a card is playable.
///
/// Ordered by predicate priority; [`match_reason`] returns the first that
/// applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchReason {
    /// Action cards play on anything.
    Action,
    /// The wildcard rank plays on anything and declares the next suit.
    Wild,
    /// The card's suit equals the current suit.
    Suit,
    /// The card's rank equals the top discard's rank.
    Rank,
}

/// The first predicate `card` satisfies against `top` and `current_suit`,
/// or `None` when the card is unplayable.
///
/// ## Example
///
/// ```
/// use crazy_eights::core::{Card, Rank, Suit};
/// use crazy_eights::rules::{match_reason, MatchReason};
///
/// let top = Card::rank_card(Suit::Hearts, Rank::Five);
///
/// let same_rank = Card::rank_card(Suit::Spades, Rank::Five);
/// assert_eq!(match_reason(same_rank, top, Suit::Hearts), Some(MatchReason::Rank));
///
/// let off_suit = Card::rank_card(Suit::Diamonds, Rank::King);
/// assert_eq!(match_reason(off_suit, top, Suit::Hearts), None);
/// ```
#[must_use]
pub fn match_reason(card: Card, top: Card, current_suit: Suit) -> Option<MatchReason> {
    if card.is_action() {
        Some(MatchReason::Action)
    } else if card.rank() == Some(WILD_RANK) {
        Some(MatchReason::Wild)
    } else if card.suit == current_suit {
        Some(MatchReason::Suit)
    } else if card.rank().is_some() && card.rank() == top.rank() {
        Some(MatchReason::Rank)
    } else {
        None
    }
}

/// Check whether `card` may be played on `top` under `current_suit`.
#[must_use]
pub fn is_playable(card: Card, top: Card, current_suit: Suit) -> bool {
    match_reason(card, top, current_suit).is_some()
}

/// The first playable card in hand order, if any.
#[must_use]
pub fn first_playable(hand: &[Card], top: Card, current_suit: Suit) -> Option<Card> {
    hand.iter()
        .copied()
        .find(|&card| is_playable(card, top, current_suit))
}

/// All playable hand indices, in hand order.
#[must_use]
pub fn playable_indices(hand: &[Card], top: Card, current_suit: Suit) -> SmallVec<[usize; 8]> {
    hand.iter()
        .enumerate()
        .filter(|(_, &card)| is_playable(card, top, current_suit))
        .map(|(i, _)| i)
        .collect()
}

/// What resolving a play did to the rest of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// A plain rank card; nothing special happened.
    NoAction,
    /// The next player loses their turn.
    Skipped,
    /// Play order flipped.
    Reversed,
    /// The next player drew two cards.
    DrewTwo,
}

/// Table effects an action card may demand.
///
/// The game implements this over its turn state; tests implement it with
/// recorders.
pub trait ActionEffects {
    /// The next player in turn order loses their turn.
    fn skip_next_player(&mut self);

    /// Turn order flips direction.
    fn reverse_direction(&mut self);

    /// The next player draws `count` cards. Drawing may recycle the discard
    /// pile and therefore fail.
    fn next_player_draws(&mut self, count: usize) -> Result<(), DeckError>;
}

/// Resolve the table effect of a played card.
///
/// Rank cards resolve to [`ActionOutcome::NoAction`] without touching the
/// table. The only failure is a draw-two that exhausts the deck.
pub fn resolve_action(
    card: Card,
    effects: &mut impl ActionEffects,
) -> Result<ActionOutcome, DeckError> {
    match card.action() {
        None => Ok(ActionOutcome::NoAction),
        Some(ActionKind::Skip) => {
            effects.skip_next_player();
            Ok(ActionOutcome::Skipped)
        }
        Some(ActionKind::Reverse) => {
            effects.reverse_direction();
            Ok(ActionOutcome::Reversed)
        }
        Some(ActionKind::DrawTwo) => {
            effects.next_player_draws(DRAW_TWO_AMOUNT)?;
            Ok(ActionOutcome::DrewTwo)
        }
    }
}
