//! The first-legal-card heuristic.

use std::io;

use crate::core::{Card, Suit};

use super::{Chooser, PlayDecision, TurnView};

/// Plays the first legal card in hand order, draws otherwise, and declares
/// the suit it holds most of after a wildcard. No lookahead, no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuChooser;

impl Chooser for CpuChooser {
    fn choose_card(&mut self, view: &TurnView<'_>) -> io::Result<PlayDecision> {
        Ok(view
            .playable
            .first()
            .map_or(PlayDecision::Draw, |&index| PlayDecision::Play(index)))
    }

    fn choose_suit(&mut self, hand: &[Card], played: Card) -> io::Result<Suit> {
        if hand.is_empty() {
            return Ok(played.suit);
        }

        let mut best = (played.suit, 0usize);
        for suit in Suit::ALL {
            let held = hand.iter().filter(|card| card.suit == suit).count();
            // Strict comparison keeps the earliest suit on ties.
            if held > best.1 {
                best = (suit, held);
            }
        }
        Ok(best.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActionKind, Rank};
    use smallvec::smallvec;

    fn view<'a>(hand: &'a [Card], playable: &[usize]) -> TurnView<'a> {
        TurnView {
            seat: 0,
            name: "CPU",
            hand,
            top_discard: Card::rank_card(Suit::Hearts, Rank::Five),
            current_suit: Suit::Hearts,
            playable: playable.iter().copied().collect(),
        }
    }

    #[test]
    fn test_plays_first_legal_index() {
        let hand = [
            Card::rank_card(Suit::Diamonds, Rank::King),
            Card::rank_card(Suit::Spades, Rank::Five),
            Card::rank_card(Suit::Hearts, Rank::Two),
        ];
        let decision = CpuChooser.choose_card(&view(&hand, &[1, 2])).unwrap();
        assert_eq!(decision, PlayDecision::Play(1));
    }

    #[test]
    fn test_draws_with_no_legal_play() {
        let hand = [Card::rank_card(Suit::Diamonds, Rank::King)];
        let decision = CpuChooser.choose_card(&view(&hand, &[])).unwrap();
        assert_eq!(decision, PlayDecision::Draw);
    }

    #[test]
    fn test_declares_the_most_held_suit() {
        let hand = [
            Card::rank_card(Suit::Clubs, Rank::Two),
            Card::rank_card(Suit::Clubs, Rank::Nine),
            Card::rank_card(Suit::Hearts, Rank::Queen),
        ];
        let played = Card::rank_card(Suit::Spades, Rank::Eight);
        let suit = CpuChooser.choose_suit(&hand, played).unwrap();
        assert_eq!(suit, Suit::Clubs);
    }

    #[test]
    fn test_suit_ties_break_in_menu_order() {
        let hand = [
            Card::rank_card(Suit::Spades, Rank::Two),
            Card::action_card(Suit::Hearts, ActionKind::Skip),
        ];
        let played = Card::rank_card(Suit::Diamonds, Rank::Eight);
        // Hearts and Spades tie; Hearts comes first in Suit::ALL.
        let suit = CpuChooser.choose_suit(&hand, played).unwrap();
        assert_eq!(suit, Suit::Hearts);
    }

    #[test]
    fn test_empty_hand_falls_back_to_played_suit() {
        let played = Card::rank_card(Suit::Diamonds, Rank::Eight);
        let suit = CpuChooser.choose_suit(&[], played).unwrap();
        assert_eq!(suit, Suit::Diamonds);
    }

    #[test]
    fn test_empty_hand_smallvec_view() {
        // A SmallVec-backed view built from nothing still means draw.
        let empty: TurnView<'_> = TurnView {
            seat: 1,
            name: "CPU",
            hand: &[],
            top_discard: Card::rank_card(Suit::Hearts, Rank::Five),
            current_suit: Suit::Hearts,
            playable: smallvec![],
        };
        assert_eq!(CpuChooser.choose_card(&empty).unwrap(), PlayDecision::Draw);
    }
}
