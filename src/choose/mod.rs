//! Per-seat decision making.
//!
//! A [`Chooser`] decides what a seat does with its turn, given a
//! [`TurnView`] of the table. Two implementations cover the two player
//! kinds: [`CpuChooser`] plays the first legal card, [`HumanChooser`]
//! prompts over any `BufRead`/`Write` pair so interactive sessions and
//! scripted tests share one code path.
//!
//! Choosers return `io::Result`: the only failure mode is a broken or
//! closed input stream. Malformed input never fails; it re-prompts.

mod cpu;
mod human;

pub use cpu::CpuChooser;
pub use human::HumanChooser;

use std::io;

use smallvec::SmallVec;

use crate::core::{Card, Suit};

/// What the table looks like from the current seat.
#[derive(Clone, Debug)]
pub struct TurnView<'a> {
    /// The seat index taking the turn.
    pub seat: usize,
    /// The seat's display name.
    pub name: &'a str,
    /// The seat's hand, in hand order.
    pub hand: &'a [Card],
    /// The newest discard.
    pub top_discard: Card,
    /// The suit plays must match.
    pub current_suit: Suit,
    /// Hand indices of the legal plays, in hand order.
    pub playable: SmallVec<[usize; 8]>,
}

/// A seat's decision for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayDecision {
    /// Play the card at this hand index.
    Play(usize),
    /// Draw a card instead of playing.
    Draw,
}

/// Decision capability for one seat.
pub trait Chooser {
    /// Pick a legal card from `view.playable`, or elect to draw.
    fn choose_card(&mut self, view: &TurnView<'_>) -> io::Result<PlayDecision>;

    /// Name the new current suit after playing the wildcard `played`.
    /// `hand` is the remaining hand, `played` excluded.
    fn choose_suit(&mut self, hand: &[Card], played: Card) -> io::Result<Suit>;
}
