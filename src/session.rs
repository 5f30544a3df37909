//! Wiring choosers to turns.
//!
//! A [`Session`] owns a [`Game`] and one [`Chooser`] per seat and drives the
//! turn loop: build the seat's [`TurnView`], ask its chooser, apply the
//! decision. Choosers are shared `Rc<RefCell<..>>` handles because hot-seat
//! play puts one human (and one terminal) behind several seats.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use log::debug;

use crate::choose::{Chooser, PlayDecision, TurnView};
use crate::core::Card;
use crate::game::{Game, GameError, TurnOutcome};
use crate::rules::{playable_indices, WILD_RANK};

/// How a session is populated, per the startup menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Two humans sharing one terminal.
    HotSeat,
    /// One human against the first-legal-card CPU.
    VsCpu,
}

/// Prompt for a mode: `1` hot-seat, `2` versus CPU. Anything else
/// re-prompts; only a closed input stream fails.
pub fn prompt_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Mode> {
    writeln!(output, "Choose a mode:")?;
    writeln!(output, "  1) hot-seat two-player")?;
    writeln!(output, "  2) player vs CPU")?;

    loop {
        write!(output, "Mode (1 or 2): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        match line.trim() {
            "1" => return Ok(Mode::HotSeat),
            "2" => return Ok(Mode::VsCpu),
            _ => writeln!(output, "Please enter 1 or 2.")?,
        }
    }
}

/// A shareable chooser handle; hot-seat seats clone one handle.
pub type SeatChooser = Rc<RefCell<dyn Chooser>>;

/// A game plus its seats' choosers.
pub struct Session {
    game: Game,
    choosers: Vec<SeatChooser>,
}

impl Session {
    /// Pair a game with one chooser handle per seat.
    pub fn new(game: Game, choosers: Vec<SeatChooser>) -> Self {
        assert_eq!(
            game.players().len(),
            choosers.len(),
            "one chooser per seat"
        );
        Self { game, choosers }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run one turn: ask the current seat's chooser and apply its decision.
    pub fn step(&mut self) -> Result<TurnOutcome, GameError> {
        assert!(!self.game.is_over(), "game is over");

        let seat = self.game.current_seat();
        let chooser = Rc::clone(&self.choosers[seat]);

        let decision = {
            let player = &self.game.players()[seat];
            let top = self.game.top_discard();
            let suit = self.game.current_suit();
            let view = TurnView {
                seat,
                name: player.name(),
                hand: player.hand(),
                top_discard: top,
                current_suit: suit,
                playable: playable_indices(player.hand(), top, suit),
            };
            chooser.borrow_mut().choose_card(&view)?
        };

        match decision {
            PlayDecision::Draw => self.game.draw_and_pass(),
            PlayDecision::Play(index) => {
                let hand = self.game.players()[seat].hand();
                let card = *hand.get(index).ok_or(GameError::IllegalPlay { index })?;
                let declared = if card.rank() == Some(WILD_RANK) {
                    let rest: Vec<Card> = hand
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != index)
                        .map(|(_, &c)| c)
                        .collect();
                    Some(chooser.borrow_mut().choose_suit(&rest, card)?)
                } else {
                    None
                };
                self.game.play_card(index, declared)
            }
        }
    }

    /// Run turns until someone wins; returns the winning seat.
    pub fn run(&mut self) -> Result<usize, GameError> {
        loop {
            let outcome = self.step()?;
            if outcome.won {
                debug!(
                    "session over: {} wins",
                    self.game.players()[outcome.seat].name()
                );
                return Ok(outcome.seat);
            }
        }
    }
}
