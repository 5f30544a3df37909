//! Interactive prompts over generic reader/writer pairs.

use std::io::{self, BufRead, Write};

use crate::core::{Card, Suit};

use super::{Chooser, PlayDecision, TurnView};

/// Prompts a person at a terminal (or a scripted test) for each decision.
///
/// Reads `R` line by line and writes menus to `W`. Malformed or
/// out-of-range input re-prompts indefinitely; only a failed or closed
/// input stream is an error.
///
/// ## Example
///
/// ```
/// use std::io::Cursor;
/// use crazy_eights::choose::HumanChooser;
///
/// let input = Cursor::new("2\n");
/// let mut output = Vec::new();
/// let chooser = HumanChooser::new(input, &mut output);
/// # let _ = chooser;
/// ```
#[derive(Debug)]
pub struct HumanChooser<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line; a closed stream is an error, not a retry.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Chooser for HumanChooser<R, W> {
    fn choose_card(&mut self, view: &TurnView<'_>) -> io::Result<PlayDecision> {
        writeln!(self.output)?;
        writeln!(self.output, "--- {}'s turn ---", view.name)?;
        writeln!(
            self.output,
            "Top of discard: {} (current suit: {})",
            view.top_discard, view.current_suit
        )?;
        writeln!(self.output, "Your hand:")?;
        for (i, card) in view.hand.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, card)?;
        }

        if view.playable.is_empty() {
            writeln!(self.output, "No playable cards; drawing.")?;
            self.output.flush()?;
            return Ok(PlayDecision::Draw);
        }

        let numbers: Vec<String> = view.playable.iter().map(|i| (i + 1).to_string()).collect();
        writeln!(self.output, "Playable: {}", numbers.join(", "))?;

        loop {
            write!(self.output, "Play a card (number), or 'd' to draw: ")?;
            self.output.flush()?;

            let line = self.read_line()?;
            let entry = line.trim();
            if entry.eq_ignore_ascii_case("d") {
                return Ok(PlayDecision::Draw);
            }
            if let Ok(number) = entry.parse::<usize>() {
                if number >= 1 && view.playable.contains(&(number - 1)) {
                    return Ok(PlayDecision::Play(number - 1));
                }
            }
            writeln!(self.output, "Invalid choice.")?;
        }
    }

    fn choose_suit(&mut self, _hand: &[Card], played: Card) -> io::Result<Suit> {
        writeln!(self.output, "You played {}. Choose the new suit:", played)?;
        for (i, suit) in Suit::ALL.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, suit)?;
        }

        loop {
            write!(self.output, "New suit (1-4): ")?;
            self.output.flush()?;

            let line = self.read_line()?;
            if let Ok(number) = line.trim().parse::<usize>() {
                if (1..=Suit::ALL.len()).contains(&number) {
                    return Ok(Suit::ALL[number - 1]);
                }
            }
            writeln!(self.output, "Invalid choice.")?;
        }
    }
}
