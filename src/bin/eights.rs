//! Interactive Crazy Eights at the terminal.

use std::cell::RefCell;
use std::io::{self, BufReader};
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;

use crazy_eights::choose::{CpuChooser, HumanChooser};
use crazy_eights::game::{GameBuilder, Play};
use crazy_eights::rules::ActionOutcome;
use crazy_eights::session::{prompt_mode, Mode, SeatChooser, Session};

#[derive(Parser, Debug)]
#[command(name = "eights", about = "A Crazy Eights / Uno hybrid for the terminal")]
struct Args {
    /// Seed the shuffles for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Cards dealt to each player at the start.
    #[arg(long, default_value_t = 5)]
    hand_size: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    anyhow::ensure!(
        args.hand_size >= 1 && 2 * args.hand_size + 13 <= crazy_eights::DECK_SIZE,
        "hand size {} does not fit a {}-card deck for two players",
        args.hand_size,
        crazy_eights::DECK_SIZE
    );

    let mut input = BufReader::new(io::stdin());
    let mut output = io::stdout();
    let mode = prompt_mode(&mut input, &mut output)?;

    let mut builder = GameBuilder::new().hand_size(args.hand_size);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let game = match mode {
        Mode::HotSeat => builder.player("Player 1").player("Player 2").build(),
        Mode::VsCpu => builder.player("You").player("CPU").build(),
    };
    println!("Dealt with seed {}.", game.seed());
    println!("Opening card: {}", game.top_discard());

    // One human shares the terminal across every human seat.
    let human: SeatChooser = Rc::new(RefCell::new(HumanChooser::new(input, output)));
    let choosers = match mode {
        Mode::HotSeat => vec![Rc::clone(&human), human],
        Mode::VsCpu => vec![human, Rc::new(RefCell::new(CpuChooser)) as SeatChooser],
    };

    let mut session = Session::new(game, choosers);
    loop {
        let outcome = session.step()?;
        let name = session.game().players()[outcome.seat].name();

        match outcome.play {
            Play::Played(card) => println!("{name} played {card}."),
            Play::Drew => println!("{name} drew a card."),
        }
        match outcome.action {
            ActionOutcome::NoAction => {}
            ActionOutcome::Skipped => println!("Next player is skipped!"),
            ActionOutcome::Reversed => println!("Play order reverses!"),
            ActionOutcome::DrewTwo => println!("Next player draws two!"),
        }
        if let Play::Played(card) = outcome.play {
            if card.suit != outcome.suit_after || card.is_action() {
                println!("Current suit is now {}.", outcome.suit_after);
            }
        }

        if outcome.won {
            println!("\n{name} wins!");
            return Ok(());
        }
    }
}
