//! # crazy-eights
//!
//! A terminal Crazy Eights / Uno hybrid: deck, rules, and turn engine,
//! plus an unrelated Babylonian square-root routine.
//!
//! ## Design Principles
//!
//! 1. **Pure engine, injected edges**: the game holds no I/O and no global
//!    randomness. Shuffles go through a seeded [`core::GameRng`]; decisions
//!    go through the [`choose::Chooser`] capability. Every interactive path
//!    is scriptable in tests.
//!
//! 2. **One rule set**: card validity is a single, explicitly ordered
//!    predicate list in [`rules`], consulted everywhere.
//!
//! 3. **Conservation**: the 64 cards are always split exactly across the
//!    draw pile, the discard pile, and the hands.
//!
//! ## Modules
//!
//! - `core`: card value types, players, RNG
//! - `deck`: draw and discard piles, recycling, the opening deal
//! - `rules`: playability predicates and action resolution
//! - `game`: the turn state machine
//! - `choose`: per-seat deciders (CPU heuristic, interactive prompts)
//! - `session`: wiring choosers to turns; the mode menu
//! - `babylonian`: the square-root routine

pub mod babylonian;
pub mod choose;
pub mod core;
pub mod deck;
pub mod game;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ActionKind, Card, CardKind, GameRng, Player, Rank, Suit, DECK_SIZE};

pub use crate::deck::{Deck, DeckError};

pub use crate::rules::{
    first_playable, is_playable, match_reason, playable_indices, resolve_action, ActionEffects,
    ActionOutcome, MatchReason, DRAW_TWO_AMOUNT, WILD_RANK,
};

pub use crate::game::{Direction, Game, GameBuilder, GameError, Play, TurnOutcome};

pub use crate::choose::{Chooser, CpuChooser, HumanChooser, PlayDecision, TurnView};

pub use crate::session::{prompt_mode, Mode, SeatChooser, Session};

pub use crate::babylonian::{sqrt_approx, DEFAULT_PRECISION};
