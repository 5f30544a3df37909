//! Core value types: cards, players, RNG.
//!
//! This module contains the fundamental building blocks that carry no game
//! rules. Validity and turn logic live in [`crate::rules`] and [`crate::game`].

pub mod card;
pub mod player;
pub mod rng;

pub use card::{ActionKind, Card, CardKind, Rank, Suit, DECK_SIZE};
pub use player::Player;
pub use rng::GameRng;
