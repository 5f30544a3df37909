//! The turn state machine.
//!
//! A [`Game`] owns the deck, the seats, the turn pointer, the play
//! direction, and the current suit. Each turn is one call to
//! [`Game::play_card`] or [`Game::draw_and_pass`]; both return a
//! [`TurnOutcome`] describing what happened so drivers can render it.
//!
//! The game holds no I/O and makes no decisions. Choosing what to play is
//! the job of [`crate::choose`]; wiring choosers to turns is the job of
//! [`crate::session`].
//!
//! ## Turn order
//!
//! Seats advance by [`Direction`]: one step per turn, one extra after a
//! skip. A reverse flips the direction before the advance, so with three
//! seats a reverse played from seat 0 lands on seat 2.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Card, GameRng, Player, Suit, DECK_SIZE};
use crate::deck::{Deck, DeckError};
use crate::rules::{
    is_playable, resolve_action, ActionEffects, ActionOutcome, WILD_RANK,
};

/// Play order around the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending seat index, wrapping.
    Forward,
    /// Descending seat index, wrapping.
    Backward,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// The seat one step from `seat` among `seats` total.
    #[must_use]
    pub fn advance(self, seat: usize, seats: usize) -> usize {
        match self {
            Direction::Forward => (seat + 1) % seats,
            Direction::Backward => (seat + seats - 1) % seats,
        }
    }
}

/// Errors from driving a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The driver offered a hand index that is out of range or not playable.
    /// Drivers present only legal indices; this is the backstop.
    #[error("illegal play: hand index {index} is not playable")]
    IllegalPlay { index: usize },

    /// The deck could not satisfy a draw. Unrecoverable; ends the session.
    #[error(transparent)]
    Deck(#[from] DeckError),

    /// An interactive input stream failed or closed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// What the current seat did with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Play {
    /// A card was played onto the discard pile.
    Played(Card),
    /// No card was played; one card was drawn instead.
    Drew,
}

/// One turn's result, for rendering and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The seat that took the turn.
    pub seat: usize,
    /// The card played, or a draw.
    pub play: Play,
    /// What the play did to the table.
    pub action: ActionOutcome,
    /// The current suit after the turn.
    pub suit_after: Suit,
    /// Whether this turn emptied the seat's hand and ended the game.
    pub won: bool,
}

/// Builder for a [`Game`].
///
/// ## Example
///
/// ```
/// use crazy_eights::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .player("You")
///     .player("CPU")
///     .hand_size(5)
///     .seed(42)
///     .build();
/// assert_eq!(game.players().len(), 2);
/// assert_eq!(game.players()[0].hand().len(), 5);
/// ```
pub struct GameBuilder {
    names: Vec<String>,
    hand_size: usize,
    seed: Option<u64>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            hand_size: 5,
            seed: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a seat. Seat order is call order; the first seat opens.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Opening hand size per seat (default 5).
    pub fn hand_size(mut self, size: usize) -> Self {
        assert!(size >= 1, "hand size must be at least 1");
        self.hand_size = size;
        self
    }

    /// Seed the RNG for a reproducible game. Unseeded games draw from
    /// OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Shuffle the deck, deal every seat its hand, and turn up the
    /// opening card.
    pub fn build(self) -> Game {
        let seats = self.names.len();
        assert!((2..=8).contains(&seats), "seat count must be 2-8");
        // Worst case every action card is still in the draw pile; the
        // opening deal needs at least one rank card left.
        assert!(
            seats * self.hand_size + 13 <= DECK_SIZE,
            "hands leave no guaranteed rank card for the opening deal"
        );

        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut deck = Deck::build(&mut rng);

        let mut players: Vec<Player> = self.names.into_iter().map(Player::new).collect();
        for player in &mut players {
            player
                .draw(&mut deck, &mut rng, self.hand_size)
                .expect("a full deck covers the opening deal");
        }

        let opening = deck
            .deal_opening_card(&mut rng)
            .expect("a full deck covers the opening deal");

        Game {
            current_suit: opening.suit,
            deck,
            players,
            current: 0,
            direction: Direction::Forward,
            rng,
            winner: None,
        }
    }
}

/// A game in progress.
///
/// Created by [`GameBuilder`]; mutated one turn at a time; terminal once a
/// hand empties. Every mutation keeps the 64 cards split exactly across the
/// draw pile, the discard pile, and the hands.
pub struct Game {
    deck: Deck,
    players: Vec<Player>,
    current: usize,
    direction: Direction,
    current_suit: Suit,
    rng: GameRng,
    winner: Option<usize>,
}

/// Adapter from [`ActionEffects`] onto the table, borrowed for the length
/// of one resolution.
struct TableEffects<'g> {
    deck: &'g mut Deck,
    rng: &'g mut GameRng,
    players: &'g mut [Player],
    direction: &'g mut Direction,
    seat: usize,
    skip: bool,
}

impl ActionEffects for TableEffects<'_> {
    fn skip_next_player(&mut self) {
        self.skip = true;
    }

    fn reverse_direction(&mut self) {
        *self.direction = self.direction.flipped();
    }

    fn next_player_draws(&mut self, count: usize) -> Result<(), DeckError> {
        let next = self.direction.advance(self.seat, self.players.len());
        self.players[next].draw(self.deck, self.rng, count)
    }
}

impl Game {
    /// The seats, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> usize {
        self.current
    }

    /// The current play direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The suit plays must match (until a wildcard changes it).
    #[must_use]
    pub fn current_suit(&self) -> Suit {
        self.current_suit
    }

    /// The newest discard. Never empty once the game is built.
    #[must_use]
    pub fn top_discard(&self) -> Card {
        self.deck
            .top_discard()
            .expect("the opening deal seeds the discard pile")
    }

    /// The deck state.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The seed this game was built with, for replays.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The winning seat, once a hand has emptied.
    #[must_use]
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Cards across the draw pile, the discard pile, and every hand.
    /// Always [`DECK_SIZE`].
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.draw_pile().len()
            + self.deck.discard_pile().len()
            + self.players.iter().map(|p| p.hand().len()).sum::<usize>()
    }

    /// The current seat plays the card at `index` in its hand.
    ///
    /// `declared_suit` names the new suit after a wildcard eight; it is
    /// ignored for any other card, and a wildcard with no declaration keeps
    /// the card's own suit. Rejects an out-of-range or unplayable index
    /// with [`GameError::IllegalPlay`]. A draw-two that exhausts the deck
    /// fails with the underlying [`DeckError`].
    pub fn play_card(
        &mut self,
        index: usize,
        declared_suit: Option<Suit>,
    ) -> Result<TurnOutcome, GameError> {
        assert!(self.winner.is_none(), "game is over");

        let seat = self.current;
        let top = self.top_discard();
        let playable = self.players[seat]
            .hand()
            .get(index)
            .is_some_and(|&card| is_playable(card, top, self.current_suit));
        if !playable {
            return Err(GameError::IllegalPlay { index });
        }

        let card = self.players[seat]
            .remove(index)
            .expect("index checked against the hand");
        self.deck.discard(card);

        self.current_suit = if card.rank() == Some(WILD_RANK) {
            declared_suit.unwrap_or(card.suit)
        } else {
            card.suit
        };

        let mut table = TableEffects {
            deck: &mut self.deck,
            rng: &mut self.rng,
            players: &mut self.players,
            direction: &mut self.direction,
            seat,
            skip: false,
        };
        let action = resolve_action(card, &mut table)?;
        let skip = table.skip;

        // The win is checked before any advance: an emptied hand ends the
        // game on the spot, forced draws from the play included.
        let won = self.players[seat].hand().is_empty();
        if won {
            self.winner = Some(seat);
            debug!("{} wins after {} plays", self.players[seat].name(), self.deck.discard_pile().len());
        } else {
            self.current = self.direction.advance(self.current, self.players.len());
            if skip {
                self.current = self.direction.advance(self.current, self.players.len());
            }
        }

        debug_assert_eq!(self.total_cards(), DECK_SIZE);

        Ok(TurnOutcome {
            seat,
            play: Play::Played(card),
            action,
            suit_after: self.current_suit,
            won,
        })
    }

    /// The current seat draws one card instead of playing, then play
    /// passes on normally.
    pub fn draw_and_pass(&mut self) -> Result<TurnOutcome, GameError> {
        assert!(self.winner.is_none(), "game is over");

        let seat = self.current;
        let (deck, rng) = (&mut self.deck, &mut self.rng);
        self.players[seat].draw(deck, rng, 1)?;
        self.current = self.direction.advance(self.current, self.players.len());

        debug_assert_eq!(self.total_cards(), DECK_SIZE);

        Ok(TurnOutcome {
            seat,
            play: Play::Drew,
            action: ActionOutcome::NoAction,
            suit_after: self.current_suit,
            won: false,
        })
    }
}
