//! The abstract game contract shared by the search engine, policies, and driver.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Terminal outcome value from the perspective of a specified player.
///
/// The ordering is `Loss < Draw < Win`. Because every utility falls inside
/// this bounded range, `Loss` and `Win` double as the lower and upper bounds
/// of an alpha-beta search window; no IEEE infinities are needed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Utility {
    Loss,
    Draw,
    Win,
}

impl Utility {
    /// Signed scalar form: +1 for a win, -1 for a loss, 0 for a draw.
    pub fn score(self) -> i32 {
        match self {
            Utility::Win => 1,
            Utility::Loss => -1,
            Utility::Draw => 0,
        }
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Utility::Win => "win",
            Utility::Loss => "loss",
            Utility::Draw => "draw",
        };
        write!(f, "{s}")
    }
}

/// Outcome of a finished game, from the perspective of whoever moved first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl Outcome {
    /// Map a first-mover-perspective utility (as returned by
    /// [`crate::driver::play`]) to a human-readable outcome.
    pub fn from_utility(utility: Utility) -> Self {
        match utility {
            Utility::Win => Outcome::FirstWins,
            Utility::Loss => Outcome::SecondWins,
            Utility::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::FirstWins => "first player wins",
            Outcome::SecondWins => "second player wins",
            Outcome::Draw => "draw",
        };
        write!(f, "{s}")
    }
}

/// The capability set every two-player zero-sum perfect-information game
/// must provide.
///
/// The search engine and the driver depend only on this contract, never on a
/// concrete game. States are immutable by contract: [`Game::result`] returns
/// a fresh successor and leaves its input untouched, so sibling branches of a
/// search tree never alias each other.
pub trait Game {
    /// A complete snapshot of the game position.
    type State;
    /// A move identifier, opaque to the search engine.
    type Action: Clone + PartialEq;
    /// One of exactly two contestants.
    type Player: Copy + Eq;

    /// The canonical starting state. Pure; each call yields an independent
    /// fresh state.
    fn initial(&self) -> Self::State;

    /// The player to move, derived from the state alone (never stored as
    /// mutable external state).
    fn player(&self, state: &Self::State) -> Self::Player;

    /// Every legal action in a fixed deterministic order. Returns an empty
    /// vector when no action remains.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply an action, producing a new state. The mark placed belongs to
    /// `player(state)` of the *input* state.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::InvalidMove`] when the action is illegal in
    /// `state`; the input state is left unchanged.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    /// Whether the game has ended in `state`.
    fn is_final(&self, state: &Self::State) -> bool;

    /// Terminal value of `state` for `player`.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::NotTerminal`] when called on a live state.
    /// That is a contract violation by the caller, not a condition to recover
    /// from.
    fn utility(&self, state: &Self::State, player: Self::Player) -> Result<Utility>;

    /// Human-readable rendering of `state`. The driver writes it to whatever
    /// display sink it was given; the core never interprets the text.
    fn render(&self, state: &Self::State) -> String;
}
