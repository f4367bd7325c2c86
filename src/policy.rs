//! Pluggable decision policies over the game contract.
//!
//! A policy is anything that can pick an action given a game and a state.
//! Closures with the right shape wrap via [`from_fn`]; the structs here
//! cover the stock variants (fixed, random, human input, and the two
//! search-backed policies).

use std::io::{BufRead, Write};
use std::str::FromStr;

use rand::{prelude::IndexedRandom, rngs::StdRng, Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::game::Game;
use crate::search;

/// Selects an action for the mover in `state`. Implementations must only
/// choose from [`Game::actions`] (with the deliberate exception of
/// [`Fixed`]).
pub trait Policy<G: Game> {
    fn choose(&mut self, game: &G, state: &G::State) -> Result<G::Action>;
}

/// A [`Policy`] built from a plain function or closure via [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Wrap a function or closure of the policy shape as a [`Policy`].
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn { f }
}

impl<G, F> Policy<G> for FromFn<F>
where
    G: Game,
    F: FnMut(&G, &G::State) -> Result<G::Action>,
{
    fn choose(&mut self, game: &G, state: &G::State) -> Result<G::Action> {
        (self.f)(game, state)
    }
}

/// Always returns the same sentinel action, legal or not.
///
/// Testing and demonstration only: it never consults [`Game::actions`], so
/// playing it against a real game will eventually trip
/// [`crate::Error::InvalidMove`].
#[derive(Debug, Clone)]
pub struct Fixed<A> {
    action: A,
}

impl<A> Fixed<A> {
    pub fn new(action: A) -> Self {
        Fixed { action }
    }
}

impl<G: Game> Policy<G> for Fixed<G::Action> {
    fn choose(&mut self, _game: &G, _state: &G::State) -> Result<G::Action> {
        Ok(self.action.clone())
    }
}

/// Selects uniformly at random among the legal actions.
#[derive(Debug, Clone)]
pub struct Random<R: Rng> {
    rng: R,
}

impl Random<StdRng> {
    /// Random policy seeded from the operating system.
    pub fn from_os() -> Self {
        Random {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic random policy for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Random {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Random<R> {
    pub fn new(rng: R) -> Self {
        Random { rng }
    }
}

impl<G: Game, R: Rng> Policy<G> for Random<R> {
    fn choose(&mut self, game: &G, state: &G::State) -> Result<G::Action> {
        game.actions(state)
            .choose(&mut self.rng)
            .cloned()
            .ok_or(Error::NoActionsAvailable)
    }
}

/// Reads an action from a line-based text interface, re-prompting until the
/// input parses and names a legal action.
///
/// Malformed input never escapes this policy; the only error it surfaces is
/// [`crate::Error::InputClosed`] when the stream ends before a legal action
/// was obtained (plus genuine I/O failures on either side).
#[derive(Debug)]
pub struct Human<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Human<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Human { input, output }
    }
}

impl<G, R, W> Policy<G> for Human<R, W>
where
    G: Game,
    G::Action: FromStr,
    R: BufRead,
    W: Write,
{
    fn choose(&mut self, game: &G, state: &G::State) -> Result<G::Action> {
        let legal = game.actions(state);
        loop {
            write!(self.output, "enter your move as row,col: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            match line.trim().parse::<G::Action>() {
                Ok(action) if legal.contains(&action) => return Ok(action),
                Ok(_) => writeln!(self.output, "that cell is not available, try again")?,
                Err(_) => writeln!(
                    self.output,
                    "could not read that as row,col with both in 0-2, try again"
                )?,
            }
        }
    }
}

/// Plays the action plain minimax proves optimal for the mover.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl<G: Game> Policy<G> for Minimax {
    fn choose(&mut self, game: &G, state: &G::State) -> Result<G::Action> {
        search::minimax(game, state).map(|decision| decision.action)
    }
}

/// Plays the action alpha-beta search proves optimal for the mover. Same
/// decisions as [`Minimax`], fewer nodes visited.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

impl<G: Game> Policy<G> for AlphaBeta {
    fn choose(&mut self, game: &G, state: &G::State) -> Result<G::Action> {
        search::alpha_beta(game, state).map(|decision| decision.action)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::tictactoe::{BoardState, Move, TicTacToe};

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_fixed_ignores_the_board() {
        let game = TicTacToe;
        let mut policy = Fixed::new(mv(1, 1));
        let state = game.initial();
        assert_eq!(policy.choose(&game, &state).unwrap(), mv(1, 1));

        // Fixed happily repeats itself even once the cell is taken
        let taken = state.place(mv(1, 1)).unwrap();
        assert_eq!(policy.choose(&game, &taken).unwrap(), mv(1, 1));
    }

    #[test]
    fn test_random_stays_legal() {
        let game = TicTacToe;
        let mut policy = Random::seeded(7);
        let mut state = game.initial();
        while !game.is_final(&state) {
            let action = policy.choose(&game, &state).unwrap();
            assert!(game.actions(&state).contains(&action));
            state = game.result(&state, &action).unwrap();
        }
    }

    #[test]
    fn test_random_fails_on_full_board() {
        let game = TicTacToe;
        let full = BoardState::from_layout("XXO OOX XXO").unwrap();
        let mut policy = Random::seeded(7);
        assert!(matches!(
            policy.choose(&game, &full),
            Err(Error::NoActionsAvailable)
        ));
    }

    #[test]
    fn test_human_recovers_from_garbage() {
        let game = TicTacToe;
        let state = game.initial().place(mv(0, 0)).unwrap();

        // Garbage, out-of-range, occupied, then finally a legal move
        let input = Cursor::new(b"nonsense\n5,5\n0,0\n2,2\n".to_vec());
        let mut output = Vec::new();
        let mut policy = Human::new(input, &mut output);
        let action = policy.choose(&game, &state).unwrap();
        assert_eq!(action, mv(2, 2));

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("could not read"));
        assert!(transcript.contains("not available"));
    }

    #[test]
    fn test_human_reports_closed_input() {
        let game = TicTacToe;
        let state = game.initial();

        let input = Cursor::new(b"garbage\n".to_vec());
        let mut policy = Human::new(input, Vec::new());
        let result: Result<Move> = policy.choose(&game, &state);
        assert!(matches!(result, Err(Error::InputClosed)));
    }

    #[test]
    fn test_search_policies_agree() {
        let game = TicTacToe;
        let state = BoardState::from_layout("XX. OO. ...").unwrap();
        let a = Minimax.choose(&game, &state).unwrap();
        let b = AlphaBeta.choose(&game, &state).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, mv(0, 2));
    }

    #[test]
    fn test_closures_are_policies() {
        let game = TicTacToe;
        let mut corner = from_fn(|game: &TicTacToe, state: &BoardState| {
            game.actions(state)
                .into_iter()
                .next()
                .ok_or(Error::NoActionsAvailable)
        });
        let action = corner.choose(&game, &game.initial()).unwrap();
        assert_eq!(action, mv(0, 0));
    }
}
