//! Two-player zero-sum game abstraction with adversarial search
//!
//! This crate provides:
//! - A polymorphic [`Game`] contract: state, action, transition, terminal
//!   test, and terminal utility
//! - Plain minimax and alpha-beta search that produce identical decisions
//!   while visiting different numbers of nodes
//! - Pluggable [`Policy`] implementations: fixed, random, human input, and
//!   the two search-backed policies (plain closures work too)
//! - A turn-alternating driver that plays two policies to completion
//! - A complete 3x3 Tic-Tac-Toe instance of the contract
//!
//! ```
//! use zerosum::{driver, policy::AlphaBeta, tictactoe::TicTacToe, Utility};
//!
//! let game = TicTacToe;
//! let mut transcript = Vec::new();
//! let utility = driver::play(&game, &mut AlphaBeta, &mut AlphaBeta, &mut transcript).unwrap();
//!
//! // Tic-Tac-Toe is a draw under perfect play
//! assert_eq!(utility, Utility::Draw);
//! ```

pub mod driver;
pub mod error;
pub mod game;
pub mod policy;
pub mod search;
pub mod tictactoe;

pub use driver::play;
pub use error::{Error, Result};
pub use game::{Game, Outcome, Utility};
pub use policy::{from_fn, AlphaBeta, Fixed, FromFn, Human, Minimax, Policy, Random};
pub use search::{alpha_beta, minimax, Decision};
