//! Cross-algorithm properties: minimax and alpha-beta must agree on every
//! decision, alpha-beta must do less work, and perfect self-play must draw.

use std::collections::HashSet;

use rand::{prelude::IndexedRandom, rngs::StdRng, SeedableRng};

use zerosum::driver::play;
use zerosum::game::{Game, Utility};
use zerosum::policy::{AlphaBeta, Minimax, Random};
use zerosum::search::{alpha_beta, minimax};
use zerosum::tictactoe::{BoardState, TicTacToe};

/// Collect non-terminal states reachable through random playouts.
fn sample_reachable_states(playouts: usize, seed: u64) -> Vec<BoardState> {
    let game = TicTacToe;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut states = Vec::new();

    for _ in 0..playouts {
        let mut state = game.initial();
        while !game.is_final(&state) {
            if seen.insert(state) {
                states.push(state);
            }
            let actions = game.actions(&state);
            let action = actions.choose(&mut rng).expect("non-terminal state");
            state = game.result(&state, action).unwrap();
        }
    }

    states
}

#[test]
fn alpha_beta_decides_like_minimax_on_reachable_states() {
    let game = TicTacToe;
    for state in sample_reachable_states(40, 42) {
        let mm = minimax(&game, &state).unwrap();
        let ab = alpha_beta(&game, &state).unwrap();
        assert_eq!(
            mm.action, ab.action,
            "decision mismatch on\n{}",
            game.render(&state)
        );
        assert_eq!(
            mm.value, ab.value,
            "value mismatch on\n{}",
            game.render(&state)
        );
        assert!(ab.nodes <= mm.nodes);
    }
}

#[test]
fn alpha_beta_visits_strictly_fewer_nodes_from_the_opening() {
    let game = TicTacToe;
    let mm = minimax(&game, &game.initial()).unwrap();
    let ab = alpha_beta(&game, &game.initial()).unwrap();
    assert_eq!(mm.action, ab.action);
    assert!(
        ab.nodes < mm.nodes,
        "alpha-beta visited {} nodes, minimax {}",
        ab.nodes,
        mm.nodes
    );
}

#[test]
fn perfect_self_play_always_draws() {
    let game = TicTacToe;
    let mut sink = Vec::new();
    let utility = play(&game, &mut AlphaBeta, &mut AlphaBeta, &mut sink).unwrap();
    assert_eq!(utility, Utility::Draw);

    let mut sink = Vec::new();
    let utility = play(&game, &mut Minimax, &mut Minimax, &mut sink).unwrap();
    assert_eq!(utility, Utility::Draw);
}

#[test]
fn search_never_loses_to_random() {
    let game = TicTacToe;
    for seed in 0..10 {
        let mut searcher = AlphaBeta;
        let mut gambler = Random::seeded(seed);
        let mut sink = Vec::new();

        // Search moves first: a loss would mean the random policy beat
        // perfect play, which cannot happen
        let utility = play(&game, &mut searcher, &mut gambler, &mut sink).unwrap();
        assert_ne!(utility, Utility::Loss, "seed {seed}");
    }
}

#[test]
fn self_play_transcript_fills_the_board() {
    let game = TicTacToe;
    let mut sink = Vec::new();
    play(&game, &mut AlphaBeta, &mut AlphaBeta, &mut sink).unwrap();

    let transcript = String::from_utf8(sink).unwrap();
    // A drawn game renders the initial board plus nine moves
    let renders = transcript.matches("---+---+---").count();
    assert_eq!(renders, 2 * 10);
}
