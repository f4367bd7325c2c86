//! Plain minimax and alpha-beta search over the game contract.
//!
//! Both searches fix the maximizing player at the root call and thread that
//! identity explicitly through the mutually recursive `max_value`/`min_value`
//! pair, so every leaf utility is evaluated from the root mover's
//! perspective. Neither search memoizes: each call re-explores the full
//! remaining subtree, which is fine at this board size (recursion depth is
//! bounded by the number of empty cells).

use crate::error::{Error, Result};
use crate::game::{Game, Utility};

/// The action a search settled on, together with the value it proved for the
/// root mover and how many states it visited proving it.
///
/// Plain minimax and alpha-beta return the same `action` and `value` for any
/// state; only `nodes` differs.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<A> {
    pub action: A,
    pub value: Utility,
    pub nodes: u64,
}

/// Choose the optimal action for the mover in `state` by exhaustive minimax.
///
/// Ties between equally valued actions go to the first one in
/// [`Game::actions`] enumeration order.
///
/// # Errors
///
/// Returns [`Error::NoActionsAvailable`] when `state` offers no action, and
/// propagates any transition or utility error from the game.
pub fn minimax<G: Game>(game: &G, state: &G::State) -> Result<Decision<G::Action>> {
    let root = game.player(state);
    let mut nodes = 1;
    let mut best: Option<(G::Action, Utility)> = None;

    for action in game.actions(state) {
        let child = game.result(state, &action)?;
        let value = min_value(game, &child, root, &mut nodes)?;
        match &best {
            Some((_, best_value)) if value <= *best_value => {}
            _ => best = Some((action, value)),
        }
    }

    let (action, value) = best.ok_or(Error::NoActionsAvailable)?;
    Ok(Decision {
        action,
        value,
        nodes,
    })
}

fn max_value<G: Game>(
    game: &G,
    state: &G::State,
    root: G::Player,
    nodes: &mut u64,
) -> Result<Utility> {
    *nodes += 1;
    if game.is_final(state) {
        return game.utility(state, root);
    }
    let mut best = Utility::Loss;
    for action in game.actions(state) {
        let child = game.result(state, &action)?;
        best = best.max(min_value(game, &child, root, nodes)?);
    }
    Ok(best)
}

fn min_value<G: Game>(
    game: &G,
    state: &G::State,
    root: G::Player,
    nodes: &mut u64,
) -> Result<Utility> {
    *nodes += 1;
    if game.is_final(state) {
        return game.utility(state, root);
    }
    let mut best = Utility::Win;
    for action in game.actions(state) {
        let child = game.result(state, &action)?;
        best = best.min(max_value(game, &child, root, nodes)?);
    }
    Ok(best)
}

/// Choose the optimal action for the mover in `state` by alpha-beta minimax.
///
/// Selects the same action as [`minimax`] for every state while visiting
/// fewer nodes. Every root candidate is searched with a fresh full window:
/// only the nested recursion narrows `[alpha, beta]`, which keeps each root
/// child's value exact (and therefore the argmax identical to plain minimax)
/// at the cost of some pruning at the top level.
///
/// # Errors
///
/// Returns [`Error::NoActionsAvailable`] when `state` offers no action, and
/// propagates any transition or utility error from the game.
pub fn alpha_beta<G: Game>(game: &G, state: &G::State) -> Result<Decision<G::Action>> {
    let root = game.player(state);
    let mut nodes = 1;
    let mut best: Option<(G::Action, Utility)> = None;

    for action in game.actions(state) {
        let child = game.result(state, &action)?;
        let value = min_value_ab(
            game,
            &child,
            root,
            Utility::Loss,
            Utility::Win,
            &mut nodes,
        )?;
        match &best {
            Some((_, best_value)) if value <= *best_value => {}
            _ => best = Some((action, value)),
        }
    }

    let (action, value) = best.ok_or(Error::NoActionsAvailable)?;
    Ok(Decision {
        action,
        value,
        nodes,
    })
}

fn max_value_ab<G: Game>(
    game: &G,
    state: &G::State,
    root: G::Player,
    mut alpha: Utility,
    beta: Utility,
    nodes: &mut u64,
) -> Result<Utility> {
    *nodes += 1;
    if game.is_final(state) {
        return game.utility(state, root);
    }
    let mut best = Utility::Loss;
    for action in game.actions(state) {
        let child = game.result(state, &action)?;
        best = best.max(min_value_ab(game, &child, root, alpha, beta, nodes)?);
        if best >= beta {
            // Beta cutoff: the minimizing parent will never let play reach
            // here, so the remaining children are irrelevant.
            return Ok(best);
        }
        alpha = alpha.max(best);
    }
    Ok(best)
}

fn min_value_ab<G: Game>(
    game: &G,
    state: &G::State,
    root: G::Player,
    alpha: Utility,
    mut beta: Utility,
    nodes: &mut u64,
) -> Result<Utility> {
    *nodes += 1;
    if game.is_final(state) {
        return game.utility(state, root);
    }
    let mut best = Utility::Win;
    for action in game.actions(state) {
        let child = game.result(state, &action)?;
        best = best.min(max_value_ab(game, &child, root, alpha, beta, nodes)?);
        if best <= alpha {
            // Alpha cutoff, mirror image of the beta case.
            return Ok(best);
        }
        beta = beta.min(best);
    }
    Ok(best)
}
