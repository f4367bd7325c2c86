//! Turn-alternating game loop over two policies.

use std::io::Write;

use crate::error::Result;
use crate::game::{Game, Utility};
use crate::policy::Policy;

/// Play a full game between two policies, writing each rendered state to the
/// display sink.
///
/// The loop strictly alternates: it asks the mover's policy for an action on
/// the current state, applies [`Game::result`], renders, and stops only when
/// [`Game::is_final`] holds. The returned utility is always from the
/// perspective of whoever moves first in the initial position, regardless of
/// who made the last move; [`crate::Outcome::from_utility`] turns it into a
/// readable verdict.
///
/// # Errors
///
/// Propagates policy errors (a closed input stream, say), transition errors
/// from policies that picked an illegal action, and sink write failures.
pub fn play<'p, G, W>(
    game: &G,
    first: &'p mut dyn Policy<G>,
    second: &'p mut dyn Policy<G>,
    sink: &mut W,
) -> Result<Utility>
where
    G: Game,
    W: Write,
{
    let reference = game.player(&game.initial());
    let mut state = game.initial();
    writeln!(sink, "{}", game.render(&state))?;

    loop {
        for policy in [&mut *first, &mut *second] {
            let action = policy.choose(game, &state)?;
            state = game.result(&state, &action)?;
            writeln!(sink, "{}", game.render(&state))?;
            if game.is_final(&state) {
                return game.utility(&state, reference);
            }
        }
    }
}
