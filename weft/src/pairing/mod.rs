//! # Pairing Engine
//!
//! The module action: drive a [`Pattern`] over `P` against a [`Matter`] over
//! `Q`, producing a pattern over the product signature
//! [`PairedSignature<P, Q, B>`] whose leaves pair the original pattern's
//! result with the matter's state at that point.
//!
//! ## Algorithm
//!
//! - `Pure(a)` pairs to `Pure((a, extract(matter)))`: the interaction
//!   terminates and the matter's current state is captured as the final
//!   context.
//! - `Suspend(p, k)` pairs to a suspend at `(p, extract(matter))` whose
//!   continuation takes a paired answer, feeds the pattern-side component to
//!   `k`, and pairs the rest against the *same* matter.
//!
//! The matter is a constant oracle here: its state is never advanced by the
//! interaction, and its response surface is never materialized: only the
//! positions the pattern actually asks are ever touched. The recursion sits
//! inside continuations, so a paired pattern unfolds one node per answer
//! under the loop-driven [`runner`](crate::runner).
//!
//! The variant in which the matter's own answers flow back into the
//! pattern's continuations is [`drive`]: the matter's responder acts as the
//! stepper, still without state advancement.

use std::fmt;

use tracing::debug;

use crate::error::RunError;
use crate::matter::Matter;
use crate::pattern::Pattern;
use crate::runner::run;
use crate::signature::{PairedSignature, Signature};

/// Pair a pattern with a matter, producing the combined interaction tree.
///
/// Every suspend in the result observes the matter's (unchanging) state; the
/// terminal leaf pairs the pattern's value with that same state. Directions
/// of the paired pattern are pairs, of which only the pattern-side component
/// steers the interaction.
pub fn pair<P, Q, A, B>(
    pattern: Pattern<P, A>,
    matter: Matter<Q, B>,
) -> Pattern<PairedSignature<P, Q, B>, (A, B)>
where
    P: Signature + 'static,
    Q: Signature + 'static,
    A: 'static,
    B: Clone + fmt::Debug + 'static,
{
    match pattern {
        Pattern::Pure(value) => Pattern::pure((value, matter.extract().clone())),
        Pattern::Suspend {
            position,
            continuation,
        } => {
            let here = (position, matter.extract().clone());
            Pattern::suspend(here, move |answer: (P::Direction, Q::Direction)| {
                let (direction, _echo) = answer;
                pair(continuation(direction), matter)
            })
        }
    }
}

/// Let the matter answer the pattern directly.
///
/// Pattern and matter share a signature; the matter's responder becomes the
/// stepper, every answer is validated against the signature, and the result
/// pairs the pattern's terminal value with the matter's (unchanged) state.
pub fn drive<S, A, B>(
    signature: &S,
    pattern: Pattern<S, A>,
    matter: &Matter<S, B>,
) -> Result<(A, B), RunError>
where
    S: Signature + 'static,
    A: 'static,
    B: Clone + fmt::Debug + 'static,
{
    let value = run(signature, pattern, |position| Some(matter.respond(position)))?;
    debug!(state = ?matter.extract(), "pattern driven to completion against matter");
    Ok((value, matter.extract().clone()))
}
