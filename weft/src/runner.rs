//! # Runner
//!
//! The direct evaluator: drives a [`Pattern`] down to its terminal value,
//! one answered position at a time, without a persistent matter. This is the
//! non-paired evaluation path used by tests and by simple effect handlers.
//!
//! ## Shape
//!
//! Evaluation is an explicit loop, not structural recursion: each iteration
//! matches one node, asks the stepper, validates the answer, and replaces
//! the pattern with its continuation's result. Stack depth therefore does
//! not grow with pattern length, which matters for patterns whose length is
//! not statically bounded.
//!
//! ## Failure
//!
//! Every answer is validated against the signature's
//! [`admits`](Signature::admits) relation *before* the continuation runs; an
//! inadmissible answer or an unanswered position fails the run immediately.
//! Nothing is coerced, defaulted, or retried.

use tracing::{debug, trace};

use crate::error::RunError;
use crate::pattern::Pattern;
use crate::signature::Signature;
use crate::trace::Transcript;

/// Drive `pattern` to completion, answering one position at a time.
///
/// The stepper returns `None` to signal it has no answer for a position;
/// that is the totality-violation surface for open position domains and
/// fails the run with [`RunError::Unanswered`].
pub fn run<S, A>(
    signature: &S,
    pattern: Pattern<S, A>,
    stepper: impl FnMut(&S::Position) -> Option<S::Direction>,
) -> Result<A, RunError>
where
    S: Signature,
{
    run_inner(signature, pattern, stepper, None)
}

/// [`run`], but failing with [`RunError::StepLimitExceeded`] once the
/// pattern has asked `limit` questions.
///
/// The budget is the resource-exhaustion guard for patterns of unbounded
/// length; exceeding it is reported, never silently truncated.
pub fn run_with_limit<S, A>(
    signature: &S,
    pattern: Pattern<S, A>,
    stepper: impl FnMut(&S::Position) -> Option<S::Direction>,
    limit: usize,
) -> Result<A, RunError>
where
    S: Signature,
{
    run_inner(signature, pattern, stepper, Some(limit))
}

/// [`run`], additionally recording every answered step.
///
/// The transcript replays through
/// [`Transcript::into_stepper`](crate::trace::Transcript::into_stepper) to
/// reproduce the run deterministically.
pub fn run_traced<S, A>(
    signature: &S,
    pattern: Pattern<S, A>,
    mut stepper: impl FnMut(&S::Position) -> Option<S::Direction>,
) -> Result<(A, Transcript<S>), RunError>
where
    S: Signature,
{
    let mut transcript = Transcript::new();
    let value = run_inner(
        signature,
        pattern,
        |position| {
            let direction = stepper(position)?;
            transcript.record(position.clone(), direction.clone());
            Some(direction)
        },
        None,
    )?;
    Ok((value, transcript))
}

fn run_inner<S, A>(
    signature: &S,
    mut pattern: Pattern<S, A>,
    mut stepper: impl FnMut(&S::Position) -> Option<S::Direction>,
    limit: Option<usize>,
) -> Result<A, RunError>
where
    S: Signature,
{
    let mut steps = 0usize;
    loop {
        match pattern {
            Pattern::Pure(value) => {
                debug!(steps, "pattern reached terminal value");
                return Ok(value);
            }
            Pattern::Suspend {
                position,
                continuation,
            } => {
                if let Some(limit) = limit {
                    if steps >= limit {
                        return Err(RunError::StepLimitExceeded { limit });
                    }
                }
                let direction = stepper(&position).ok_or_else(|| RunError::Unanswered {
                    position: format!("{:?}", position),
                })?;
                if !signature.admits(&position, &direction) {
                    return Err(RunError::Inadmissible {
                        position: format!("{:?}", position),
                        direction: format!("{:?}", direction),
                    });
                }
                trace!(position = ?position, direction = ?direction, "position answered");
                steps += 1;
                pattern = continuation(direction);
            }
        }
    }
}
