//! # Patterns
//!
//! The inductive half of the interaction algebra: a finite tree of pending
//! questions ending in a terminal value. A pattern is either [`Pure`] (done,
//! carrying its result) or [`Suspend`] (one question at some position of
//! its signature, with a continuation keyed by the eventual answer).
//!
//! ## Ownership
//!
//! Continuations are `FnOnce`: a pattern is consumed by exactly one
//! traversal. Single-shot driving is a type-level fact, not a runtime flag
//! to check.
//!
//! ## Totality
//!
//! A continuation must be total over its position's direction type. The
//! structure cannot forbid out-of-domain answers statically, so the checked
//! entry points ([`Pattern::resume`], [`run`](crate::runner::run)) validate
//! every answer against the signature's [`admits`](crate::Signature::admits)
//! relation before the continuation sees it, and fail fast on violation.
//!
//! [`Pure`]: Pattern::Pure
//! [`Suspend`]: Pattern::Suspend

use std::fmt;

use crate::error::RunError;
use crate::signature::Signature;

/// Continuation awaiting the answer to one suspended question.
pub type Continuation<S, A> =
    Box<dyn FnOnce(<S as Signature>::Direction) -> Pattern<S, A>>;

/// A finite interaction tree over signature `S`, terminating in an `A`.
pub enum Pattern<S: Signature, A> {
    /// Terminal value; no further interaction.
    Pure(A),
    /// One pending question and the rest of the interaction.
    Suspend {
        /// The position being asked.
        position: S::Position,
        /// The rest of the pattern, keyed by the answer.
        continuation: Continuation<S, A>,
    },
}

impl<S: Signature, A> Pattern<S, A> {
    /// Wrap a terminal value.
    pub fn pure(value: A) -> Self {
        Pattern::Pure(value)
    }

    /// Suspend on one question.
    ///
    /// `continuation` must be total over the direction type declared at
    /// `position`.
    pub fn suspend(
        position: S::Position,
        continuation: impl FnOnce(S::Direction) -> Pattern<S, A> + 'static,
    ) -> Self {
        Pattern::Suspend {
            position,
            continuation: Box::new(continuation),
        }
    }

    /// Whether this pattern is terminal.
    pub fn is_pure(&self) -> bool {
        matches!(self, Pattern::Pure(_))
    }

    /// The pending position, if any.
    pub fn position(&self) -> Option<&S::Position> {
        match self {
            Pattern::Pure(_) => None,
            Pattern::Suspend { position, .. } => Some(position),
        }
    }

    /// Map the terminal value.
    pub fn map<C>(self, f: impl FnOnce(A) -> C + 'static) -> Pattern<S, C>
    where
        A: 'static,
        C: 'static,
        S: 'static,
        S::Direction: 'static,
    {
        self.and_then(|value| Pattern::pure(f(value)))
    }

    /// Monadic substitution: graft `f`'s pattern onto every terminal leaf.
    ///
    /// `Pure(a)` rewrites to `f(a)`; `Suspend(p, k)` keeps its question and
    /// defers the substitution into the continuation. This is the law that
    /// lets patterns be built incrementally.
    pub fn and_then<C>(self, f: impl FnOnce(A) -> Pattern<S, C> + 'static) -> Pattern<S, C>
    where
        A: 'static,
        C: 'static,
        S: 'static,
        S::Direction: 'static,
    {
        match self {
            Pattern::Pure(value) => f(value),
            Pattern::Suspend {
                position,
                continuation,
            } => Pattern::suspend(position, move |direction| {
                continuation(direction).and_then(f)
            }),
        }
    }

    /// Feed one answer, validating it against the signature first.
    ///
    /// Fails with [`RunError::Inadmissible`] if the answer falls outside the
    /// direction set at the pending position (the continuation is never
    /// invoked with an out-of-domain value), and with [`RunError::Terminal`]
    /// if the pattern has already finished.
    pub fn resume(self, signature: &S, direction: S::Direction) -> Result<Self, RunError> {
        match self {
            Pattern::Pure(_) => Err(RunError::Terminal),
            Pattern::Suspend {
                position,
                continuation,
            } => {
                if !signature.admits(&position, &direction) {
                    return Err(RunError::Inadmissible {
                        position: format!("{:?}", position),
                        direction: format!("{:?}", direction),
                    });
                }
                Ok(continuation(direction))
            }
        }
    }
}

impl<S: Signature, A: fmt::Debug> fmt::Debug for Pattern<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Pure(value) => f.debug_tuple("Pure").field(value).finish(),
            Pattern::Suspend { position, .. } => f
                .debug_struct("Suspend")
                .field("position", position)
                .finish_non_exhaustive(),
        }
    }
}
