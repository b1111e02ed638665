//! # Transcripts
//!
//! A transcript is the record of one run's question/answer exchange: the
//! sequence of `(position, direction)` pairs that were actually answered.
//! Transcripts serialize (when the signature's tag types do) so a recorded
//! interaction can be stored as a fixture, and replay as a stepper so the
//! recorded run can be reproduced deterministically.

use serde::{Deserialize, Serialize};

use crate::signature::Signature;

/// One answered step of an interaction.
#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "S::Position: Serialize, S::Direction: Serialize",
    deserialize = "S::Position: Deserialize<'de>, S::Direction: Deserialize<'de>"
))]
pub struct Step<S: Signature> {
    /// The position that was asked.
    pub position: S::Position,
    /// The direction it was answered with.
    pub direction: S::Direction,
}

impl<S: Signature> Clone for Step<S> {
    fn clone(&self) -> Self {
        Self {
            position: self.position.clone(),
            direction: self.direction.clone(),
        }
    }
}

impl<S: Signature> std::fmt::Debug for Step<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("position", &self.position)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<S: Signature> PartialEq for Step<S>
where
    S::Position: PartialEq,
    S::Direction: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.direction == other.direction
    }
}

/// The recorded exchange of one run, in ask order.
#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "S::Position: Serialize, S::Direction: Serialize",
    deserialize = "S::Position: Deserialize<'de>, S::Direction: Deserialize<'de>"
))]
pub struct Transcript<S: Signature> {
    steps: Vec<Step<S>>,
}

impl<S: Signature> Transcript<S> {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append one answered step.
    pub fn record(&mut self, position: S::Position, direction: S::Direction) {
        self.steps.push(Step {
            position,
            direction,
        });
    }

    /// The recorded steps, in ask order.
    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Replay this transcript as a stepper.
    ///
    /// Each call yields the next recorded direction, provided the asked
    /// position matches the recorded one; a mismatch or an exhausted
    /// transcript answers `None`, which the runner surfaces as
    /// [`Unanswered`](crate::error::RunError::Unanswered). Replaying a
    /// transcript against the pattern that produced it reproduces the run.
    pub fn into_stepper(self) -> impl FnMut(&S::Position) -> Option<S::Direction>
    where
        S::Position: PartialEq,
    {
        let mut remaining = self.steps.into_iter();
        move |position| {
            let step = remaining.next()?;
            (step.position == *position).then_some(step.direction)
        }
    }
}

impl<S: Signature> Default for Transcript<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Signature> Clone for Transcript<S> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<S: Signature> std::fmt::Debug for Transcript<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.steps.iter()).finish()
    }
}
