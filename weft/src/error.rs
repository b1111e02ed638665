//! Error taxonomy for driving patterns.
//!
//! Every failure here is local to the call that raised it: there are no
//! partial-success states, and nothing is retried or defaulted. Contract
//! violations (an unanswered position, an inadmissible answer) are
//! programmer errors surfaced at the first query rather than coerced.

use thiserror::Error;

/// Errors surfaced while driving a pattern to its terminal value.
///
/// Positions and directions are carried as their `Debug` renderings: the
/// generic parameters of the pattern that failed do not outlive the call,
/// and the rendering is for diagnostics only.
#[derive(Debug, Error)]
pub enum RunError {
    /// The stepper produced no answer for a position the pattern asked.
    #[error("no answer for position {position}")]
    Unanswered {
        /// The position that went unanswered.
        position: String,
    },

    /// An answer fell outside the direction set declared at its position.
    #[error("inadmissible direction {direction} at position {position}")]
    Inadmissible {
        /// The position being answered.
        position: String,
        /// The rejected direction value.
        direction: String,
    },

    /// The pattern asked more questions than the configured budget allows.
    #[error("step limit of {limit} exceeded")]
    StepLimitExceeded {
        /// The budget that was exhausted.
        limit: usize,
    },

    /// A terminal pattern was resumed.
    #[error("pattern is already terminal")]
    Terminal,
}
