//! # Weft
//!
//! An interaction-tree interpreter: a pairing mechanism between an
//! inductively-built "program with effects" (a [`Pattern`]) and a
//! corecursively-built "responsive environment" (a [`Matter`]), producing a
//! combined interaction tree.
//!
//! ## Design Overview
//!
//! The algebra follows the free-monad / cofree-comonad pairing of effectful
//! computation against handlers, in the tradition of:
//! - [Data types à la carte](https://doi.org/10.1017/S0956796808006758) (JFP'08)
//! - [Freer Monads, More Extensible Effects](https://doi.org/10.1145/2804302.2804319) (Haskell'15)
//! - Uustalu & Vene, *Comonadic Notions of Computation* (ENTCS'08)
//!
//! A [`Signature`] declares the vocabulary of an effect: *positions*
//! (questions) and per-position *direction* types (admissible answers). A
//! [`Pattern`] is a finite tree of pending questions over a signature,
//! ending in a terminal value. A [`Matter`] is an always-available responder:
//! a current value plus a total answer function, with comonadic navigation.
//! The [`pairing`] engine drives a pattern against a matter, yielding a
//! pattern over the product signature whose leaves pair the pattern's result
//! with the matter's state.
//!
//! ## Module Structure
//!
//! - [`signature`] - Effect vocabularies: the [`Signature`] trait, the
//!   runtime-defined [`TableSignature`], the product [`PairedSignature`]
//! - [`pattern`] - The inductive structure: builders, `map`/`and_then`,
//!   checked stepping
//! - [`matter`] - The corecursive structure: `extract`/`duplicate`/`extend`
//!   with lazy, memoized self-reference
//! - [`runner`] - The direct evaluator: loop-driven, validated, budgeted
//! - [`pairing`] - The module action and the oracle evaluator
//! - [`trace`] - Serializable, replayable interaction transcripts
//! - [`error`] - The failure taxonomy
//!
//! ## Example
//!
//! ```
//! use weft::{drive, Answer, DirectionKind, Matter, Pattern, TableSignature};
//!
//! let signature = TableSignature::define([("flip", DirectionKind::Bool)]);
//!
//! let pattern = Pattern::suspend("flip".to_string(), |answer| match answer {
//!     Answer::Bool(true) => Pattern::pure("heads"),
//!     _ => Pattern::pure("tails"),
//! });
//!
//! let matter: Matter<TableSignature, u32> =
//!     Matter::cofree(7, |_position| Answer::Bool(true));
//!
//! let (value, state) = drive(&signature, pattern, &matter).unwrap();
//! assert_eq!((value, state), ("heads", 7));
//! ```

pub mod error;
pub mod matter;
pub mod pairing;
pub mod pattern;
pub mod runner;
pub mod signature;
pub mod trace;

pub use error::RunError;
pub use matter::{Matter, Responder};
pub use pairing::{drive, pair};
pub use pattern::Pattern;
pub use runner::{run, run_traced, run_with_limit};
pub use signature::{
    Answer, DirectionKind, PairedSignature, PositionDomain, Signature, TableSignature,
};
pub use trace::{Step, Transcript};
