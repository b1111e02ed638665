//! # Table Signatures
//!
//! Runtime-defined signatures: an ordered table mapping string position tags
//! to the kind of answer each admits. This is the dynamic counterpart of a
//! sum-type signature, for vocabularies only known at runtime (loaded
//! scenarios, test fixtures, wire-defined protocols).
//!
//! Tags are checked against the table once per answer, not dispatched on by
//! string comparison inside continuations; a continuation still receives a
//! concrete [`Answer`] and matches on its variant.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{PositionDomain, Signature};

/// The kind of answer a table-defined position admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionKind {
    /// Acknowledgement only.
    Unit,
    /// Yes/no choice.
    Bool,
    /// Signed integer.
    Int,
    /// Free-form text.
    Text,
}

/// A dynamic direction value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Unit,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Answer {
    /// The kind this answer belongs to.
    pub fn kind(&self) -> DirectionKind {
        match self {
            Answer::Unit => DirectionKind::Unit,
            Answer::Bool(_) => DirectionKind::Bool,
            Answer::Int(_) => DirectionKind::Int,
            Answer::Text(_) => DirectionKind::Text,
        }
    }
}

/// A signature defined at runtime from a position table.
///
/// Positions iterate in definition order. The table is immutable once
/// defined; identity is structural.
#[derive(Debug, Clone, Default)]
pub struct TableSignature {
    entries: IndexMap<String, DirectionKind>,
}

impl TableSignature {
    /// Create an empty table signature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a signature from `(tag, direction kind)` pairs.
    ///
    /// Later duplicates of a tag replace earlier ones.
    pub fn define<K>(positions: impl IntoIterator<Item = (K, DirectionKind)>) -> Self
    where
        K: Into<String>,
    {
        let entries = positions
            .into_iter()
            .map(|(tag, kind)| (tag.into(), kind))
            .collect();
        Self { entries }
    }

    /// Add one position, builder-style.
    pub fn with_position(mut self, tag: impl Into<String>, kind: DirectionKind) -> Self {
        self.entries.insert(tag.into(), kind);
        self
    }

    /// The direction kind declared for `tag`, if the position exists.
    pub fn direction_kind(&self, tag: &str) -> Option<DirectionKind> {
        self.entries.get(tag).copied()
    }

    /// Number of declared positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no positions are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Signature for TableSignature {
    type Position = String;
    type Direction = Answer;

    fn admits(&self, position: &String, direction: &Answer) -> bool {
        self.entries
            .get(position.as_str())
            .map_or(false, |kind| *kind == direction.kind())
    }

    fn positions(&self) -> PositionDomain<String> {
        PositionDomain::Finite(self.entries.keys().cloned().collect())
    }
}
