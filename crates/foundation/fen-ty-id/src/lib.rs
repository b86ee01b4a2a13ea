//! Type identifier foundation
//!
//! This crate provides the type-reference wrapper attached to symbols.
//! It's a separate crate so that passes can share it without depending
//! on the symbol table itself.

use serde::{Deserialize, Serialize};

/// A reference to a semantic type, carried by its numeric identifier
///
/// `TyRef` deliberately implements no `PartialEq`: type identifiers are
/// not interned or canonicalized, and every assignment to a symbol
/// constructs a fresh `TyRef`. Consumers that need type equality must
/// compare the ids returned by [`TyRef::id`] against their own type
/// table, never `TyRef` values themselves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TyRef {
    id: u32,
}

impl TyRef {
    /// Wraps a numeric type identifier
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    /// The wrapped type identifier
    pub fn id(self) -> u32 {
        self.id
    }
}
