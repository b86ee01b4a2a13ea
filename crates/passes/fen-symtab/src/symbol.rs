//! Symbol records and declaration kinds

use fen_loc::SourceLoc;
use fen_ty_id::TyRef;
use la_arena::Idx;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to a [`Symbol`] owned by a
/// [`ScopeStack`](crate::scope::ScopeStack)
///
/// Handles stay valid after the declaring scope is popped, so later
/// passes can keep enriching a symbol they resolved earlier.
pub type SymbolId<P = ()> = Idx<Symbol<P>>;

/// Syntactic category of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    /// Category not yet known; re-classified once the defining construct
    /// is seen (forward declarations)
    None,
    /// Top-level program
    Program,
    /// Function declaration
    Function,
    /// Type declaration
    Type,
    /// Variable declaration
    Variable,
    /// Constant declaration
    Constant,
}

impl SymbolKind {
    /// Display name of the kind, as it appears in trace output
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Program => "program",
            Self::Function => "function",
            Self::Type => "type",
            Self::Variable => "variable",
            Self::Constant => "constant",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// One declaration's record and metadata
///
/// Created only through the declare operations of
/// [`ScopeStack`](crate::scope::ScopeStack), then enriched in place as
/// the traversal learns more: the type once the type checker assigns
/// one, the kind once a forward declaration meets its definition, the
/// source location for diagnostics.
///
/// `P` is the caller-attached payload type (an AST node handle, a
/// computed constant value, ...); this crate never inspects it.
#[derive(Debug)]
pub struct Symbol<P = ()> {
    name: String,
    kind: SymbolKind,
    ty: Option<TyRef>,
    token_kind: u32,
    depth: usize,
    loc: Option<SourceLoc>,
    payload: Option<P>,
}

impl<P> Symbol<P> {
    pub(crate) fn new(name: String, kind: SymbolKind) -> Self {
        debug_assert!(!name.is_empty(), "symbol names must be non-empty");
        Self {
            name,
            kind,
            ty: None,
            token_kind: 0,
            depth: 0,
            loc: None,
            payload: None,
        }
    }

    /// The declared identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current declaration kind
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Display name of the current kind
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Re-classifies the symbol, e.g. when a forward declaration is
    /// resolved in a second pass
    pub fn set_kind(&mut self, kind: SymbolKind) {
        self.kind = kind;
    }

    /// The attached type reference, if one has been assigned
    pub fn ty(&self) -> Option<TyRef> {
        self.ty
    }

    /// The attached type identifier, if one has been assigned
    pub fn ty_id(&self) -> Option<u32> {
        self.ty.map(TyRef::id)
    }

    /// Assigns a type, replacing any previous reference with a freshly
    /// constructed [`TyRef`]
    pub fn set_ty(&mut self, id: u32) {
        self.ty = Some(TyRef::new(id));
    }

    /// Auxiliary tag correlating the symbol to its originating lexical
    /// token category; independent of [`Symbol::kind`]
    pub fn token_kind(&self) -> u32 {
        self.token_kind
    }

    /// Sets the lexical token tag
    pub fn set_token_kind(&mut self, token_kind: u32) {
        self.token_kind = token_kind;
    }

    /// Nesting depth used for trace indentation only; never consulted
    /// by resolution
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Sets the trace indentation depth
    pub fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Originating source location, once recorded
    pub fn loc(&self) -> Option<&SourceLoc> {
        self.loc.as_ref()
    }

    /// Records where the declaration came from
    pub fn set_loc(&mut self, loc: SourceLoc) {
        self.loc = Some(loc);
    }

    /// Borrows the caller-attached payload
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Mutably borrows the caller-attached payload
    pub fn payload_mut(&mut self) -> Option<&mut P> {
        self.payload.as_mut()
    }

    /// Attaches a payload, replacing any previous one
    pub fn set_payload(&mut self, payload: P) {
        self.payload = Some(payload);
    }

    /// Removes and returns the payload
    pub fn take_payload(&mut self) -> Option<P> {
        self.payload.take()
    }
}

impl<P> fmt::Display for Symbol<P> {
    /// Renders the depth-indented trace line for this symbol
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tabs = "\t".repeat(self.depth);
        write!(formatter, "{tabs}SYM[{}]({})", self.kind, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(name: &str, kind: SymbolKind) -> Symbol {
        Symbol::new(name.to_string(), kind)
    }

    #[test]
    fn fresh_symbol_has_no_metadata() {
        let sym = symbol("count", SymbolKind::Variable);
        assert_eq!(sym.name(), "count");
        assert_eq!(sym.kind(), SymbolKind::Variable);
        assert!(sym.ty().is_none());
        assert!(sym.loc().is_none());
        assert_eq!(sym.token_kind(), 0);
        assert_eq!(sym.depth(), 0);
        assert!(sym.payload().is_none());
    }

    #[test]
    fn set_ty_replaces_previous_reference() {
        let mut sym = symbol("count", SymbolKind::Variable);
        sym.set_ty(3);
        sym.set_ty(9);
        assert_eq!(sym.ty_id(), Some(9));
    }

    #[test]
    fn kind_can_be_reclassified() {
        let mut sym = symbol("point", SymbolKind::None);
        assert_eq!(sym.kind_name(), "none");
        sym.set_kind(SymbolKind::Type);
        assert_eq!(sym.kind(), SymbolKind::Type);
        assert_eq!(sym.kind_name(), "type");
    }

    #[test]
    fn location_is_recorded_for_diagnostics() {
        let mut sym = symbol("main", SymbolKind::Function);
        sym.set_loc(fen_loc::SourceLoc::new("main.fen", 12));
        assert_eq!(sym.loc().map(ToString::to_string).as_deref(), Some("main.fen:12"));
    }

    #[test]
    fn payload_round_trips_through_the_typed_slot() {
        let mut sym: Symbol<i64> = Symbol::new("limit".to_string(), SymbolKind::Constant);
        sym.set_payload(1024);
        assert_eq!(sym.payload(), Some(&1024));
        if let Some(value) = sym.payload_mut() {
            *value += 1;
        }
        assert_eq!(sym.take_payload(), Some(1025));
        assert!(sym.payload().is_none());
    }

    #[test]
    fn display_indents_by_depth() {
        let mut sym = symbol("x", SymbolKind::Variable);
        assert_eq!(sym.to_string(), "SYM[variable](x)");
        sym.set_depth(2);
        assert_eq!(sym.to_string(), "\t\tSYM[variable](x)");
    }
}
