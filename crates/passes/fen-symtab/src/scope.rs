//! Nested lexical scopes and name resolution

use crate::error::DeclareError;
use crate::symbol::{Symbol, SymbolId, SymbolKind};
use indexmap::IndexMap;
use la_arena::Arena;
use rustc_hash::FxBuildHasher;
use tracing::trace;

/// One lexical level: the names declared directly in it
///
/// Insertion order is preserved so diagnostic iteration over a scope is
/// deterministic.
#[derive(Debug)]
struct Scope<P> {
    bindings: IndexMap<String, SymbolId<P>, FxBuildHasher>,
}

impl<P> Scope<P> {
    fn new() -> Self {
        Self {
            bindings: IndexMap::default(),
        }
    }
}

/// The nesting path from the builtin/global scope to the active scope
///
/// The stack owns every [`Symbol`] ever declared through it; scopes
/// hold handles into that storage. Popping a scope removes its bindings
/// from resolution, but handles already given out stay valid so later
/// passes can keep enriching the symbols they resolved.
///
/// Invariant: the builtin scope at the bottom is created with the stack
/// and is never removed.
///
/// A stack is a plain value threaded through one sequential traversal;
/// independent analyses each own their own instance.
#[derive(Debug)]
pub struct ScopeStack<P = ()> {
    symbols: Arena<Symbol<P>>,
    scopes: Vec<Scope<P>>,
}

impl<P> Default for ScopeStack<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ScopeStack<P> {
    /// Creates a stack holding only the builtin/global scope
    pub fn new() -> Self {
        Self {
            symbols: Arena::new(),
            scopes: vec![Scope::new()],
        }
    }

    /// Number of scopes currently on the stack, builtin included
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Enters a new lexical scope
    ///
    /// Called by the traversal on entering a function body, block
    /// statement, or type definition. Must be paired with a
    /// [`ScopeStack::pop_scope`] on every exit path from the construct.
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
        trace!(depth = self.scopes.len(), "scope entered");
    }

    /// Leaves the innermost scope, dropping its bindings from resolution
    ///
    /// # Panics
    ///
    /// Panics if only the builtin scope remains. An unbalanced pop is a
    /// defect in the driving traversal, not a reportable condition, and
    /// analysis must not continue with corrupted scope state.
    pub fn pop_scope(&mut self) {
        assert!(self.scopes.len() > 1, "cannot pop the builtin scope");
        self.scopes.pop();
        trace!(depth = self.scopes.len(), "scope left");
    }

    /// Declares `name` with `kind` in the innermost scope, forbidding
    /// shadowing
    ///
    /// The strict variant: the whole visible stack is scanned, and any
    /// existing binding for `name` is a conflict regardless of which
    /// scope holds it. Used where the language forbids shadowing, such
    /// as top-level program symbols. Which constructs get the strict
    /// treatment is the caller's choice.
    ///
    /// # Errors
    ///
    /// Returns [`DeclareError::Duplicate`] if `name` is visible in any
    /// scope on the stack. The existing symbol is left untouched.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        kind: SymbolKind,
    ) -> Result<SymbolId<P>, DeclareError> {
        let name = name.into();
        if let Some(existing) = self.lookup(&name) {
            return Err(self.duplicate(name, existing));
        }
        Ok(self.bind(name, kind))
    }

    /// Declares `name` with `kind` in the innermost scope, permitting
    /// shadowing of outer declarations
    ///
    /// Only the innermost scope is scanned, so a binding that hides an
    /// outer one is legal and produces a distinct symbol; the outer
    /// symbol is untouched and becomes visible again once this scope is
    /// popped. Used for nested block and function scopes.
    ///
    /// # Errors
    ///
    /// Returns [`DeclareError::Duplicate`] if `name` is already bound
    /// in the innermost scope.
    pub fn declare_shadowing(
        &mut self,
        name: impl Into<String>,
        kind: SymbolKind,
    ) -> Result<SymbolId<P>, DeclareError> {
        let name = name.into();
        if let Some(&existing) = self.active().bindings.get(&name) {
            return Err(self.duplicate(name, existing));
        }
        Ok(self.bind(name, kind))
    }

    /// Resolves `name` against the visible scopes, innermost first
    ///
    /// The first match wins, realizing lexical shadowing. `None` means
    /// the name is not bound anywhere on the stack; that is a normal
    /// condition for the caller to handle (an "undeclared identifier"
    /// diagnostic, typically), not a fault of the table.
    pub fn lookup(&self, name: &str) -> Option<SymbolId<P>> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.bindings.get(name).copied())
    }

    /// Borrows the symbol behind `id`
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different stack.
    pub fn symbol(&self, id: SymbolId<P>) -> &Symbol<P> {
        &self.symbols[id]
    }

    /// Mutably borrows the symbol behind `id`
    ///
    /// All holders of `id` observe the mutation; symbols are single
    /// shared records, never copied between scopes.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different stack.
    pub fn symbol_mut(&mut self, id: SymbolId<P>) -> &mut Symbol<P> {
        &mut self.symbols[id]
    }

    /// Symbols declared directly in the active scope, in declaration
    /// order
    pub fn innermost_symbols(&self) -> impl Iterator<Item = &Symbol<P>> {
        self.active()
            .bindings
            .values()
            .map(|&id| &self.symbols[id])
    }

    /// Emits one trace event per variable declared in the active scope
    ///
    /// A debug aid for the driving traversal; without a tracing
    /// subscriber installed this has no observable effect.
    pub fn trace_variables(&self) {
        for symbol in self.innermost_symbols() {
            if symbol.kind() == SymbolKind::Variable {
                trace!(name = symbol.name(), "VAR");
            }
        }
    }

    fn active(&self) -> &Scope<P> {
        &self.scopes[self.scopes.len() - 1]
    }

    fn duplicate(&self, name: String, existing: SymbolId<P>) -> DeclareError {
        DeclareError::Duplicate {
            name,
            first: self.symbols[existing].loc().cloned(),
        }
    }

    fn bind(&mut self, name: String, kind: SymbolKind) -> SymbolId<P> {
        let id = self.symbols.alloc(Symbol::new(name.clone(), kind));
        trace!(name = %name, kind = %kind, "symbol declared");
        let top = self.scopes.len() - 1;
        self.scopes[top].bindings.insert(name, id);
        id
    }
}
