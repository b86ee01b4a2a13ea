//! Scoped symbol table for the Fen front-end
//!
//! This crate provides the symbol-table service driven by semantic
//! analysis. It tracks declarations across nested lexical scopes,
//! enforces declaration uniqueness, and resolves names with
//! innermost-scope-wins shadowing. The traversal that walks the syntax
//! tree, the type checker that interprets stored type ids, and
//! diagnostic reporting all live outside this crate.
//!
//! # Architecture
//!
//! The service consists of:
//! - **Scope stack**: the nesting path from the builtin/global scope to
//!   the active scope; mediates all declaration and resolution
//! - **Symbol**: one declaration's record, enriched in place by later
//!   passes
//! - **Declare errors**: duplicate declarations, reported to the caller
//!   for translation into positioned diagnostics
//!
//! # Usage
//!
//! ```rust
//! use fen_symtab::{ScopeStack, SymbolKind};
//!
//! let mut scopes: ScopeStack = ScopeStack::new();
//! let func = scopes.declare("main", SymbolKind::Function)?;
//!
//! scopes.push_scope();
//! let local = scopes.declare_shadowing("x", SymbolKind::Variable)?;
//! assert_eq!(scopes.lookup("x"), Some(local));
//! scopes.pop_scope();
//!
//! // Later passes keep enriching symbols through their handles.
//! scopes.symbol_mut(func).set_ty(7);
//! # Ok::<(), fen_symtab::DeclareError>(())
//! ```

pub mod error;
pub mod scope;
pub mod symbol;

pub use error::DeclareError;
pub use scope::ScopeStack;
pub use symbol::{Symbol, SymbolId, SymbolKind};
