//! # typehint-base
//!
//! Type-hint parsing, name resolution and rendering for binding generators.
//!
//! A hint such as `Optional[Dict[str, Outer.Color]]` is parsed once per
//! [`SymbolTable`], its bare names are resolved against the table's classes,
//! enums and mapped types, and the resulting tree is rendered as plain
//! qualified names, as a `typing` annotation, or as a documentation
//! cross-reference.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! symbols   → SymbolTable: entities + hint registry, public render API
//!   ↓
//! format    → EntityFormatter trait, DefaultFormatter
//!   ↓
//! hints     → registry, bracket parser, scope resolver, renderer
//!   ↓
//! config    → HintConfig (typing namespace, top type)
//!   ↓
//! base      → Primitives (Name, Direction, TextSize)
//! ```

// ============================================================================
// MODULES (dependency order: base → config → hints → format → symbols)
// ============================================================================

/// Foundation types: Name, Direction, TextSize
pub mod base;

/// Rendering configuration
pub mod config;

/// Hint registry, parser, resolver and renderer
pub mod hints;

/// Entity formatting for rendered hints
pub mod format;

/// Classes, enums, mapped types and the owning symbol table
pub mod symbols;

// Re-export foundation types
pub use base::{Direction, Name, TextSize};
pub use config::HintConfig;
pub use format::{DefaultFormatter, Entity, EntityFormatter};
pub use hints::{HintError, HintNode, ParseState, RenderMode, TypeHint};
pub use symbols::{
    ClassDef, ClassId, EnumDef, EnumId, MappedTypeDef, MappedTypeId, OverrideHints, Scope,
    SymbolTable, Symbols,
};
