//! Symbols: the entities hints are resolved against.
//!
//! ## Key Types
//!
//! - [`Symbols`]: Arena of classes, enums and mapped types with name indexes
//! - [`SymbolTable`]: Owns the symbols, a hint registry and a formatter;
//!   entry point for rendering hints
//! - [`ClassId`], [`EnumId`], [`MappedTypeId`]: Arena handles
//! - [`OverrideHints`]: Direction-specific replacement hints

mod symbol;
mod table;

pub use symbol::{
    ClassDef, ClassId, EnumDef, EnumId, MappedTypeDef, MappedTypeId, OverrideHints, Scope,
};
pub use table::{SymbolTable, Symbols};
