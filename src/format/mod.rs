//! Formatting of class and enum references inside rendered hints.
//!
//! The renderer never spells entity names itself. It asks an
//! [`EntityFormatter`], so generators can plug in their own naming, import and
//! documentation conventions. [`DefaultFormatter`] implements the usual
//! stub-file conventions:
//!
//! | mode            | output                                     |
//! |-----------------|--------------------------------------------|
//! | qualified       | `module.Outer.Inner`                       |
//! | annotation      | `Outer.Inner`, `'Outer.Inner'` or `module.Outer.Inner` |
//! | cross-reference | ``:py:class:`~module.Outer.Inner` ``       |

use crate::base::Name;
use crate::symbols::{ClassId, EnumId, Scope, Symbols};

/// A resolved entity referenced by a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Class(ClassId),
    Enum(EnumId),
}

/// Spells class and enum references for each render mode.
pub trait EntityFormatter {
    /// The fully qualified name, e.g. `module.Outer.Inner`.
    fn qualified_name(&self, symbols: &Symbols, entity: Entity) -> String;

    /// The spelling inside an annotation written in `module`, where `defined`
    /// is the name already defined at that point.
    fn annotation(
        &self,
        symbols: &Symbols,
        entity: Entity,
        module: Option<&str>,
        defined: Option<&str>,
    ) -> String;

    /// Documentation text linking to the entity.
    fn cross_reference(&self, symbols: &Symbols, entity: Entity) -> String;
}

/// Formatter following stub-file and Sphinx conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultFormatter {
    /// Sphinx role used for cross-references.
    pub role: Name,
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self {
            role: Name::new_static("py:class"),
        }
    }
}

impl DefaultFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: impl Into<Name>) -> Self {
        self.role = role.into();
        self
    }

    /// The module an entity is generated in.
    fn module<'s>(&self, symbols: &'s Symbols, entity: Entity) -> &'s str {
        match entity {
            Entity::Class(id) => &symbols.class(id).module,
            Entity::Enum(id) => &symbols.enum_def(id).module,
        }
    }

    /// The name of an entity within its module, e.g. `Outer.Inner`.
    fn scoped_name(&self, symbols: &Symbols, entity: Entity) -> String {
        match entity {
            Entity::Class(id) => class_scoped_name(symbols, id),
            Entity::Enum(id) => {
                let enum_def = symbols.enum_def(id);
                let name = enum_def.display_name();
                match enum_def.scope {
                    Scope::Global => name.to_string(),
                    Scope::Class(class) => {
                        format!("{}.{}", class_scoped_name(symbols, class), name)
                    }
                    Scope::MappedType(mapped_type) => {
                        format!("{}.{}", symbols.mapped_type(mapped_type).display_name(), name)
                    }
                }
            }
        }
    }
}

impl EntityFormatter for DefaultFormatter {
    fn qualified_name(&self, symbols: &Symbols, entity: Entity) -> String {
        let scoped = self.scoped_name(symbols, entity);
        match self.module(symbols, entity) {
            "" => scoped,
            module => format!("{module}.{scoped}"),
        }
    }

    /// Entities of other modules are module-qualified. Entities of the current
    /// module are spelled by their scoped name, quoted as a forward reference
    /// unless `defined` is that name or one of its enclosing scopes.
    fn annotation(
        &self,
        symbols: &Symbols,
        entity: Entity,
        module: Option<&str>,
        defined: Option<&str>,
    ) -> String {
        if module != Some(self.module(symbols, entity)) {
            return self.qualified_name(symbols, entity);
        }

        let scoped = self.scoped_name(symbols, entity);
        match defined {
            Some(defined) if !is_within(&scoped, defined) => format!("'{scoped}'"),
            _ => scoped,
        }
    }

    fn cross_reference(&self, symbols: &Symbols, entity: Entity) -> String {
        format!(":{}:`~{}`", self.role, self.qualified_name(symbols, entity))
    }
}

fn class_scoped_name(symbols: &Symbols, id: ClassId) -> String {
    symbols
        .class_path(id)
        .into_iter()
        .map(|class| symbols.class(class).display_name())
        .collect::<Vec<_>>()
        .join(".")
}

/// Check if `scoped` is `defined` or nested inside it.
fn is_within(scoped: &str, defined: &str) -> bool {
    scoped
        .strip_prefix(defined)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}
