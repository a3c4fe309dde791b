//! Name resolution for hints: bare names to symbol table entities.
//!
//! # Scope walk
//!
//! A name such as `Outer.Inner.Color` (or `Outer::Inner::Color`) is split into
//! parts that are resolved left to right. The scope starts global and moves
//! into a class or a mapped type after each intermediate part:
//!
//! 1. **Enums** are tried first, in the current scope or at global scope.
//!    An enum must be the last part.
//! 2. **Mapped types** are only visible at global scope, and only expose
//!    enums as nested names.
//! 3. **Classes** are looked up in the enclosing class; external classes are
//!    never matched.
//!
//! Anything that does not match degrades to [`HintNode::Unresolved`] carrying
//! the full original name.
//!
//! # Override substitution
//!
//! When the final part is a class or mapped type with an override hint for the
//! requested [`Direction`], the override hint is parsed (once, through the
//! registry) and a copy of its tree replaces the reference. An override that
//! is already being parsed is ignored for that occurrence, which is what stops
//! `class Foo` with out-hint `Foo` from substituting itself forever.
//! An empty override means the reference has no type, so it is dropped from
//! the enclosing arguments.

use tracing::{debug, trace};

use super::error::HintError;
use super::node::HintNode;
use super::parser::{ResolveName, parse_hint};
use super::registry::{HintId, HintRegistry, ParseState};
use crate::base::{Direction, Name};
use crate::symbols::{ClassId, MappedTypeId, OverrideHints, Scope, Symbols};

/// Outcome of looking for an override hint.
enum Substitution {
    /// No usable override: none declared, or it is mid-parse.
    Absent,
    /// The override's tree, copied (`None` if the override has no type).
    Replaced(Option<HintNode>),
}

/// Parses hints of one registry against one set of symbols.
///
/// All hints parsed through one resolver use the same direction, including
/// the override hints they pull in.
pub(crate) struct HintResolver<'a> {
    symbols: &'a Symbols,
    registry: &'a mut HintRegistry,
    direction: Direction,
}

impl<'a> HintResolver<'a> {
    pub(crate) fn new(
        symbols: &'a Symbols,
        registry: &'a mut HintRegistry,
        direction: Direction,
    ) -> Self {
        Self {
            symbols,
            registry,
            direction,
        }
    }

    /// Build the tree of a hint unless it is already built or being built.
    pub(crate) fn ensure_parsed(&mut self, id: HintId) -> Result<(), HintError> {
        let Some(text) = self.registry.begin_parse(id) else {
            return Ok(());
        };

        trace!("[HINT_PARSE] building '{}' ({})", text, self.direction.as_str());
        let outcome = parse_hint(&text, self);
        self.registry.complete_parse(id, outcome)
    }

    // ============================================================
    // Substitution
    // ============================================================

    /// Copy the root of the override hint for the current direction.
    fn substitute(&mut self, hints: Option<&OverrideHints>) -> Result<Substitution, HintError> {
        let Some(text) = hints.and_then(|h| h.for_direction(self.direction)) else {
            return Ok(Substitution::Absent);
        };

        // An empty override declares that there is no value at all.
        if text.trim().is_empty() {
            trace!("[HINT_RESOLVE] empty override, no type");
            return Ok(Substitution::Replaced(None));
        }

        let hint = self.registry.intern(text);
        if self.registry.state(hint.id()) == ParseState::Parsing {
            debug!(
                "[HINT_RESOLVE] override '{}' is being parsed, using the bare reference",
                text
            );
            return Ok(Substitution::Absent);
        }

        self.ensure_parsed(hint.id())?;
        trace!("[HINT_RESOLVE] substituting override '{}'", text);
        Ok(Substitution::Replaced(
            self.registry.get(hint.id()).root().cloned(),
        ))
    }

    fn resolve_class(&mut self, class: ClassId) -> Result<Option<HintNode>, HintError> {
        let symbols = self.symbols;
        match self.substitute(symbols.class(class).hints.as_ref())? {
            Substitution::Replaced(root) => Ok(root),
            Substitution::Absent => Ok(Some(HintNode::Class(class))),
        }
    }

    /// A bare mapped type without an override has no type.
    fn resolve_mapped_type(
        &mut self,
        mapped_type: MappedTypeId,
    ) -> Result<Option<HintNode>, HintError> {
        let symbols = self.symbols;
        match self.substitute(symbols.mapped_type(mapped_type).hints.as_ref())? {
            Substitution::Replaced(root) => Ok(root),
            Substitution::Absent => Ok(None),
        }
    }
}

impl ResolveName for HintResolver<'_> {
    fn resolve_name(&mut self, name: &str) -> Result<Option<HintNode>, HintError> {
        let symbols = self.symbols;
        let parts = split_scoped_name(name);
        let mut scope = Scope::Global;

        for (i, part) in parts.iter().enumerate() {
            let is_last = i + 1 == parts.len();
            trace!(
                "[HINT_RESOLVE] part '{}' of '{}' in {:?}",
                part, name, scope
            );

            if let Some(enum_id) = symbols.find_enum(part, scope) {
                if is_last {
                    return Ok(Some(HintNode::Enum(enum_id)));
                }

                // Enums have no nested names.
                break;
            }

            let enclosing = match scope {
                // Mapped types only expose enums.
                Scope::MappedType(_) => break,
                Scope::Class(class) => Some(class),
                Scope::Global => {
                    if let Some(mapped_type) = symbols.find_mapped_type(part) {
                        if is_last {
                            return self.resolve_mapped_type(mapped_type);
                        }
                        scope = Scope::MappedType(mapped_type);
                        continue;
                    }
                    None
                }
            };

            let Some(class) = symbols.find_class(part, enclosing) else {
                break;
            };

            if is_last {
                return self.resolve_class(class);
            }
            scope = Scope::Class(class);
        }

        trace!("[HINT_RESOLVE] '{}' is unresolved", name);
        Ok(Some(HintNode::Unresolved(Name::new(name))))
    }
}

/// Split a name on either `.` or `::`.
///
/// A single leading `::` names the global scope and is stripped. Any other
/// empty part is kept so that the name fails to resolve.
fn split_scoped_name(name: &str) -> Vec<&str> {
    let name = name.strip_prefix("::").unwrap_or(name);
    name.split("::")
        .flat_map(|segment| segment.split('.'))
        .collect()
}
