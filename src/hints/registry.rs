//! Per-symbol-table registry of unique hint texts.
//!
//! Every distinct hint text gets exactly one [`ManagedHint`]. Its tree is
//! built lazily on first render and never rebuilt, so the registry also acts
//! as the re-entrancy guard for override substitution: an entry in
//! [`ParseState::Parsing`] must not be parsed again.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

use super::error::HintError;
use super::node::HintNode;
use crate::base::Name;

/// Index of a hint in its registry.
/// Uses u32 for compact storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HintId(pub u32);

impl HintId {
    /// Create a new HintId from an index
    pub fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Get the index into the registry
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A unique hint within one symbol table.
///
/// Two handles from the same table are equal exactly when their texts are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeHint {
    id: HintId,
    text: Name,
}

impl TypeHint {
    pub fn id(&self) -> HintId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Parse progress of a managed hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseState {
    /// Not parsed yet
    #[default]
    Required,
    /// Being parsed further up the call stack
    Parsing,
    /// Tree built (possibly empty)
    Parsed,
}

/// Mutable state kept for each unique hint.
#[derive(Debug, Clone)]
pub struct ManagedHint {
    hint: TypeHint,
    state: ParseState,
    cross_reference: Option<String>,
    root: Option<HintNode>,
}

impl ManagedHint {
    fn new(hint: TypeHint) -> Self {
        Self {
            hint,
            state: ParseState::Required,
            cross_reference: None,
            root: None,
        }
    }

    pub fn hint(&self) -> &TypeHint {
        &self.hint
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    /// The resolved tree; `None` before parsing or when the hint has no type.
    pub fn root(&self) -> Option<&HintNode> {
        self.root.as_ref()
    }

    /// The cached cross-reference rendering, if any.
    pub fn cross_reference(&self) -> Option<&str> {
        self.cross_reference.as_deref()
    }
}

/// Cache of managed hints, keyed by hint text in insertion order.
#[derive(Debug, Default, Clone)]
pub struct HintRegistry {
    entries: IndexMap<Name, ManagedHint, FxBuildHasher>,
    parse_count: usize,
}

impl HintRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the unique hint for some text, registering it if necessary.
    pub fn intern(&mut self, text: &str) -> TypeHint {
        if let Some(entry) = self.entries.get(text) {
            return entry.hint.clone();
        }

        let hint = TypeHint {
            id: HintId::new(self.entries.len()),
            text: Name::new(text),
        };
        trace!("[HINT_REGISTRY] new hint #{} '{}'", hint.id.0, text);
        self.entries
            .insert(hint.text.clone(), ManagedHint::new(hint.clone()));
        hint
    }

    /// Look up a registered hint by text.
    pub fn lookup(&self, text: &str) -> Option<&ManagedHint> {
        self.entries.get(text)
    }

    /// The managed state of a registered hint.
    pub fn get(&self, id: HintId) -> &ManagedHint {
        &self.entries[id.index()]
    }

    pub fn state(&self, id: HintId) -> ParseState {
        self.get(id).state
    }

    /// Number of trees built so far.
    pub fn parse_count(&self) -> usize {
        self.parse_count
    }

    /// Number of unique hint texts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no hints have been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over managed hints in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ManagedHint> {
        self.entries.values()
    }

    // ============================================================
    // Parse lifecycle
    // ============================================================

    /// Mark a hint as being parsed.
    ///
    /// Returns the text to parse, or `None` if the hint is already parsed or
    /// currently being parsed.
    pub(crate) fn begin_parse(&mut self, id: HintId) -> Option<Name> {
        let entry = &mut self.entries[id.index()];
        if entry.state != ParseState::Required {
            return None;
        }
        entry.state = ParseState::Parsing;
        Some(entry.hint.text.clone())
    }

    /// Store the outcome of a parse started with [`HintRegistry::begin_parse`].
    ///
    /// A failed parse returns the entry to [`ParseState::Required`] so the
    /// error is reported again by the next request.
    pub(crate) fn complete_parse(
        &mut self,
        id: HintId,
        outcome: Result<Option<HintNode>, HintError>,
    ) -> Result<(), HintError> {
        let entry = &mut self.entries[id.index()];
        match outcome {
            Ok(root) => {
                debug!(
                    "[HINT_PARSE] '{}' parsed ({})",
                    entry.hint.text,
                    if root.is_some() { "tree" } else { "no type" }
                );
                entry.root = root;
                entry.state = ParseState::Parsed;
                self.parse_count += 1;
                Ok(())
            }
            Err(err) => {
                debug!("[HINT_PARSE] '{}' failed: {}", entry.hint.text, err);
                entry.state = ParseState::Required;
                Err(err)
            }
        }
    }

    pub(crate) fn cache_cross_reference(&mut self, id: HintId, rendered: String) {
        self.entries[id.index()].cross_reference = Some(rendered);
    }
}
