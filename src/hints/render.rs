//! Rendering of resolved hint trees.
//!
//! All three modes walk the same tree; they differ only in how constructor
//! names, entity references and the top type are spelled.

use tracing::trace;

use super::node::HintNode;
use super::registry::ManagedHint;
use crate::config::HintConfig;
use crate::format::{Entity, EntityFormatter};
use crate::symbols::Symbols;

/// The output dialect of a rendered hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode<'c> {
    /// Plain qualified names, `Any` spelled as `object`.
    Qualified,
    /// A `typing` annotation written in `module`, after `defined` has been
    /// defined.
    Annotation {
        module: Option<&'c str>,
        defined: Option<&'c str>,
    },
    /// Documentation text with cross-references to classes and enums.
    CrossReference,
}

pub(crate) struct Renderer<'a> {
    symbols: &'a Symbols,
    formatter: &'a dyn EntityFormatter,
    config: &'a HintConfig,
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(
        symbols: &'a Symbols,
        formatter: &'a dyn EntityFormatter,
        config: &'a HintConfig,
    ) -> Self {
        Self {
            symbols,
            formatter,
            config,
        }
    }

    /// Render a parsed hint. A hint without a tree is rendered from its text.
    pub(crate) fn render(&self, managed: &ManagedHint, mode: RenderMode<'_>) -> String {
        trace!(
            "[HINT_RENDER] '{}' as {:?}",
            managed.hint().text(),
            mode
        );
        match managed.root() {
            Some(root) => {
                let mut out = String::new();
                self.write_node(root, mode, &mut out);
                out
            }
            None => self.maybe_any(managed.hint().text(), mode),
        }
    }

    fn write_node(&self, node: &HintNode, mode: RenderMode<'_>, out: &mut String) {
        match node {
            HintNode::Generic { name, args } => {
                if let Some(name) = name {
                    match mode {
                        RenderMode::Annotation { .. } => out.push_str(&self.config.annotated(name)),
                        RenderMode::Qualified | RenderMode::CrossReference => out.push_str(name),
                    }
                }

                if let Some(args) = args {
                    out.push('[');
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.write_node(arg, mode, out);
                    }
                    out.push(']');
                }
            }
            HintNode::Class(id) => out.push_str(&self.entity(Entity::Class(*id), mode)),
            HintNode::Enum(id) => out.push_str(&self.entity(Entity::Enum(*id), mode)),
            HintNode::Unresolved(text) => out.push_str(&self.maybe_any(text, mode)),
        }
    }

    fn entity(&self, entity: Entity, mode: RenderMode<'_>) -> String {
        match mode {
            RenderMode::Qualified => self.formatter.qualified_name(self.symbols, entity),
            RenderMode::Annotation { module, defined } => {
                self.formatter
                    .annotation(self.symbols, entity, module, defined)
            }
            RenderMode::CrossReference => self.formatter.cross_reference(self.symbols, entity),
        }
    }

    /// Raw text, with the top-type sentinel replaced for the mode.
    fn maybe_any(&self, text: &str, mode: RenderMode<'_>) -> String {
        if !self.config.is_any(text) {
            return text.to_string();
        }

        match mode {
            RenderMode::Annotation { .. } => self.config.annotated_any(),
            RenderMode::Qualified | RenderMode::CrossReference => self.config.object_type.clone(),
        }
    }
}
