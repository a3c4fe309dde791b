//! Parsed hint trees.

use crate::base::Name;
use crate::symbols::{ClassId, EnumId};

/// A node of a parsed and resolved hint.
///
/// Nodes reference entities by id; they never own symbol table data. Cloning
/// a node is a deep structural copy, which is how override hints are
/// substituted at each reference site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HintNode {
    /// A generic constructor (`Optional[...]`) or an anonymous bracket group
    /// (`[int, str]` in `Callable[[int, str], None]`).
    Generic {
        /// Constructor name, `None` for an anonymous group.
        name: Option<Name>,
        /// Arguments in order, `None` if the constructor had no brackets.
        args: Option<Vec<HintNode>>,
    },
    /// A resolved class.
    Class(ClassId),
    /// A resolved enum.
    Enum(EnumId),
    /// A name that matched nothing in the symbol table.
    Unresolved(Name),
}

impl HintNode {
    /// Create a named generic node.
    pub fn generic(name: impl Into<Name>, args: Option<Vec<HintNode>>) -> Self {
        Self::Generic {
            name: Some(name.into()),
            args,
        }
    }

    /// Create an anonymous bracket group.
    pub fn group(args: Vec<HintNode>) -> Self {
        Self::Generic {
            name: None,
            args: Some(args),
        }
    }

    /// Create an unresolved name node.
    pub fn unresolved(text: impl Into<Name>) -> Self {
        Self::Unresolved(text.into())
    }

    /// The constructor name if this is a named generic.
    pub fn generic_name(&self) -> Option<&str> {
        match self {
            Self::Generic { name, .. } => name.as_deref(),
            _ => None,
        }
    }

    /// Bracketed arguments, empty for leaves and bracketless constructors.
    pub fn args(&self) -> &[HintNode] {
        match self {
            Self::Generic {
                args: Some(args), ..
            } => args,
            _ => &[],
        }
    }

    /// Count nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.args().iter().map(HintNode::node_count).sum::<usize>()
    }
}
