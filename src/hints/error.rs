//! Error types for hint parsing.

use thiserror::Error;

use crate::base::{Name, TextSize};

/// Structural errors in hint text.
///
/// Each variant carries the complete hint text and the byte offset of the
/// fault. Names that fail to resolve are not errors; they render verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    /// A `[` whose hint does not end with `]`.
    #[error("type hint '{text}': ']' expected to close '[' at position {}", u32::from(*offset))]
    UnclosedBracket { text: Name, offset: TextSize },

    /// A `]` with no matching `[`.
    #[error("type hint '{text}': unmatched ']' at position {}", u32::from(*offset))]
    UnmatchedBracket { text: Name, offset: TextSize },

    /// Brackets after a name that is not a generic constructor.
    #[error("type hint '{text}': brackets are invalid after '{name}' at position {}", u32::from(*offset))]
    UnexpectedBrackets {
        text: Name,
        name: Name,
        offset: TextSize,
    },

    /// Brackets nested deeper than the parser accepts.
    #[error("type hint '{text}': nested deeper than {limit} levels at position {}", u32::from(*offset))]
    TooDeep {
        text: Name,
        limit: usize,
        offset: TextSize,
    },

    /// A hint with neither a name nor non-empty brackets.
    #[error("type hint '{text}': must have non-empty brackets at position {}", u32::from(*offset))]
    EmptyBrackets { text: Name, offset: TextSize },
}

impl HintError {
    /// Create an unclosed-bracket error.
    pub fn unclosed_bracket(text: &str, offset: TextSize) -> Self {
        Self::UnclosedBracket {
            text: Name::new(text),
            offset,
        }
    }

    /// Create an unmatched-bracket error.
    pub fn unmatched_bracket(text: &str, offset: TextSize) -> Self {
        Self::UnmatchedBracket {
            text: Name::new(text),
            offset,
        }
    }

    /// Create an error for brackets attached to a non-generic name.
    pub fn unexpected_brackets(text: &str, name: &str, offset: TextSize) -> Self {
        Self::UnexpectedBrackets {
            text: Name::new(text),
            name: Name::new(name),
            offset,
        }
    }

    /// Create an error for nesting beyond `limit` levels.
    pub fn too_deep(text: &str, limit: usize, offset: TextSize) -> Self {
        Self::TooDeep {
            text: Name::new(text),
            limit,
            offset,
        }
    }

    /// Create an empty-brackets error.
    pub fn empty_brackets(text: &str, offset: TextSize) -> Self {
        Self::EmptyBrackets {
            text: Name::new(text),
            offset,
        }
    }

    /// The complete hint text the error was found in.
    pub fn text(&self) -> &str {
        match self {
            Self::UnclosedBracket { text, .. }
            | Self::UnmatchedBracket { text, .. }
            | Self::UnexpectedBrackets { text, .. }
            | Self::TooDeep { text, .. }
            | Self::EmptyBrackets { text, .. } => text,
        }
    }

    /// Byte offset of the fault within [`HintError::text`].
    pub fn offset(&self) -> TextSize {
        match self {
            Self::UnclosedBracket { offset, .. }
            | Self::UnmatchedBracket { offset, .. }
            | Self::UnexpectedBrackets { offset, .. }
            | Self::TooDeep { offset, .. }
            | Self::EmptyBrackets { offset, .. } => *offset,
        }
    }
}
