//! Foundation types for hint processing.
//!
//! This module provides the primitives used throughout the crate:
//! - [`Name`] - Cheap-to-clone identifier and hint text
//! - [`TextSize`] - Byte offsets into hint text, used by diagnostics
//! - [`Direction`] - Whether a value flows into or out of native code
//!
//! This module has NO dependencies on other crate modules.

/// An interned-style string: inline for short names, cheap to clone.
pub type Name = smol_str::SmolStr;

pub use text_size::TextSize;

/// Direction of the value a hint describes.
///
/// Classes and mapped types may provide a different override hint for each
/// direction, e.g. a container that accepts any iterable but always returns a
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// The value is passed into native code (an argument).
    #[default]
    In,
    /// The value is returned from native code (a result).
    Out,
}

impl Direction {
    /// Check if this is the outgoing direction
    pub fn is_out(self) -> bool {
        matches!(self, Self::Out)
    }

    /// Get string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

/// Convert a byte offset into a [`TextSize`], saturating on overflow.
pub(crate) fn offset(pos: usize) -> TextSize {
    TextSize::new(u32::try_from(pos).unwrap_or(u32::MAX))
}
