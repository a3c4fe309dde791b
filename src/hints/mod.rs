//! Hints: parsing, resolution and rendering of type-hint text.
//!
//! ## Pipeline
//!
//! ```text
//! get_hint(text)            ← registry entry (Required)
//!     │
//!     ▼
//! parse_hint(text)          ← bracket parser, one tree per hint text
//!     │
//!     ▼
//! resolve_name(path)        ← scope walk: enum → mapped type → class
//!     │                        (override hints substituted as copies)
//!     ▼
//! render(root, mode)        ← qualified / annotation / cross-reference
//! ```
//!
//! ## Key Types
//!
//! - [`TypeHint`]: Handle for one unique hint text
//! - [`HintRegistry`]: Per-symbol-table cache of [`ManagedHint`] states
//! - [`HintNode`]: Resolved tree node
//! - [`HintError`]: Structural error in hint text
//! - [`RenderMode`]: Output dialect

mod error;
mod node;
mod parser;
mod registry;
mod render;
mod resolve;
mod typing;

pub use error::HintError;
pub use node::HintNode;
pub use parser::{MAX_NESTING, ResolveName, parse_hint};
pub use registry::{HintId, HintRegistry, ManagedHint, ParseState, TypeHint};
pub use render::RenderMode;
pub use typing::{GENERIC_CONSTRUCTORS, UNION, generic_constructor};

pub(crate) use render::Renderer;
pub(crate) use resolve::HintResolver;
