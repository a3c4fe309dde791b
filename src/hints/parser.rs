//! Recursive-descent parser for bracketed hint text.
//!
//! A hint is a name optionally followed by a bracketed, comma-separated list
//! of nested hints. Only generic constructors may take brackets; any other
//! name is handed to a [`ResolveName`] implementation. Positions in errors are
//! byte offsets into the complete hint text.

use tracing::trace;

use super::error::HintError;
use super::node::HintNode;
use super::typing::{UNION, generic_constructor};
use crate::base::{Name, offset};

/// Deepest bracket nesting accepted in a hint.
pub const MAX_NESTING: usize = 64;

/// Resolves a bare (possibly scoped) name found in a hint.
pub trait ResolveName {
    /// Return the node for `name`, or `None` if the name stands for no type.
    fn resolve_name(&mut self, name: &str) -> Result<Option<HintNode>, HintError>;
}

/// Parse a complete hint.
///
/// Returns `Ok(None)` when the hint has no type, e.g. `Union[]`.
pub fn parse_hint<R>(text: &str, resolver: &mut R) -> Result<Option<HintNode>, HintError>
where
    R: ResolveName + ?Sized,
{
    trace!("[HINT_PARSE] parsing '{}'", text);
    let mut parser = HintParser { text, resolver };
    parser.parse_node(0, text.len(), 0)
}

struct HintParser<'t, 'r, R: ?Sized> {
    text: &'t str,
    resolver: &'r mut R,
}

impl<R: ResolveName + ?Sized> HintParser<'_, '_, R> {
    /// Parse the hint occupying `[start, end)`, `depth` brackets deep.
    fn parse_node(
        &mut self,
        start: usize,
        end: usize,
        depth: usize,
    ) -> Result<Option<HintNode>, HintError> {
        let text = self.text;
        let top_level = depth == 0;
        let start = skip_leading_spaces(text, start, end);
        let end = skip_trailing_spaces(text, start, end);

        let mut name_end = end;
        let mut args = None;
        let mut open = None;

        if let Some(rel) = text[start..end].find('[') {
            let bracket = start + rel;
            if !text[start..end].ends_with(']') {
                return Err(HintError::unclosed_bracket(text, offset(bracket)));
            }
            if depth >= MAX_NESTING {
                return Err(HintError::too_deep(text, MAX_NESTING, offset(bracket)));
            }

            name_end = skip_trailing_spaces(text, start, bracket);
            args = Some(self.parse_args(bracket, end - 1, depth + 1)?);
            open = Some(bracket);
        }

        let name = &text[start..name_end];
        if !name.is_empty() {
            if let Some(ctor) = generic_constructor(name) {
                return Ok(generic_node(ctor, args));
            }

            // Only generic constructors can have arguments.
            if let Some(bracket) = open {
                return Err(HintError::unexpected_brackets(text, name, offset(bracket)));
            }

            return self.resolver.resolve_name(name);
        }

        match args {
            Some(args) if !top_level || !args.is_empty() => Ok(Some(HintNode::group(args))),
            None if !top_level => Ok(None),
            _ => Err(HintError::empty_brackets(text, offset(start))),
        }
    }

    /// Parse the comma-separated arguments between the brackets at `open`
    /// and `close`. Empty arguments are dropped.
    fn parse_args(
        &mut self,
        open: usize,
        close: usize,
        depth: usize,
    ) -> Result<Vec<HintNode>, HintError> {
        let text = self.text;
        let mut args = Vec::new();
        let mut nesting = 0usize;
        let mut arg_start = open + 1;

        for (pos, byte) in text.bytes().enumerate().take(close).skip(open + 1) {
            match byte {
                b'[' => nesting += 1,
                b']' if nesting == 0 => {
                    return Err(HintError::unmatched_bracket(text, offset(pos)));
                }
                b']' => nesting -= 1,
                b',' if nesting == 0 => {
                    args.extend(self.parse_node(arg_start, pos, depth)?);
                    arg_start = pos + 1;
                }
                _ => {}
            }
        }

        args.extend(self.parse_node(arg_start, close, depth)?);
        Ok(args)
    }
}

/// Build the node for a generic constructor, flattening nested unions.
fn generic_node(ctor: &'static str, args: Option<Vec<HintNode>>) -> Option<HintNode> {
    if ctor != UNION {
        return Some(HintNode::generic(Name::new_static(ctor), args));
    }

    // Missing arguments are assumed to have been omitted.
    let args = args.unwrap_or_default();
    if args.is_empty() {
        return None;
    }

    let mut flattened = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            HintNode::Generic {
                name: Some(name),
                args: Some(inner),
            } if name == UNION => flattened.extend(inner),
            other => flattened.push(other),
        }
    }

    Some(HintNode::generic(Name::new_static(UNION), Some(flattened)))
}

/// Return the index of the first non-space in `[start, end)`.
fn skip_leading_spaces(text: &str, start: usize, end: usize) -> usize {
    let skipped = text[start..end].len() - text[start..end].trim_start_matches(' ').len();
    start + skipped
}

/// Return the index after the last non-space in `[start, end)`.
fn skip_trailing_spaces(text: &str, start: usize, end: usize) -> usize {
    start + text[start..end].trim_end_matches(' ').len()
}
