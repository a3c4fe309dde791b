//! The generic constructor vocabulary of the annotation dialect.

/// Name of the union constructor, whose nested unions are flattened.
pub const UNION: &str = "Union";

/// Names that may take bracketed arguments.
///
/// `Any` is not listed: it is resolved like any other name and rendered as the
/// top type.
pub const GENERIC_CONSTRUCTORS: &[&str] = &[
    "NoReturn",
    "Tuple",
    UNION,
    "Optional",
    "Callable",
    "Type",
    "Literal",
    "ClassVar",
    "Final",
    "Annotated",
    "AnyStr",
    "Protocol",
    "NamedTuple",
    "Dict",
    "List",
    "Set",
    "FrozenSet",
    "IO",
    "TextIO",
    "BinaryIO",
    "Pattern",
    "Match",
    "Text",
    "Iterable",
    "Iterator",
    "Generator",
    "Mapping",
    "Sequence",
];

/// Look up a generic constructor by name.
pub fn generic_constructor(name: &str) -> Option<&'static str> {
    GENERIC_CONSTRUCTORS.iter().copied().find(|&ctor| ctor == name)
}
