use crate::base::{Direction, Name};

/// Unique identifier for a class in the arena.
/// Uses u32 for compact storage (supports ~4 billion symbols).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(pub u32);

impl ClassId {
    /// Create a new ClassId from an index
    pub fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unique identifier for an enum in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnumId(pub u32);

impl EnumId {
    pub fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unique identifier for a mapped type in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MappedTypeId(pub u32);

impl MappedTypeId {
    pub fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The scope an entity is declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    Global,
    Class(ClassId),
    MappedType(MappedTypeId),
}

/// Replacement hint texts a class or mapped type supplies for each direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideHints {
    pub hint_in: Option<Name>,
    pub hint_out: Option<Name>,
}

impl OverrideHints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the same hint in both directions.
    pub fn both(text: impl Into<Name>) -> Self {
        let text = text.into();
        Self {
            hint_in: Some(text.clone()),
            hint_out: Some(text),
        }
    }

    pub fn with_in(mut self, text: impl Into<Name>) -> Self {
        self.hint_in = Some(text.into());
        self
    }

    pub fn with_out(mut self, text: impl Into<Name>) -> Self {
        self.hint_out = Some(text.into());
        self
    }

    /// The override for values flowing in the given direction.
    pub fn for_direction(&self, direction: Direction) -> Option<&Name> {
        match direction {
            Direction::In => self.hint_in.as_ref(),
            Direction::Out => self.hint_out.as_ref(),
        }
    }

    /// An empty outgoing hint declares that there is no result at all.
    pub fn declares_void_result(&self) -> bool {
        self.hint_out.as_deref() == Some("")
    }
}

/// A wrapped class, struct or union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    /// Unqualified native name, used for lookup.
    pub name: Name,
    /// Name in the generated module, if it differs from `name`.
    pub py_name: Option<Name>,
    /// Module the class is generated in.
    pub module: Name,
    /// Enclosing class, `None` at global scope.
    pub scope: Option<ClassId>,
    /// Declared elsewhere; never matched by hint lookup.
    pub external: bool,
    pub hints: Option<OverrideHints>,
}

impl ClassDef {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            py_name: None,
            module: Name::default(),
            scope: None,
            external: false,
            hints: None,
        }
    }

    pub fn in_module(mut self, module: impl Into<Name>) -> Self {
        self.module = module.into();
        self
    }

    pub fn nested_in(mut self, scope: ClassId) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_py_name(mut self, py_name: impl Into<Name>) -> Self {
        self.py_name = Some(py_name.into());
        self
    }

    pub fn with_hints(mut self, hints: OverrideHints) -> Self {
        self.hints = Some(hints);
        self
    }

    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    /// The name used in generated output.
    pub fn display_name(&self) -> &str {
        self.py_name.as_deref().unwrap_or(&self.name)
    }
}

/// A wrapped enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    /// Unqualified native name; anonymous enums have none and are never matched.
    pub name: Option<Name>,
    pub py_name: Option<Name>,
    pub module: Name,
    pub scope: Scope,
}

impl EnumDef {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: Some(name.into()),
            py_name: None,
            module: Name::default(),
            scope: Scope::Global,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            name: None,
            py_name: None,
            module: Name::default(),
            scope: Scope::Global,
        }
    }

    pub fn in_module(mut self, module: impl Into<Name>) -> Self {
        self.module = module.into();
        self
    }

    pub fn in_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_py_name(mut self, py_name: impl Into<Name>) -> Self {
        self.py_name = Some(py_name.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.py_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

/// A native type with a handwritten conversion, e.g. a template instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedTypeDef {
    pub name: Name,
    pub py_name: Option<Name>,
    pub module: Name,
    pub hints: Option<OverrideHints>,
}

impl MappedTypeDef {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            py_name: None,
            module: Name::default(),
            hints: None,
        }
    }

    pub fn in_module(mut self, module: impl Into<Name>) -> Self {
        self.module = module.into();
        self
    }

    pub fn with_py_name(mut self, py_name: impl Into<Name>) -> Self {
        self.py_name = Some(py_name.into());
        self
    }

    pub fn with_hints(mut self, hints: OverrideHints) -> Self {
        self.hints = Some(hints);
        self
    }

    pub fn display_name(&self) -> &str {
        self.py_name.as_deref().unwrap_or(&self.name)
    }
}
