use rustc_hash::FxHashMap;
use tracing::trace;

use super::symbol::{
    ClassDef, ClassId, EnumDef, EnumId, MappedTypeDef, MappedTypeId, Scope,
};
use crate::base::{Direction, Name};
use crate::config::HintConfig;
use crate::format::{DefaultFormatter, EntityFormatter};
use crate::hints::{
    HintError, HintNode, HintRegistry, HintResolver, ManagedHint, RenderMode, Renderer, TypeHint,
};

// ============================================================================
// SYMBOLS
// ============================================================================

/// Arena storage for the classes, enums and mapped types of one interface.
///
/// Entities are stored in insertion order and indexed by their unqualified
/// name. When several entities share a name and scope, the first one added
/// wins.
#[derive(Clone, Debug, Default)]
pub struct Symbols {
    classes: Vec<ClassDef>,
    enums: Vec<EnumDef>,
    mapped_types: Vec<MappedTypeDef>,
    /// Simple name -> class indices, in insertion order.
    classes_by_name: FxHashMap<Name, Vec<ClassId>>,
    /// Simple name -> enum indices, in insertion order.
    enums_by_name: FxHashMap<Name, Vec<EnumId>>,
    /// Simple name -> mapped type indices, in insertion order.
    mapped_types_by_name: FxHashMap<Name, Vec<MappedTypeId>>,
}

impl Symbols {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: ClassDef) -> ClassId {
        let id = ClassId::new(self.classes.len());
        self.classes_by_name
            .entry(class.name.clone())
            .or_default()
            .push(id);
        self.classes.push(class);
        id
    }

    pub fn add_enum(&mut self, enum_def: EnumDef) -> EnumId {
        let id = EnumId::new(self.enums.len());
        if let Some(name) = &enum_def.name {
            self.enums_by_name.entry(name.clone()).or_default().push(id);
        }
        self.enums.push(enum_def);
        id
    }

    pub fn add_mapped_type(&mut self, mapped_type: MappedTypeDef) -> MappedTypeId {
        let id = MappedTypeId::new(self.mapped_types.len());
        self.mapped_types_by_name
            .entry(mapped_type.name.clone())
            .or_default()
            .push(id);
        self.mapped_types.push(mapped_type);
        id
    }

    pub fn class(&self, id: ClassId) -> &ClassDef {
        &self.classes[id.index()]
    }

    pub fn enum_def(&self, id: EnumId) -> &EnumDef {
        &self.enums[id.index()]
    }

    pub fn mapped_type(&self, id: MappedTypeId) -> &MappedTypeDef {
        &self.mapped_types[id.index()]
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassDef)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, class)| (ClassId::new(i), class))
    }

    pub fn enums(&self) -> impl Iterator<Item = (EnumId, &EnumDef)> {
        self.enums
            .iter()
            .enumerate()
            .map(|(i, enum_def)| (EnumId::new(i), enum_def))
    }

    pub fn mapped_types(&self) -> impl Iterator<Item = (MappedTypeId, &MappedTypeDef)> {
        self.mapped_types
            .iter()
            .enumerate()
            .map(|(i, mapped_type)| (MappedTypeId::new(i), mapped_type))
    }

    // ============================================================
    // Lookup
    // ============================================================

    /// Find an enum declared in `scope`, falling back to global scope.
    pub fn find_enum(&self, name: &str, scope: Scope) -> Option<EnumId> {
        let candidates = self.enums_by_name.get(name)?;
        let declared_in = |wanted: Scope| {
            candidates
                .iter()
                .copied()
                .find(|&id| self.enum_def(id).scope == wanted)
        };
        declared_in(scope).or_else(|| declared_in(Scope::Global))
    }

    /// Find a mapped type by its unqualified name.
    pub fn find_mapped_type(&self, name: &str) -> Option<MappedTypeId> {
        self.mapped_types_by_name.get(name)?.first().copied()
    }

    /// Find a non-external class declared directly in `enclosing`.
    pub fn find_class(&self, name: &str, enclosing: Option<ClassId>) -> Option<ClassId> {
        self.classes_by_name.get(name)?.iter().copied().find(|&id| {
            let class = self.class(id);
            class.scope == enclosing && !class.external
        })
    }

    /// Enclosing classes of a class, outermost first, ending with the class itself.
    pub fn class_path(&self, id: ClassId) -> Vec<ClassId> {
        let mut path = vec![id];
        let mut current = self.class(id).scope;
        while let Some(parent) = current {
            // Guard against malformed scope chains.
            if path.contains(&parent) {
                break;
            }
            path.push(parent);
            current = self.class(parent).scope;
        }
        path.reverse();
        path
    }
}

// ============================================================================
// SYMBOL TABLE
// ============================================================================

/// The symbols of one interface together with the hint registry that serves
/// them.
///
/// Hints are unique per table: [`SymbolTable::get_hint`] returns equal handles
/// for equal text, and each hint text is parsed at most once no matter how
/// many times or in which modes it is rendered. Dropping the table drops its
/// registry.
///
/// # Direction
///
/// Override hints are chosen by [`Direction`], but the tree of a hint text is
/// built only once. The direction passed with the first successful request
/// for a text decides its tree, and later requests with the other direction
/// reuse it. Generators that need both trees for one text should use a
/// separate table per direction.
pub struct SymbolTable {
    symbols: Symbols,
    hints: HintRegistry,
    config: HintConfig,
    formatter: Box<dyn EntityFormatter>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: Symbols::new(),
            hints: HintRegistry::new(),
            config: HintConfig::default(),
            formatter: Box::new(DefaultFormatter::default()),
        }
    }

    pub fn with_config(mut self, config: HintConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the formatter used for class and enum references.
    pub fn with_formatter(mut self, formatter: impl EntityFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn config(&self) -> &HintConfig {
        &self.config
    }

    pub fn add_class(&mut self, class: ClassDef) -> ClassId {
        self.symbols.add_class(class)
    }

    pub fn add_enum(&mut self, enum_def: EnumDef) -> EnumId {
        self.symbols.add_enum(enum_def)
    }

    pub fn add_mapped_type(&mut self, mapped_type: MappedTypeDef) -> MappedTypeId {
        self.symbols.add_mapped_type(mapped_type)
    }

    // ============================================================
    // Hints
    // ============================================================

    /// Return the unique hint for some text.
    pub fn get_hint(&mut self, text: &str) -> TypeHint {
        self.hints.intern(text)
    }

    /// Render a hint with documentation cross-references.
    ///
    /// The result does not depend on any context, so it is computed once and
    /// cached with the hint. `direction` only applies if the hint has not
    /// been parsed yet (see [Direction](SymbolTable#direction)).
    ///
    /// # Errors
    ///
    /// Returns a [`HintError`] if the hint text is malformed.
    pub fn render_cross_reference(
        &mut self,
        hint: &TypeHint,
        direction: Direction,
    ) -> Result<String, HintError> {
        let hint = self.parsed(hint, direction)?;
        if let Some(cached) = self.hints.get(hint.id()).cross_reference() {
            trace!("[HINT_RENDER] cross-reference cache hit for '{}'", hint.text());
            return Ok(cached.to_string());
        }

        let rendered = self
            .renderer()
            .render(self.hints.get(hint.id()), RenderMode::CrossReference);
        self.hints.cache_cross_reference(hint.id(), rendered.clone());
        Ok(rendered)
    }

    /// Render a hint as a `typing` annotation.
    ///
    /// `module` is the module the annotation is written in and `defined` the
    /// name already defined at that point; both let the formatter choose
    /// between a short, a module-qualified and a quoted spelling.
    /// `direction` only applies if the hint has not been parsed yet.
    ///
    /// # Errors
    ///
    /// Returns a [`HintError`] if the hint text is malformed.
    pub fn render_annotation(
        &mut self,
        hint: &TypeHint,
        direction: Direction,
        module: Option<&str>,
        defined: Option<&str>,
    ) -> Result<String, HintError> {
        let hint = self.parsed(hint, direction)?;
        Ok(self.renderer().render(
            self.hints.get(hint.id()),
            RenderMode::Annotation { module, defined },
        ))
    }

    /// Render a hint using plain qualified names.
    ///
    /// `direction` only applies if the hint has not been parsed yet.
    ///
    /// # Errors
    ///
    /// Returns a [`HintError`] if the hint text is malformed.
    pub fn render_qualified(
        &mut self,
        hint: &TypeHint,
        direction: Direction,
    ) -> Result<String, HintError> {
        let hint = self.parsed(hint, direction)?;
        Ok(self
            .renderer()
            .render(self.hints.get(hint.id()), RenderMode::Qualified))
    }

    /// The resolved tree of a hint, `None` if it has no type.
    ///
    /// `direction` only applies if the hint has not been parsed yet.
    ///
    /// # Errors
    ///
    /// Returns a [`HintError`] if the hint text is malformed.
    pub fn hint_tree(
        &mut self,
        hint: &TypeHint,
        direction: Direction,
    ) -> Result<Option<&HintNode>, HintError> {
        let hint = self.parsed(hint, direction)?;
        Ok(self.hints.get(hint.id()).root())
    }

    /// The managed state of a hint, if its text has been registered.
    pub fn managed_hint(&self, hint: &TypeHint) -> Option<&ManagedHint> {
        self.hints.lookup(hint.text())
    }

    /// Number of hint trees built by this table.
    pub fn parse_count(&self) -> usize {
        self.hints.parse_count()
    }

    pub fn hint_registry(&self) -> &HintRegistry {
        &self.hints
    }

    /// Register the hint's text with this table and make sure it is parsed.
    fn parsed(&mut self, hint: &TypeHint, direction: Direction) -> Result<TypeHint, HintError> {
        let hint = self.hints.intern(hint.text());
        HintResolver::new(&self.symbols, &mut self.hints, direction).ensure_parsed(hint.id())?;
        Ok(hint)
    }

    fn renderer(&self) -> Renderer<'_> {
        Renderer::new(&self.symbols, self.formatter.as_ref(), &self.config)
    }
}
