//! Rendering configuration.
//!
//! The defaults describe the standard `typing` dialect: generic constructors
//! live in the `typing` module, `Any` is the top type, and plain (unannotated)
//! output spells the top type as `object`.

/// Tokens used when rendering hints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HintConfig {
    /// Namespace that prefixes generic constructors in annotation mode.
    pub typing_module: String,
    /// Spelling of the top type outside annotation mode.
    pub object_type: String,
    /// Hint text that stands for the top type.
    pub any_name: String,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            typing_module: "typing".to_string(),
            object_type: "object".to_string(),
            any_name: "Any".to_string(),
        }
    }
}

impl HintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different namespace for generic constructors.
    pub fn with_typing_module(mut self, module: impl Into<String>) -> Self {
        self.typing_module = module.into();
        self
    }

    /// Use a different spelling for the top type outside annotations.
    pub fn with_object_type(mut self, name: impl Into<String>) -> Self {
        self.object_type = name.into();
        self
    }

    /// Prefix a generic constructor with the typing namespace.
    pub fn annotated(&self, name: &str) -> String {
        format!("{}.{}", self.typing_module, name)
    }

    /// The top type as written in annotation mode, e.g. `typing.Any`.
    pub fn annotated_any(&self) -> String {
        self.annotated(&self.any_name)
    }

    /// Check whether raw hint text is the top-type sentinel.
    pub fn is_any(&self, text: &str) -> bool {
        text == self.any_name
    }
}
