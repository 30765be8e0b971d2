use serde::{Deserialize, Serialize};

/// A field of the target class, as reported by the host source model.
///
/// `declared_type` is the presentable (already resolved) spelling of the type, e.g. `boolean`,
/// `int` or `List<String>`. It is copied verbatim into generated signatures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(alias = "type")]
    pub declared_type: String,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_final: bool,
    /// Raw text of the doc comment (or any other text) directly preceding the field.
    #[serde(default)]
    pub leading_comment: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    #[must_use]
    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.leading_comment = Some(comment.into());
        self
    }

    pub fn is_primitive_boolean(&self) -> bool {
        self.declared_type == "boolean"
    }
}

/// A complete method declaration ready to be inserted into the class by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMethod {
    pub name: String,
    pub source_text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Get,
    Set,
}

/// Class context handed over by a host: fields in declaration order plus the names of the
/// methods the class already declares.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSnapshot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub methods: Vec<String>,
}
