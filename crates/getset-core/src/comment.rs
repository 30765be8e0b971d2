//! Rewrites a field's leading comment into documentation for its accessors.
//!
//! The field comment is collapsed into a single *digest*: every `/`, `\`, `*`, newline and
//! space is removed, wherever it occurs. Multi-line prose therefore ends up as one unspaced run
//! of text (`/** the user's age */` becomes `theuser'sage`).
//!
//! Block comments (doc comments, `/* */` and free-form text) produce a method doc comment that
//! embeds the digest twice. Line comments (`// ...`) only produce an empty `// ` marker; the
//! digest is computed but not embedded. Whether that is intended is unresolved, so the
//! behavior is kept as is.

use crate::model::{AccessorKind, Field};

/// Characters removed from a comment when computing its digest.
pub const STRIPPED_CHARS: [char; 5] = ['/', '\\', '*', '\n', ' '];

/// Localized verbs placed in front of the digest in generated docs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocLabels {
    pub get: String,
    pub set: String,
}

impl DocLabels {
    pub const DEFAULT_GET: &'static str = "获取";
    pub const DEFAULT_SET: &'static str = "设置";

    pub fn new(get: impl Into<String>, set: impl Into<String>) -> Self {
        Self {
            get: get.into(),
            set: set.into(),
        }
    }

    pub fn label(&self, kind: AccessorKind) -> &str {
        match kind {
            AccessorKind::Get => &self.get,
            AccessorKind::Set => &self.set,
        }
    }
}

impl Default for DocLabels {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GET, Self::DEFAULT_SET)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentStyle {
    Block,
    Line,
}

impl CommentStyle {
    pub fn classify(raw: &str) -> Self {
        if raw.starts_with("//") {
            CommentStyle::Line
        } else {
            CommentStyle::Block
        }
    }
}

pub fn digest(raw: &str) -> String {
    raw.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect()
}

fn doc_tag(kind: AccessorKind) -> &'static str {
    match kind {
        AccessorKind::Get => "return",
        AccessorKind::Set => "param",
    }
}

/// Produces the documentation text placed in front of an accessor for `field`.
///
/// Returns an empty string when the field has no comment or the comment digests to nothing.
pub fn transform(kind: AccessorKind, field: &Field, labels: &DocLabels) -> String {
    let Some(raw) = field.leading_comment.as_deref() else {
        return String::new();
    };

    let digest = digest(raw);
    if digest.is_empty() {
        return String::new();
    }

    match CommentStyle::classify(raw) {
        CommentStyle::Block => format!(
            "/** \n* {label} {digest} \n* @{tag} {name} {digest} \n*/",
            label = labels.label(kind),
            tag = doc_tag(kind),
            name = field.name,
        ),
        CommentStyle::Line => "// ".to_string(),
    }
}
