//! Method text for individual accessors.

use crate::comment::{self, DocLabels};
use crate::model::{AccessorKind, Field, GeneratedMethod};

/// Upper-cases the first character of `s` and leaves the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

pub fn getter_name(field: &Field) -> String {
    let prefix = if field.is_primitive_boolean() { "is" } else { "get" };
    format!("{prefix}{}", capitalize(&field.name))
}

pub fn setter_name(field: &Field) -> String {
    format!("set{}", capitalize(&field.name))
}

fn static_modifier(field: &Field) -> &'static str {
    if field.is_static {
        "static "
    } else {
        ""
    }
}

#[derive(Clone, Debug, Default)]
pub struct AccessorTextBuilder {
    labels: DocLabels,
}

impl AccessorTextBuilder {
    pub fn new(labels: DocLabels) -> Self {
        Self { labels }
    }

    /// Builds `public [static ]T getX(){ return this.x;}`.
    ///
    /// The body always reads through `this.`, static fields included.
    pub fn build_getter(&self, field: &Field) -> GeneratedMethod {
        let name = getter_name(field);
        let doc = comment::transform(AccessorKind::Get, field, &self.labels);
        let source_text = format!(
            "{doc}public {modifier}{ty} {name}(){{\n return this.{field};}}\n",
            modifier = static_modifier(field),
            ty = field.declared_type,
            field = field.name,
        );
        GeneratedMethod { name, source_text }
    }

    /// Builds `public [static ]void setX(T x){ this.x = x;}`.
    pub fn build_setter(&self, field: &Field) -> GeneratedMethod {
        let name = setter_name(field);
        let doc = comment::transform(AccessorKind::Set, field, &self.labels);
        let source_text = format!(
            "{doc}public {modifier}void {name}({ty} {field}){{\nthis.{field} = {field};}}",
            modifier = static_modifier(field),
            ty = field.declared_type,
            field = field.name,
        );
        GeneratedMethod { name, source_text }
    }

    pub fn build(&self, kind: AccessorKind, field: &Field) -> GeneratedMethod {
        match kind {
            AccessorKind::Get => self.build_getter(field),
            AccessorKind::Set => self.build_setter(field),
        }
    }
}
