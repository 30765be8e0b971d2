use std::collections::HashSet;

use crate::builder::AccessorTextBuilder;
use crate::comment::DocLabels;
use crate::guard::DuplicateGuard;
use crate::model::{AccessorKind, ClassSnapshot, Field, GeneratedMethod};

/// Tracing target for generation events.
pub const GENERATE_TARGET: &str = "getset.generate";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub labels: DocLabels,
}

#[derive(Clone, Debug, Default)]
pub struct FieldAccessorGenerator {
    builder: AccessorTextBuilder,
}

impl FieldAccessorGenerator {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            builder: AccessorTextBuilder::new(options.labels),
        }
    }

    /// Generates getters and setters for every non-final field, in declaration order
    /// (getter before setter for each field).
    ///
    /// A candidate is dropped when its name is in `existing_method_names`. Names generated
    /// earlier in the same run are not tracked, so two fields mapping to the same accessor name
    /// both get one.
    pub fn generate(
        &self,
        fields: &[Field],
        existing_method_names: &HashSet<String>,
    ) -> Vec<GeneratedMethod> {
        let guard = DuplicateGuard::new(existing_method_names.clone());
        self.generate_with_guard(fields, &guard)
    }

    pub fn generate_for(&self, class: &ClassSnapshot) -> Vec<GeneratedMethod> {
        let guard: DuplicateGuard = class.methods.iter().map(String::as_str).collect();
        self.generate_with_guard(&class.fields, &guard)
    }

    fn generate_with_guard(
        &self,
        fields: &[Field],
        guard: &DuplicateGuard,
    ) -> Vec<GeneratedMethod> {
        let mut out = Vec::with_capacity(fields.len() * 2);
        let mut suppressed = 0usize;

        for field in fields {
            if field.is_final {
                tracing::debug!(
                    target: GENERATE_TARGET,
                    field = %field.name,
                    "skipping final field"
                );
                continue;
            }

            for kind in [AccessorKind::Get, AccessorKind::Set] {
                let method = self.builder.build(kind, field);
                if guard.contains(&method.name) {
                    tracing::debug!(
                        target: GENERATE_TARGET,
                        field = %field.name,
                        method = %method.name,
                        "accessor already declared; skipping"
                    );
                    suppressed += 1;
                    continue;
                }
                out.push(method);
            }
        }

        tracing::debug!(
            target: GENERATE_TARGET,
            fields = fields.len(),
            generated = out.len(),
            suppressed,
            "accessor generation finished"
        );
        out
    }
}
