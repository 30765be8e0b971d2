//! Getter/setter generation for Java class fields.
//!
//! The host (an editor integration, a CLI, ...) extracts a [`ClassSnapshot`] from its own source
//! model, calls [`FieldAccessorGenerator::generate`] and inserts the returned
//! [`GeneratedMethod`]s into the class, ideally as a single undoable edit. Generation itself is
//! a pure function of its inputs.

mod builder;
pub mod comment;
mod generator;
mod guard;
mod model;

pub use builder::{capitalize, getter_name, setter_name, AccessorTextBuilder};
pub use comment::{CommentStyle, DocLabels};
pub use generator::{FieldAccessorGenerator, GenerateOptions, GENERATE_TARGET};
pub use guard::DuplicateGuard;
pub use model::{AccessorKind, ClassSnapshot, Field, GeneratedMethod};
