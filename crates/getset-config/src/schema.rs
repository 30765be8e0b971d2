use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::GetsetConfig;

/// JSON schema for `getset.toml`, for editor TOML-schema integration and CI validation.
#[must_use]
pub fn json_schema() -> RootSchema {
    schema_for!(GetsetConfig)
}
