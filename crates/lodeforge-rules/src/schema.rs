use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::model::RuleFile;

/// Emit the JSON Schema for rule files.
pub fn rule_file_json_schema() -> RootSchema {
    schema_for!(RuleFile)
}
