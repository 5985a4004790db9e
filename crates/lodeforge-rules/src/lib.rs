//! Rule contracts and validation for lodeforge.
//!
//! Turns one named JSON rule body into a validated [`GenerationRule`] and a
//! resolved [`Template`]. Binding those into features lives in
//! `lodeforge-compile`.

pub mod context;
pub mod errors;
pub mod fields;
pub mod model;
pub mod resources;
pub mod schema;
pub mod template;
pub mod validate;

pub use context::{CompileContext, ContextOptions};
pub use errors::{IssueSeverity, ValidationIssue};
pub use model::{
    ResourceEntry, ResourceRef, ResourceSpec, RuleBody, RuleFile, TemplateRef, TemplateSpec,
};
pub use resources::{parse_material_entry, parse_material_list};
pub use schema::rule_file_json_schema;
pub use template::{FeatureKind, GeneratorKind, Template, resolve_template};
pub use validate::{GenerationRule, RuleRestrictions, ValidatedRule, validate_rule};
