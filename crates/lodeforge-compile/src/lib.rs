//! Rule compiler for lodeforge.
//!
//! Binds validated rules to concrete generator and feature objects, attaches
//! restriction lists, and feeds the results to a registration sink. The batch
//! loader walks a directory of rule files and reports per-rule outcomes.

pub mod binder;
pub mod compiler;
pub mod errors;
pub mod feature;
pub mod generators;
pub mod loader;
pub mod model;
pub mod registry;
pub mod restrictions;

pub use binder::bind;
pub use compiler::{CompiledRule, compile_rule, compile_rule_detailed};
pub use errors::LoadError;
pub use feature::{Feature, FeatureParams, RestrictionList};
pub use generators::{ClusterShape, Generator};
pub use loader::{
    LoaderOptions, collect_rule_files, load_directory, load_rule_document, load_rule_file,
};
pub use model::{FileFailure, FileReport, LoadReport, RuleFailure};
pub use registry::{FeatureRegistry, FeatureSink};
pub use restrictions::attach_restrictions;
