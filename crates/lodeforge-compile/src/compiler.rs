use lodeforge_core::{CompileError, MaterialLookup};
use lodeforge_rules::{CompileContext, ValidationIssue, resolve_template, validate_rule};
use serde_json::Value;

use crate::binder::bind;
use crate::feature::Feature;
use crate::restrictions::attach_restrictions;

/// A compiled feature plus the recoverable issues met on the way.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub feature: Feature,
    pub warnings: Vec<ValidationIssue>,
}

/// Compile one named rule body into a feature.
pub fn compile_rule<L: MaterialLookup>(
    ctx: &CompileContext<L>,
    name: &str,
    body: &Value,
) -> Result<Feature, CompileError> {
    compile_rule_detailed(ctx, name, body).map(|compiled| compiled.feature)
}

/// Like [`compile_rule`], keeping validation warnings.
///
/// Validation runs before template resolution; the first failure wins.
pub fn compile_rule_detailed<L: MaterialLookup>(
    ctx: &CompileContext<L>,
    name: &str,
    body: &Value,
) -> Result<CompiledRule, CompileError> {
    let validated = validate_rule(name, body, ctx)?;
    let template = body
        .get("template")
        .ok_or(CompileError::MissingField("template"))
        .and_then(resolve_template)?;

    let restrictions = validated.rule.restrictions.clone();
    let mut feature = bind(validated.rule, template)?;
    attach_restrictions(&mut feature, &restrictions);

    Ok(CompiledRule {
        feature,
        warnings: validated.warnings,
    })
}
