use lodeforge_core::{CompileError, MaterialList, MaterialLookup, RestrictionMode};
use serde_json::Value;

use crate::context::CompileContext;
use crate::errors::ValidationIssue;
use crate::fields::{RuleFields, as_i32};
use crate::resources::parse_material_list;

/// Restriction settings read from a rule body.
///
/// Entry lists are `Some` only when their mode is active and the body carried
/// the matching array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleRestrictions {
    pub biome_mode: RestrictionMode,
    pub dimension_mode: RestrictionMode,
    pub biomes: Option<Vec<String>>,
    pub dimensions: Option<Vec<i32>>,
}

/// Fully validated parameters of one named rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRule {
    pub name: String,
    pub resources: MaterialList,
    pub material: MaterialList,
    pub cluster_size: u32,
    pub num_clusters: u32,
    pub min_height: i32,
    pub max_height: i32,
    pub retrogen: bool,
    pub restrictions: RuleRestrictions,
}

/// Validated rule with accumulated warnings.
#[derive(Debug, Clone)]
pub struct ValidatedRule {
    pub rule: GenerationRule,
    pub warnings: Vec<ValidationIssue>,
}

/// Validate one rule body.
///
/// Checks run in a fixed order and the first failure wins: resources, cluster
/// parameters, restriction modes, material, height range, restriction entries.
/// An invalid `material` only produces a warning and the default list.
pub fn validate_rule<L: MaterialLookup>(
    name: &str,
    body: &Value,
    ctx: &CompileContext<L>,
) -> Result<ValidatedRule, CompileError> {
    let fields = RuleFields::new(name, body)?;
    let mut warnings = Vec::new();

    let block = fields.get("block").ok_or(CompileError::MissingField("block"))?;
    let resources = parse_material_list(block, ctx)?;

    let cluster_size = fields.int("clusterSize")?.unwrap_or(0);
    let num_clusters = fields.int("numClusters")?.unwrap_or(0);
    if cluster_size <= 0 || num_clusters <= 0 {
        return Err(CompileError::InvalidClusterParameters {
            cluster_size,
            num_clusters,
        });
    }

    let retrogen = fields.bool("retrogen")?.unwrap_or(false);
    let biome_mode = restriction_mode(&fields, "biomeRestriction")?;
    let dimension_mode = restriction_mode(&fields, "dimensionRestriction")?;

    let material = match fields.get("material") {
        None => ctx.default_material().clone(),
        Some(value) => match parse_material_list(value, ctx) {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(
                    event = "material_fallback",
                    rule = %name,
                    error = %err,
                    "invalid material list, using default list"
                );
                warnings.push(ValidationIssue::warning(
                    "material_fallback",
                    format!("/{name}/material"),
                    err.to_string(),
                    Some("fix the material list or remove it to use the default".to_string()),
                ));
                ctx.default_material().clone()
            }
        },
    };

    let min_height = fields.require_int("minHeight")?;
    let max_height = fields.require_int("maxHeight")?;
    if min_height >= max_height || min_height < 0 {
        return Err(CompileError::InvalidHeightRange {
            min_height,
            max_height,
        });
    }

    let biomes = if biome_mode.is_active() {
        fields
            .array("biomes")?
            .map(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                    .ok_or(CompileError::InvalidField {
                        field: "biomes",
                        expected: "an array of biome names",
                    })
            })
            .transpose()?
    } else {
        None
    };

    let dimensions = if dimension_mode.is_active() {
        fields
            .array("dimensions")?
            .map(|items| {
                items
                    .iter()
                    .map(as_i32)
                    .collect::<Option<Vec<_>>>()
                    .ok_or(CompileError::InvalidField {
                        field: "dimensions",
                        expected: "an array of dimension ids",
                    })
            })
            .transpose()?
    } else {
        None
    };

    Ok(ValidatedRule {
        rule: GenerationRule {
            name: name.to_string(),
            resources,
            material,
            cluster_size: cluster_size as u32,
            num_clusters: num_clusters as u32,
            min_height,
            max_height,
            retrogen,
            restrictions: RuleRestrictions {
                biome_mode,
                dimension_mode,
                biomes,
                dimensions,
            },
        },
        warnings,
    })
}

/// Scalars other than a matching string leave the mode at `None`; arrays,
/// objects and `null` have no string form and fail the rule.
fn restriction_mode(
    fields: &RuleFields<'_>,
    key: &'static str,
) -> Result<RestrictionMode, CompileError> {
    match fields.get(key) {
        None => Ok(RestrictionMode::None),
        Some(Value::String(raw)) => Ok(RestrictionMode::parse_lenient(raw)),
        Some(Value::Bool(_) | Value::Number(_)) => Ok(RestrictionMode::None),
        Some(_) => Err(CompileError::InvalidField {
            field: key,
            expected: "a restriction mode string",
        }),
    }
}
