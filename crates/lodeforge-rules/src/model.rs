//! Serde model of a rule file, used to describe the format as JSON Schema.
//!
//! Compilation reads the raw JSON tree instead (see [`crate::validate`]) so that
//! failures map onto specific [`lodeforge_core::CompileError`] variants.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::template::{FeatureKind, GeneratorKind};

/// A rule file: rule names mapped to rule bodies.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RuleFile(pub BTreeMap<String, RuleBody>);

/// One generation rule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleBody {
    /// Feature type, optionally paired with a generator.
    pub template: TemplateRef,
    /// Resources placed by the generator.
    pub block: ResourceSpec,
    /// Substrate the generator may replace (defaults to stone).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<ResourceSpec>,
    /// Blocks per cluster; must be positive.
    #[schemars(range(min = 1))]
    pub cluster_size: i32,
    /// Clusters per chunk; must be positive.
    #[schemars(range(min = 1))]
    pub num_clusters: i32,
    /// Lowest height, inclusive; must be below `maxHeight`.
    #[schemars(range(min = 0))]
    pub min_height: i32,
    pub max_height: i32,
    /// Also apply to previously generated chunks.
    #[serde(default)]
    pub retrogen: bool,
    /// `whitelist` or `blacklist`, case-insensitive; anything else disables the biome list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biome_restriction: Option<String>,
    /// `whitelist` or `blacklist`, case-insensitive; anything else disables the dimension list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_restriction: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub biomes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<i32>,
}

/// Template reference; accepts a bare feature type or a full spec.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TemplateRef {
    Type(FeatureKind),
    Spec(TemplateSpec),
}

/// Feature type plus generator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TemplateSpec {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    pub generator: GeneratorKind,
}

/// A single resource entry or a list of them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ResourceSpec {
    One(ResourceRef),
    Many(Vec<ResourceRef>),
}

/// Resource entry; accepts a bare `namespace:name` identifier or a weighted entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ResourceRef {
    Id(String),
    Entry(ResourceEntry),
}

/// Weighted resource entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResourceEntry {
    /// `namespace:name`; the namespace defaults to `minecraft`.
    pub name: String,
    /// Variant, clamped to 0-15.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 15))]
    pub metadata: Option<i64>,
    /// Relative weight, clamped to 1-1000000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 1_000_000))]
    pub weight: Option<i64>,
}

impl ResourceRef {
    pub fn name(&self) -> &str {
        match self {
            ResourceRef::Id(value) => value.as_str(),
            ResourceRef::Entry(entry) => entry.name.as_str(),
        }
    }
}

impl TemplateRef {
    pub fn feature(&self) -> FeatureKind {
        match self {
            TemplateRef::Type(kind) => *kind,
            TemplateRef::Spec(spec) => spec.kind,
        }
    }

    pub fn generator(&self) -> GeneratorKind {
        match self {
            TemplateRef::Type(_) => GeneratorKind::Cluster,
            TemplateRef::Spec(spec) => spec.generator,
        }
    }
}
