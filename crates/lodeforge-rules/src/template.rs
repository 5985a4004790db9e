use lodeforge_core::CompileError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Vertical distribution policy of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Heights drawn evenly between `minHeight` and `maxHeight`.
    Uniform,
    /// Heights concentrated around the middle of the range.
    Normal,
}

impl FeatureKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "uniform" => Some(FeatureKind::Uniform),
            "normal" => Some(FeatureKind::Normal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKind::Uniform => "uniform",
            FeatureKind::Normal => "normal",
        }
    }
}

/// Placement shape wrapped by a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
    Cluster,
    SparseCluster,
    /// Reserved tag; resolves but cannot be built.
    Fractal,
}

impl GeneratorKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "cluster" => Some(GeneratorKind::Cluster),
            "sparse-cluster" => Some(GeneratorKind::SparseCluster),
            "fractal" => Some(GeneratorKind::Fractal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GeneratorKind::Cluster => "cluster",
            GeneratorKind::SparseCluster => "sparse-cluster",
            GeneratorKind::Fractal => "fractal",
        }
    }
}

/// Resolved `(feature, generator)` pair of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Template {
    pub feature: FeatureKind,
    pub generator: GeneratorKind,
}

impl Template {
    pub const fn new(feature: FeatureKind, generator: GeneratorKind) -> Self {
        Self { feature, generator }
    }
}

/// Resolve the `template` field of a rule.
///
/// A string names the feature kind and implies a cluster generator; an object
/// names both through `type` and `generator`. Unknown tags fail here rather
/// than at construction.
pub fn resolve_template(template: &Value) -> Result<Template, CompileError> {
    match template {
        Value::String(tag) => Ok(Template::new(feature_kind(tag)?, GeneratorKind::Cluster)),
        Value::Object(spec) => {
            let generator = match spec.get("generator") {
                Some(Value::String(tag)) => GeneratorKind::from_tag(tag).ok_or_else(|| {
                    CompileError::UnknownTemplate(format!("unknown generator '{tag}'"))
                })?,
                Some(_) => {
                    return Err(CompileError::UnknownTemplate(
                        "template generator must be a string".to_string(),
                    ));
                }
                None => {
                    return Err(CompileError::UnknownTemplate(
                        "template object requires a 'generator'".to_string(),
                    ));
                }
            };
            let feature = match spec.get("type") {
                Some(Value::String(tag)) => feature_kind(tag)?,
                Some(_) => {
                    return Err(CompileError::UnknownTemplate(
                        "template type must be a string".to_string(),
                    ));
                }
                None => {
                    return Err(CompileError::UnknownTemplate(
                        "template object requires a 'type'".to_string(),
                    ));
                }
            };
            Ok(Template::new(feature, generator))
        }
        _ => Err(CompileError::UnknownTemplate(
            "template must be a string or an object".to_string(),
        )),
    }
}

fn feature_kind(tag: &str) -> Result<FeatureKind, CompileError> {
    FeatureKind::from_tag(tag)
        .ok_or_else(|| CompileError::UnknownTemplate(format!("unknown feature type '{tag}'")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_template_defaults_to_cluster() {
        let template = resolve_template(&json!("normal")).expect("resolves");
        assert_eq!(
            template,
            Template::new(FeatureKind::Normal, GeneratorKind::Cluster)
        );
    }

    #[test]
    fn object_template_resolves_both_kinds() {
        let template = resolve_template(&json!({"type": "normal", "generator": "sparse-cluster"}))
            .expect("resolves");
        assert_eq!(
            template,
            Template::new(FeatureKind::Normal, GeneratorKind::SparseCluster)
        );
    }

    #[test]
    fn fractal_resolves_to_reserved_kind() {
        let template =
            resolve_template(&json!({"type": "uniform", "generator": "fractal"})).expect("resolves");
        assert_eq!(template.generator, GeneratorKind::Fractal);
    }

    #[test]
    fn unknown_tags_fail_fast() {
        for value in [
            json!("spiral"),
            json!("Uniform"),
            json!({"type": "uniform", "generator": "vein"}),
            json!({"type": "spiral", "generator": "cluster"}),
            json!({"type": "uniform"}),
            json!({"generator": "cluster"}),
            json!(7),
        ] {
            assert!(
                matches!(resolve_template(&value), Err(CompileError::UnknownTemplate(_))),
                "{value}"
            );
        }
    }
}
