use lodeforge_core::CompileError;
use lodeforge_rules::{FeatureKind, GenerationRule, GeneratorKind, Template};

use crate::feature::{Feature, FeatureParams};
use crate::generators::Generator;

/// Build the feature for a validated rule.
///
/// Generator first, from `(resources, cluster_size, material)`; then the
/// feature around it. Reserved generator kinds fail with `UnsupportedTemplate`.
pub fn bind(rule: GenerationRule, template: Template) -> Result<Feature, CompileError> {
    let GenerationRule {
        name,
        resources,
        material,
        cluster_size,
        num_clusters,
        min_height,
        max_height,
        retrogen,
        restrictions,
    } = rule;

    let generator = match template.generator {
        GeneratorKind::Cluster => Generator::cluster(resources, cluster_size, material),
        GeneratorKind::SparseCluster => {
            Generator::sparse_cluster(resources, cluster_size, material)
        }
        GeneratorKind::Fractal => {
            return Err(CompileError::UnsupportedTemplate(format!(
                "generator '{}' is reserved and cannot be built",
                GeneratorKind::Fractal.as_str()
            )));
        }
    };

    let params = FeatureParams {
        name,
        count: num_clusters,
        min_height,
        max_height,
        biome_restriction: restrictions.biome_mode,
        retrogen,
        dimension_restriction: restrictions.dimension_mode,
    };

    Ok(match template.feature {
        FeatureKind::Uniform => Feature::uniform(generator, params),
        FeatureKind::Normal => Feature::normal(generator, params),
    })
}
