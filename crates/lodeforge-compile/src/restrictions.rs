use lodeforge_rules::RuleRestrictions;

use crate::feature::Feature;

/// Populate a feature's biome and dimension lists from its rule.
///
/// Lists are only filled when the feature's mode is active and the rule carried
/// entries. Entries replace earlier ones, so attaching twice yields the same
/// lists. An active mode without entries keeps an empty list under that mode.
pub fn attach_restrictions(feature: &mut Feature, restrictions: &RuleRestrictions) {
    if feature.biomes().mode().is_active()
        && let Some(biomes) = &restrictions.biomes
    {
        feature.biomes_mut().replace_entries(biomes.iter().cloned());
    }
    if feature.dimensions().mode().is_active()
        && let Some(dimensions) = &restrictions.dimensions
    {
        feature
            .dimensions_mut()
            .replace_entries(dimensions.iter().copied());
    }
}
