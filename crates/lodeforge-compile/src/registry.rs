use std::collections::HashMap;

use crate::feature::Feature;

/// Receives compiled features.
///
/// `register` returns false when the feature is rejected, for example because
/// its name is already taken. Rejection never aborts a load.
pub trait FeatureSink {
    fn register(&mut self, feature: Feature) -> bool;
}

/// In-memory sink keeping features in registration order.
///
/// Names are unique across the registry; the first feature with a name wins.
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    features: Vec<Feature>,
    index: HashMap<String, usize>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Feature> {
        self.index.get(name).map(|&idx| &self.features[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(Feature::name)
    }
}

impl FeatureSink for FeatureRegistry {
    fn register(&mut self, feature: Feature) -> bool {
        if self.index.contains_key(feature.name()) {
            return false;
        }
        self.index
            .insert(feature.name().to_string(), self.features.len());
        self.features.push(feature);
        true
    }
}
