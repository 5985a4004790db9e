use lodeforge_core::RestrictionMode;
use lodeforge_rules::FeatureKind;

use crate::generators::Generator;

/// Allow or deny list gating where a feature may generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionList<T> {
    mode: RestrictionMode,
    entries: Vec<T>,
}

impl<T> RestrictionList<T> {
    pub fn new(mode: RestrictionMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
        }
    }

    pub fn mode(&self) -> RestrictionMode {
        self.mode
    }

    /// Entries in declaration order; duplicates are kept.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub(crate) fn replace_entries(&mut self, entries: impl IntoIterator<Item = T>) {
        self.entries.clear();
        self.entries.extend(entries);
    }
}

/// Scalar parameters every feature kind is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureParams {
    pub name: String,
    pub count: u32,
    pub min_height: i32,
    pub max_height: i32,
    pub biome_restriction: RestrictionMode,
    pub retrogen: bool,
    pub dimension_restriction: RestrictionMode,
}

/// A compiled generation rule.
///
/// Only restriction entries change after construction, and only before the
/// feature is handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    kind: FeatureKind,
    name: String,
    generator: Generator,
    count: u32,
    min_height: i32,
    max_height: i32,
    retrogen: bool,
    biomes: RestrictionList<String>,
    dimensions: RestrictionList<i32>,
}

impl Feature {
    /// Feature spreading clusters evenly over its height range.
    pub fn uniform(generator: Generator, params: FeatureParams) -> Self {
        Self::build(FeatureKind::Uniform, generator, params)
    }

    /// Feature concentrating clusters around the middle of its height range.
    pub fn normal(generator: Generator, params: FeatureParams) -> Self {
        Self::build(FeatureKind::Normal, generator, params)
    }

    fn build(kind: FeatureKind, generator: Generator, params: FeatureParams) -> Self {
        Self {
            kind,
            name: params.name,
            generator,
            count: params.count,
            min_height: params.min_height,
            max_height: params.max_height,
            retrogen: params.retrogen,
            biomes: RestrictionList::new(params.biome_restriction),
            dimensions: RestrictionList::new(params.dimension_restriction),
        }
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Clusters attempted per chunk.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn min_height(&self) -> i32 {
        self.min_height
    }

    pub fn max_height(&self) -> i32 {
        self.max_height
    }

    pub fn retrogen(&self) -> bool {
        self.retrogen
    }

    pub fn biomes(&self) -> &RestrictionList<String> {
        &self.biomes
    }

    pub fn dimensions(&self) -> &RestrictionList<i32> {
        &self.dimensions
    }

    pub(crate) fn biomes_mut(&mut self) -> &mut RestrictionList<String> {
        &mut self.biomes
    }

    pub(crate) fn dimensions_mut(&mut self) -> &mut RestrictionList<i32> {
        &mut self.dimensions
    }
}
