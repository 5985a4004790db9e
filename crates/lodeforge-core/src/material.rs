use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest metadata variant a material entry may carry.
pub const MAX_METADATA: u8 = 15;
/// Metadata used when an entry does not specify one.
pub const DEFAULT_METADATA: u8 = 0;
/// Lowest relative weight of a material entry.
pub const MIN_WEIGHT: u32 = 1;
/// Highest relative weight of a material entry.
pub const MAX_WEIGHT: u32 = 1_000_000;
/// Weight used when an entry does not specify one.
pub const DEFAULT_WEIGHT: u32 = 100;

/// Opaque handle handed out by a [`crate::MaterialLookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialHandle(u32);

impl MaterialHandle {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A `namespace:name` material identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId {
    pub namespace: String,
    pub name: String,
}

impl MaterialId {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Split a raw identifier on its first `:`.
    ///
    /// Identifiers without a namespace fall back to `default_namespace`.
    pub fn parse(raw: &str, default_namespace: &str) -> Self {
        match raw.split_once(':') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::new(default_namespace, raw),
        }
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

/// Clamp a raw metadata value into `0..=15`.
pub fn clamp_metadata(raw: i64) -> u8 {
    raw.clamp(0, i64::from(MAX_METADATA)) as u8
}

/// Clamp a raw weight into `1..=1_000_000`.
pub fn clamp_weight(raw: i64) -> u32 {
    raw.clamp(i64::from(MIN_WEIGHT), i64::from(MAX_WEIGHT)) as u32
}

/// One weighted material reference.
///
/// Metadata and weight are clamped on construction and never leave their range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeightedMaterial {
    material: MaterialHandle,
    metadata: u8,
    weight: u32,
}

impl WeightedMaterial {
    pub fn new(material: MaterialHandle, metadata: i64, weight: i64) -> Self {
        Self {
            material,
            metadata: clamp_metadata(metadata),
            weight: clamp_weight(weight),
        }
    }

    /// Entry with default metadata and weight.
    pub fn plain(material: MaterialHandle) -> Self {
        Self {
            material,
            metadata: DEFAULT_METADATA,
            weight: DEFAULT_WEIGHT,
        }
    }

    pub fn material(&self) -> MaterialHandle {
        self.material
    }

    pub fn metadata(&self) -> u8 {
        self.metadata
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// Ordered, non-empty list of weighted materials.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MaterialList(Vec<WeightedMaterial>);

impl MaterialList {
    /// Returns `None` for an empty list.
    pub fn new(entries: Vec<WeightedMaterial>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self(entries))
        }
    }

    pub fn single(entry: WeightedMaterial) -> Self {
        Self(vec![entry])
    }

    pub fn entries(&self) -> &[WeightedMaterial] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeightedMaterial> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a MaterialList {
    type Item = &'a WeightedMaterial;
    type IntoIter = std::slice::Iter<'a, WeightedMaterial>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_is_clamped_into_range() {
        for raw in [i64::MIN, -5, 0, 1, 100, 1_000_000, 1_000_001, i64::MAX] {
            let weight = clamp_weight(raw);
            assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&weight), "raw {raw}");
        }
        assert_eq!(clamp_weight(0), 1);
        assert_eq!(clamp_weight(2_000_000), 1_000_000);
        assert_eq!(clamp_weight(250), 250);
    }

    #[test]
    fn metadata_is_clamped_into_range() {
        for raw in [i64::MIN, -1, 0, 7, 15, 16, i64::MAX] {
            assert!(clamp_metadata(raw) <= MAX_METADATA, "raw {raw}");
        }
        assert_eq!(clamp_metadata(-3), 0);
        assert_eq!(clamp_metadata(99), 15);
        assert_eq!(clamp_metadata(9), 9);
    }

    #[test]
    fn identifier_without_namespace_uses_default() {
        assert_eq!(
            MaterialId::parse("stone", "minecraft"),
            MaterialId::new("minecraft", "stone")
        );
        assert_eq!(
            MaterialId::parse("core:ore:deep", "minecraft"),
            MaterialId::new("core", "ore:deep")
        );
    }

    #[test]
    fn empty_material_list_is_rejected() {
        assert!(MaterialList::new(Vec::new()).is_none());
        let list = MaterialList::new(vec![WeightedMaterial::plain(MaterialHandle::new(3))])
            .expect("non-empty list");
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].weight(), DEFAULT_WEIGHT);
    }
}
