use std::collections::BTreeMap;

use crate::material::{MaterialHandle, MaterialId};

/// Resolves material identifiers to opaque handles.
///
/// Implementations must behave as a pure function for the duration of a load.
pub trait MaterialLookup {
    fn resolve(&self, namespace: &str, name: &str) -> Option<MaterialHandle>;
}

impl<T: MaterialLookup + ?Sized> MaterialLookup for &T {
    fn resolve(&self, namespace: &str, name: &str) -> Option<MaterialHandle> {
        (**self).resolve(namespace, name)
    }
}

impl<T: MaterialLookup + ?Sized> MaterialLookup for Box<T> {
    fn resolve(&self, namespace: &str, name: &str) -> Option<MaterialHandle> {
        (**self).resolve(namespace, name)
    }
}

/// In-memory lookup table assigning handles in registration order.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    entries: BTreeMap<MaterialId, MaterialHandle>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from raw identifiers, resolving bare names against
    /// `default_namespace`.
    pub fn from_identifiers<I, S>(identifiers: I, default_namespace: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for raw in identifiers {
            if catalog
                .register(MaterialId::parse(raw.as_ref(), default_namespace))
                .is_none()
            {
                break;
            }
        }
        catalog
    }

    /// Register an identifier, returning its handle. Re-registering returns the
    /// existing handle; `None` once every `u32` handle is taken.
    pub fn register(&mut self, id: MaterialId) -> Option<MaterialHandle> {
        if let Some(handle) = self.entries.get(&id) {
            return Some(*handle);
        }
        let next = MaterialHandle::new(u32::try_from(self.entries.len()).ok()?);
        self.entries.insert(id, next);
        Some(next)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MaterialLookup for MaterialCatalog {
    fn resolve(&self, namespace: &str, name: &str) -> Option<MaterialHandle> {
        self.entries
            .get(&MaterialId::new(namespace, name))
            .copied()
    }
}
