use lodeforge_core::{
    CompileError, DEFAULT_NAMESPACE, DEFAULT_SUBSTRATE, MaterialHandle, MaterialId, MaterialList,
    MaterialLookup, WeightedMaterial,
};

/// Options used to build a [`CompileContext`].
#[derive(Debug, Clone)]
pub struct ContextOptions {
    /// Namespace for identifiers written without one.
    pub default_namespace: String,
    /// Identifier of the substrate replaced when a rule omits `material`.
    pub default_material: String,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            default_material: DEFAULT_SUBSTRATE.to_string(),
        }
    }
}

/// Read-only state shared by every rule of one load.
///
/// Holds the material lookup and the default material list. Nothing in here
/// changes while rules compile, so one context can serve parallel loads.
#[derive(Debug, Clone)]
pub struct CompileContext<L> {
    lookup: L,
    default_namespace: String,
    default_material: MaterialList,
}

impl<L: MaterialLookup> CompileContext<L> {
    /// Context with the default namespace and substrate.
    pub fn new(lookup: L) -> Result<Self, CompileError> {
        Self::with_options(lookup, ContextOptions::default())
    }

    /// Fails with `UnknownMaterial` when the default substrate does not resolve.
    pub fn with_options(lookup: L, options: ContextOptions) -> Result<Self, CompileError> {
        let id = MaterialId::parse(&options.default_material, &options.default_namespace);
        let handle = resolve_id(&lookup, &id)?;
        Ok(Self {
            lookup,
            default_namespace: options.default_namespace,
            default_material: MaterialList::single(WeightedMaterial::plain(handle)),
        })
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    pub fn default_material(&self) -> &MaterialList {
        &self.default_material
    }

    /// Resolve a raw `namespace:name` identifier.
    pub fn resolve(&self, raw: &str) -> Result<MaterialHandle, CompileError> {
        resolve_id(&self.lookup, &MaterialId::parse(raw, &self.default_namespace))
    }
}

fn resolve_id<L: MaterialLookup>(lookup: &L, id: &MaterialId) -> Result<MaterialHandle, CompileError> {
    lookup
        .resolve(&id.namespace, &id.name)
        .ok_or_else(|| CompileError::UnknownMaterial {
            namespace: id.namespace.clone(),
            name: id.name.clone(),
        })
}
