use lodeforge_core::MaterialList;
use lodeforge_rules::GeneratorKind;

/// Construction parameters shared by the cluster-style generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterShape {
    resources: MaterialList,
    cluster_size: u32,
    material: MaterialList,
}

impl ClusterShape {
    pub fn new(resources: MaterialList, cluster_size: u32, material: MaterialList) -> Self {
        Self {
            resources,
            cluster_size,
            material,
        }
    }

    /// Materials placed by the generator.
    pub fn resources(&self) -> &MaterialList {
        &self.resources
    }

    pub fn cluster_size(&self) -> u32 {
        self.cluster_size
    }

    /// Substrate the generator is allowed to replace.
    pub fn material(&self) -> &MaterialList {
        &self.material
    }
}

/// Placement shape wrapped by a feature.
///
/// Both variants share one constructor contract and differ only in placement
/// density at generation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generator {
    Cluster(ClusterShape),
    SparseCluster(ClusterShape),
}

impl Generator {
    pub fn cluster(resources: MaterialList, cluster_size: u32, material: MaterialList) -> Self {
        Generator::Cluster(ClusterShape::new(resources, cluster_size, material))
    }

    pub fn sparse_cluster(
        resources: MaterialList,
        cluster_size: u32,
        material: MaterialList,
    ) -> Self {
        Generator::SparseCluster(ClusterShape::new(resources, cluster_size, material))
    }

    pub fn kind(&self) -> GeneratorKind {
        match self {
            Generator::Cluster(_) => GeneratorKind::Cluster,
            Generator::SparseCluster(_) => GeneratorKind::SparseCluster,
        }
    }

    pub fn shape(&self) -> &ClusterShape {
        match self {
            Generator::Cluster(shape) | Generator::SparseCluster(shape) => shape,
        }
    }
}
