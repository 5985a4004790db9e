use thiserror::Error;

/// Reasons a single generation rule fails to compile.
///
/// Every variant is local to one rule: callers report it with the rule name and
/// continue with the next rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A resource entry is structurally invalid (missing name, wrong type, empty list).
    #[error("malformed resource entry: {0}")]
    MalformedResourceEntry(String),
    /// A resource identifier did not resolve against the material lookup.
    #[error("unknown material '{namespace}:{name}'")]
    UnknownMaterial { namespace: String, name: String },
    /// `clusterSize` or `numClusters` is not strictly positive.
    #[error("invalid cluster parameters: clusterSize={cluster_size}, numClusters={num_clusters}")]
    InvalidClusterParameters { cluster_size: i32, num_clusters: i32 },
    /// The height range is empty, inverted, or starts below zero.
    #[error("invalid height range: minHeight={min_height}, maxHeight={max_height}")]
    InvalidHeightRange { min_height: i32, max_height: i32 },
    /// The `template` field names no known feature or generator kind.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    /// The template resolved to a reserved kind that cannot be built.
    #[error("unsupported template: {0}")]
    UnsupportedTemplate(String),
    /// The registration sink already holds a feature with this name.
    #[error("duplicate rule name: {0}")]
    DuplicateRuleName(String),
    /// The file carrying the rule could not be read or parsed.
    #[error("io failure: {0}")]
    IoFailure(String),
    /// The rule body is not a JSON object.
    #[error("malformed rule: {0}")]
    MalformedRule(String),
    /// A required field is absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    /// A field holds a value of the wrong JSON type or out of integer range.
    #[error("invalid value for field '{field}': expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

impl CompileError {
    /// Stable identifier used in load reports.
    pub fn code(&self) -> &'static str {
        match self {
            CompileError::MalformedResourceEntry(_) => "malformed_resource_entry",
            CompileError::UnknownMaterial { .. } => "unknown_material",
            CompileError::InvalidClusterParameters { .. } => "invalid_cluster_parameters",
            CompileError::InvalidHeightRange { .. } => "invalid_height_range",
            CompileError::UnknownTemplate(_) => "unknown_template",
            CompileError::UnsupportedTemplate(_) => "unsupported_template",
            CompileError::DuplicateRuleName(_) => "duplicate_rule_name",
            CompileError::IoFailure(_) => "io_failure",
            CompileError::MalformedRule(_) => "malformed_rule",
            CompileError::MissingField(_) => "missing_field",
            CompileError::InvalidField { .. } => "invalid_field",
        }
    }
}

/// Convenience alias for results returned while compiling rules.
pub type Result<T> = std::result::Result<T, CompileError>;
