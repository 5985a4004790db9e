use serde::Serialize;

/// How a biome or dimension list gates a feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionMode {
    /// The list is ignored.
    #[default]
    None,
    /// Only listed contexts match.
    Whitelist,
    /// Every context except the listed ones matches.
    Blacklist,
}

impl RestrictionMode {
    /// Case-insensitive parse. Unrecognized values leave the mode at `None`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "whitelist" => RestrictionMode::Whitelist,
            "blacklist" => RestrictionMode::Blacklist,
            _ => RestrictionMode::None,
        }
    }

    pub fn is_active(self) -> bool {
        self != RestrictionMode::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RestrictionMode::None => "none",
            RestrictionMode::Whitelist => "whitelist",
            RestrictionMode::Blacklist => "blacklist",
        }
    }
}
