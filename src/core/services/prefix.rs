//! Import prefix matching policies
//!
//! Decides whether a discovered module falls under the caller's import
//! prefix and so gets a page.

use serde::{Deserialize, Serialize};

/// How a module path is tested against the import prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixPolicy {
    /// Plain string prefix: `example.com/foo` matches `example.com/foobar`
    #[default]
    Literal,
    /// Whole path segments only: `example.com/foo` matches
    /// `example.com/foo` and `example.com/foo/bar`, not `example.com/foobar`
    #[serde(rename = "segment")]
    SegmentAware,
}

impl PrefixPolicy {
    /// Returns `true` if `module` is under `prefix`
    #[must_use]
    pub fn matches(self, module: &str, prefix: &str) -> bool {
        match self {
            Self::Literal => module.starts_with(prefix),
            Self::SegmentAware => match module.strip_prefix(prefix) {
                Some(rest) => {
                    prefix.is_empty() || prefix.ends_with('/') || rest.is_empty() || rest.starts_with('/')
                },
                None => false,
            },
        }
    }
}

impl std::fmt::Display for PrefixPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal => write!(f, "literal"),
            Self::SegmentAware => write!(f, "segment"),
        }
    }
}

impl std::str::FromStr for PrefixPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "segment" | "segment-aware" => Ok(Self::SegmentAware),
            _ => Err(format!("Invalid prefix match: {s}. Use: literal, segment")),
        }
    }
}
