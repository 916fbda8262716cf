use std::fmt;

use serde::{Deserialize, Serialize};

/// Device type assigned when no strategy produced an answer.
pub const UNKNOWN_DEVICE_TYPE: &str = "unknown";

/// Qualitative trust attached to a classifier output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Explicit field trusted as-is.
    High,
    /// Heuristic keyword match.
    Medium,
    /// No deterministic signal.
    #[default]
    Low,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which classification strategy produced the answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    ExplicitField,
    KeywordHeuristic,
    Oracle,
    #[default]
    Default,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExplicitField => "explicit_field",
            Self::KeywordHeuristic => "keyword_heuristic",
            Self::Oracle => "oracle",
            Self::Default => "default",
        }
    }
}

/// Device-type classification result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub device_type: String,
    pub confidence: Confidence,
    pub strategy: Strategy,
}

impl Classification {
    pub fn unknown() -> Self {
        Self {
            device_type: UNKNOWN_DEVICE_TYPE.to_string(),
            confidence: Confidence::Low,
            strategy: Strategy::Default,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.device_type == UNKNOWN_DEVICE_TYPE
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::unknown()
    }
}
