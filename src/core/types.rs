use serde::{Deserialize, Serialize};

/// Id prefix reserved for generated filler cases
pub const SYNTHETIC_ID_PREFIX: &str = "CS-GEN-";

/// Unique identifier for a case in the archive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(pub String);

impl CaseId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Which archive tier this id belongs to, by prefix convention
    #[must_use]
    pub fn provenance(&self) -> Provenance {
        if self.0.starts_with(SYNTHETIC_ID_PREFIX) {
            Provenance::Synthetic
        } else {
            Provenance::Curated
        }
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a case record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Hand-authored historical record
    Curated,
    /// Programmatically generated filler, not authoritative history
    Synthetic,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Curated => write!(f, "curated"),
            Self::Synthetic => write!(f, "synthetic"),
        }
    }
}

/// Recorded outcome of a historical case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeResult {
    Success,
    Mixed,
    Failure,
}

impl OutcomeResult {
    /// Unconditional success probability (percent) implied by this outcome
    #[must_use]
    pub fn base_rate(self) -> f64 {
        match self {
            Self::Success => 85.0,
            Self::Mixed => 60.0,
            Self::Failure => 30.0,
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for OutcomeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Mixed => write!(f, "mixed"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// Overall scores strictly above this are high confidence
pub const HIGH_CONFIDENCE_ABOVE: u8 = 70;

/// Overall scores strictly above this (and not high) are medium confidence
pub const MEDIUM_CONFIDENCE_ABOVE: u8 = 40;

/// Confidence level for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    #[must_use]
    pub fn from_overall(overall: u8) -> Self {
        if overall > HIGH_CONFIDENCE_ABOVE {
            Self::High
        } else if overall > MEDIUM_CONFIDENCE_ABOVE {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}
