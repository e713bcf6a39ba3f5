use serde::{Deserialize, Serialize};

use crate::core::types::{CaseId, OutcomeResult, Provenance};

/// Months assumed when a case has no usable time-to-market
pub const DEFAULT_TIME_TO_MARKET_MONTHS: u32 = 12;

/// Recorded outcome details for a historical case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOutcomes {
    pub result: OutcomeResult,

    /// Multiple of invested capital returned
    pub roi_achieved: f64,

    /// Lessons in the order they should be surfaced
    #[serde(default)]
    pub key_learnings: Vec<String>,

    /// Free text of the form "<n> months"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_market: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs_created: Option<u32>,
}

/// One historical investment precedent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalCase {
    pub id: CaseId,
    pub title: String,
    pub entity: String,
    pub sector: String,
    pub country: String,
    pub year: i32,

    /// Approach taken, e.g. "Joint Venture"
    pub strategy: String,

    pub investment_size_million_usd: f64,
    pub outcomes: CaseOutcomes,
}

impl HistoricalCase {
    #[must_use]
    pub fn provenance(&self) -> Provenance {
        self.id.provenance()
    }

    /// Whitespace-separated keywords of the strategy label
    pub fn strategy_keywords(&self) -> impl Iterator<Item = &str> {
        self.strategy.split_whitespace()
    }

    /// Time to market in months, falling back to the default when absent or unparsable
    #[must_use]
    pub fn time_to_market_months(&self) -> u32 {
        self.outcomes
            .time_to_market
            .as_deref()
            .and_then(leading_integer)
            .unwrap_or(DEFAULT_TIME_TO_MARKET_MONTHS)
    }

    /// Time to maturity in years
    #[must_use]
    pub fn time_to_maturity_years(&self) -> f64 {
        f64::from(self.time_to_market_months()) / 12.0
    }
}

/// Parse the run of digits at the start of `s` (after leading whitespace)
fn leading_integer(s: &str) -> Option<u32> {
    let trimmed = s.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}
