use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::archive::store::CaseArchive;
use crate::core::case::HistoricalCase;
use crate::core::query::PrecedentQuery;
use crate::core::types::Confidence;
use crate::matching::rationale::ApplicableFactors;
use crate::matching::scoring::{blended_probability, RegionTable, SimilarityScore};

/// Default minimum fraction of the maximum overall score
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Result of scoring one archive case against a query
#[derive(Debug, Clone, Serialize)]
pub struct PrecedentMatch<'a> {
    /// The matched case, borrowed from the archive
    pub historical_case: &'a HistoricalCase,

    pub similarity: SimilarityScore,

    /// Base rate blended toward 50 by match strength, 0-100
    pub probability_of_success: f64,

    pub confidence_level: Confidence,

    pub applicable_factors: ApplicableFactors,

    /// Years until the precedent reached the market
    pub time_to_maturity: f64,
}

impl<'a> PrecedentMatch<'a> {
    #[must_use]
    pub fn new(case: &'a HistoricalCase, query: &PrecedentQuery, regions: &RegionTable) -> Self {
        let similarity = SimilarityScore::calculate(query, case, regions);

        Self {
            historical_case: case,
            probability_of_success: blended_probability(case.outcomes.result, similarity.overall),
            confidence_level: similarity.confidence(),
            applicable_factors: ApplicableFactors::assemble(case),
            time_to_maturity: case.time_to_maturity_years(),
            similarity,
        }
    }
}

/// Configuration for the matching engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum overall score, as a fraction of the maximum, for a case to be returned
    pub threshold: f64,
    /// Region-to-country associations used for partial regional credit
    pub regions: RegionTable,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            regions: RegionTable::default(),
        }
    }
}

impl MatchingConfig {
    /// Load a configuration from a JSON file; missing fields take defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Clamp a threshold into [0, 1]; NaN falls back to the default
#[must_use]
pub fn normalize_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// The precedent matching engine
pub struct MatchingEngine<'a> {
    archive: &'a CaseArchive,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    #[must_use]
    pub fn new(archive: &'a CaseArchive) -> Self {
        Self {
            archive,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    #[must_use]
    pub fn with_config(archive: &'a CaseArchive, config: MatchingConfig) -> Self {
        Self { archive, config }
    }

    /// Find matches using the configured threshold
    #[must_use]
    pub fn find_matches(&self, query: &PrecedentQuery) -> Vec<PrecedentMatch<'a>> {
        self.find_matches_with_threshold(query, self.config.threshold)
    }

    /// Score every case, keep those with `overall >= threshold * 100`, and
    /// order them by descending overall score. Ties keep archive order.
    #[must_use]
    pub fn find_matches_with_threshold(
        &self,
        query: &PrecedentQuery,
        threshold: f64,
    ) -> Vec<PrecedentMatch<'a>> {
        let min_overall = normalize_threshold(threshold) * 100.0;

        let mut results: Vec<PrecedentMatch<'a>> = self
            .archive
            .iter()
            .map(|case| PrecedentMatch::new(case, query, &self.config.regions))
            .filter(|m| f64::from(m.similarity.overall) >= min_overall)
            .collect();

        // Stable sort keeps archive order among equal scores
        results.sort_by(|a, b| b.similarity.overall.cmp(&a.similarity.overall));

        tracing::debug!(
            scanned = self.archive.len(),
            retained = results.len(),
            min_overall,
            "Precedent matching complete"
        );

        results
    }

    /// Score a single case without filtering
    #[must_use]
    pub fn score_case(&self, case: &'a HistoricalCase, query: &PrecedentQuery) -> PrecedentMatch<'a> {
        PrecedentMatch::new(case, query, &self.config.regions)
    }
}
