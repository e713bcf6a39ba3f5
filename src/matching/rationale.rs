use serde::Serialize;

use crate::core::case::HistoricalCase;

/// Shown when a case has no recorded time to market
pub const TIME_TO_MARKET_FALLBACK: &str = "not recorded";

/// Advisory attached to every match
pub const REGULATORY_ADVISORY: &str = "Historical regulatory friction observed";

/// Supporting rationale drawn from a matched case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicableFactors {
    /// The case's learnings when it succeeded
    pub success_factors: Vec<String>,

    /// The case's learnings when it did not succeed
    pub warnings: Vec<String>,

    pub timing_considerations: Vec<String>,

    /// One-sentence summary of the capital deployed
    pub investment_profile: String,
}

impl ApplicableFactors {
    /// Assemble rationale for `case`.
    ///
    /// Learnings populate exactly one of `success_factors` / `warnings`,
    /// keyed by the recorded result, in their original order.
    #[must_use]
    pub fn assemble(case: &HistoricalCase) -> Self {
        let learnings = case.outcomes.key_learnings.clone();
        let (success_factors, warnings) = if case.outcomes.result.is_success() {
            (learnings, Vec::new())
        } else {
            (Vec::new(), learnings)
        };

        let time_to_market = case
            .outcomes
            .time_to_market
            .as_deref()
            .unwrap_or(TIME_TO_MARKET_FALLBACK);

        Self {
            success_factors,
            warnings,
            timing_considerations: vec![
                format!("Time to market: {time_to_market}"),
                REGULATORY_ADVISORY.to_string(),
            ],
            investment_profile: format!(
                "Precedent: {} deployed ${}M in {}.",
                case.entity, case.investment_size_million_usd, case.year
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::synthetic::filler_case;
    use crate::core::case::CaseOutcomes;
    use crate::core::types::{CaseId, OutcomeResult};

    fn make_case(result: OutcomeResult, learnings: &[&str]) -> HistoricalCase {
        HistoricalCase {
            id: CaseId::new("CS-1952-X"),
            title: "Sony US Transistor Licensing".to_string(),
            entity: "Sony".to_string(),
            sector: "Technology".to_string(),
            country: "United States".to_string(),
            year: 1952,
            strategy: "Tech Transfer".to_string(),
            investment_size_million_usd: 0.025,
            outcomes: CaseOutcomes {
                result,
                roi_achieved: 500.0,
                key_learnings: learnings.iter().map(ToString::to_string).collect(),
                time_to_market: None,
                jobs_created: None,
            },
        }
    }

    #[test]
    fn test_success_learnings_become_factors() {
        let case = make_case(OutcomeResult::Success, &["Niche targeting", "Licensing arbitrage"]);
        let factors = ApplicableFactors::assemble(&case);
        assert_eq!(
            factors.success_factors,
            vec!["Niche targeting", "Licensing arbitrage"]
        );
        assert!(factors.warnings.is_empty());
    }

    #[test]
    fn test_non_success_learnings_become_warnings() {
        for result in [OutcomeResult::Mixed, OutcomeResult::Failure] {
            let case = make_case(result, &["Brand perception gap"]);
            let factors = ApplicableFactors::assemble(&case);
            assert!(factors.success_factors.is_empty());
            assert_eq!(factors.warnings, vec!["Brand perception gap"]);
        }
    }

    #[test]
    fn test_empty_learnings_leave_both_empty() {
        let factors = ApplicableFactors::assemble(&make_case(OutcomeResult::Failure, &[]));
        assert!(factors.success_factors.is_empty());
        assert!(factors.warnings.is_empty());
    }

    #[test]
    fn test_timing_fallback_and_advisory() {
        let factors = ApplicableFactors::assemble(&make_case(OutcomeResult::Success, &[]));
        assert_eq!(
            factors.timing_considerations,
            vec![
                "Time to market: not recorded".to_string(),
                REGULATORY_ADVISORY.to_string()
            ]
        );

        let factors = ApplicableFactors::assemble(&filler_case(3));
        assert_eq!(factors.timing_considerations[0], "Time to market: 15 months");
    }

    #[test]
    fn test_investment_profile_formatting() {
        let factors = ApplicableFactors::assemble(&make_case(OutcomeResult::Success, &[]));
        assert_eq!(
            factors.investment_profile,
            "Precedent: Sony deployed $0.025M in 1952."
        );

        let factors = ApplicableFactors::assemble(&filler_case(0));
        assert_eq!(
            factors.investment_profile,
            "Precedent: Global Logistics Corp deployed $10M in 1980."
        );
    }
}
