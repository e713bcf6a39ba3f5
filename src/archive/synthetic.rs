//! Generated filler cases.
//!
//! These records only enlarge the population the matcher ranks against.
//! They are deterministic in their index and always carry the
//! [`SYNTHETIC_ID_PREFIX`] so they can never be mistaken for curated history.

use crate::core::case::{CaseOutcomes, HistoricalCase};
use crate::core::types::{CaseId, OutcomeResult, SYNTHETIC_ID_PREFIX};

/// Number of filler records appended to the curated archive
pub const FILLER_COUNT: usize = 150;

/// First numeric suffix used for filler ids
const FIRST_SERIAL: usize = 1000;

const ENTITIES: [&str; 3] = ["Global Logistics Corp", "FinTech Solutions", "AgriCorp"];
const SECTORS: [&str; 4] = ["Technology", "Manufacturing", "Energy", "Finance"];
const COUNTRIES: [&str; 5] = ["Vietnam", "Poland", "Mexico", "India", "Nigeria"];
const STRATEGIES: [&str; 2] = ["Joint Venture", "Acquisition"];
const RESULTS: [OutcomeResult; 3] = [
    OutcomeResult::Success,
    OutcomeResult::Failure,
    OutcomeResult::Mixed,
];
const LEARNINGS: [&str; 3] = [
    "Local regulatory alignment was key determinant",
    "Currency hedging protected margins",
    "Talent acquisition slower than projected",
];

/// Generate the standard filler set
#[must_use]
pub fn generate_filler() -> Vec<HistoricalCase> {
    (0..FILLER_COUNT).map(filler_case).collect()
}

/// Build the filler case for index `i`
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)] // i < FILLER_COUNT
pub fn filler_case(i: usize) -> HistoricalCase {
    let serial = FIRST_SERIAL + i;
    let focus = if i % 2 == 0 {
        "Market Expansion"
    } else {
        "Tech Integration"
    };
    let result = RESULTS[i % 3];
    let roi_achieved = if result.is_success() { 2.5 } else { 0.5 };

    HistoricalCase {
        id: CaseId::new(format!("{SYNTHETIC_ID_PREFIX}{serial}")),
        title: format!("Project {serial}: {focus}"),
        entity: ENTITIES[i % 3].to_string(),
        sector: SECTORS[i % 4].to_string(),
        country: COUNTRIES[i % 5].to_string(),
        year: 1980 + (i / 3) as i32,
        strategy: STRATEGIES[i % 2].to_string(),
        investment_size_million_usd: (10 + i * 2) as f64,
        outcomes: CaseOutcomes {
            result,
            roi_achieved,
            key_learnings: LEARNINGS.iter().map(ToString::to_string).collect(),
            time_to_market: Some(format!("{} months", 12 + i % 24)),
            jobs_created: Some((100 + i * 10) as u32),
        },
    }
}
