//! Precedent matching engine and scoring.
//!
//! - [`MatchingEngine`]: scores every archive case, filters and ranks
//! - [`SimilarityScore`]: per-dimension alignment and the weighted overall
//! - [`ApplicableFactors`]: rationale surfaced from a matched case
//!
//! ## Scoring
//!
//! Three dimensions are combined into an overall score out of 100:
//!
//! | Dimension | Full credit | Partial credit |
//! |-----------|-------------|----------------|
//! | Sector    | 40 (label containment) | 10 (common sector) |
//! | Country   | 30 (exact country)     | 15 (same region)   |
//! | Strategy  | 30 (keyword in intent) | -                  |
//!
//! The overall score drives confidence (`> 70` high, `> 40` medium) and
//! blends the case's outcome base rate toward a neutral 50%.
//!
//! ## Example
//!
//! ```rust,no_run
//! use precedent_matcher::{CaseArchive, MatchingEngine, PrecedentQuery, StrategicIntent};
//!
//! let archive = CaseArchive::load_embedded().unwrap();
//! let query = PrecedentQuery::new()
//!     .with_industry("Technology")
//!     .with_country("Vietnam")
//!     .with_region("Asia-Pacific")
//!     .with_intent(StrategicIntent::Text("Joint Venture expansion".into()));
//!
//! let engine = MatchingEngine::new(&archive);
//! for m in engine.find_matches(&query) {
//!     println!("{}: {} ({:.1}%)",
//!         m.historical_case.title,
//!         m.similarity.overall,
//!         m.probability_of_success
//!     );
//! }
//! ```

pub mod engine;
pub mod rationale;
pub mod scoring;

pub use rationale::ApplicableFactors;
pub use scoring::SimilarityScore;
