//! # precedent-matcher
//!
//! A library for ranking historical investment precedents against a planned
//! cross-border expansion.
//!
//! Given what an organization wants to do (industry, target country and
//! region, strategic intent), `precedent-matcher` scores every case in an
//! archive of historical investments, keeps the sufficiently similar ones and
//! ranks them. Each match carries a blended probability of success, a
//! confidence level and the lessons the precedent teaches.
//!
//! ## Features
//!
//! - **Three-dimension similarity**: sector, geography and strategy
//! - **Outcome-aware probability**: the precedent's outcome, blended toward
//!   neutral by match strength
//! - **Rationale**: success factors or warnings drawn from the case's learnings
//! - **Strategic indices**: eighteen rule-table scores over the same parameters
//!
//! ## Example
//!
//! ```rust,no_run
//! use precedent_matcher::{CaseArchive, MatchingEngine, PrecedentQuery, StrategicIntent};
//!
//! // Load the embedded archive (curated cases plus generated filler)
//! let archive = CaseArchive::load_embedded().unwrap();
//!
//! let query = PrecedentQuery::new()
//!     .with_industry("Retail")
//!     .with_country("Germany")
//!     .with_intent(StrategicIntent::Text("Acquisition of a local chain".into()));
//!
//! let engine = MatchingEngine::new(&archive);
//! for m in engine.find_matches(&query) {
//!     println!("{}: {} ({})", m.historical_case.title, m.similarity.overall, m.confidence_level);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`archive`]: Curated and synthetic case storage
//! - [`core`]: Core data types for cases, queries and report parameters
//! - [`matching`]: Matching engine and scoring
//! - [`indices`]: Strategic index rule tables
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON API server

pub mod archive;
pub mod cli;
pub mod core;
pub mod indices;
pub mod matching;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use archive::store::CaseArchive;
pub use core::case::HistoricalCase;
pub use core::query::{PrecedentQuery, ReportParameters, StrategicIntent};
pub use core::types::*;
pub use matching::engine::{MatchingConfig, MatchingEngine, PrecedentMatch};
