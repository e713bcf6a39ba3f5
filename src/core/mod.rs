//! Core data types for precedent matching.
//!
//! - [`HistoricalCase`]: one precedent with its recorded outcome
//! - [`ReportParameters`]: the full parameter object collected by the wizard
//! - [`PrecedentQuery`]: the subset of parameters the matcher reads
//! - [`CaseId`], [`OutcomeResult`], [`Provenance`], [`Confidence`]: shared metadata types
//!
//! [`HistoricalCase`]: case::HistoricalCase
//! [`ReportParameters`]: query::ReportParameters
//! [`PrecedentQuery`]: query::PrecedentQuery
//! [`CaseId`]: types::CaseId
//! [`OutcomeResult`]: types::OutcomeResult
//! [`Provenance`]: types::Provenance
//! [`Confidence`]: types::Confidence

pub mod case;
pub mod query;
pub mod types;
