//! Strategic index library.
//!
//! Eighteen auxiliary scores computed from [`ReportParameters`](crate::ReportParameters),
//! each expressed as a [`RuleTable`](rules::RuleTable): a baseline, a list of
//! labelled rules, and a final clamp to [0, 100].
//!
//! | Family | Indices |
//! |--------|---------|
//! | Strategic | BARNA, NVI, RROI, SEAM, LAI, CRI |
//! | Operational | CAP, AGI, VCI, ATI, ESI, ISI, OSI, TCO |
//! | Risk | PRI, RNI, SRA, IDV |
//!
//! ```rust
//! use precedent_matcher::indices::{evaluate_all, StrategicIndex};
//! use precedent_matcher::ReportParameters;
//!
//! let params = ReportParameters {
//!     country: Some("Singapore".into()),
//!     ..Default::default()
//! };
//! assert_eq!(StrategicIndex::Rroi.evaluate(&params), 95.0);
//! assert_eq!(evaluate_all(&params).len(), 18);
//! ```

pub mod formulas;
pub mod rules;

pub use formulas::{evaluate_all, IndexFamily, IndexReading, StrategicIndex};
pub use rules::{AppliedRule, RuleTable};
