//! Historical case archive.
//!
//! The archive is the population the matcher ranks against. It is assembled
//! once from two explicit sources and then treated as read-only:
//!
//! - **Curated**: hand-authored precedents spanning 1925-2025, embedded at
//!   compile time from `archives/curated_cases.json` (validated by `build.rs`)
//! - **Synthetic**: deterministic filler records with `CS-GEN-` ids that give
//!   the matcher a larger population; never authoritative history
//!
//! ## Example
//!
//! ```rust,no_run
//! use precedent_matcher::CaseArchive;
//! use precedent_matcher::core::types::CaseId;
//!
//! let archive = CaseArchive::load_embedded().unwrap();
//!
//! for case in archive.curated() {
//!     println!("{} {} ({})", case.id, case.title, case.year);
//! }
//!
//! let walmart = archive.get(&CaseId::new("CS-1999-U"));
//! ```
//!
//! ## Custom Archives
//!
//! A custom curated tier can be loaded from a JSON document with the same
//! schema; synthetic filler is appended as usual:
//!
//! ```rust,no_run
//! use precedent_matcher::CaseArchive;
//! use std::path::Path;
//!
//! let archive = CaseArchive::load_embedded().unwrap();
//! let json = archive.to_json().unwrap();
//!
//! let custom = CaseArchive::load_from_file(Path::new("my_cases.json")).unwrap();
//! ```

pub mod store;
pub mod synthetic;
