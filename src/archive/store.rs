use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::archive::synthetic;
use crate::core::case::HistoricalCase;
use crate::core::types::{CaseId, Provenance};

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to read archive: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse archive: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate case id: {0}")]
    DuplicateId(CaseId),

    #[error("Case {id}: field '{field}' must be a non-negative number, got {value}")]
    NegativeValue {
        id: CaseId,
        field: &'static str,
        value: f64,
    },

    #[error("Case {id} is in the {expected} tier but its id marks it as {found}")]
    ProvenanceMismatch {
        id: CaseId,
        expected: Provenance,
        found: Provenance,
    },
}

/// Archive document version for compatibility checking
pub const ARCHIVE_VERSION: &str = "1.0.0";

/// Serializable archive format (curated tier only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveData {
    pub version: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cases: Vec<HistoricalCase>,
}

/// The immutable case archive.
///
/// Built once from a curated and a synthetic source; the two tiers stay
/// distinguishable through the id prefix convention and [`Self::curated`] /
/// [`Self::synthetic`].
#[derive(Debug)]
pub struct CaseArchive {
    cases: Vec<HistoricalCase>,

    /// Index: case ID -> index in cases vec
    id_to_index: HashMap<CaseId, usize>,

    /// Number of leading curated cases
    curated_len: usize,
}

impl CaseArchive {
    /// Merge curated and synthetic records into one validated archive.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids, negative or non-finite numeric
    /// fields, or a record whose id prefix disagrees with its tier.
    pub fn build(
        curated: Vec<HistoricalCase>,
        synthetic: Vec<HistoricalCase>,
    ) -> Result<Self, ArchiveError> {
        let curated_len = curated.len();
        let mut cases = Vec::with_capacity(curated_len + synthetic.len());
        let mut id_to_index = HashMap::new();

        let tiers = curated
            .into_iter()
            .map(|c| (Provenance::Curated, c))
            .chain(synthetic.into_iter().map(|c| (Provenance::Synthetic, c)));

        for (expected, case) in tiers {
            validate_case(&case, expected)?;
            if id_to_index.contains_key(&case.id) {
                return Err(ArchiveError::DuplicateId(case.id));
            }
            id_to_index.insert(case.id.clone(), cases.len());
            cases.push(case);
        }

        tracing::debug!(
            curated = curated_len,
            synthetic = cases.len() - curated_len,
            "Built case archive"
        );

        Ok(Self {
            cases,
            id_to_index,
            curated_len,
        })
    }

    /// Load the embedded curated archive plus generated filler
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document fails validation.
    pub fn load_embedded() -> Result<Self, ArchiveError> {
        // Validated at compile time via build.rs
        const EMBEDDED_ARCHIVE: &str = include_str!("../../archives/curated_cases.json");
        Self::from_json(EMBEDDED_ARCHIVE)
    }

    /// Load curated cases from a JSON file, plus generated filler
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from_file(path: &Path) -> Result<Self, ArchiveError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse curated cases from a JSON document, plus generated filler
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or validated.
    pub fn from_json(json: &str) -> Result<Self, ArchiveError> {
        let data: ArchiveData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != ARCHIVE_VERSION {
            tracing::warn!(
                expected = ARCHIVE_VERSION,
                found = %data.version,
                "Archive version mismatch"
            );
        }

        Self::build(data.cases, synthetic::generate_filler())
    }

    /// All cases in archive order (curated first, then synthetic)
    #[must_use]
    pub fn cases(&self) -> &[HistoricalCase] {
        &self.cases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoricalCase> {
        self.cases.iter()
    }

    /// Hand-authored records
    #[must_use]
    pub fn curated(&self) -> &[HistoricalCase] {
        &self.cases[..self.curated_len]
    }

    /// Generated filler records
    #[must_use]
    pub fn synthetic(&self) -> &[HistoricalCase] {
        &self.cases[self.curated_len..]
    }

    /// Get a case by ID
    #[must_use]
    pub fn get(&self, id: &CaseId) -> Option<&HistoricalCase> {
        self.id_to_index.get(id).map(|&idx| &self.cases[idx])
    }

    /// Export the curated tier to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ArchiveError> {
        let data = ArchiveData {
            version: ARCHIVE_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            description: None,
            cases: self.curated().to_vec(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of cases in the archive
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Check if archive is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<'a> IntoIterator for &'a CaseArchive {
    type Item = &'a HistoricalCase;
    type IntoIter = std::slice::Iter<'a, HistoricalCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

fn validate_case(case: &HistoricalCase, expected: Provenance) -> Result<(), ArchiveError> {
    let found = case.provenance();
    if found != expected {
        return Err(ArchiveError::ProvenanceMismatch {
            id: case.id.clone(),
            expected,
            found,
        });
    }

    let numeric = [
        ("investment_size_million_usd", case.investment_size_million_usd),
        ("roi_achieved", case.outcomes.roi_achieved),
    ];
    for (field, value) in numeric {
        // NaN fails this comparison too
        if !(value >= 0.0 && value.is_finite()) {
            return Err(ArchiveError::NegativeValue {
                id: case.id.clone(),
                field,
                value,
            });
        }
    }

    Ok(())
}
