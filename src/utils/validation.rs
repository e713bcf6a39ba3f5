//! Centralized validation of caller-supplied input.

use crate::core::query::{ReportParameters, StrategicIntent};
use crate::core::types::CaseId;

/// Maximum entries in any list-valued parameter (DOS protection)
pub const MAX_LIST_ITEMS: usize = 64;

/// Maximum length, in characters, of any single string parameter
pub const MAX_FIELD_LENGTH: usize = 1024;

/// Maximum length of a case identifier
pub const MAX_CASE_ID_LENGTH: usize = 64;

/// Input validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Too many entries in '{field}': {count} exceeds maximum of {MAX_LIST_ITEMS}")]
    TooManyItems { field: &'static str, count: usize },
    #[error("Value of '{field}' too long: exceeds {MAX_FIELD_LENGTH} characters")]
    FieldTooLong { field: &'static str },
    #[error("Invalid case id: expected 1-{MAX_CASE_ID_LENGTH} characters of A-Z, 0-9 or '-'")]
    InvalidCaseId,
}

fn check_string(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_FIELD_LENGTH {
        return Err(ValidationError::FieldTooLong { field });
    }
    Ok(())
}

fn check_optional(field: &'static str, value: Option<&String>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| check_string(field, v))
}

fn check_list(field: &'static str, values: &[String]) -> Result<(), ValidationError> {
    if values.len() > MAX_LIST_ITEMS {
        return Err(ValidationError::TooManyItems {
            field,
            count: values.len(),
        });
    }
    values.iter().try_for_each(|v| check_string(field, v))
}

/// Check that every parameter is within size limits.
///
/// Content is never rejected: unknown countries, blank labels and unusual
/// intents are all valid input that simply contribute nothing.
///
/// # Errors
///
/// Returns `ValidationError::TooManyItems` if a list exceeds
/// [`MAX_LIST_ITEMS`], or `ValidationError::FieldTooLong` if any string
/// exceeds [`MAX_FIELD_LENGTH`].
pub fn validate_parameters(params: &ReportParameters) -> Result<(), ValidationError> {
    check_list("industry", &params.industry)?;
    check_optional("country", params.country.as_ref())?;
    check_optional("region", params.region.as_ref())?;
    match &params.strategic_intent {
        StrategicIntent::Text(text) => check_string("strategicIntent", text)?,
        StrategicIntent::List(items) => check_list("strategicIntent", items)?,
    }

    check_optional("organizationType", params.organization_type.as_ref())?;
    check_optional("userCountry", params.user_country.as_ref())?;
    check_optional("fundingSource", params.funding_source.as_ref())?;
    check_list("strategicObjectives", &params.strategic_objectives)?;
    check_optional("specificOpportunity", params.specific_opportunity.as_ref())?;
    check_list("targetIncentives", &params.target_incentives)?;
    check_string("idealPartnerProfile", &params.ideal_partner_profile)?;
    check_list("targetCounterpartType", &params.target_counterpart_type)?;
    check_optional("expansionTimeline", params.expansion_timeline.as_ref())?;
    check_list("strategicLens", &params.strategic_lens)?;
    check_list("calibration.capabilitiesNeed", params.capabilities_need())?;
    check_optional("skillLevel", params.skill_level.as_ref())?;
    check_optional("headcountBand", params.headcount_band.as_ref())?;
    check_list("priorityThemes", &params.priority_themes)?;
    check_optional("revenueBand", params.revenue_band.as_ref())?;
    check_list("partnershipSupportNeeds", &params.partnership_support_needs)?;
    check_optional("operationalPriority", params.operational_priority.as_ref())?;
    check_optional("riskTolerance", params.risk_tolerance.as_ref())?;
    Ok(())
}

/// Validate a case identifier taken from a URL or command line.
///
/// # Examples
///
/// ```
/// use precedent_matcher::utils::validation::validate_case_id;
///
/// assert!(validate_case_id("CS-1999-U").is_ok());
/// assert!(validate_case_id("../etc/passwd").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::InvalidCaseId` if the id is empty, too long, or
/// contains characters outside `A-Z`, `a-z`, `0-9` and `-`.
pub fn validate_case_id(id: &str) -> Result<CaseId, ValidationError> {
    let id = id.trim();
    if id.is_empty()
        || id.len() > MAX_CASE_ID_LENGTH
        || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ValidationError::InvalidCaseId);
    }
    Ok(CaseId::new(id))
}
