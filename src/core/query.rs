use serde::{Deserialize, Deserializer, Serialize};

/// Desired strategic direction, entered either as free text or as a list of tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrategicIntent {
    Text(String),
    List(Vec<String>),
}

impl Default for StrategicIntent {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl StrategicIntent {
    /// Build from zero or more entries: one entry is free text, several are a list
    #[must_use]
    pub fn from_entries(mut entries: Vec<String>) -> Self {
        if entries.len() == 1 {
            Self::Text(entries.remove(0))
        } else {
            Self::List(entries)
        }
    }

    /// The intent as a single string; list entries are joined with commas
    #[must_use]
    pub fn coerced(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(","),
        }
    }

    /// Text intent: substring containment. List intent: an entry equal to `needle`.
    #[must_use]
    pub fn includes(&self, needle: &str) -> bool {
        match self {
            Self::Text(text) => text.contains(needle),
            Self::List(items) => items.iter().any(|item| item == needle),
        }
    }

    /// True if any entry (or the text) contains `needle`
    #[must_use]
    pub fn any_contains(&self, needle: &str) -> bool {
        match self {
            Self::Text(text) => text.contains(needle),
            Self::List(items) => items.iter().any(|item| item.contains(needle)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Calibration {
    #[serde(deserialize_with = "null_as_default")]
    pub capabilities_need: Vec<String>,
}

/// Report parameters as collected by the wizard.
///
/// Every field is optional; absent fields are treated as "no signal" by the
/// matching engine and by every index formula.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportParameters {
    #[serde(deserialize_with = "null_as_default")]
    pub industry: Vec<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub strategic_intent: StrategicIntent,

    pub organization_type: Option<String>,
    pub user_country: Option<String>,
    pub funding_source: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub strategic_objectives: Vec<String>,
    pub specific_opportunity: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub target_incentives: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ideal_partner_profile: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target_counterpart_type: Vec<String>,
    pub expansion_timeline: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub strategic_lens: Vec<String>,
    pub calibration: Option<Calibration>,
    pub skill_level: Option<String>,
    pub headcount_band: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub priority_themes: Vec<String>,
    pub revenue_band: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub partnership_support_needs: Vec<String>,
    pub operational_priority: Option<String>,
    pub risk_tolerance: Option<String>,
}

impl ReportParameters {
    /// Selected country, ignoring blank input
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        non_blank(self.country.as_deref())
    }

    /// Selected region, ignoring blank input
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        non_blank(self.region.as_deref())
    }

    #[must_use]
    pub fn country_is(&self, country: &str) -> bool {
        self.country() == Some(country)
    }

    #[must_use]
    pub fn country_in(&self, countries: &[&str]) -> bool {
        self.country().is_some_and(|c| countries.contains(&c))
    }

    #[must_use]
    pub fn region_is(&self, region: &str) -> bool {
        self.region() == Some(region)
    }

    /// True if `sector` is one of the selected industries (exact label)
    #[must_use]
    pub fn has_industry(&self, sector: &str) -> bool {
        self.industry.iter().any(|i| i == sector)
    }

    /// Country the requesting organization is based in
    #[must_use]
    pub fn user_country_or_global(&self) -> &str {
        non_blank(self.user_country.as_deref()).unwrap_or("Global")
    }

    #[must_use]
    pub fn capabilities_need(&self) -> &[String] {
        self.calibration
            .as_ref()
            .map(|c| c.capabilities_need.as_slice())
            .unwrap_or_default()
    }

    /// The subset of parameters the precedent matcher reads
    #[must_use]
    pub fn to_query(&self) -> PrecedentQuery {
        PrecedentQuery {
            industry: self.industry.clone(),
            country: self.country().map(str::to_string),
            region: self.region().map(str::to_string),
            strategic_intent: self.strategic_intent.clone(),
        }
    }
}

/// Matching input: what the organization wants to do, and where
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecedentQuery {
    #[serde(deserialize_with = "null_as_default")]
    pub industry: Vec<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub strategic_intent: StrategicIntent,
}

impl PrecedentQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry.push(industry.into());
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_intent(mut self, intent: StrategicIntent) -> Self {
        self.strategic_intent = intent;
        self
    }

    /// Industry labels that carry signal (blank labels are skipped)
    pub fn industries(&self) -> impl Iterator<Item = &str> {
        self.industry
            .iter()
            .map(String::as_str)
            .filter(|label| !label.trim().is_empty())
    }
}

impl From<&ReportParameters> for PrecedentQuery {
    fn from(params: &ReportParameters) -> Self {
        params.to_query()
    }
}

/// Explicit `null` deserializes like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
